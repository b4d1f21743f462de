//! Offscreen render targets, one per requested size.

use std::collections::HashMap;

use wgpu::TextureView;

pub struct OffscreenTarget {
    pub texture: wgpu::Texture,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn view(&self) -> TextureView { self.texture.create_view(&Default::default()) }
}

pub struct OffscreenTargets {
    format: wgpu::TextureFormat,
    targets: HashMap<(u32, u32), OffscreenTarget>,
}

impl OffscreenTargets {
    pub fn new(format: wgpu::TextureFormat) -> Self {
        Self { format, targets: HashMap::new() }
    }

    /// Return the target of this size, creating it on first use.
    pub fn ensure_size(&mut self, device: &wgpu::Device, width: u32, height: u32) -> Result<&OffscreenTarget, String> {
        if width == 0 || height == 0 {
            return Err("OffscreenTargets: width and height must be > 0".to_string());
        }
        let format = self.format;
        Ok(self.targets.entry((width, height)).or_insert_with(|| {
            log::debug!("creating offscreen target {}x{}", width, height);
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("gallery_offscreen"),
                size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING
                    | wgpu::TextureUsages::COPY_SRC,
                view_formats: &[],
            });
            OffscreenTarget { texture, width, height }
        }))
    }

    pub fn get(&self, width: u32, height: u32) -> Option<&OffscreenTarget> {
        self.targets.get(&(width, height))
    }

    /// Drop targets whose size is not in `keep`.
    pub fn retain_sizes(&mut self, keep: &[(u32, u32)]) {
        self.targets.retain(|size, _| keep.contains(size));
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
