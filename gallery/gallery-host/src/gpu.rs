//! GPU presenter: owns the wgpu device/queue and the scene pass, turns frame draw lists
//! into submitted GPU work.

use gallery_demos::{DrawList, GalleryConfig, ScenePass};

use crate::error::{HostError, HostResult};

pub struct GpuPresenter {
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: GalleryConfig,
    scene_pass: ScenePass,
}

impl GpuPresenter {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue, config: GalleryConfig) -> HostResult<Self> {
        let scene_pass = ScenePass::new(&device, &config).map_err(HostError::Render)?;
        Ok(Self { device, queue, config, scene_pass })
    }

    /// Create a device without any surface, for offscreen-only frames.
    pub fn headless(config: GalleryConfig) -> HostResult<Self> {
        let (_adapter, device, queue) = pollster::block_on(request_device(None))?;
        Self::new(device, queue, config)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn scene_pass(&self) -> &ScenePass {
        &self.scene_pass
    }

    /// Block until submitted work has finished.
    pub fn wait_idle(&self) {
        let _ = self.device.poll(wgpu::Maintain::Wait);
    }

    /// Draw a frame and submit. `output` is the view the default scene and composited
    /// offscreen targets land in, with its size in pixels.
    pub fn render_to_view(
        &mut self,
        draw_list: &DrawList,
        output: Option<(&wgpu::TextureView, (u32, u32))>,
    ) -> HostResult<()> {
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("gallery_frame"),
        });
        self.scene_pass
            .encode(&mut encoder, &self.device, &self.queue, output, draw_list)
            .map_err(HostError::Render)?;
        self.queue.submit([encoder.finish()]);
        Ok(())
    }

    /// Draw a frame into a fresh texture standing in for the default scene.
    pub fn render_to_texture(&mut self, draw_list: &DrawList, size: (u32, u32)) -> HostResult<wgpu::Texture> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(HostError::Render("render_to_texture: width and height must be > 0".to_string()));
        }
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("gallery_default_scene"),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.config.output_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        self.render_to_view(draw_list, Some((&view, size)))?;
        Ok(texture)
    }
}

/// Request an adapter (compatible with `surface` when given) and a device.
pub(crate) async fn request_device(
    surface: Option<(&wgpu::Instance, &wgpu::Surface<'_>)>,
) -> HostResult<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
    let default_instance;
    let (instance, compatible_surface) = match surface {
        Some((instance, surface)) => (instance, Some(surface)),
        None => {
            default_instance = wgpu::Instance::default();
            (&default_instance, None)
        }
    };
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface,
            force_fallback_adapter: false,
        })
        .await
        .ok_or(HostError::NoAdapter)?;
    log::info!("using adapter: {}", adapter.get_info().name);
    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor::default(), None)
        .await
        .map_err(|e| HostError::RequestDevice(e.to_string()))?;
    Ok((adapter, device, queue))
}
