//! Composite pass: copies offscreen targets onto the output view, each fitted into the
//! output with its aspect ratio kept.

use wgpu::CommandEncoder;

use crate::scene::{DrawList, RenderTarget};

const COMPOSITE_SHADER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/composite.wgsl"));

/// Viewport rectangle in output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Largest rectangle with the aspect of `source`, centered inside `output`.
pub fn fit_rect(source: (u32, u32), output: (u32, u32)) -> CompositeRect {
    let (sw, sh) = (source.0.max(1) as f32, source.1.max(1) as f32);
    let (ow, oh) = (output.0 as f32, output.1 as f32);
    let scale = (ow / sw).min(oh / sh);
    let (width, height) = (sw * scale, sh * scale);
    CompositeRect { x: (ow - width) * 0.5, y: (oh - height) * 0.5, width, height }
}

/// Offscreen target sizes to composite onto an output of `output_size`, in draw order.
/// Nothing is composited into an empty output.
pub fn composite_plan(draw_list: &DrawList, output_size: (u32, u32)) -> Vec<(u32, u32)> {
    if output_size.0 == 0 || output_size.1 == 0 {
        return Vec::new();
    }
    draw_list
        .offscreen_targets()
        .into_iter()
        .filter_map(|target| match target {
            RenderTarget::Offscreen { width, height } => Some((width, height)),
            RenderTarget::DefaultScene => None,
        })
        .collect()
}

pub struct CompositePass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

impl CompositePass {
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("composite_shader"),
            source: wgpu::ShaderSource::Wgsl(COMPOSITE_SHADER.into()),
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("composite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("composite_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("composite_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("composite"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: output_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });
        Self { pipeline, bind_group_layout, sampler }
    }

    /// Draw each source view into its rectangle of `output_view`, keeping what is already there.
    pub fn encode(
        &self,
        encoder: &mut CommandEncoder,
        device: &wgpu::Device,
        output_view: &wgpu::TextureView,
        sources: &[(wgpu::TextureView, CompositeRect)],
    ) {
        if sources.is_empty() {
            return;
        }
        let bind_groups: Vec<wgpu::BindGroup> = sources
            .iter()
            .map(|(view, _)| {
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("composite_bg"),
                    layout: &self.bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(view) },
                        wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::Sampler(&self.sampler) },
                    ],
                })
            })
            .collect();
        let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("composite"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rp.set_pipeline(&self.pipeline);
        for (bind_group, (_, rect)) in bind_groups.iter().zip(sources) {
            rp.set_viewport(rect.x, rect.y, rect.width, rect.height, 0.0, 1.0);
            rp.set_bind_group(0, bind_group, &[]);
            rp.draw(0..3, 0..1);
        }
    }
}
