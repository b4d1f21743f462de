//! Scene pass: draws a frame's `DrawList`. Offscreen batches go to size-keyed targets owned
//! by the pass; default-scene batches go to the caller's output view, and the offscreen
//! targets are then composited over it.

use wgpu::CommandEncoder;

use demo_api::Vertex;

use crate::composite::{self, CompositePass};
use crate::config::GalleryConfig;
use crate::layout;
use crate::offscreen::{OffscreenTarget, OffscreenTargets};
use crate::scene::{DrawList, RenderTarget};

const SHADER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/scene.wgsl"));

/// Batch uploaded for this frame.
struct GpuBatch {
    target: RenderTarget,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
}

pub struct ScenePass {
    output_pipeline: wgpu::RenderPipeline,
    offscreen_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    offscreen: OffscreenTargets,
    composite: CompositePass,
    default_clear_color: [f32; 4],
}

fn build_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    attributes: &[wgpu::VertexAttribute],
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("gallery_scene"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs"),
            buffers: &[layout::vertex_buffer_layout(attributes)],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color { r: c[0] as f64, g: c[1] as f64, b: c[2] as f64, a: c[3] as f64 }
}

impl ScenePass {
    pub fn new(device: &wgpu::Device, config: &GalleryConfig) -> Result<Self, String> {
        let attributes = layout::vertex_attributes()?;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gallery_scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("gallery_scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(64),
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("gallery_scene_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let output_pipeline = build_pipeline(device, &shader, &pipeline_layout, &attributes, config.output_format);
        let offscreen_pipeline =
            build_pipeline(device, &shader, &pipeline_layout, &attributes, config.offscreen_format);
        Ok(Self {
            output_pipeline,
            offscreen_pipeline,
            bind_group_layout,
            offscreen: OffscreenTargets::new(config.offscreen_format),
            composite: CompositePass::new(device, config.output_format),
            default_clear_color: config.default_clear_color,
        })
    }

    /// Offscreen target drawn this frame, e.g. for the host UI to show as an image.
    pub fn offscreen_target(&self, width: u32, height: u32) -> Option<&OffscreenTarget> {
        self.offscreen.get(width, height)
    }

    /// Encode the whole draw list. `output` is the view that receives the default-scene
    /// batches and the composited offscreen targets, with its size in pixels; when `None`
    /// only the offscreen targets are drawn.
    pub fn encode(
        &mut self,
        encoder: &mut CommandEncoder,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        output: Option<(&wgpu::TextureView, (u32, u32))>,
        draw_list: &DrawList,
    ) -> Result<(), String> {
        let batches = self.upload(device, queue, draw_list);
        let clear = to_wgpu_color(draw_list.clear_color.unwrap_or(self.default_clear_color));

        let targets = draw_list.offscreen_targets();
        let mut sizes = Vec::with_capacity(targets.len());
        for target in targets {
            if let RenderTarget::Offscreen { width, height } = target {
                let view = self.offscreen.ensure_size(device, width, height)?.view();
                Self::draw(encoder, &self.offscreen_pipeline, &view, clear, &batches, target);
                sizes.push((width, height));
            }
        }
        self.offscreen.retain_sizes(&sizes);

        let mut composited = 0;
        if let Some((view, output_size)) = output {
            Self::draw(encoder, &self.output_pipeline, view, clear, &batches, RenderTarget::DefaultScene);
            let sources: Vec<_> = composite::composite_plan(draw_list, output_size)
                .into_iter()
                .filter_map(|(width, height)| self.offscreen_target(width, height))
                .map(|target| (target.view(), composite::fit_rect((target.width(), target.height()), output_size)))
                .collect();
            self.composite.encode(encoder, device, view, &sources);
            composited = sources.len();
        }
        log::debug!(
            "scene pass: {} batches, {} vertices, {} offscreen targets, {} composited",
            batches.len(),
            draw_list.vertex_count(),
            sizes.len(),
            composited
        );
        Ok(())
    }

    fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue, draw_list: &DrawList) -> Vec<GpuBatch> {
        draw_list
            .batches
            .iter()
            .map(|batch| {
                let vertex_bytes = Vertex::as_bytes(&batch.vertices);
                let vertex_buf = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("gallery_vertex"),
                    size: vertex_bytes.len() as u64,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                queue.write_buffer(&vertex_buf, 0, vertex_bytes);
                let index_bytes: &[u8] = bytemuck::cast_slice(&batch.indices);
                let index_buf = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("gallery_index"),
                    size: index_bytes.len() as u64,
                    usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                queue.write_buffer(&index_buf, 0, index_bytes);
                let model_buf = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("gallery_model"),
                    size: 64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                queue.write_buffer(&model_buf, 0, bytemuck::cast_slice(&batch.transform));
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("gallery_model_bg"),
                    layout: &self.bind_group_layout,
                    entries: &[wgpu::BindGroupEntry { binding: 0, resource: model_buf.as_entire_binding() }],
                });
                GpuBatch {
                    target: batch.target,
                    vertex_buf,
                    index_buf,
                    index_count: batch.indices.len() as u32,
                    bind_group,
                }
            })
            .collect()
    }

    fn draw(
        encoder: &mut CommandEncoder,
        pipeline: &wgpu::RenderPipeline,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
        batches: &[GpuBatch],
        target: RenderTarget,
    ) {
        let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gallery_scene"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rp.set_pipeline(pipeline);
        for batch in batches.iter().filter(|b| b.target == target) {
            rp.set_bind_group(0, &batch.bind_group, &[]);
            rp.set_vertex_buffer(0, batch.vertex_buf.slice(..));
            rp.set_index_buffer(batch.index_buf.slice(..), wgpu::IndexFormat::Uint32);
            rp.draw_indexed(0..batch.index_count, 0, 0..1);
        }
    }
}
