use instant::Duration;

use crate::{
    context::Gpu,
    data_structures::{
        geometry::{CUBE, CUBE_INDICES},
        uniform::FrameInfo,
        vertex::CubeVertex,
    },
    demos::{Demo, Target, mk_buffer},
    pipelines::{self, PipelineConfig},
    render::{Attachments, Draw, Render},
};

/// Solid cube spun by the shader from a `[sin t, cos t, aspect, 0]` uniform,
/// drawn indexed with depth testing and back-face culling.
pub struct Cube {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    frame_info: FrameInfo,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Cube {
    pub fn new(gpu: &Gpu, target: &Target) -> Self {
        let vertices = mk_buffer(gpu, "Cube Vertex Buffer", &CUBE, wgpu::BufferUsages::VERTEX);
        let indices = mk_buffer(
            gpu,
            "Cube Index Buffer",
            &CUBE_INDICES,
            wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        );

        let frame_info = FrameInfo::new(target.aspect());
        let uniform = mk_buffer(
            gpu,
            "Frame Info Buffer",
            &[frame_info],
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );
        let bind_group_layout = pipelines::uniform_layout(&gpu.device);
        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
            label: Some("frame_info_bind_group"),
        });

        let layout = pipelines::mk_pipeline_layout(
            &gpu.device,
            "Cube Pipeline Layout",
            Some(&bind_group_layout),
        );
        let pipeline = pipelines::mk_render_pipeline(
            &gpu.device,
            &layout,
            &[CubeVertex::color_layout()],
            pipelines::cube_shader(),
            &PipelineConfig::solid("Cube Pipeline", target.format, target.sample_count),
        );

        Self {
            pipeline,
            vertices,
            indices,
            frame_info,
            uniform,
            bind_group,
        }
    }
}

impl Demo for Cube {
    fn attachments(&self) -> Attachments {
        Attachments::solid()
    }

    fn is_animated(&self) -> bool {
        true
    }

    fn on_resize(&mut self, gpu: &Gpu, target: &Target) {
        self.frame_info.set_aspect(target.aspect());
        gpu.queue
            .write_buffer(&self.uniform, 0, bytemuck::cast_slice(&[self.frame_info]));
    }

    fn on_update(&mut self, gpu: &Gpu, elapsed: Duration) {
        self.frame_info.update(elapsed);
        gpu.queue
            .write_buffer(&self.uniform, 0, bytemuck::cast_slice(&[self.frame_info]));
    }

    fn on_render(&self) -> Render<'_> {
        Render::Indexed(
            Draw {
                pipeline: &self.pipeline,
                bind_group: Some(&self.bind_group),
                vertex: &self.vertices,
                amount: CUBE_INDICES.len() as u32,
            },
            &self.indices,
        )
    }
}
