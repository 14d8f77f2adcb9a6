use crate::{
    context::Gpu,
    data_structures::{
        geometry::{SQUARE, SQUARE_INDICES},
        vertex::{ColorVertex, Vertex},
    },
    demos::{Demo, Target, mk_buffer},
    pipelines::{self, PipelineConfig},
    render::{Attachments, Draw, Render},
};

/// Four vertices shared by two triangles through a u16 index buffer.
pub struct Square {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
}

impl Square {
    pub fn new(gpu: &Gpu, target: &Target) -> Self {
        let vertices = mk_buffer(
            gpu,
            "Square Vertex Buffer",
            &SQUARE,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        let indices = mk_buffer(
            gpu,
            "Square Index Buffer",
            &SQUARE_INDICES,
            wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        );
        let layout = pipelines::mk_pipeline_layout(&gpu.device, "Square Pipeline Layout", None);
        let pipeline = pipelines::mk_render_pipeline(
            &gpu.device,
            &layout,
            &[ColorVertex::desc()],
            pipelines::triangle_shader(),
            &PipelineConfig::flat("Square Pipeline", target.format, target.sample_count),
        );
        Self {
            pipeline,
            vertices,
            indices,
        }
    }
}

impl Demo for Square {
    fn attachments(&self) -> Attachments {
        Attachments::flat()
    }

    fn on_render(&self) -> Render<'_> {
        Render::Indexed(
            Draw {
                pipeline: &self.pipeline,
                bind_group: None,
                vertex: &self.vertices,
                amount: SQUARE_INDICES.len() as u32,
            },
            &self.indices,
        )
    }
}
