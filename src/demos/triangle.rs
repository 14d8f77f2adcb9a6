use crate::{
    context::Gpu,
    data_structures::{
        geometry::TRIANGLE,
        vertex::{ColorVertex, Vertex},
    },
    demos::{Demo, Target, mk_buffer},
    pipelines::{self, PipelineConfig},
    render::{Attachments, Draw, Render},
};

/// Three colored vertices, drawn without an index buffer.
///
/// With a target sample count above one this is the MSAA demo: the same
/// pipeline, built multisampled and resolved into the surface.
pub struct Triangle {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
}

impl Triangle {
    pub fn new(gpu: &Gpu, target: &Target) -> Self {
        let vertices = mk_buffer(
            gpu,
            "Triangle Vertex Buffer",
            &TRIANGLE,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        let layout = pipelines::mk_pipeline_layout(&gpu.device, "Triangle Pipeline Layout", None);
        let pipeline = pipelines::mk_render_pipeline(
            &gpu.device,
            &layout,
            &[ColorVertex::desc()],
            pipelines::triangle_shader(),
            &PipelineConfig::flat("Triangle Pipeline", target.format, target.sample_count),
        );
        Self { pipeline, vertices }
    }
}

impl Demo for Triangle {
    fn attachments(&self) -> Attachments {
        Attachments::flat()
    }

    fn on_render(&self) -> Render<'_> {
        Render::Vertices(Draw {
            pipeline: &self.pipeline,
            bind_group: None,
            vertex: &self.vertices,
            amount: TRIANGLE.len() as u32,
        })
    }
}
