use instant::Duration;

use crate::{
    camera,
    context::Gpu,
    data_structures::{
        geometry::{CUBE, CUBE_INDICES, expand_indexed},
        uniform::TransformUniform,
        vertex::CubeVertex,
    },
    demos::{Demo, Target, mk_buffer},
    pipelines::{self, PipelineConfig},
    render::{Attachments, Draw, Render},
};

/// Cube placed by a model-view-projection matrix computed on the CPU each
/// frame and drawn without an index buffer.
pub struct CubeMatrix {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    vertex_count: u32,
    aspect: f32,
    transform: TransformUniform,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CubeMatrix {
    pub fn new(gpu: &Gpu, target: &Target) -> Self {
        let unrolled = expand_indexed(&CUBE, &CUBE_INDICES);
        let vertices = mk_buffer(gpu, "Cube Vertex Buffer", &unrolled, wgpu::BufferUsages::VERTEX);

        let aspect = target.aspect();
        let mut transform = TransformUniform::new();
        transform.update(camera::transformation_matrix(aspect, Duration::ZERO));
        let uniform = mk_buffer(
            gpu,
            "Transform Buffer",
            &[transform],
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );
        let bind_group_layout = pipelines::uniform_layout(&gpu.device);
        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
            label: Some("transform_bind_group"),
        });

        let layout = pipelines::mk_pipeline_layout(
            &gpu.device,
            "Cube Matrix Pipeline Layout",
            Some(&bind_group_layout),
        );
        // The cube winds its outside faces clockwise once a right-handed
        // projection is applied.
        let config = PipelineConfig::solid("Cube Matrix Pipeline", target.format, target.sample_count)
            .with_front_face(wgpu::FrontFace::Cw);
        let pipeline = pipelines::mk_render_pipeline(
            &gpu.device,
            &layout,
            &[CubeVertex::uv_layout()],
            pipelines::cube_matrix_shader(),
            &config,
        );

        Self {
            pipeline,
            vertices,
            vertex_count: unrolled.len() as u32,
            aspect,
            transform,
            uniform,
            bind_group,
        }
    }
}

impl Demo for CubeMatrix {
    fn attachments(&self) -> Attachments {
        Attachments::solid()
    }

    fn is_animated(&self) -> bool {
        true
    }

    fn on_resize(&mut self, _gpu: &Gpu, target: &Target) {
        self.aspect = target.aspect();
    }

    fn on_update(&mut self, gpu: &Gpu, elapsed: Duration) {
        self.transform
            .update(camera::transformation_matrix(self.aspect, elapsed));
        gpu.queue
            .write_buffer(&self.uniform, 0, bytemuck::cast_slice(&[self.transform]));
    }

    fn on_render(&self) -> Render<'_> {
        Render::Vertices(Draw {
            pipeline: &self.pipeline,
            bind_group: Some(&self.bind_group),
            vertex: &self.vertices,
            amount: self.vertex_count,
        })
    }
}
