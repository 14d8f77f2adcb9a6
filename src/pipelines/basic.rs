use crate::data_structures::texture::Texture;

/// Everything that differs between the demo pipelines.
///
/// Topology is always a triangle list and blending is always replace; the
/// demos only vary in what is listed here.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: &'static str,
    pub color_format: wgpu::TextureFormat,
    pub vs_entry: &'static str,
    pub fs_entry: &'static str,
    pub cull_mode: Option<wgpu::Face>,
    pub front_face: wgpu::FrontFace,
    pub depth_format: Option<wgpu::TextureFormat>,
    pub sample_count: u32,
}

impl PipelineConfig {
    /// Flat 2D geometry: no culling, no depth.
    pub fn flat(label: &'static str, color_format: wgpu::TextureFormat, sample_count: u32) -> Self {
        Self {
            label,
            color_format,
            vs_entry: "vertexShader",
            fs_entry: "fragmentShader",
            cull_mode: None,
            front_face: wgpu::FrontFace::Ccw,
            depth_format: None,
            sample_count,
        }
    }

    /// Solid geometry: back faces culled, depth tested.
    pub fn solid(label: &'static str, color_format: wgpu::TextureFormat, sample_count: u32) -> Self {
        Self {
            label,
            color_format,
            vs_entry: "vertex_main",
            fs_entry: "fragment_main",
            cull_mode: Some(wgpu::Face::Back),
            front_face: wgpu::FrontFace::Ccw,
            depth_format: Some(Texture::DEPTH_FORMAT),
            sample_count,
        }
    }

    pub fn with_front_face(mut self, front_face: wgpu::FrontFace) -> Self {
        self.front_face = front_face;
        self
    }
}

pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    vertex_layouts: &[wgpu::VertexBufferLayout],
    shader: wgpu::ShaderModuleDescriptor,
    config: &PipelineConfig,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(shader);

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some(config.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(config.vs_entry),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(config.fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: config.color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: config.front_face,
            cull_mode: config.cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: config.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: config.sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_pipelines_skip_depth_and_culling() {
        let config = PipelineConfig::flat("t", wgpu::TextureFormat::Bgra8Unorm, 4);
        assert_eq!(config.cull_mode, None);
        assert_eq!(config.depth_format, None);
        assert_eq!(config.sample_count, 4);
        assert_eq!(config.vs_entry, "vertexShader");
    }

    #[test]
    fn solid_pipelines_cull_back_faces() {
        let config = PipelineConfig::solid("c", wgpu::TextureFormat::Bgra8Unorm, 1)
            .with_front_face(wgpu::FrontFace::Cw);
        assert_eq!(config.cull_mode, Some(wgpu::Face::Back));
        assert_eq!(config.depth_format, Some(wgpu::TextureFormat::Depth24Plus));
        assert_eq!(config.front_face, wgpu::FrontFace::Cw);
    }
}
