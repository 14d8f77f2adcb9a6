//! Render pipeline construction and the bind group layouts the demos share.

pub mod basic;

pub use basic::{PipelineConfig, mk_render_pipeline};

/// Layout of a pipeline with a single bind group. `None` means the pipeline
/// binds nothing.
pub fn mk_pipeline_layout(
    device: &wgpu::Device,
    label: &str,
    bind_group_layout: Option<&wgpu::BindGroupLayout>,
) -> wgpu::PipelineLayout {
    let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = bind_group_layout.into_iter().collect();
    device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &bind_group_layouts,
        push_constant_ranges: &[],
    })
}

/// Binding 0: a uniform buffer read by the vertex stage.
pub fn uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[uniform_entry()],
        label: Some("uniform_bind_group_layout"),
    })
}

/// Binding 0: uniform buffer, binding 1: 2D texture, binding 2: sampler.
pub fn uniform_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            uniform_entry(),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("uniform_texture_bind_group_layout"),
    })
}

fn uniform_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

pub fn triangle_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Triangle Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("triangle.wgsl").into()),
    }
}

pub fn cube_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Cube Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("cube.wgsl").into()),
    }
}

pub fn cube_matrix_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Cube Matrix Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("cube_matrix.wgsl").into()),
    }
}

pub fn cube_texture_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Cube Texture Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("cube_texture.wgsl").into()),
    }
}
