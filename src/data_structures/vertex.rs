//! Vertex formats shared by the demos.
//!
//! Positions are homogeneous (`w = 1`) so the same data can be fed to a
//! shader that applies a matrix or to one that passes clip coordinates
//! through untouched.

use std::mem;

/// Describes how a vertex type is laid out inside a vertex buffer.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A position and a color, as used by the 2D demos and the untextured cube.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl ColorVertex {
    pub const fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColorVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Cube corner: position, face color and texture coordinate.
///
/// One buffer of these serves every cube demo; each pipeline picks the
/// attributes it needs through [`CubeVertex::color_layout`] or
/// [`CubeVertex::uv_layout`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl CubeVertex {
    pub const POSITION_OFFSET: wgpu::BufferAddress = 0;
    pub const COLOR_OFFSET: wgpu::BufferAddress = mem::size_of::<[f32; 4]>() as wgpu::BufferAddress;
    pub const UV_OFFSET: wgpu::BufferAddress = mem::size_of::<[f32; 8]>() as wgpu::BufferAddress;

    pub const fn new(position: [f32; 4], color: [f32; 4], uv: [f32; 2]) -> Self {
        Self {
            position,
            color,
            uv,
        }
    }

    /// Position at location 0 and color at location 1.
    pub fn color_layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                offset: CubeVertex::POSITION_OFFSET,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: CubeVertex::COLOR_OFFSET,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }

    /// Position at location 0 and UV at location 1.
    pub fn uv_layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                offset: CubeVertex::POSITION_OFFSET,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: CubeVertex::UV_OFFSET,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
