//! The demos and the registry that builds them by name.
//!
//! Every demo follows the same linear sequence: upload static geometry,
//! build a fixed pipeline, then hand the frame loop a [`Render`] each frame.
//! What differs is vertex layout, bindings and sample count.

use std::{fmt, str::FromStr};

use instant::Duration;

use crate::{
    config::Config,
    context::Gpu,
    data_structures::texture::Texture,
    error::ParseDemoError,
    render::{Attachments, Render},
};

pub mod cube;
pub mod cube_matrix;
pub mod cube_texture;
pub mod square;
pub mod triangle;

/// Color target a demo renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
    pub sample_count: u32,
}

impl Target {
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// A single self-contained demo.
///
/// # Lifecycle
///
/// 1. constructed once by [`DemoKind::build`] with the initial [`Target`]
/// 2. `on_resize()` whenever the surface size changes
/// 3. `on_update()` before every frame with the time since start
/// 4. `on_render()` describes the draw calls for the frame
pub trait Demo {
    fn attachments(&self) -> Attachments;

    /// Whether the frame loop should keep redrawing. Static demos are drawn
    /// once and then only when the window asks for it.
    fn is_animated(&self) -> bool {
        false
    }

    fn on_resize(&mut self, _gpu: &Gpu, _target: &Target) {}

    fn on_update(&mut self, _gpu: &Gpu, _elapsed: Duration) {}

    fn on_render(&self) -> Render<'_>;
}

impl fmt::Debug for dyn Demo + 'static {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Demo")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Triangle,
    Square,
    Cube,
    CubeMatrix,
    CubeTexture,
    TriangleMsaa,
}

impl DemoKind {
    pub const ALL: [DemoKind; 6] = [
        DemoKind::Triangle,
        DemoKind::Square,
        DemoKind::Cube,
        DemoKind::CubeMatrix,
        DemoKind::CubeTexture,
        DemoKind::TriangleMsaa,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Triangle => "triangle_2d",
            DemoKind::Square => "square_2d",
            DemoKind::Cube => "cube_3d",
            DemoKind::CubeMatrix => "cube_3d_matrix",
            DemoKind::CubeTexture => "cube_3d_texture",
            DemoKind::TriangleMsaa => "triangle_2d_msaa",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Triangle => "Triangle",
            DemoKind::Square => "Square (indexed draw)",
            DemoKind::Cube => "Rotating cube",
            DemoKind::CubeMatrix => "Rotating cube (model-view-projection matrix)",
            DemoKind::CubeTexture => "Textured rotating cube",
            DemoKind::TriangleMsaa => "Triangle (4x MSAA)",
        }
    }

    pub fn default_sample_count(self) -> u32 {
        match self {
            DemoKind::TriangleMsaa => 4,
            _ => 1,
        }
    }

    pub async fn build(
        self,
        gpu: &Gpu,
        target: &Target,
        config: &Config,
    ) -> anyhow::Result<Box<dyn Demo>> {
        log::info!(
            "Building {} ({}x{}, {}x samples)",
            self.name(),
            target.width,
            target.height,
            target.sample_count
        );
        let demo: Box<dyn Demo> = match self {
            DemoKind::Triangle | DemoKind::TriangleMsaa => {
                Box::new(triangle::Triangle::new(gpu, target))
            }
            DemoKind::Square => Box::new(square::Square::new(gpu, target)),
            DemoKind::Cube => Box::new(cube::Cube::new(gpu, target)),
            DemoKind::CubeMatrix => Box::new(cube_matrix::CubeMatrix::new(gpu, target)),
            DemoKind::CubeTexture => {
                let texture = match &config.texture {
                    Some(file_name) => {
                        crate::resources::load_texture(file_name, &gpu.device, &gpu.queue).await?
                    }
                    None => Texture::from_image(
                        &gpu.device,
                        &gpu.queue,
                        &crate::resources::arrow_image(256),
                        Some("arrow_texture"),
                    )?,
                };
                Box::new(cube_texture::CubeTexture::new(gpu, target, texture))
            }
        };
        Ok(demo)
    }
}

impl Default for DemoKind {
    fn default() -> Self {
        DemoKind::Triangle
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = ParseDemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        match name.as_str() {
            // page name of the wgpu-matrix flavoured cube
            "cube_3d_wgpu_matrix" => Ok(DemoKind::CubeMatrix),
            _ => DemoKind::ALL
                .into_iter()
                .find(|kind| kind.name() == name)
                .ok_or_else(|| ParseDemoError(s.to_string())),
        }
    }
}

/// Uploads `contents` into a new buffer.
pub(crate) fn mk_buffer<T: bytemuck::Pod>(
    gpu: &Gpu,
    label: &str,
    contents: &[T],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    gpu.device
        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(contents),
            usage,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.name().parse::<DemoKind>(), Ok(kind));
        }
    }

    #[test]
    fn parsing_is_forgiving_about_case_and_dashes() {
        assert_eq!("Cube-3D".parse::<DemoKind>(), Ok(DemoKind::Cube));
        assert_eq!(
            "cube_3d_wgpu_matrix".parse::<DemoKind>(),
            Ok(DemoKind::CubeMatrix)
        );
        assert_eq!(
            "hexagon".parse::<DemoKind>(),
            Err(ParseDemoError("hexagon".into()))
        );
    }

    #[test]
    fn only_the_msaa_demo_multisamples_by_default() {
        for kind in DemoKind::ALL {
            let expected = if kind == DemoKind::TriangleMsaa { 4 } else { 1 };
            assert_eq!(kind.default_sample_count(), expected);
        }
    }

    #[test]
    fn aspect_survives_zero_heights() {
        let target = Target {
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: 800,
            height: 0,
            sample_count: 1,
        };
        assert_eq!(target.aspect(), 800.0);
    }
}
