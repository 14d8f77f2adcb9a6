//! Render pass composition.
//!
//! Demos never touch a render pass directly. They describe what to draw
//! with a [`Render`] and the frame loop records it into a pass whose
//! attachments come from the demo's [`Attachments`].
//!
//! # Key types
//!
//! - [`Render<'a>`] is the draw description returned by `Demo::on_render`
//! - [`Draw<'a>`] is one draw call: pipeline, bind group and vertex buffer
//! - [`FrameTargets`] owns the depth and MSAA textures sized to the surface

use std::iter;

use crate::{data_structures::texture::Texture, demos::Target};

/// One draw call worth of bindings.
#[derive(Clone, Copy)]
pub struct Draw<'a> {
    pub pipeline: &'a wgpu::RenderPipeline,
    pub bind_group: Option<&'a wgpu::BindGroup>,
    pub vertex: &'a wgpu::Buffer,
    pub amount: u32,
}

/// What a demo wants drawn this frame.
///
/// # Variants
///
/// - `None` clears the frame and draws nothing
/// - `Vertices(Draw)` draws `amount` vertices straight from the vertex buffer
/// - `Indexed(Draw, index)` draws `amount` u16 indices from `index`
pub enum Render<'a> {
    None,
    Vertices(Draw<'a>),
    Indexed(Draw<'a>, &'a wgpu::Buffer),
}

impl<'a> Render<'a> {
    pub(crate) fn record(self, render_pass: &mut wgpu::RenderPass<'_>) {
        match self {
            Render::None => (),
            Render::Vertices(draw) => {
                draw.bind(render_pass);
                render_pass.draw(0..draw.amount, 0..1);
            }
            Render::Indexed(draw, index) => {
                draw.bind(render_pass);
                render_pass.set_index_buffer(index.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..draw.amount, 0, 0..1);
            }
        }
    }
}

impl<'a> Draw<'a> {
    fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(self.pipeline);
        if let Some(group) = self.bind_group {
            render_pass.set_bind_group(0, group, &[]);
        }
        render_pass.set_vertex_buffer(0, self.vertex.slice(..));
    }
}

/// Render pass settings a demo needs besides its pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachments {
    pub clear_colour: wgpu::Color,
    pub depth: bool,
}

impl Attachments {
    pub const SKY: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.5,
        b: 1.0,
        a: 1.0,
    };
    pub const GRAY: wgpu::Color = wgpu::Color {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    pub fn flat() -> Self {
        Self {
            clear_colour: Self::SKY,
            depth: false,
        }
    }

    pub fn solid() -> Self {
        Self {
            clear_colour: Self::GRAY,
            depth: true,
        }
    }
}

/// Offscreen attachments that have to follow the surface size.
#[derive(Debug)]
pub struct FrameTargets {
    pub depth: Option<Texture>,
    pub msaa: Option<Texture>,
}

impl FrameTargets {
    pub fn new(device: &wgpu::Device, target: &Target, attachments: &Attachments) -> Self {
        let size = [target.width, target.height];
        let depth = attachments.depth.then(|| {
            Texture::create_depth_texture(device, size, target.sample_count, "depth_texture")
        });
        let msaa = (target.sample_count > 1).then(|| {
            Texture::create_msaa_texture(device, target.format, size, target.sample_count)
        });
        Self { depth, msaa }
    }
}

/// Records one frame into a command buffer.
///
/// With MSAA the pass renders into the multisampled texture and resolves
/// into `view`; the multisampled contents are discarded afterwards.
pub fn encode_frame(
    device: &wgpu::Device,
    targets: &FrameTargets,
    attachments: &Attachments,
    render: Render<'_>,
    view: &wgpu::TextureView,
) -> wgpu::CommandBuffer {
    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });
    {
        let (color_view, resolve_target, store) = match &targets.msaa {
            Some(msaa) => (&msaa.view, Some(view), wgpu::StoreOp::Discard),
            None => (view, None, wgpu::StoreOp::Store),
        };
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(attachments.clear_colour),
                    store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: targets.depth.as_ref().map(|depth| {
                wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
            ..Default::default()
        });

        render.record(&mut render_pass);
    }
    encoder.finish()
}

/// Encodes and submits one frame.
pub fn submit_frame(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    targets: &FrameTargets,
    attachments: &Attachments,
    render: Render<'_>,
    view: &wgpu::TextureView,
) {
    let commands = encode_frame(device, targets, attachments, render, view);
    queue.submit(iter::once(commands));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_solid_attachments_differ_in_depth_and_colour() {
        let flat = Attachments::flat();
        let solid = Attachments::solid();
        assert!(!flat.depth);
        assert!(solid.depth);
        assert_eq!(flat.clear_colour.b, 1.0);
        assert_eq!(solid.clear_colour.r, 0.5);
    }
}
