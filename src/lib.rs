//! webgpu-sandbox
//!
//! A handful of small, independent WebGPU demos that run natively and in the
//! browser. Each demo performs the same one-shot sequence: acquire a device,
//! upload static geometry, build a fixed pipeline and submit a render pass,
//! either once or on every animation frame.
//!
//! High-level modules
//! - `camera`: model-view-projection helper for the matrix-driven cube
//! - `config`: which demo to run and how
//! - `context`: device acquisition and the window surface
//! - `data_structures`: vertex formats, static geometry, uniforms, textures
//! - `demos`: the demos themselves and the registry that builds them
//! - `error`: typed failures surfaced to the user
//! - `flow`: the event loop driving a demo
//! - `pipelines`: render pipeline construction and the WGSL shaders
//! - `render`: render pass composition
//! - `resources`: texture loading
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod demos;
pub mod error;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;

pub use config::Config;
pub use demos::{Demo, DemoKind};
pub use error::SandboxError;
pub use flow::run;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Web entry point: runs the demo called `demo` on the `webgpuCanvas`
/// canvas. Errors are shown with `alert()`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(demo: &str) {
    let result = demo
        .parse::<DemoKind>()
        .map_err(anyhow::Error::from)
        .and_then(|kind| run(Config::new(kind)));
    if let Err(e) = result {
        log::error!("{:#}", e);
        flow::alert(&format!("{:#}", e));
    }
}
