//! Error types for device acquisition and demo selection.

use thiserror::Error;

/// Failures that stop a demo before its first frame.
///
/// None of these are retried: a missing capability is reported to the user
/// (logged natively, `alert()`ed on the web) and the demo stops.
#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Your browser does not support WebGPU. Please use Google Chrome or Edge.")]
    WebGpuNotSupported,

    #[error("No GPU found.")]
    NoGpu,

    #[error("Failed to get GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Failed to create a rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No canvas with id: {0}")]
    NoCanvas(String),

    #[error("Unsupported MSAA sample count {0}, expected 1 or 4")]
    InvalidSampleCount(u32),

    #[error("Window size must be non-zero, got {0}x{1}")]
    InvalidSize(u32, u32),
}

/// Returned when a demo name does not match any [`crate::demos::DemoKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown demo '{0}'. Run with --list to see the available demos.")]
pub struct ParseDemoError(pub String);
