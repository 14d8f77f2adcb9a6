//! Per-frame uniform data written by the animated demos.

use instant::Duration;

/// `[sin t, cos t, aspect, 0]`: everything the rotating-cube shaders need to
/// spin and letterbox the cube without a matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameInfo(pub [f32; 4]);

impl FrameInfo {
    pub fn new(aspect: f32) -> Self {
        Self([0.8, 0.8, aspect, 0.0])
    }

    /// Rotates by `elapsed` seconds worth of radians.
    pub fn update(&mut self, elapsed: Duration) {
        let t = elapsed.as_secs_f32();
        self.0[0] = t.sin();
        self.0[1] = t.cos();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.0[2] = aspect;
    }
}

/// Model-view-projection matrix, column major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub mvp: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            mvp: cgmath::Matrix4::identity().into(),
        }
    }

    pub fn update(&mut self, mvp: cgmath::Matrix4<f32>) {
        self.mvp = mvp.into();
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}
