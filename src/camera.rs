//! Model-view-projection helper for the matrix-driven cube.

use std::fmt::Write;

use cgmath::{Matrix4, Rad, Vector3};
use instant::Duration;

/// cgmath builds OpenGL style projections (clip z in -1..1) while WebGPU
/// expects 0..1. Multiplying by this matrix remaps the depth range.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const FOVY: Rad<f32> = Rad(std::f32::consts::FRAC_PI_4);
pub const ZNEAR: f32 = 1.0;
pub const ZFAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 20.0;

/// Perspective projection with a WebGPU depth range.
pub fn projection(aspect: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * cgmath::perspective(FOVY, aspect, ZNEAR, ZFAR)
}

/// Pushes the cube away from the eye and tumbles it around X then Y.
pub fn view(elapsed: Duration) -> Matrix4<f32> {
    let t = elapsed.as_secs_f32();
    Matrix4::from_translation(Vector3::new(0.0, 0.0, -CAMERA_DISTANCE))
        * Matrix4::from_angle_x(Rad(t))
        * Matrix4::from_angle_y(Rad(t))
}

pub fn transformation_matrix(aspect: f32, elapsed: Duration) -> Matrix4<f32> {
    let mvp = projection(aspect) * view(elapsed);
    log::trace!("model view projection:\n{}", fmt_matrix(&mvp));
    mvp
}

/// Renders a matrix one column per line, in memory order.
pub fn fmt_matrix(m: &Matrix4<f32>) -> String {
    let cols: &[[f32; 4]; 4] = m.as_ref();
    let mut msg = String::new();
    for col in cols {
        for v in col {
            let _ = write!(msg, "{} ", v);
        }
        msg.push('\n');
    }
    msg
}
