//! Camera for Pong game
//!
//! 2D orthographic camera in screen units: origin at the top-left corner,
//! y growing downwards, matching the simulation's coordinates.

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering `width` x `height` screen units
    pub fn screen(width: f32, height: f32) -> Self {
        // bottom = height, top = 0 flips y so that 0 is the top edge
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn project(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.projection * Vec4::new(x, y, 0.0, 1.0)
    }

    fn assert_clip(v: Vec4, x: f32, y: f32) {
        assert!((v.x / v.w - x).abs() < 1e-5, "x: {} != {}", v.x / v.w, x);
        assert!((v.y / v.w - y).abs() < 1e-5, "y: {} != {}", v.y / v.w, y);
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::screen(1280.0, 720.0);
        assert_clip(project(&camera, 0.0, 0.0), -1.0, 1.0);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::screen(1280.0, 720.0);
        assert_clip(project(&camera, 1280.0, 720.0), 1.0, -1.0);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
