//! Spinning-cube viewer.
//!
//! The viewer owns all camera and rotation state and implements the
//! three-phase render lifecycle: `on_create` resets state for a fresh
//! surface, `on_resize` derives the projection, `on_frame` advances the
//! rotation and draws.

use glam::{Mat4, Vec3};

use croquis_engine::render::cube::CubeRenderer;
use croquis_engine::render::{RenderCtx, RenderHooks, RenderTarget};

/// Degrees added to both rotation axes each rendered frame.
const ROTATION_STEP_DEG: f32 = 0.5;

/// Camera placement: behind the origin on -Z, looking at the cube.
const EYE: Vec3 = Vec3::new(0.0, 0.0, -5.0);
const CENTER: Vec3 = Vec3::ZERO;
const UP: Vec3 = Vec3::Y;

/// Near/far planes chosen so the cube at the origin sits inside the frustum
/// for the fixed camera distance of 5.
const NEAR: f32 = 3.0;
const FAR: f32 = 7.0;

/// Rotation and projection state, separated from GPU resources so the
/// transform math is testable without a device.
#[derive(Debug, Clone)]
pub struct TransformState {
    angle_x_deg: f32,
    angle_y_deg: f32,
    projection: Mat4,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            angle_x_deg: 0.0,
            angle_y_deg: 0.0,
            projection: Mat4::IDENTITY,
        }
    }
}

impl TransformState {
    /// Returns every matrix and angle to the initial state, as if the view
    /// had just been constructed. The surface-toggle path follows this with
    /// a resize, which rebuilds the projection before anything draws.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances both rotation angles by one frame step.
    pub fn advance(&mut self) {
        self.angle_x_deg += ROTATION_STEP_DEG;
        self.angle_y_deg += ROTATION_STEP_DEG;
    }

    /// Recomputes the projection for a drawable of `width` x `height` physical
    /// pixels. Zero dimensions keep the previous projection.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("cube viewer resized to {width}x{height}; keeping previous projection");
            return;
        }
        self.projection = projection_for_size(width, height);
    }

    pub fn angles_deg(&self) -> (f32, f32) {
        (self.angle_x_deg, self.angle_y_deg)
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined model-view-projection for the current state.
    ///
    /// The model rotates about X first, then Y; the product applies Y to the
    /// already X-rotated cube, matching the visible tumble of the viewer.
    pub fn mvp(&self) -> Mat4 {
        let model = Mat4::from_rotation_x(self.angle_x_deg.to_radians())
            * Mat4::from_rotation_y(self.angle_y_deg.to_radians());
        let view = Mat4::look_at_rh(EYE, CENTER, UP);
        self.projection * (view * model)
    }
}

/// Projection for a drawable size: horizontal extent scales with the aspect
/// ratio while the vertical extent is fixed at [-1, 1], so the cube keeps its
/// on-screen height across resizes.
fn projection_for_size(width: u32, height: u32) -> Mat4 {
    let ratio = width as f32 / height as f32;
    frustum_rh_zo(-ratio, ratio, -1.0, 1.0, NEAR, FAR)
}

/// Off-center perspective frustum, right-handed, depth mapped to [0, 1].
///
/// glam only ships the symmetric `perspective_rh`; this is the general form
/// with the depth range wgpu expects. For a symmetric frustum it agrees with
/// `Mat4::perspective_rh` up to floating point.
fn frustum_rh_zo(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rw = 1.0 / (right - left);
    let rh = 1.0 / (top - bottom);
    let rd = 1.0 / (near - far);

    Mat4::from_cols(
        glam::Vec4::new(2.0 * near * rw, 0.0, 0.0, 0.0),
        glam::Vec4::new(0.0, 2.0 * near * rh, 0.0, 0.0),
        glam::Vec4::new((right + left) * rw, (top + bottom) * rh, far * rd, -1.0),
        glam::Vec4::new(0.0, 0.0, near * far * rd, 0.0),
    )
}

/// Toggleable 3D view: rotation state plus the cube's GPU renderer.
#[derive(Default)]
pub struct CubeViewer {
    transform: TransformState,
    renderer: CubeRenderer,
}

impl CubeViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }
}

impl RenderHooks for CubeViewer {
    fn on_create(&mut self) {
        self.transform.reset();
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.transform.set_viewport(width, height);
    }

    fn on_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        // Draw the current orientation, then step so frame N shows N * 0.5
        // degrees of accumulated rotation.
        let mvp = self.transform.mvp();
        self.renderer.draw(ctx, target, mvp);
        self.transform.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_eq(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for i in 0..16 {
            assert!(
                (a[i] - b[i]).abs() < 1e-5,
                "matrices differ at element {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn rotation_accumulates_per_frame() {
        let mut t = TransformState::default();
        for _ in 0..10 {
            t.advance();
        }
        assert_eq!(t.angles_deg(), (5.0, 5.0));
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut t = TransformState::default();
        t.set_viewport(200, 100);
        t.advance();
        t.advance();

        t.reset();
        assert_eq!(t.angles_deg(), (0.0, 0.0));
        assert_mat4_eq(t.projection(), Mat4::IDENTITY);
    }

    #[test]
    fn projection_for_wide_surface_scales_horizontal_extent() {
        // 200x100 has ratio 2: horizontal extent [-2, 2], vertical [-1, 1].
        let p = projection_for_size(200, 100);
        let expected = frustum_rh_zo(-2.0, 2.0, -1.0, 1.0, 3.0, 7.0);
        assert_mat4_eq(p, expected);
    }

    #[test]
    fn symmetric_frustum_matches_glam_perspective() {
        // Square drawable: left/right and bottom/top are symmetric at +-1,
        // i.e. a 90 degree vertical FOV at the near plane distance 3.
        let f = frustum_rh_zo(-1.0, 1.0, -1.0, 1.0, 3.0, 7.0);
        let fov_y = 2.0 * (1.0f32 / 3.0).atan();
        let p = Mat4::perspective_rh(fov_y, 1.0, 3.0, 7.0);
        assert_mat4_eq(f, p);
    }

    #[test]
    fn frustum_known_elements() {
        let f = frustum_rh_zo(-2.0, 2.0, -1.0, 1.0, 3.0, 7.0);
        let m = f.to_cols_array_2d();

        assert!((m[0][0] - 1.5).abs() < 1e-6); // 2n/(r-l) = 6/4
        assert!((m[1][1] - 3.0).abs() < 1e-6); // 2n/(t-b) = 6/2
        assert!((m[2][2] - (-1.75)).abs() < 1e-6); // f/(n-f) = 7/-4
        assert!((m[2][3] - (-1.0)).abs() < 1e-6);
        assert!((m[3][2] - (-5.25)).abs() < 1e-6); // nf/(n-f) = 21/-4
    }

    #[test]
    fn mvp_composes_projection_view_model() {
        let mut t = TransformState::default();
        t.set_viewport(200, 100);
        t.advance();

        let model = Mat4::from_rotation_x(0.5f32.to_radians())
            * Mat4::from_rotation_y(0.5f32.to_radians());
        let view = Mat4::look_at_rh(EYE, CENTER, UP);
        let expected = t.projection() * (view * model);

        assert_mat4_eq(t.mvp(), expected);
    }

    #[test]
    fn zero_size_resize_keeps_projection() {
        let mut t = TransformState::default();
        t.set_viewport(200, 100);
        let before = t.projection();

        t.set_viewport(0, 100);
        t.set_viewport(200, 0);

        assert_mat4_eq(t.projection(), before);
    }

    #[test]
    fn default_mvp_is_finite() {
        // Before the first resize the projection is identity; the draw path
        // must still produce a well-formed matrix.
        let t = TransformState::default();
        assert!(t.mvp().is_finite());
    }

    #[test]
    fn recreate_then_resize_leaves_no_stale_state() {
        let mut viewer = CubeViewer::new();
        viewer.on_resize(200, 100);
        viewer.transform.advance();

        // The host always pairs create with resize when the view reappears.
        viewer.on_create();
        viewer.on_resize(400, 100);

        assert_eq!(viewer.transform().angles_deg(), (0.0, 0.0));
        assert_mat4_eq(
            viewer.transform().projection(),
            projection_for_size(400, 100),
        );
    }
}
