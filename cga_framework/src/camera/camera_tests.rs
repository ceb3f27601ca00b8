use glam::{DMat4, DVec3, DVec4};
use crate::error::{Error, Result};
use super::*;

/// Camera that only provides the required capabilities.
struct FixedCamera {
    frustum: Frustum,
}

impl Camera for FixedCamera {
    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_up_to_date(&self) -> bool {
        true
    }

    fn view(&self) -> Result<DMat4> {
        Ok(DMat4::IDENTITY)
    }

    fn projection(&self) -> Result<DMat4> {
        Ok(DMat4::IDENTITY)
    }

    fn frustum(&self) -> Result<&Frustum> {
        Ok(&self.frustum)
    }

    fn resolution(&self) -> (u32, u32) {
        (100, 100)
    }
}

// ============================================================================
// Default capabilities
// ============================================================================

#[test]
fn test_fixed_pose_camera_rejects_look_at() {
    let mut camera = FixedCamera { frustum: Frustum::default() };
    assert!(matches!(camera.look_at(DVec3::Z, DVec3::ZERO), Err(Error::Unsupported(_))));
}

#[test]
fn test_image_space_is_unsupported_by_default() {
    let camera = FixedCamera { frustum: Frustum::default() };
    match camera.image_space_coordinates(DVec3::ZERO) {
        Err(Error::Unsupported(_)) => {}
        other => panic!("expected Unsupported, got {:?}", other),
    }
}

#[test]
fn test_default_clipping_uses_view_projection() {
    let camera = FixedCamera { frustum: Frustum::default() };
    let cv = camera.clipping_space_coordinates(DVec3::new(0.5, -0.25, 0.1)).unwrap();
    assert_eq!((cv.x, cv.y, cv.z, cv.w), (0.5, -0.25, 0.1, 1.0));
    assert_eq!(camera.unproject(&cv).unwrap(), DVec3::new(0.5, -0.25, 0.1));
}

// ============================================================================
// CVPoint
// ============================================================================

#[test]
fn test_cv_point_divides_by_w() {
    let cv = CVPoint::from_homogeneous(DVec4::new(2.0, 4.0, 1.0, 2.0)).unwrap();
    assert_eq!((cv.x, cv.y, cv.z), (1.0, 2.0, 0.5));
    assert_eq!(cv.to_homogeneous(), DVec4::new(2.0, 4.0, 1.0, 2.0));
    assert!(!cv.is_inside_ndc());
}

#[test]
fn test_cv_point_rejects_zero_negative_and_nan_w() {
    for w in [0.0, 1e-12, -3.0, f64::NAN] {
        let result = CVPoint::from_homogeneous(DVec4::new(1.0, 1.0, 1.0, w));
        assert!(matches!(result, Err(Error::DegenerateProjection { .. })), "w = {} accepted", w);
    }
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn test_viewport_validation() {
    assert!(Viewport::new(0.0, 1.0, 0.0, 1.0).is_ok());
    assert!(Viewport::new(0.5, 0.5, 0.0, 1.0).is_err());
    assert!(Viewport::new(0.0, 1.0, 0.8, 0.2).is_err());
    assert!(Viewport::new(-0.1, 1.0, 0.0, 1.0).is_err());
    assert!(Viewport::new(0.0, 1.5, 0.0, 1.0).is_err());
}

#[test]
fn test_full_viewport_maps_ndc_corners_to_surface_corners() {
    let viewport = Viewport::default();

    let top_right = viewport.ndc_to_pixel(1.0, 1.0, 800, 600);
    assert_eq!((top_right.x, top_right.y), (400.0, 300.0));

    let bottom_left = viewport.ndc_to_pixel(-1.0, -1.0, 800, 600);
    assert_eq!((bottom_left.x, bottom_left.y), (-400.0, -300.0));
}

// ============================================================================
// CameraBasis
// ============================================================================

#[test]
fn test_basis_view_matrix_maps_eye_to_origin() {
    let eye = DVec3::new(1.0, 2.0, 3.0);
    let basis = CameraBasis::look_at(eye, DVec3::ZERO, DVec3::Y).unwrap();
    let view = basis.view_matrix(eye);
    assert!(view.transform_point3(eye).length() < 1e-12);
}
