use glam::{DMat4, DVec3};
use crate::error::Error;
use super::*;

const TOLERANCE: f64 = 1e-9;

fn assert_vec_eq(a: DVec3, b: DVec3) {
    assert!((a - b).length() < 1e-6, "expected {} ≈ {}", a, b);
}

fn assert_orthonormal(basis: &CameraBasis) {
    assert!((basis.u.length() - 1.0).abs() < TOLERANCE);
    assert!((basis.v.length() - 1.0).abs() < TOLERANCE);
    assert!((basis.n.length() - 1.0).abs() < TOLERANCE);
    assert!(basis.u.dot(basis.v).abs() < TOLERANCE);
    assert!(basis.u.dot(basis.n).abs() < TOLERANCE);
    assert!(basis.v.dot(basis.n).abs() < TOLERANCE);
}

fn camera_at_z5(fov_degrees: f64) -> PerspectiveCamera {
    PerspectiveCamera::with_pose(
        DVec3::new(0.0, 0.0, 5.0),
        DVec3::ZERO,
        DVec3::Y,
        fov_degrees.to_radians(),
        800,
        800,
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_uses_defaults_and_is_query_ready() {
    let camera = PerspectiveCamera::new(800, 600).unwrap();

    assert!(camera.is_up_to_date());
    assert_eq!(camera.position(), DVec3::ZERO);
    assert_eq!(camera.up(), DVec3::Y);
    assert!((camera.field_of_view() - 75f64.to_radians()).abs() < TOLERANCE);
    assert!((camera.aspect_ratio() - 800.0 / 600.0).abs() < TOLERANCE);
    assert_eq!(camera.resolution(), (800, 600));
    assert_eq!(camera.frustum_near(), DEFAULT_FRUSTUM_NEAR);
    assert_eq!(camera.frustum_far(), DEFAULT_FRUSTUM_FAR);
    assert!(camera.view().is_ok());
}

#[test]
fn test_aspect_ratio_is_not_truncated() {
    let camera = PerspectiveCamera::new(1920, 1080).unwrap();
    assert!((camera.aspect_ratio() - 16.0 / 9.0).abs() < TOLERANCE);
}

#[test]
fn test_zero_resolution_rejected() {
    assert!(matches!(PerspectiveCamera::new(0, 600), Err(Error::InvalidParameter(_))));
    assert!(matches!(PerspectiveCamera::new(800, 0), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_field_of_view_out_of_range_rejected() {
    for fov in [0.0, -1.0, std::f64::consts::PI, 4.0] {
        let result = PerspectiveCamera::with_pose(DVec3::Z, DVec3::ZERO, DVec3::Y, fov, 100, 100);
        assert!(matches!(result, Err(Error::InvalidParameter(_))), "fov {} accepted", fov);
    }
}

#[test]
fn test_position_equal_to_target_is_degenerate() {
    let p = DVec3::new(1.0, 2.0, 3.0);
    let result = PerspectiveCamera::with_pose(p, p, DVec3::Y, 1.0, 100, 100);
    assert!(matches!(result, Err(Error::DegenerateVector(_))));
}

#[test]
fn test_up_parallel_to_view_direction_is_degenerate() {
    let result = PerspectiveCamera::with_pose(
        DVec3::new(0.0, 5.0, 0.0),
        DVec3::ZERO,
        DVec3::Y,
        1.0,
        100,
        100,
    );
    assert!(matches!(result, Err(Error::DegenerateVector(_))));
}

// ============================================================================
// Basis and view matrix
// ============================================================================

#[test]
fn test_basis_is_orthonormal_for_various_poses() {
    let poses = [
        (DVec3::new(0.0, 0.0, -5.0), DVec3::ZERO, DVec3::Y),
        (DVec3::new(3.0, 4.0, 5.0), DVec3::new(-1.0, 0.5, 2.0), DVec3::Y),
        (DVec3::new(-10.0, 2.0, 0.0), DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.3, 1.0, 0.1)),
        (DVec3::new(0.0, 100.0, 1.0), DVec3::ZERO, DVec3::Z),
    ];

    for (position, target, up) in poses {
        let camera = PerspectiveCamera::with_pose(position, target, up, 1.2, 640, 480).unwrap();
        assert_orthonormal(camera.basis());
    }
}

#[test]
fn test_n_points_from_target_to_eye() {
    let camera = camera_at_z5(75.0);
    assert_vec_eq(camera.basis().n, DVec3::Z);
    assert_vec_eq(camera.basis().u, DVec3::X);
    assert_vec_eq(camera.basis().v, DVec3::Y);
}

#[test]
fn test_view_matrix_matches_look_at() {
    let position = DVec3::new(3.0, 4.0, 5.0);
    let target = DVec3::new(-1.0, 0.5, 2.0);
    let camera = PerspectiveCamera::with_pose(position, target, DVec3::Y, 1.0, 100, 100).unwrap();

    let expected = DMat4::look_at_rh(position, target, DVec3::Y);
    assert!(camera.view().unwrap().abs_diff_eq(expected, 1e-9));
}

#[test]
fn test_view_translation_row_is_negated_dot_products() {
    let position = DVec3::new(2.0, -1.0, 7.0);
    let camera = PerspectiveCamera::with_pose(position, DVec3::ZERO, DVec3::Y, 1.0, 100, 100).unwrap();
    let basis = *camera.basis();
    let view = camera.view().unwrap();

    assert!((view.w_axis.x + position.dot(basis.u)).abs() < TOLERANCE);
    assert!((view.w_axis.y + position.dot(basis.v)).abs() < TOLERANCE);
    assert!((view.w_axis.z + position.dot(basis.n)).abs() < TOLERANCE);
    assert_eq!(view.row(3), glam::DVec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_eye_maps_to_camera_origin() {
    let position = DVec3::new(2.0, -1.0, 7.0);
    let camera = PerspectiveCamera::with_pose(position, DVec3::ZERO, DVec3::Y, 1.0, 100, 100).unwrap();
    assert_vec_eq(camera.camera_space_coordinates(position).unwrap(), DVec3::ZERO);
}

#[test]
fn test_orientation_rotates_z_onto_n() {
    let camera = PerspectiveCamera::with_pose(
        DVec3::new(3.0, 4.0, 5.0),
        DVec3::ZERO,
        DVec3::Y,
        1.0,
        100,
        100,
    )
    .unwrap();
    assert_vec_eq(camera.orientation() * DVec3::Z, camera.basis().n);
    assert_vec_eq(camera.orientation() * DVec3::X, camera.basis().u);
}

// ============================================================================
// Projection and frustum
// ============================================================================

#[test]
fn test_projection_matches_perspective_rh_gl() {
    let camera = PerspectiveCamera::new(800, 600).unwrap();
    let expected = DMat4::perspective_rh_gl(
        75f64.to_radians(),
        800.0 / 600.0,
        DEFAULT_FRUSTUM_NEAR,
        DEFAULT_FRUSTUM_FAR,
    );
    assert!(camera.projection().unwrap().abs_diff_eq(expected, 1e-12));
    assert_ne!(camera.projection().unwrap(), DMat4::IDENTITY);
}

#[test]
fn test_frustum_extents_follow_field_of_view() {
    let camera = camera_at_z5(90.0);
    let (left, right, bottom, top) = camera.frustum_extents();

    // near = 1, tan(45°) = 1, aspect = 1
    assert!((top - 1.0).abs() < 1e-9);
    assert!((bottom + 1.0).abs() < 1e-9);
    assert!((right - 1.0).abs() < 1e-9);
    assert!((left + 1.0).abs() < 1e-9);
}

#[test]
fn test_frustum_contains_target_but_not_points_behind() {
    let camera = camera_at_z5(75.0);
    let frustum = camera.frustum().unwrap();

    assert!(frustum.contains_point(DVec3::ZERO));
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, 10.0)));
}

// ============================================================================
// Clipping space
// ============================================================================

#[test]
fn test_look_at_point_projects_to_centre() {
    let camera = PerspectiveCamera::with_pose(
        DVec3::new(0.0, 0.0, -5.0),
        DVec3::ZERO,
        DVec3::Y,
        75f64.to_radians(),
        800,
        800,
    )
    .unwrap();

    let cv = camera.clipping_space_coordinates(DVec3::ZERO).unwrap();
    assert!(cv.x.abs() < 1e-9);
    assert!(cv.y.abs() < 1e-9);
    assert!((cv.w - 5.0).abs() < 1e-9);
}

#[test]
fn test_point_on_eye_plane_is_degenerate() {
    let camera = camera_at_z5(75.0);
    let result = camera.clipping_space_coordinates(DVec3::new(1.0, 0.0, 5.0));
    match result {
        Err(Error::DegenerateProjection { w }) => assert!(w.abs() < 1e-9),
        other => panic!("expected degenerate projection, got {:?}", other),
    }
}

#[test]
fn test_point_behind_camera_is_degenerate() {
    let camera = camera_at_z5(75.0);
    let err = camera.clipping_space_coordinates(DVec3::new(0.0, 0.0, 10.0)).unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn test_clipping_round_trip_recovers_world_point() {
    let camera = PerspectiveCamera::with_pose(
        DVec3::new(3.0, 4.0, 5.0),
        DVec3::new(-1.0, 0.5, 2.0),
        DVec3::Y,
        1.1,
        1024,
        768,
    )
    .unwrap();

    for point in [
        DVec3::new(-1.0, 0.5, 2.0),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(-4.0, 1.0, -3.0),
    ] {
        let cv = camera.clipping_space_coordinates(point).unwrap();
        let back = camera.unproject(&cv).unwrap();
        assert_vec_eq(back, point);
    }
}

#[test]
fn test_camera_space_round_trip_through_inverse_view() {
    let camera = camera_at_z5(60.0);
    let point = DVec3::new(1.5, -2.0, -3.0);

    let camera_space = camera.camera_space_coordinates(point).unwrap();
    let back = camera.view().unwrap().inverse().transform_point3(camera_space);
    assert_vec_eq(back, point);
}

// ============================================================================
// Image space
// ============================================================================

#[test]
fn test_image_space_centre_and_edge() {
    let camera = camera_at_z5(90.0);

    let centre = camera.image_space_coordinates(DVec3::ZERO).unwrap();
    assert!(centre.x.abs() < 1e-9 && centre.y.abs() < 1e-9);

    // tan(45°) * 5 = 5 → right edge of an 800 px wide surface
    let edge = camera.image_space_coordinates(DVec3::new(5.0, 0.0, 0.0)).unwrap();
    assert!((edge.x - 400.0).abs() < 1e-6);
    assert!(edge.y.abs() < 1e-6);

    let top = camera.image_space_coordinates(DVec3::new(0.0, 5.0, 0.0)).unwrap();
    assert!((top.y - 400.0).abs() < 1e-6);
}

#[test]
fn test_image_space_respects_viewport() {
    let mut camera = camera_at_z5(90.0);
    camera.set_viewport(Viewport::new(0.5, 1.0, 0.0, 1.0).unwrap());
    camera.update().unwrap();

    // NDC centre lands in the middle of the right half: 600 px → +200 logical
    let centre = camera.image_space_coordinates(DVec3::ZERO).unwrap();
    assert!((centre.x - 200.0).abs() < 1e-6);
    assert!(centre.y.abs() < 1e-6);
}

// ============================================================================
// Manual refresh contract
// ============================================================================

#[test]
fn test_queries_fail_after_setter_until_update() {
    let mut camera = camera_at_z5(75.0);
    camera.set_position(DVec3::new(0.0, 0.0, 10.0));

    assert!(!camera.is_up_to_date());
    assert!(matches!(camera.view(), Err(Error::CameraNotUpdated)));
    assert!(matches!(camera.projection(), Err(Error::CameraNotUpdated)));
    assert!(matches!(camera.frustum(), Err(Error::CameraNotUpdated)));
    assert!(matches!(
        camera.clipping_space_coordinates(DVec3::ZERO),
        Err(Error::CameraNotUpdated)
    ));

    camera.update().unwrap();
    let cv = camera.clipping_space_coordinates(DVec3::ZERO).unwrap();
    assert!((cv.w - 10.0).abs() < 1e-9);
}

#[test]
fn test_every_setter_marks_dirty() {
    let mut camera = camera_at_z5(75.0);

    camera.set_target(DVec3::new(1.0, 0.0, 0.0));
    assert!(!camera.is_up_to_date());
    camera.update().unwrap();

    camera.set_up(DVec3::new(0.1, 1.0, 0.0));
    assert!(!camera.is_up_to_date());
    camera.update().unwrap();

    camera.set_field_of_view(1.0).unwrap();
    assert!(!camera.is_up_to_date());
    camera.update().unwrap();

    camera.set_frustum_distances(0.5, 50.0).unwrap();
    assert!(!camera.is_up_to_date());
    camera.update().unwrap();

    camera.resize(320, 200).unwrap();
    assert!(!camera.is_up_to_date());
    camera.update().unwrap();
    assert!((camera.aspect_ratio() - 1.6).abs() < TOLERANCE);
}

#[test]
fn test_invalid_setters_leave_camera_untouched() {
    let mut camera = camera_at_z5(75.0);

    assert!(camera.set_frustum_distances(2.0, 1.0).is_err());
    assert!(camera.set_field_of_view(0.0).is_err());
    assert!(camera.resize(0, 10).is_err());
    assert!(camera.is_up_to_date());
}

#[test]
fn test_failed_update_keeps_camera_dirty() {
    let mut camera = camera_at_z5(75.0);
    camera.set_target(DVec3::new(0.0, 0.0, 5.0));

    assert!(matches!(camera.update(), Err(Error::DegenerateVector(_))));
    assert!(matches!(camera.view(), Err(Error::CameraNotUpdated)));
}
