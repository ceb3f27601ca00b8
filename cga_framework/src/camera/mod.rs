//! Camera module - camera trait, its variants and the frustum.
//!
//! Cameras own their pose and cache derived matrices. They are tools
//! owned and driven by the caller; `update()` must be called after any
//! pose or frustum change before the camera is queried again.

mod camera;
mod frustum;
mod orthographic_camera;
mod perspective_camera;

pub use camera::{Camera, CameraBasis, CVPoint, Viewport};
pub use frustum::{
    Frustum,
    FRUSTUM_PLANES_COUNT,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orthographic_camera::OrthographicCamera;
pub use perspective_camera::{
    PerspectiveCamera,
    DEFAULT_FIELD_OF_VIEW_DEGREES, DEFAULT_FRUSTUM_NEAR, DEFAULT_FRUSTUM_FAR,
};
