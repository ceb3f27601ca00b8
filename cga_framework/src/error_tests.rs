//! Unit tests for error.rs
//!
//! Tests Error variants, their Display output, and the recoverability split.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("window closed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("window closed"));
}

#[test]
fn test_degenerate_vector_display() {
    let err = Error::DegenerateVector("up is parallel to view direction".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate vector"));
    assert!(display.contains("parallel"));
}

#[test]
fn test_degenerate_projection_display_includes_w() {
    let err = Error::DegenerateProjection { w: -0.5 };
    assert_eq!(format!("{}", err), "Degenerate projection: homogeneous w = -0.5");
}

#[test]
fn test_camera_not_updated_display() {
    let display = format!("{}", Error::CameraNotUpdated);
    assert!(display.contains("update()"));
}

#[test]
fn test_unsupported_display() {
    let err = Error::Unsupported("image space coordinates".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Unsupported operation"));
    assert!(display.contains("image space"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::CameraNotUpdated;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::LockPoisoned("geometry".to_string()));
    assert!(debug.contains("LockPoisoned"));

    let debug = format!("{:?}", Error::DegenerateProjection { w: 0.0 });
    assert!(debug.contains("DegenerateProjection"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidParameter("fov".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RECOVERABILITY
// ============================================================================

#[test]
fn test_only_degenerate_projection_is_recoverable() {
    assert!(Error::DegenerateProjection { w: 0.0 }.is_recoverable());

    assert!(!Error::CameraNotUpdated.is_recoverable());
    assert!(!Error::DegenerateVector("zero".to_string()).is_recoverable());
    assert!(!Error::Unsupported("x".to_string()).is_recoverable());
    assert!(!Error::LockPoisoned("x".to_string()).is_recoverable());
}

// ============================================================================
// RESULT / PROPAGATION
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::CameraNotUpdated)
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert!(matches!(outer(), Err(Error::CameraNotUpdated)));
}

#[test]
fn test_cga_err_macro_returns_error() {
    fn fails() -> Result<()> {
        Err(crate::cga_err!("cga::test", Error::Unsupported("probe".to_string())))
    }

    match fails() {
        Err(Error::Unsupported(msg)) => assert_eq!(msg, "probe"),
        other => panic!("unexpected result: {:?}", other),
    }
}
