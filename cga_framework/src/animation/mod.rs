//! Animation module - value sources and per-shape animation state.

mod animation;
mod interpolation;

pub use animation::{Animation, InterpolatedAnimation};
pub use interpolation::{
    Interpolation,
    LinearInterpolation,
    RepeatMode,
    SequenceInterpolation,
    SineInterpolation,
};
