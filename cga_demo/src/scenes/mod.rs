mod cube;
mod sine_curve;
mod strich;

pub use cube::CubeApp;
pub use sine_curve::SineCurveApp;
pub use strich::StrichApp;
