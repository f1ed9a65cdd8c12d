/// Errors raised by the platform-free scene logic.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid hex color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("failed to decode gradient image: {0}")]
    GradientDecode(#[from] image::ImageError),
    #[error("gradient image is empty")]
    EmptyGradient,
    #[error("parameter {name} out of range: {value}")]
    ParamOutOfRange { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, SceneError>;
