pub mod color;
pub mod constants;
pub mod error;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod gradient;
pub mod input;
pub mod params;
pub mod particles;
pub mod scene;
pub mod section;
pub mod state;
pub mod tween;

pub use color::Color;
pub use constants::*;
pub use error::SceneError;
pub use events::{EventBatch, EventQueue, InputEvent};
pub use frame::{run, RenderFrame, SceneState, Tick};
pub use gradient::GradientMap;
pub use params::{ParamEdit, SceneParams};
pub use state::*;

// Shaders bundled as string constants
pub static TOON_WGSL: &str = include_str!("../shaders/toon.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
