pub mod choreo;
pub mod constants;
pub mod ease;
pub mod focus;
pub mod labels;
pub mod pose;
pub mod rig;
pub mod scene;

pub use choreo::*;
pub use constants::*;
pub use ease::*;
pub use focus::*;
pub use labels::*;
pub use pose::*;
pub use rig::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
