pub mod camera;
pub mod config;
pub mod driver;
pub mod layout;
pub mod monitor;
pub mod mood;
pub mod signals;

pub use camera::*;
pub use config::*;
pub use driver::*;
pub use layout::*;
pub use monitor::*;
pub use mood::*;
pub use signals::*;

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
