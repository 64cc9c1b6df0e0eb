pub mod compositor;
pub mod config;
pub mod constants;
pub mod hero;
pub mod layer;
pub mod motion;
pub mod pointer;
pub mod readiness;
pub mod spring;
pub mod strength;

pub use compositor::*;
pub use config::*;
pub use hero::*;
pub use layer::*;
pub use motion::*;
pub use pointer::*;
pub use readiness::*;
pub use spring::*;
pub use strength::*;
