pub mod config;
pub mod selection;
pub mod window;

pub use config::*;
pub use selection::*;
pub use window::*;
