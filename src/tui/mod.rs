pub mod app;
pub mod input;
pub mod render;
pub mod theme;

pub use app::{Outcome, run};
