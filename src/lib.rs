pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;

pub use model::{PickerConfig, SelectionState, Window, WindowModel};
pub use ops::router::{PickerEvent, PickerKey, PickerState, YearPicker};
pub use ops::surface::{ListSurface, RenderSurface};
