pub mod control;
pub mod tui;

pub use control::{DEFAULT_ACCEPT, ImportControl};
pub use tui::prompt_for_file;
