pub mod clipboard;
pub mod line;
pub mod runner;
pub mod script;

pub use runner::{Mode, Runtime};
