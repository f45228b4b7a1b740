pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod ui;

pub use crate::core::change;
pub use crate::core::command;
pub use crate::core::id_policy;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::step;
pub use crate::core::step_list;

pub use error::{Error, Result};
