pub mod change;
pub mod command;
pub mod effect;
pub mod id_policy;
pub mod reducer;
pub mod state;
pub mod step;
pub mod step_list;

pub use step::{Step, StepId};
pub use step_list::StepList;
