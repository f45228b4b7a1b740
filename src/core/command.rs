use crate::core::change::{ChangeEvent, FieldKind};
use crate::core::step::StepId;
use serde::Deserialize;

/// Every user action against the step list. Scripts spell these as
/// `op: snake_case_name` maps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddStep,
    RemoveStep { id: StepId },
    SetContent { id: StepId, text: String },
    SetStatement { id: StepId, text: String },
    AddOption { id: StepId },
    SetOption { id: StepId, index: usize, text: String },
    RemoveOption { id: StepId, index: usize },
    Generate,
    Copy,
    Show,
    Help,
    Exit,
    Noop,
}

impl From<ChangeEvent> for Command {
    fn from(change: ChangeEvent) -> Self {
        let ChangeEvent { step, field, value } = change;
        match field {
            FieldKind::Content => Command::SetContent {
                id: step,
                text: value,
            },
            FieldKind::Statement => Command::SetStatement {
                id: step,
                text: value,
            },
            FieldKind::Option(index) => Command::SetOption {
                id: step,
                index,
                text: value,
            },
        }
    }
}
