use crate::core::step::StepId;

/// Which editable field a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Content,
    Statement,
    Option(usize),
}

/// A field edit emitted by whatever surface is showing the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub step: StepId,
    pub field: FieldKind,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(step: StepId, field: FieldKind, value: impl Into<String>) -> Self {
        Self {
            step,
            field,
            value: value.into(),
        }
    }
}
