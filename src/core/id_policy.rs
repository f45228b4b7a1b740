use crate::core::step::StepId;
use serde::{Deserialize, Serialize};

/// How a freshly appended step gets its identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `len + 1`. Ids can repeat once steps have been deleted.
    #[default]
    NextPosition,
    /// One past the highest id ever issued by the list.
    Monotonic,
}

impl IdPolicy {
    /// Monotonic falls back to `len + 1` once the id space is exhausted.
    pub fn next_id(self, len: usize, highest_issued: u64) -> StepId {
        let next_position = (len as u64).saturating_add(1);
        match self {
            Self::NextPosition => StepId::new(next_position),
            Self::Monotonic => StepId::new(
                highest_issued
                    .max(len as u64)
                    .checked_add(1)
                    .unwrap_or(next_position),
            ),
        }
    }
}
