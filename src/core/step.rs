use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u64);

impl StepId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One record of the workflow.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    pub content: String,
    pub options: Vec<String>,
    pub statement: String,
}

impl Step {
    /// An empty step whose title is derived from its 1-based position.
    pub fn empty(id: StepId, position: usize) -> Self {
        Self {
            id,
            title: format!("Step {position}"),
            content: String::new(),
            options: Vec::new(),
            statement: String::new(),
        }
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Replaces the option at `index`. An index past the end appends `text`,
    /// the way splicing past the end of an array does.
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) {
        match self.options.get_mut(index) {
            Some(option) => *option = text.into(),
            None => self.options.push(text.into()),
        }
    }

    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }
}
