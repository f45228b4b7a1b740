use crate::core::change::{ChangeEvent, FieldKind};
use crate::core::id_policy::IdPolicy;
use crate::core::step::{Step, StepId};
use serde::{Serialize, Serializer};

/// Ordered collection of steps. Insertion order is display and output order.
///
/// Every operation is total: an unknown id or option index leaves the list
/// untouched. Mutators return whether anything changed. Field and option
/// edits reach every step sharing the id; `remove_step` drops only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepList {
    steps: Vec<Step>,
    policy: IdPolicy,
    highest_issued: u64,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IdPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_steps(steps: Vec<Step>, policy: IdPolicy) -> Self {
        let highest_issued = steps.iter().map(|step| step.id.get()).max().unwrap_or(0);
        Self {
            steps,
            policy,
            highest_issued,
        }
    }

    /// Rebuilds a list from previously generated JSON.
    pub fn from_json(text: &str, policy: IdPolicy) -> Result<Self, serde_json::Error> {
        let steps: Vec<Step> = serde_json::from_str(text)?;
        Ok(Self::from_steps(steps, policy))
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        self.steps.as_slice()
    }

    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn append_step(&mut self) -> StepId {
        let id = self.policy.next_id(self.steps.len(), self.highest_issued);
        let step = Step::empty(id, self.steps.len() + 1);
        self.highest_issued = self.highest_issued.max(id.get());
        self.steps.push(step);
        id
    }

    pub fn remove_step(&mut self, id: StepId) -> bool {
        let Some(pos) = self.steps.iter().position(|step| step.id == id) else {
            return false;
        };
        self.steps.remove(pos);
        true
    }

    pub fn set_content(&mut self, id: StepId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update(id, |step| step.content.clone_from(&text))
    }

    pub fn set_statement(&mut self, id: StepId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update(id, |step| step.statement.clone_from(&text))
    }

    pub fn add_option(&mut self, id: StepId) -> bool {
        self.update(id, Step::add_option)
    }

    pub fn set_option(&mut self, id: StepId, index: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update(id, |step| step.set_option(index, text.clone()))
    }

    pub fn remove_option(&mut self, id: StepId, index: usize) -> bool {
        let mut removed = false;
        for step in self.steps.iter_mut().filter(|step| step.id == id) {
            removed |= step.remove_option(index);
        }
        removed
    }

    /// Routes a field change coming from a rendering surface.
    pub fn apply_change(&mut self, change: ChangeEvent) -> bool {
        let ChangeEvent { step, field, value } = change;
        match field {
            FieldKind::Content => self.set_content(step, value),
            FieldKind::Statement => self.set_statement(step, value),
            FieldKind::Option(index) => self.set_option(step, index, value),
        }
    }

    /// Pretty JSON (2-space indent) of the whole list.
    pub fn serialize(&self) -> String {
        serde_json::to_string_pretty(self).expect("step list always serializes")
    }

    /// Applies `apply` to every step carrying `id`; ids can repeat under
    /// [`IdPolicy::NextPosition`].
    fn update(&mut self, id: StepId, mut apply: impl FnMut(&mut Step)) -> bool {
        let mut matched = false;
        for step in self.steps.iter_mut().filter(|step| step.id == id) {
            apply(step);
            matched = true;
        }
        matched
    }
}

impl Serialize for StepList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.steps.serialize(serializer)
    }
}
