use crate::core::step_list::StepList;

pub struct AppState {
    pub steps: StepList,
    /// Text of the last `Generate`; this is what `Copy` copies.
    pub generated: Option<String>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(steps: StepList) -> Self {
        Self {
            steps,
            generated: None,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}
