use crate::core::command::Command;
use crate::core::effect::Effect;
use crate::core::state::AppState;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        tracing::debug!(?command, "reduce");
        match command {
            Command::AddStep => {
                let id = state.steps.append_step();
                tracing::debug!(%id, "step appended");
                vec![Effect::RequestRender]
            }
            Command::RemoveStep { id } => {
                Self::edited(state.steps.remove_step(id), "remove_step", id.get())
            }
            Command::SetContent { id, text } => {
                Self::edited(state.steps.set_content(id, text), "set_content", id.get())
            }
            Command::SetStatement { id, text } => Self::edited(
                state.steps.set_statement(id, text),
                "set_statement",
                id.get(),
            ),
            Command::AddOption { id } => {
                Self::edited(state.steps.add_option(id), "add_option", id.get())
            }
            Command::SetOption { id, index, text } => Self::edited(
                state.steps.set_option(id, index, text),
                "set_option",
                id.get(),
            ),
            Command::RemoveOption { id, index } => Self::edited(
                state.steps.remove_option(id, index),
                "remove_option",
                id.get(),
            ),
            Command::Generate => {
                let json = state.steps.serialize();
                tracing::debug!(json = %json, "generated");
                state.generated = Some(json.clone());
                vec![Effect::Generated(json)]
            }
            Command::Copy => match &state.generated {
                Some(json) => vec![Effect::CopyToClipboard(json.clone())],
                None => {
                    tracing::debug!("copy requested before anything was generated");
                    vec![]
                }
            },
            Command::Show => vec![Effect::RequestRender],
            Command::Help => vec![Effect::ShowHelp],
            Command::Exit => {
                state.should_exit = true;
                vec![]
            }
            Command::Noop => vec![],
        }
    }

    fn edited(changed: bool, operation: &'static str, id: u64) -> Vec<Effect> {
        if changed {
            vec![Effect::RequestRender]
        } else {
            tracing::debug!(operation, id, "no matching step or option, ignored");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::core::command::Command;
    use crate::core::effect::Effect;
    use crate::core::state::AppState;
    use crate::core::step::StepId;
    use crate::core::step_list::StepList;

    fn state() -> AppState {
        AppState::new(StepList::new())
    }

    #[test]
    fn add_step_requests_render() {
        let mut state = state();
        let effects = Reducer::reduce(&mut state, Command::AddStep);
        assert_eq!(effects, vec![Effect::RequestRender]);
        assert_eq!(state.steps.len(), 1);
    }

    #[test]
    fn edit_on_missing_step_yields_nothing() {
        let mut state = state();
        let effects = Reducer::reduce(
            &mut state,
            Command::SetContent {
                id: StepId::new(3),
                text: "x".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(state.steps.is_empty());
    }

    #[test]
    fn generate_stores_text() {
        let mut state = state();
        Reducer::reduce(&mut state, Command::AddStep);
        let effects = Reducer::reduce(&mut state, Command::Generate);

        let json = state.steps.serialize();
        assert_eq!(effects, vec![Effect::Generated(json.clone())]);
        assert_eq!(state.generated, Some(json));
    }

    #[test]
    fn copy_before_generate_does_nothing() {
        let mut state = state();
        Reducer::reduce(&mut state, Command::AddStep);
        assert!(Reducer::reduce(&mut state, Command::Copy).is_empty());
    }

    #[test]
    fn copy_uses_last_generated_text() {
        let mut state = state();
        Reducer::reduce(&mut state, Command::Generate);
        Reducer::reduce(&mut state, Command::AddStep);

        let effects = Reducer::reduce(&mut state, Command::Copy);
        assert_eq!(effects, vec![Effect::CopyToClipboard("[]".to_string())]);
    }

    #[test]
    fn exit_sets_flag() {
        let mut state = state();
        Reducer::reduce(&mut state, Command::Exit);
        assert!(state.should_exit());
    }
}
