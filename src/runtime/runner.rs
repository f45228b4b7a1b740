use crate::core::command::Command;
use crate::core::effect::Effect;
use crate::core::reducer::Reducer;
use crate::core::state::AppState;
use crate::runtime::clipboard::Clipboard;
use crate::runtime::line::{self, HELP};
use crate::ui::printer::write_lines;
use crate::ui::view::{generated_lines, step_list_lines};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A person is typing; every change re-renders the list.
    Interactive,
    /// Commands come from a script; nothing is printed, the caller reads the
    /// final state.
    Batch,
}

pub struct Runtime<W: Write, C: Clipboard> {
    state: AppState,
    out: W,
    clipboard: C,
    mode: Mode,
    color: bool,
    prompt: bool,
}

impl<W: Write, C: Clipboard> Runtime<W, C> {
    pub fn new(state: AppState, out: W, clipboard: C, mode: Mode) -> Self {
        Self {
            state,
            out,
            clipboard,
            mode,
            color: false,
            prompt: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn into_parts(self) -> (AppState, W, C) {
        (self.state, self.out, self.clipboard)
    }

    /// Drives the line editor until `quit` or end of input.
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        writeln!(self.out, "type `help` for commands")?;
        self.render()?;

        let mut lines = input.lines();
        while !self.state.should_exit() {
            self.show_prompt()?;
            let Some(raw) = lines.next() else {
                break;
            };
            match line::parse_line(&raw?) {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    tracing::debug!(%err, "rejected line");
                    writeln!(self.out, "error: {err}")?;
                }
            }
        }
        self.out.flush()
    }

    pub fn run_script(&mut self, commands: Vec<Command>) -> io::Result<()> {
        for command in commands {
            if self.state.should_exit() {
                break;
            }
            self.dispatch(command)?;
        }
        Ok(())
    }

    /// Generates from the final state, copies it when asked, and returns it.
    /// A script may have generated earlier and kept editing; that text is
    /// replaced.
    pub fn finish_script(&mut self, copy: bool) -> io::Result<String> {
        self.dispatch(Command::Generate)?;
        if copy {
            self.dispatch(Command::Copy)?;
        }
        Ok(self.state.generated.clone().unwrap_or_default())
    }

    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Generated(json) => {
                    if self.mode == Mode::Interactive {
                        write_lines(&mut self.out, &generated_lines(&json), self.color)?;
                    }
                }
                Effect::CopyToClipboard(json) => self.copy(&json)?,
                Effect::ShowHelp => {
                    if self.mode == Mode::Interactive {
                        writeln!(self.out, "{HELP}")?;
                    }
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn copy(&mut self, json: &str) -> io::Result<()> {
        match self.clipboard.copy_text(json) {
            Ok(()) => {
                tracing::debug!(bytes = json.len(), "copied generated json");
                if self.mode == Mode::Interactive {
                    writeln!(self.out, "copied")?;
                }
            }
            Err(err) => tracing::warn!(%err, "clipboard write failed"),
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        if self.mode == Mode::Batch {
            return Ok(());
        }
        write_lines(&mut self.out, &step_list_lines(&self.state.steps), self.color)
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}
