//! Parser for the line editor.
//!
//! One command per line. Option positions are 1-based here, matching the
//! "Option N" labels shown by the view, and become 0-based indexes on the
//! way into a [`Command`].

use crate::core::command::Command;
use crate::core::step::StepId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  add                           append an empty step
  delete <id>                   remove a step
  content <id> <text>           set the content (\\n for a line break)
  statement <id> <text>         set the statement
  add-option <id>               append an empty option
  option <id> <n> <text>        set option n (1-based)
  delete-option <id> <n>        remove option n (1-based)
  generate                      print the JSON for the current steps
  copy                          copy the last generated JSON
  show                          print the steps
  help                          print this help
  quit                          leave the editor";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{value}` is not a valid {what}")]
    InvalidNumber { value: String, what: &'static str },
    #[error("option numbers start at 1")]
    ZeroOption,
}

pub fn parse_line(line: &str) -> Result<Command, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Noop);
    }

    let (keyword, rest) = split_word(line);
    let keyword = keyword.to_ascii_lowercase();
    match keyword.as_str() {
        "add" => Ok(Command::AddStep),
        "delete" => Ok(Command::RemoveStep {
            id: step_id(rest, "delete")?.0,
        }),
        "content" => {
            let (id, text) = step_id(rest, "content")?;
            Ok(Command::SetContent {
                id,
                text: decode_text(text),
            })
        }
        "statement" => {
            let (id, text) = step_id(rest, "statement")?;
            Ok(Command::SetStatement {
                id,
                text: decode_text(text),
            })
        }
        "add-option" => Ok(Command::AddOption {
            id: step_id(rest, "add-option")?.0,
        }),
        "option" => {
            let (id, rest) = step_id(rest, "option")?;
            let (index, text) = option_index(rest, "option")?;
            Ok(Command::SetOption {
                id,
                index,
                text: decode_text(text),
            })
        }
        "delete-option" => {
            let (id, rest) = step_id(rest, "delete-option")?;
            let (index, _) = option_index(rest, "delete-option")?;
            Ok(Command::RemoveOption { id, index })
        }
        "generate" => Ok(Command::Generate),
        "copy" => Ok(Command::Copy),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Exit),
        _ => Err(LineError::UnknownCommand(keyword)),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

fn step_id<'a>(input: &'a str, command: &'static str) -> Result<(StepId, &'a str), LineError> {
    let (word, rest) = split_word(input);
    if word.is_empty() {
        return Err(LineError::MissingArgument {
            command,
            what: "a step id",
        });
    }
    let id = word.parse::<u64>().map_err(|_| LineError::InvalidNumber {
        value: word.to_string(),
        what: "step id",
    })?;
    Ok((StepId::new(id), rest))
}

fn option_index<'a>(input: &'a str, command: &'static str) -> Result<(usize, &'a str), LineError> {
    let (word, rest) = split_word(input);
    if word.is_empty() {
        return Err(LineError::MissingArgument {
            command,
            what: "an option number",
        });
    }
    let number = word.parse::<usize>().map_err(|_| LineError::InvalidNumber {
        value: word.to_string(),
        what: "option number",
    })?;
    if number == 0 {
        return Err(LineError::ZeroOption);
    }
    Ok((number - 1, rest))
}

/// Drops the separating whitespace and decodes `\n` and `\\`.
fn decode_text(raw: &str) -> String {
    let raw = raw.trim_start();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
