use crate::core::command::Command;
use crate::error::Error;
use std::fs;
use std::path::Path;

/// Parses a YAML sequence of commands. JSON input works too.
pub fn parse_script(source: &str) -> Result<Vec<Command>, serde_yaml::Error> {
    serde_yaml::from_str(source)
}

pub fn load_script(path: &Path) -> Result<Vec<Command>, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let commands = parse_script(&source).map_err(|source| Error::Script {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = commands.len(), "script loaded");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::parse_script;
    use crate::core::command::Command;
    use crate::core::step::StepId;

    #[test]
    fn parses_yaml_sequence() {
        let script = "\
- op: add_step
- op: set_content
  id: 1
  text: Do X
- op: add_option
  id: 1
- op: set_option
  id: 1
  index: 0
  text: \"Yes\"
- op: generate
";
        let commands = parse_script(script).expect("script");
        assert_eq!(
            commands,
            vec![
                Command::AddStep,
                Command::SetContent {
                    id: StepId::new(1),
                    text: "Do X".to_string(),
                },
                Command::AddOption { id: StepId::new(1) },
                Command::SetOption {
                    id: StepId::new(1),
                    index: 0,
                    text: "Yes".to_string(),
                },
                Command::Generate,
            ]
        );
    }

    #[test]
    fn accepts_json_array() {
        let commands =
            parse_script(r#"[{"op":"add_step"},{"op":"remove_step","id":1}]"#).expect("script");
        assert_eq!(
            commands,
            vec![Command::AddStep, Command::RemoveStep { id: StepId::new(1) }]
        );
    }

    #[test]
    fn rejects_unknown_op() {
        assert!(parse_script("- op: launch").is_err());
    }
}
