use crate::core::step::Step;
use crate::core::step_list::StepList;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

pub fn step_list_lines(steps: &StepList) -> Vec<SpanLine> {
    if steps.is_empty() {
        return vec![vec![Span::styled(
            "no steps yet, `add` creates one",
            Style::new().color(Color::DarkGrey),
        )]];
    }

    let mut lines = Vec::new();
    for (idx, step) in steps.steps().iter().enumerate() {
        if idx > 0 {
            lines.push(Vec::new());
        }
        push_step(&mut lines, step);
    }
    lines
}

fn push_step(lines: &mut Vec<SpanLine>, step: &Step) {
    let id_label = format!("  #{}", step.id);
    let width = UnicodeWidthStr::width(step.title.as_str()) + id_label.len();
    lines.push(vec![
        Span::styled(step.title.clone(), Style::new().bold()),
        Span::styled(id_label, Style::new().color(Color::DarkGrey)),
    ]);
    lines.push(vec![Span::styled(
        "─".repeat(width),
        Style::new().color(Color::DarkGrey),
    )]);

    let mut content = step.content.lines();
    let first = content.next().unwrap_or_default();
    lines.push(vec![label("Content"), Span::new(first.to_string())]);
    for more in content {
        lines.push(vec![Span::new(format!("{:11}{more}", ""))]);
    }

    lines.push(vec![label("Statement"), Span::new(step.statement.clone())]);

    for (idx, option) in step.options.iter().enumerate() {
        lines.push(vec![
            Span::styled(
                format!("  Option {}: ", idx + 1),
                Style::new().color(Color::Yellow),
            ),
            Span::new(option.clone()),
        ]);
    }
}

fn label(name: &str) -> Span {
    Span::styled(format!("{:11}", format!("{name}:")), Style::new().color(Color::Cyan))
}

/// Shown after `generate`.
pub fn generated_lines(json: &str) -> Vec<SpanLine> {
    let mut lines = vec![vec![Span::styled(
        "Generated JSON:",
        Style::new().color(Color::Green).bold(),
    )]];
    lines.extend(json.lines().map(|line| vec![Span::new(line.to_string())]));
    lines
}

#[cfg(test)]
mod tests {
    use super::{generated_lines, step_list_lines};
    use crate::core::step::StepId;
    use crate::core::step_list::StepList;
    use crate::ui::span::plain_text;

    fn rendered(steps: &StepList) -> Vec<String> {
        step_list_lines(steps)
            .iter()
            .map(|line| plain_text(line))
            .collect()
    }

    #[test]
    fn empty_list_shows_hint() {
        let lines = rendered(&StepList::new());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("add"));
    }

    #[test]
    fn step_shows_fields_and_numbered_options() {
        let mut steps = StepList::new();
        let id = steps.append_step();
        steps.set_content(id, "Do X\nthen Y");
        steps.set_statement(id, "Confirm?");
        steps.add_option(id);
        steps.set_option(id, 0, "Yes");

        let lines = rendered(&steps);
        assert_eq!(lines[0], "Step 1  #1");
        assert_eq!(lines[1].chars().count(), "Step 1  #1".len());
        assert_eq!(lines[2], "Content:   Do X");
        assert_eq!(lines[3], "           then Y");
        assert_eq!(lines[4], "Statement: Confirm?");
        assert_eq!(lines[5], "  Option 1: Yes");
    }

    #[test]
    fn steps_are_separated_by_blank_line() {
        let mut steps = StepList::new();
        steps.append_step();
        steps.append_step();
        steps.remove_step(StepId::new(3));

        let lines = rendered(&steps);
        let blank = lines.iter().position(String::is_empty).expect("separator");
        assert_eq!(lines[blank + 1], "Step 2  #2");
    }

    #[test]
    fn generated_block_has_header() {
        let lines: Vec<String> = generated_lines("[]").iter().map(|l| plain_text(l)).collect();
        assert_eq!(lines, vec!["Generated JSON:".to_string(), "[]".to_string()]);
    }
}
