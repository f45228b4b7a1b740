use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

/// Writes lines to `out`, with ANSI styling only when `color` is set.
pub fn write_lines<W: Write>(out: &mut W, lines: &[SpanLine], color: bool) -> io::Result<()> {
    for line in lines {
        for span in line {
            let styled = color && !span.style.is_plain();
            if styled {
                if let Some(fg) = span.style.color {
                    queue!(out, SetForegroundColor(map_color(fg)))?;
                }
                if span.style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
            }

            queue!(out, Print(span.text.as_str()))?;

            if styled {
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Cyan => crossterm::style::Color::Cyan,
    }
}
