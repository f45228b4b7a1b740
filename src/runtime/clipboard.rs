use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{self, Write};

pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> io::Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        (**self).copy_text(text)
    }
}

/// Asks the hosting terminal to set the system clipboard (OSC 52).
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stderr> {
    /// Stderr keeps the escape out of piped stdout.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        let encoded = STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{encoded}\x07")?;
        self.out.flush()
    }
}

/// Keeps copied texts in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copies: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copies(&self) -> &[String] {
        self.copies.as_slice()
    }

    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        self.copies.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clipboard, MemoryClipboard, Osc52Clipboard};

    #[test]
    fn osc52_wraps_base64_payload() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy_text("[]").expect("write");
        let written = String::from_utf8(clipboard.into_inner()).expect("utf8");
        assert_eq!(written, "\x1b]52;c;W10=\x07");
    }

    #[test]
    fn memory_clipboard_records_copies() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy_text("a").expect("copy");
        clipboard.copy_text("b").expect("copy");
        assert_eq!(clipboard.copies(), &["a".to_string(), "b".to_string()]);
        assert_eq!(clipboard.last(), Some("b"));
    }
}
