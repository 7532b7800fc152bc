//! Clipboard capability for copying text
//!
//! Rows never touch the platform clipboard directly; they are handed a
//! [`ClipboardWriter`] at activation time. The system implementation uses the
//! `arboard` crate for cross-platform support (Windows, macOS, Linux) and is
//! created fresh on each write to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Something that can receive copied text
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`
    fn write(&self, text: &str) -> Result<()>;
}

/// The platform clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn write(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for std::rc::Rc<T> {
    fn write(&self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// In-memory clipboard that remembers the last write
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: std::cell::RefCell<Option<String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl ClipboardWriter for MemoryClipboard {
    fn write(&self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Clipboard that always fails, for exercising the silent-failure path
#[cfg(test)]
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

#[cfg(test)]
impl ClipboardWriter for UnavailableClipboard {
    fn write(&self, _text: &str) -> Result<()> {
        anyhow::bail!("no display server")
    }
}
