//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// When the user presses a copy keybind (`y` or `Enter`), the focused
/// component's `Copyable` implementation determines what gets copied.
pub trait Copyable: Component {
    /// Plain text for the clipboard
    ///
    /// Returns `None` if there's nothing to copy (e.g., empty list).
    fn copy_text(&self) -> Option<String>;

    /// Short description of what will be copied, for log messages
    fn copy_description(&self) -> String {
        format!("{:?}", self.id())
    }
}
