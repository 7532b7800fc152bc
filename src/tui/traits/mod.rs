//! Component trait system
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render, scroll or copy for every panel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │        (orchestrator: routes events, owns components)       │
//! └─────────────────────────────────────────────────────────────┘
//!                     │                       │
//!                     ▼                       ▼
//!           ┌──────────────────┐       ┌──────────┐
//!           │ TranslationList  │       │   Logs   │
//!           │  (row pool)      │       │  Panel   │
//!           └──────────────────┘       └──────────┘
//! ```
//!
//! Rows inside the list are plain views drawn by the list, not components.
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] / [`Selectable`] - scroll state and item selection
//! - [`Copyable`] - clipboard content
//! - [`Interactive`] - keyboard input

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
