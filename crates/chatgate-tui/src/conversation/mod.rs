//! Conversation area module.
//!
//! Before the first message the conversation area holds a placeholder:
//! the entry form or the application info, each with a start button.

mod placeholder;

pub use placeholder::{ChatPlaceholder, ViewKind, ViewState};
