//! Reusable widgets for the chatgate TUI.

pub mod app_info;
pub mod entry_form;
pub mod start_button;
pub mod status_bar;
pub mod text_input;

pub use app_info::AppInfoPanel;
pub use entry_form::{EntryForm, EntryFormState, FormFocus};
pub use start_button::StartButton;
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::TextInputState;
