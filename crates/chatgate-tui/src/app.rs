//! Application state and update logic for the chatgate TUI.

use crate::conversation::{ViewKind, ViewState};
use crate::event::Action;
use crate::ui::widgets::{EntryFormState, FormFocus};
use chatgate_engine::{AppInfo, AppParameters, Config, FormValues, InputSchemaEntry};
use tracing::info;

/// Callback run when the user starts the conversation.
pub type StartConversation = Box<dyn FnMut(FormValues) + Send>;

/// Inputs of the placeholder view, supplied by the hosting chat page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderProps {
    /// Whether the entry form has already been filled.
    pub form_filled: bool,
    /// Fields the application asks for; `None` when it declares none.
    pub user_input_form: Option<Vec<InputSchemaEntry>>,
    pub app_info: Option<AppInfo>,
}

impl PlaceholderProps {
    /// Build props from a parameters document and optional info.
    pub fn from_parameters(params: AppParameters, app_info: Option<AppInfo>) -> Self {
        Self {
            form_filled: false,
            user_input_form: Some(params.user_input_form),
            app_info,
        }
    }

    /// The display these props select.
    pub fn view(&self) -> ViewState<'_> {
        ViewState::select(
            self.form_filled,
            self.user_input_form.as_deref(),
            self.app_info.as_ref(),
        )
    }
}

/// Main application state.
pub struct App {
    props: PlaceholderProps,
    /// Entry form state derived from `props.user_input_form`.
    pub entry_form: EntryFormState,
    pub config: Config,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Number of times the conversation was started.
    pub starts: usize,
    on_start_conversation: StartConversation,
}

impl App {
    /// Create a new app instance.
    pub fn new(props: PlaceholderProps, config: Config, on_start: StartConversation) -> Self {
        let entry_form = EntryFormState::new(props.user_input_form.as_deref().unwrap_or_default());
        Self {
            props,
            entry_form,
            config,
            show_help: false,
            should_quit: false,
            starts: 0,
            on_start_conversation: on_start,
        }
    }

    /// Create an app with a single required field and info, discarding starts.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let props = PlaceholderProps {
            form_filled: false,
            user_input_form: Some(vec![InputSchemaEntry::text("city", "City", true)]),
            app_info: Some(AppInfo::new("Travel Guide")),
        };
        Self::new(props, Config::default(), Box::new(|_: FormValues| {}))
    }

    pub fn props(&self) -> &PlaceholderProps {
        &self.props
    }

    /// Replace the props, re-deriving the form only if the schema changed.
    pub fn set_props(&mut self, props: PlaceholderProps) {
        if props.user_input_form != self.props.user_input_form {
            self.entry_form
                .set_schema(props.user_input_form.as_deref().unwrap_or_default());
        }
        self.props = props;
    }

    /// The display selected for the current props.
    pub fn view(&self) -> ViewState<'_> {
        self.props.view()
    }

    /// Whether keystrokes go to a text field.
    pub fn is_editing(&self) -> bool {
        self.view().kind() == ViewKind::Form
            && !self.show_help
            && matches!(self.entry_form.focus(), FormFocus::Field(_))
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            Action::None => return,
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.view().kind() {
            ViewKind::Form => self.handle_form_action(action),
            ViewKind::Info => {
                if action == Action::Submit {
                    self.start_conversation();
                }
            }
            ViewKind::Empty => {}
        }
    }

    fn handle_form_action(&mut self, action: Action) {
        match action {
            Action::NextField => self.entry_form.focus_next(),
            Action::PrevField => self.entry_form.focus_prev(),
            Action::Submit => {
                if self.entry_form.focus() == FormFocus::Start {
                    self.start_conversation();
                } else {
                    self.entry_form.focus_next();
                }
            }
            _ => {
                if let Some(input) = self.entry_form.focused_input_mut() {
                    match action {
                        Action::Input(c) => input.insert(c),
                        Action::Backspace => input.backspace(),
                        Action::Delete => input.delete(),
                        Action::Left => input.move_left(),
                        Action::Right => input.move_right(),
                        Action::Home => input.move_home(),
                        Action::End => input.move_end(),
                        _ => {}
                    }
                }
            }
        }
    }

    /// Hand the current form values to the start callback.
    ///
    /// Required fields left empty do not block the call. The info view has
    /// no form on screen and always passes an empty map. Afterwards the
    /// form counts as filled, so the view falls back to the info panel.
    pub fn start_conversation(&mut self) {
        let values = match self.view().kind() {
            ViewKind::Form => self.entry_form.values(),
            ViewKind::Info => FormValues::new(),
            ViewKind::Empty => return,
        };
        info!(fields = values.len(), "Starting conversation");
        (self.on_start_conversation)(values);

        self.starts += 1;
        self.props.form_filled = true;
        if self.config.exit_on_start {
            self.should_quit = true;
        }
    }
}
