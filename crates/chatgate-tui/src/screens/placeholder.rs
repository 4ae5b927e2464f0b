//! Pre-chat screen: the conversation placeholder above a status bar.

use crate::app::App;
use crate::conversation::{ChatPlaceholder, ViewKind};
use crate::screens::Screen;
use crate::ui::main_layout;
use crate::ui::widgets::{FormFocus, KeyHint, StatusBar};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// The placeholder screen.
pub struct PlaceholderScreen;

impl Screen for PlaceholderScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);
        let view = app.view();

        ChatPlaceholder::new(view, &app.entry_form)
            .form_width(app.config.form_width)
            .render(main_area, buf);

        let (mode, hints) = match view.kind() {
            ViewKind::Form => {
                let enter = if app.entry_form.focus() == FormFocus::Start {
                    KeyHint::new("Enter", "Start")
                } else {
                    KeyHint::new("Enter", "Next")
                };
                (
                    "Form",
                    vec![
                        KeyHint::new("Tab", "Next field"),
                        enter,
                        KeyHint::new("Esc", "Quit"),
                    ],
                )
            }
            ViewKind::Info => (
                "Info",
                vec![
                    KeyHint::new("Enter", "Start"),
                    KeyHint::new("?", "Help"),
                    KeyHint::new("q", "Quit"),
                ],
            ),
            ViewKind::Empty => ("Idle", vec![KeyHint::new("q", "Quit")]),
        };

        StatusBar::new(mode).hints(hints).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PlaceholderProps;
    use crate::test_utils::{create_test_app, create_test_app_with_props, render_screen_to_string};
    use crate::ui::widgets::start_button::START_LABEL;
    use chatgate_engine::AppInfo;

    #[test]
    fn test_form_screen() {
        let app = create_test_app();
        let screen = render_screen_to_string(&PlaceholderScreen, &app);

        assert!(screen.contains("Travel Guide"));
        assert!(screen.contains("* City"));
        assert!(screen.contains(START_LABEL));
        assert!(screen.contains(" Form "));
        assert!(screen.contains("Enter  Next"));
    }

    #[test]
    fn test_form_screen_start_focused() {
        let mut app = create_test_app();
        app.entry_form.focus_start();
        let screen = render_screen_to_string(&PlaceholderScreen, &app);
        assert!(screen.contains("Enter  Start"));
    }

    #[test]
    fn test_info_screen() {
        let app = create_test_app_with_props(PlaceholderProps {
            form_filled: true,
            user_input_form: None,
            app_info: Some(AppInfo::new("Travel Guide")),
        });
        let screen = render_screen_to_string(&PlaceholderScreen, &app);

        assert!(screen.contains("Travel Guide"));
        assert!(screen.contains(START_LABEL));
        assert!(!screen.contains("City"));
        assert!(screen.contains(" Info "));
    }

    #[test]
    fn test_empty_screen_only_has_status_bar() {
        let app = create_test_app_with_props(PlaceholderProps::default());
        let screen = render_screen_to_string(&PlaceholderScreen, &app);

        assert!(!screen.contains(START_LABEL));
        assert!(screen.contains(" Idle "));
    }
}
