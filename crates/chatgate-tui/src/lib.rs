//! chatgate-tui: Terminal UI for the pre-chat placeholder view
//!
//! This crate provides the presentation layer, including:
//! - Placeholder view selection (entry form / app info / nothing)
//! - Entry form widgets and their value store
//! - Headless mode for testing and automation

mod app;
mod conversation;
mod event;
pub mod headless;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
mod ui;

use screens::Screen as ScreenTrait;

pub use app::{App, PlaceholderProps, StartConversation};
pub use conversation::ViewKind;
pub use chatgate_engine;
pub use event::{key_to_action, Action, Event, EventHandler};

use chatgate_engine::Config;
use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::debug;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the placeholder view in the terminal.
///
/// Sets up the terminal, runs the event loop until the user quits (or
/// starts the conversation with `exit_on_start` set), and restores the
/// terminal on exit. `on_start` runs once per activation of the start
/// button.
pub async fn run_tui(
    props: PlaceholderProps,
    config: Config,
    on_start: StartConversation,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(config.tick_rate_ms);
    let mut app = App::new(props, config, on_start);
    debug!(view = ?app.view().kind(), "Placeholder view ready");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            screens::placeholder::PlaceholderScreen.render(app, area, buf);

            if app.show_help {
                screens::render_help_overlay(area, buf);
            }
        })?;

        if app.should_quit {
            break;
        }

        match events.next().await {
            Some(Event::Key(key)) => {
                let action = key_to_action(key, app.is_editing());
                app.handle_action(action);
            }
            // Terminal will handle resize automatically
            Some(Event::Tick | Event::Resize(_, _)) => {}
            None => break,
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}



/// Key handling tests that drive the app the way the event loop does.
#[cfg(test)]
mod navigation_tests {
    use crate::event::key_to_action;
    use crate::test_utils::create_test_app;
    use crate::ui::widgets::FormFocus;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut crate::App, code: KeyCode) {
        let action = key_to_action(KeyEvent::new(code, KeyModifiers::NONE), app.is_editing());
        app.handle_action(action);
    }

    #[test]
    fn test_q_is_typed_into_field() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.entry_form.values()["city"], serde_json::json!("q"));
    }

    #[test]
    fn test_q_quits_from_start_button() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.entry_form.focus(), FormFocus::Start);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.starts, 0);
    }

    #[test]
    fn test_help_toggle_outside_fields() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Any key closes help without acting
        press(&mut app, KeyCode::Enter);
        assert!(!app.show_help);
        assert_eq!(app.starts, 0);
    }

    #[test]
    fn test_enter_walks_to_start() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.starts, 1);
    }
}
