//! Test utilities for chatgate-tui rendering tests.
//!
//! This module provides helper functions for creating test apps,
//! rendering screens, and converting buffers to strings for assertions.

use crate::app::{App, PlaceholderProps};
use crate::screens::Screen as ScreenTrait;
use chatgate_engine::{Config, FormValues};
use ratatui::{buffer::Buffer, layout::Rect};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with default mock data.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app for specific props that ignores starts.
pub fn create_test_app_with_props(props: PlaceholderProps) -> App {
    App::new(props, Config::default(), Box::new(|_: FormValues| {}))
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    render_screen_to_string_sized(screen, app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a screen to a buffer and return it as a string with custom dimensions.
pub fn render_screen_to_string_sized<S: ScreenTrait>(
    screen: &S,
    app: &App,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }

    #[test]
    fn test_render_screen_to_string_sized() {
        let app = create_test_app();
        let screen = render_screen_to_string_sized(&crate::screens::placeholder::PlaceholderScreen, &app, 40, 12);
        assert_eq!(screen.lines().count(), 12);
    }
}
