//! The button that starts the conversation.

use crate::text::visual_width;
use crate::ui::theme::Styles;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Label of the start button ("start conversation").
pub const START_LABEL: &str = "开始对话";

/// Single-row primary button.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartButton {
    focused: bool,
    /// Fill the full width instead of hugging the label.
    block: bool,
}

impl StartButton {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Cells the button needs when not in block mode.
    #[allow(clippy::cast_possible_truncation)]
    pub fn width() -> u16 {
        (visual_width(START_LABEL) + 6) as u16
    }
}

impl Widget for StartButton {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let style = if self.focused {
            Styles::button_focused()
        } else {
            Styles::button()
        };

        let width = if self.block {
            area.width
        } else {
            Self::width().min(area.width)
        };
        let x = area.x + (area.width - width) / 2;
        let row = Rect::new(x, area.y, width, 1);
        buf.set_style(row, style);

        let label = format!("> {START_LABEL}");
        let label_width = visual_width(&label) as u16;
        let label_x = row.x + row.width.saturating_sub(label_width) / 2;
        buf.set_stringn(label_x, row.y, &label, usize::from(row.width), style);
    }
}
