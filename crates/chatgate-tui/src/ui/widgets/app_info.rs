//! Application info panel.

use crate::text::{truncate_to_width, wrap_text};
use crate::ui::theme::Styles;
use chatgate_engine::AppInfo;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered panel describing the chat application.
pub struct AppInfoPanel<'a> {
    info: &'a AppInfo,
}

impl<'a> AppInfoPanel<'a> {
    pub fn new(info: &'a AppInfo) -> Self {
        Self { info }
    }

    /// Lines rendered inside the border for a given inner width.
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            truncate_to_width(&self.info.name, width),
            Styles::highlight(),
        ))];

        if !self.info.description.is_empty() {
            lines.push(Line::from(""));
            lines.extend(
                wrap_text(&self.info.description, width)
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line, Styles::default()))),
            );
        }

        if !self.info.tags.is_empty() {
            lines.push(Line::from(""));
            let tags: Vec<Span<'static>> = self
                .info
                .tags
                .iter()
                .flat_map(|tag| [Span::styled(format!("#{tag}"), Styles::active()), Span::raw(" ")])
                .collect();
            lines.push(Line::from(tags));
        }

        lines
    }

    /// Rows needed to render the panel at the given outer width.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(2));
        (self.lines(inner).len() as u16).saturating_add(2)
    }
}

impl Widget for AppInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(usize::from(inner.width)))
            .alignment(Alignment::Center)
            .style(Styles::default())
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn travel_info() -> AppInfo {
        AppInfo {
            name: "Travel Guide".into(),
            description: "Plans trips around the world".into(),
            tags: vec!["travel".into(), "chat".into()],
        }
    }

    #[test]
    fn test_panel_height() {
        let info = travel_info();
        // name, blank, one description line, blank, tags, plus borders
        assert_eq!(AppInfoPanel::new(&info).height(40), 7);
        assert_eq!(AppInfoPanel::new(&AppInfo::new("Bot")).height(40), 3);
    }

    #[test]
    fn test_panel_renders_metadata() {
        let info = travel_info();
        let panel = AppInfoPanel::new(&info);
        let area = Rect::new(0, 0, 40, panel.height(40));
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        assert!(screen.contains("Travel Guide"));
        assert!(screen.contains("Plans trips around the world"));
        assert!(screen.contains("#travel #chat"));
    }
}
