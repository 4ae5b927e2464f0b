//! Placeholder shown in the conversation area before a conversation starts.
//!
//! Depending on the inputs it shows the entry form (when the application
//! declares fields that have not been filled yet), the application info
//! panel, or nothing.
//!
//! ```text
//!              Travel Guide
//!
//!   * City
//!   > _请输入
//!
//!             > 开始对话
//! ```

use chatgate_engine::{AppInfo, InputSchemaEntry};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::ui::layout::{centered_fixed, stack_rows};
use crate::ui::theme::Styles;
use crate::ui::widgets::{AppInfoPanel, EntryForm, EntryFormState, FormFocus, StartButton};

/// Widest the info panel grows.
const INFO_MAX_WIDTH: u16 = 60;

/// Which of the three placeholder displays is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    /// Entry form, titled with the application name when known.
    Form { title: Option<&'a str> },
    /// Application info panel.
    Info(&'a AppInfo),
    /// Nothing to show.
    Empty,
}

/// Discriminant of [`ViewState`], for callers that only need the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Form,
    Info,
    Empty,
}

impl<'a> ViewState<'a> {
    /// Pick the display for one render.
    ///
    /// The form wins while it is unfilled and has at least one entry; the
    /// info panel is the fallback; with neither, nothing renders.
    pub fn select(
        form_filled: bool,
        user_input_form: Option<&[InputSchemaEntry]>,
        app_info: Option<&'a AppInfo>,
    ) -> Self {
        let has_entries = user_input_form.is_some_and(|form| !form.is_empty());
        if !form_filled && has_entries {
            return Self::Form {
                title: app_info.map(|info| info.name.as_str()),
            };
        }
        match app_info {
            Some(info) => Self::Info(info),
            None => Self::Empty,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Form { .. } => ViewKind::Form,
            Self::Info(_) => ViewKind::Info,
            Self::Empty => ViewKind::Empty,
        }
    }
}

/// Widget rendering the selected placeholder display.
pub struct ChatPlaceholder<'a> {
    view: ViewState<'a>,
    form: &'a EntryFormState,
    form_width: u16,
}

impl<'a> ChatPlaceholder<'a> {
    pub fn new(view: ViewState<'a>, form: &'a EntryFormState) -> Self {
        Self {
            view,
            form,
            form_width: 48,
        }
    }

    /// Set the width of the form column.
    #[must_use]
    pub fn form_width(mut self, width: u16) -> Self {
        self.form_width = width;
        self
    }
}

impl Widget for ChatPlaceholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view {
            ViewState::Form { title } => render_form(self.form, title, self.form_width, area, buf),
            ViewState::Info(info) => render_info(info, area, buf),
            ViewState::Empty => {}
        }
    }
}

fn render_form(
    form: &EntryFormState,
    title: Option<&str>,
    form_width: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    let width = form_width.min(area.width);
    let title_height = if title.is_some() { 2 } else { 0 };
    let heights = [title_height, form.height(), 1, 1];
    let total = heights.iter().fold(0, |acc: u16, h| acc.saturating_add(*h));

    let column = centered_fixed(width, total, area);
    let rows = stack_rows(column, &heights);

    if let Some(title) = title {
        let title = truncate_to_width(title, usize::from(width));
        Paragraph::new(Line::from(Span::styled(title, Styles::highlight())))
            .alignment(Alignment::Center)
            .render(rows[0], buf);
    }

    EntryForm::new(form).render(rows[1], buf);

    StartButton::new()
        .block(true)
        .focused(form.focus() == FormFocus::Start)
        .render(rows[3], buf);
}

fn render_info(info: &AppInfo, area: Rect, buf: &mut Buffer) {
    let width = area.width.saturating_sub(8).min(INFO_MAX_WIDTH);
    let panel = AppInfoPanel::new(info);
    let heights = [panel.height(width), 1, 1];
    let total = heights.iter().fold(0, |acc: u16, h| acc.saturating_add(*h));

    let column = centered_fixed(width, total, area);
    let rows = stack_rows(column, &heights);

    panel.render(rows[0], buf);
    StartButton::new().focused(true).render(rows[2], buf);
}
