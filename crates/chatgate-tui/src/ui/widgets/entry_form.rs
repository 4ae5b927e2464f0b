//! Entry form: one item per field descriptor, plus its value store.

use crate::text::truncate_to_width;
use crate::ui::layout::stack_rows;
use crate::ui::theme::Styles;
use crate::ui::widgets::text_input::TextInputState;
use chatgate_engine::{collect_values, map_fields, FieldDescriptor, FieldKind, FormValues, InputSchemaEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Placeholder shown in empty text controls ("please enter").
pub const INPUT_PLACEHOLDER: &str = "请输入";

/// Placeholder shown in select controls ("please choose").
pub const SELECT_PLACEHOLDER: &str = "请选择";

/// Marker rendered for descriptors with no known control kind.
pub const UNSUPPORTED_CONTROL: &str = "unsupported control type";

/// Which element of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// The text control of the field at this index.
    Field(usize),
    /// The start button below the form.
    Start,
}

/// Form state: derived descriptors, one text buffer per descriptor, focus.
#[derive(Debug, Clone)]
pub struct EntryFormState {
    fields: Vec<FieldDescriptor>,
    inputs: Vec<TextInputState>,
    focus: FormFocus,
}

impl EntryFormState {
    /// Create form state for a schema.
    pub fn new(schema: &[InputSchemaEntry]) -> Self {
        let mut state = Self {
            fields: Vec::new(),
            inputs: Vec::new(),
            focus: FormFocus::Start,
        };
        state.set_schema(schema);
        state
    }

    /// Replace the schema, re-deriving descriptors and clearing values.
    pub fn set_schema(&mut self, schema: &[InputSchemaEntry]) {
        self.fields = map_fields(schema);
        self.inputs = vec![TextInputState::new(); self.fields.len()];
        self.focus = self
            .focus_order()
            .first()
            .copied()
            .unwrap_or(FormFocus::Start);
    }

    /// The derived form items, in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Text state for the field at `index`.
    pub fn input(&self, index: usize) -> Option<&TextInputState> {
        self.inputs.get(index)
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Focus the start button.
    pub fn focus_start(&mut self) {
        self.focus = FormFocus::Start;
    }

    /// Text state of the focused field, if a text field has focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            FormFocus::Field(index) => self.inputs.get_mut(index),
            FormFocus::Start => None,
        }
    }

    /// Move focus to the next element, wrapping around.
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    /// Move focus to the previous element, wrapping around.
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }

    /// Editable fields in order, followed by the start button.
    fn focus_order(&self) -> Vec<FormFocus> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.kind == Some(FieldKind::Input))
            .map(|(index, _)| FormFocus::Field(index))
            .chain(std::iter::once(FormFocus::Start))
            .collect()
    }

    /// Current form-values snapshot.
    pub fn values(&self) -> FormValues {
        collect_values(&self.fields, self.inputs.iter().map(TextInputState::value))
    }

    /// Rule message to show under a field.
    ///
    /// Only edited fields report, so a fresh form shows no errors.
    pub fn error(&self, index: usize) -> Option<&str> {
        let field = self.fields.get(index)?;
        let input = self.inputs.get(index)?;
        if !input.is_touched() {
            return None;
        }
        field.validate(input.value()).err()
    }

    /// Number of rows the form occupies when rendered.
    pub fn height(&self) -> u16 {
        (0..self.fields.len())
            .map(|index| self.item_height(index))
            .fold(0, u16::saturating_add)
    }

    fn item_height(&self, index: usize) -> u16 {
        match self.fields[index].kind {
            None => 2,
            Some(_) => 3 + u16::from(self.error(index).is_some()),
        }
    }
}

/// Widget rendering every form item of an [`EntryFormState`].
pub struct EntryForm<'a> {
    state: &'a EntryFormState,
}

impl<'a> EntryForm<'a> {
    pub fn new(state: &'a EntryFormState) -> Self {
        Self { state }
    }
}

impl Widget for EntryForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heights: Vec<u16> = (0..self.state.fields.len())
            .map(|index| self.state.item_height(index))
            .collect();
        let rows = stack_rows(area, &heights);

        for (index, row) in rows.into_iter().enumerate() {
            if row.height == 0 {
                break;
            }
            render_item(self.state, index, row, buf);
        }
    }
}

fn render_item(state: &EntryFormState, index: usize, area: Rect, buf: &mut Buffer) {
    let field = &state.fields[index];
    let focused = state.focus == FormFocus::Field(index);
    let width = usize::from(area.width);

    let Some(kind) = field.kind else {
        Paragraph::new(Line::from(Span::styled(UNSUPPORTED_CONTROL, Styles::warning())))
            .render(area, buf);
        return;
    };

    let mut label = Vec::new();
    if field.required {
        label.push(Span::styled("* ", Styles::error()));
    }
    let label_text = truncate_to_width(field.label.as_deref().unwrap_or_default(), width.saturating_sub(2));
    let label_style = if focused {
        Styles::highlight()
    } else {
        Styles::default()
    };
    label.push(Span::styled(label_text, label_style));

    let rows = stack_rows(area, &[1, 1, 1]);
    Paragraph::new(Line::from(label)).render(rows[0], buf);

    match kind {
        FieldKind::Input => {
            if let Some(input) = state.inputs.get(index) {
                input
                    .widget()
                    .focused(focused)
                    .placeholder(INPUT_PLACEHOLDER)
                    .render(rows[1], buf);
            }
        }
        FieldKind::Select => {
            let line = Line::from(vec![
                Span::styled("> ", Styles::dim()),
                Span::styled(SELECT_PLACEHOLDER, Styles::dim()),
            ]);
            Paragraph::new(line).render(rows[1], buf);
        }
    }

    if let Some(message) = state.error(index) {
        let line = Line::from(Span::styled(format!("  {message}"), Styles::error()));
        Paragraph::new(line).render(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use serde_json::json;

    fn schema() -> Vec<InputSchemaEntry> {
        vec![
            InputSchemaEntry::text("name", "Name", true),
            InputSchemaEntry::Unsupported {
                kind: "paragraph".into(),
                body: json!({ "variable": "bio", "label": "Bio" }),
            },
            InputSchemaEntry::text("city", "City", false),
        ]
    }

    fn render(state: &EntryFormState) -> String {
        let area = Rect::new(0, 0, 30, state.height());
        let mut buf = Buffer::empty(area);
        EntryForm::new(state).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_initial_focus_is_first_input() {
        let state = EntryFormState::new(&schema());
        assert_eq!(state.focus(), FormFocus::Field(0));
    }

    #[test]
    fn test_focus_skips_unsupported_and_wraps() {
        let mut state = EntryFormState::new(&schema());
        state.focus_next();
        assert_eq!(state.focus(), FormFocus::Field(2));
        state.focus_next();
        assert_eq!(state.focus(), FormFocus::Start);
        state.focus_next();
        assert_eq!(state.focus(), FormFocus::Field(0));
        state.focus_prev();
        assert_eq!(state.focus(), FormFocus::Start);
    }

    #[test]
    fn test_form_without_inputs_focuses_start() {
        let state = EntryFormState::new(&[InputSchemaEntry::Unsupported {
            kind: "number".into(),
            body: json!({}),
        }]);
        assert_eq!(state.focus(), FormFocus::Start);
    }

    #[test]
    fn test_values_snapshot() {
        let mut state = EntryFormState::new(&schema());
        state.focused_input_mut().unwrap().insert_str("Ada");

        assert_eq!(
            serde_json::Value::Object(state.values()),
            json!({ "name": "Ada", "city": null })
        );
    }

    #[test]
    fn test_error_only_after_edit() {
        let mut state = EntryFormState::new(&schema());
        assert_eq!(state.error(0), None);

        let input = state.focused_input_mut().unwrap();
        input.insert('x');
        input.backspace();
        assert_eq!(state.error(0), Some("请输入"));
        assert_eq!(state.error(2), None);
    }

    #[test]
    fn test_set_schema_resets_values() {
        let mut state = EntryFormState::new(&schema());
        state.focused_input_mut().unwrap().insert_str("Ada");

        state.set_schema(&[InputSchemaEntry::text("topic", "Topic", false)]);
        assert_eq!(state.fields().len(), 1);
        assert_eq!(serde_json::Value::Object(state.values()), json!({ "topic": null }));
    }

    #[test]
    fn test_render_items() {
        let state = EntryFormState::new(&schema());
        let screen = render(&state);

        assert!(screen.contains("* Name"));
        assert!(screen.contains("> _请输入"));
        assert!(screen.contains(UNSUPPORTED_CONTROL));
        assert!(screen.contains("City"));
        assert!(!screen.contains("* City"));
    }

    #[test]
    fn test_render_shows_rule_message() {
        let mut state = EntryFormState::new(&schema());
        let input = state.focused_input_mut().unwrap();
        input.insert('x');
        input.backspace();

        assert_eq!(state.height(), 4 + 2 + 3);
        let screen = render(&state);
        assert!(screen.contains("  请输入"));
    }

    #[test]
    fn test_render_select_placeholder() {
        let mut state = EntryFormState::new(&[]);
        state.fields = vec![FieldDescriptor {
            kind: Some(FieldKind::Select),
            name: Some("tone".into()),
            label: Some("Tone".into()),
            ..FieldDescriptor::default()
        }];
        state.inputs = vec![TextInputState::new()];

        let screen = render(&state);
        assert!(screen.contains("> 请选择"));
    }
}
