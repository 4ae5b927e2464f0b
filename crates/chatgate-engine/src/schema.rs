//! Input schema types for the pre-chat entry form.
//!
//! An application declares the fields it wants filled before a conversation
//! starts as an ordered `user_input_form` list. Each entry is a single-key
//! object naming the control kind:
//!
//! ```json
//! { "text-input": { "variable": "city", "label": "City", "required": true } }
//! ```
//!
//! Only `text-input` is understood. Other kinds are kept verbatim as
//! [`InputSchemaEntry::Unsupported`] so the document round-trips.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Wire key for text input controls.
pub const TEXT_INPUT_KEY: &str = "text-input";

/// Application parameters document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppParameters {
    /// Opening statement shown once the conversation starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_statement: Option<String>,

    /// Fields to collect before the conversation starts.
    #[serde(default)]
    pub user_input_form: Vec<InputSchemaEntry>,
}

/// One field of the input schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub enum InputSchemaEntry {
    /// A single-line text field.
    TextInput(TextInputControl),
    /// Any control kind this crate does not map.
    Unsupported {
        /// The wire key, e.g. `select` or `paragraph`.
        kind: String,
        /// The control body as received.
        body: Value,
    },
}

/// Attributes of a `text-input` control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputControl {
    /// Form key the entered value is stored under.
    pub variable: String,

    /// Label displayed next to the control.
    pub label: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl InputSchemaEntry {
    /// Build a text-input entry.
    pub fn text(variable: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::TextInput(TextInputControl {
            variable: variable.into(),
            label: label.into(),
            required,
            ..TextInputControl::default()
        })
    }

    /// The wire key naming this entry's control kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::TextInput(_) => TEXT_INPUT_KEY,
            Self::Unsupported { kind, .. } => kind,
        }
    }
}

impl From<Map<String, Value>> for InputSchemaEntry {
    fn from(mut map: Map<String, Value>) -> Self {
        // A text-input key wins over whatever else the object carries.
        if let Some(body) = map.remove(TEXT_INPUT_KEY) {
            return match serde_json::from_value::<TextInputControl>(body.clone()) {
                Ok(control) => Self::TextInput(control),
                Err(e) => {
                    warn!(error = %e, "Malformed text-input entry, treating as unsupported");
                    Self::Unsupported {
                        kind: TEXT_INPUT_KEY.to_string(),
                        body,
                    }
                }
            };
        }

        match map.into_iter().next() {
            Some((kind, body)) => Self::Unsupported { kind, body },
            None => Self::Unsupported {
                kind: String::new(),
                body: Value::Null,
            },
        }
    }
}

impl From<InputSchemaEntry> for Map<String, Value> {
    fn from(entry: InputSchemaEntry) -> Self {
        let mut map = Map::new();
        match entry {
            InputSchemaEntry::TextInput(control) => {
                let body = serde_json::to_value(control).unwrap_or(Value::Null);
                map.insert(TEXT_INPUT_KEY.to_string(), body);
            }
            InputSchemaEntry::Unsupported { kind, body } => {
                if !kind.is_empty() {
                    map.insert(kind, body);
                }
            }
        }
        map
    }
}
