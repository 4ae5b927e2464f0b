//! Field mapping from input schema entries to renderable form items.

use crate::schema::InputSchemaEntry;
use serde::{Deserialize, Serialize};

/// Message attached to the rule of a required field ("please enter").
pub const REQUIRED_MESSAGE: &str = "请输入";

/// Kind of control a form item renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Input,
    /// Renderable, but never produced by [`map_fields`].
    Select,
}

/// A single validation rule on a form item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub required: bool,
    pub message: String,
}

impl ValidationRule {
    /// The "must be non-empty" rule.
    pub fn required() -> Self {
        Self {
            required: true,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }

    /// Check a value against this rule.
    ///
    /// Returns the rule message when the value is missing or empty.
    pub fn check(&self, value: Option<&str>) -> Result<(), &str> {
        if self.required && value.is_none_or(str::is_empty) {
            return Err(&self.message);
        }
        Ok(())
    }
}

/// Renderable projection of one schema entry.
///
/// An entry of an unrecognized kind maps to the default descriptor, with
/// every field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,

    /// Form key the value is stored under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ValidationRule>,
}

impl FieldDescriptor {
    /// Derive the descriptor for a single schema entry.
    pub fn from_entry(entry: &InputSchemaEntry) -> Self {
        match entry {
            InputSchemaEntry::TextInput(control) => {
                let mut descriptor = Self {
                    kind: Some(FieldKind::Input),
                    name: Some(control.variable.clone()),
                    label: Some(control.label.clone()),
                    ..Self::default()
                };
                if control.required {
                    descriptor.required = true;
                    descriptor.rules = vec![ValidationRule::required()];
                }
                descriptor
            }
            InputSchemaEntry::Unsupported { .. } => Self::default(),
        }
    }

    /// Run every rule against a value, returning the first failure message.
    pub fn validate(&self, value: Option<&str>) -> Result<(), &str> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

/// Map an ordered schema to form items, one per entry, in the same order.
pub fn map_fields(entries: &[InputSchemaEntry]) -> Vec<FieldDescriptor> {
    entries.iter().map(FieldDescriptor::from_entry).collect()
}
