//! Form values handed to the start-conversation callback.

use crate::fields::FieldDescriptor;
use serde_json::{Map, Value};

/// Snapshot of the entry form, keyed by field name in form order.
///
/// A field that was never edited holds `null`.
pub type FormValues = Map<String, Value>;

/// Build a snapshot from descriptors and the raw text of each control.
///
/// `inputs` is index-aligned with `fields`. Descriptors without a name
/// contribute nothing. Fields sharing a name share one slot: it sits at the
/// first occurrence and holds the first value that was entered.
pub fn collect_values<'a, I>(fields: &[FieldDescriptor], inputs: I) -> FormValues
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut values = FormValues::new();
    for (field, input) in fields.iter().zip(inputs) {
        let Some(name) = &field.name else {
            continue;
        };
        let value = input.map_or(Value::Null, |text| Value::String(text.to_string()));
        match values.get_mut(name) {
            Some(slot) if slot.is_null() => *slot = value,
            Some(_) => {}
            None => {
                values.insert(name.clone(), value);
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::map_fields;
    use crate::schema::InputSchemaEntry;
    use serde_json::json;

    #[test]
    fn test_collect_values_keeps_form_order() {
        let fields = map_fields(&[
            InputSchemaEntry::text("name", "Name", true),
            InputSchemaEntry::text("city", "City", false),
        ]);

        let values = collect_values(&fields, [Some("Ada"), None]);
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["name", "city"]);
        assert_eq!(serde_json::Value::Object(values), json!({ "name": "Ada", "city": null }));
    }

    #[test]
    fn test_unnamed_fields_are_skipped() {
        let fields = map_fields(&[
            InputSchemaEntry::Unsupported {
                kind: "number".into(),
                body: json!({}),
            },
            InputSchemaEntry::text("city", "City", false),
        ]);

        let values = collect_values(&fields, [Some("ignored"), Some("")]);
        assert_eq!(values.len(), 1);
        assert_eq!(values["city"], json!(""));
    }

    #[test]
    fn test_repeated_name_keeps_entered_value() {
        let fields = map_fields(&[
            InputSchemaEntry::text("city", "City", true),
            InputSchemaEntry::text("days", "Days", false),
            InputSchemaEntry::text("city", "City again", false),
        ]);

        let values = collect_values(&fields, [Some("Paris"), None, None]);
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["city", "days"]);
        assert_eq!(values["city"], json!("Paris"));

        let values = collect_values(&fields, [None, None, Some("Rome")]);
        assert_eq!(values["city"], json!("Rome"));
    }
}
