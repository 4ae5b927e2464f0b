//! chatgate-engine: Headless model for the pre-chat placeholder view
//!
//! This crate provides everything the view needs that is not presentation:
//! - Input schema parsing (`user_input_form`)
//! - Field mapping from schema entries to form items
//! - Form value snapshots
//! - Application info and configuration loading

pub mod app_info;
pub mod config;
pub mod fields;
pub mod form;
pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use app_info::AppInfo;
pub use config::{Config, ConfigError};
pub use fields::{map_fields, FieldDescriptor, FieldKind, ValidationRule, REQUIRED_MESSAGE};
pub use form::{collect_values, FormValues};
pub use loader::{load_app_info, load_parameters, LoadError};
pub use schema::{AppParameters, InputSchemaEntry, TextInputControl};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
