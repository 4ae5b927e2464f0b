//! Loading application documents from disk.

use crate::app_info::AppInfo;
use crate::schema::AppParameters;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading an application document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load an application-parameters document.
pub fn load_parameters(path: &Path) -> Result<AppParameters, LoadError> {
    load_json(path)
}

/// Load an application-info document.
pub fn load_app_info(path: &Path) -> Result<AppInfo, LoadError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
