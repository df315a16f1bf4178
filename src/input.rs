//! Reading content snapshots exported by the store.
//!
//! Input is JSON: either one `ContentUnit` object or an array of them.
//! A path of `-` reads from stdin.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::model::ContentUnit;

/// Errors that can occur while reading content units.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input contains no content units")]
    Empty,
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum UnitsDocument {
    Many(Vec<ContentUnit>),
    One(Box<ContentUnit>),
}

/// Parse one unit or an array of units from a JSON string.
pub fn parse_units(json: &str) -> InputResult<Vec<ContentUnit>> {
    let units = match serde_json::from_str::<UnitsDocument>(json) {
        Ok(UnitsDocument::Many(units)) => units,
        Ok(UnitsDocument::One(unit)) => vec![*unit],
        // Re-parse with the concrete shape so the field error surfaces
        Err(_) if json.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<ContentUnit>>(json)?
        }
        Err(_) => vec![serde_json::from_str::<ContentUnit>(json)?],
    };

    if units.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(units)
}

/// Read units from a file, or from stdin when the path is `-`.
pub fn load_units<P: AsRef<Path>>(path: P) -> InputResult<Vec<ContentUnit>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let json = if source_name == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| InputError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: source_name.clone(),
            source,
        })?
    };

    let units = parse_units(&json)?;
    tracing::debug!(source = %source_name, count = units.len(), "loaded content units");
    Ok(units)
}
