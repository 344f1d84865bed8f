use letterbook_core::{IndexOutOfRange, InvalidItemError, LoadError};
use std::path::Path;

use crate::operations::ValidationError;

/// Map a failed run to user-friendly messages
/// Returns (title, message, details)
pub fn map_run_error(error: &anyhow::Error, path: Option<&Path>) -> (String, String, String) {
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in fruit list".to_string());

    if let Some(load_error) = error.downcast_ref::<LoadError>() {
        map_load_error(load_error, &source)
    } else if let Some(invalid) = error.downcast_ref::<InvalidItemError>() {
        (
            "Invalid Item".to_string(),
            "The item list contains an empty entry.".to_string(),
            format!(
                "Entry #{} in {} is empty.\n\nRemove it or rerun with --skip-empty.",
                invalid.position + 1,
                source
            ),
        )
    } else if let Some(out_of_range) = error.downcast_ref::<IndexOutOfRange>() {
        (
            "Selection Out Of Range".to_string(),
            "The selected row does not exist.".to_string(),
            out_of_range.to_string(),
        )
    } else if let Some(validation) = error.downcast_ref::<ValidationError>() {
        (
            "Invalid Argument".to_string(),
            format!("Invalid value for --{}.", validation.field),
            validation.message.clone(),
        )
    } else {
        (
            "Error".to_string(),
            "Failed to build the index.".to_string(),
            format!("{:#}", error),
        )
    }
}

fn map_load_error(error: &LoadError, source: &str) -> (String, String, String) {
    match error {
        LoadError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                source
            ),
        ),
        LoadError::Io(io) if io.kind() == std::io::ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", source),
        ),
        LoadError::Io(io) => (
            "Error Loading File".to_string(),
            "Failed to read the item list.".to_string(),
            io.to_string(),
        ),
        LoadError::Json(json) => (
            "Invalid Item List".to_string(),
            "The file is not a JSON list of strings.".to_string(),
            format!(
                "{}\n\nExpected [\"Apple\", ...] or {{\"items\": [\"Apple\", ...]}}.",
                json
            ),
        ),
    }
}
