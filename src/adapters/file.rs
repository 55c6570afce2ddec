// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared file access for file-based feeders.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration file (10MB)
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a configuration file after checking that it exists and is not too large.
///
/// Errors only name the file, never the full path.
pub(crate) fn read_config_file(path: &Path, source_name: &str) -> Result<String> {
    let canonical_path = path.canonicalize().map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Invalid or inaccessible path: {}", file_name(path)),
        source: Some(Box::new(e)),
    })?;

    let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Failed to read file metadata: {}", file_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Failed to read configuration file: {}", file_name(path)),
        source: Some(Box::new(e)),
    })
}

/// Resolves `filename` inside the OS-appropriate configuration directory.
pub(crate) fn default_location(
    app_name: &str,
    qualifier: &str,
    filename: &str,
    source_name: &str,
) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(filename))
}

/// Returns the final path component for error messages.
pub(crate) fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}
