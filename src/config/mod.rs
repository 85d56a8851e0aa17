// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::Value;
use crate::decoder::Decoder;
use crate::LpmlError;

mod access;
mod conversion;
mod helpers;
mod validation;

/// A decoded LPML configuration with typed, dotted-path access.
#[derive(Debug, Clone)]
pub struct LpmlConfig {
    root: Value,
    raw_content: String, // Store for error reporting
}

impl LpmlConfig {
    /// Decode a config from a string with default options.
    pub fn from_str(content: &str) -> Result<Self, LpmlError> {
        Self::from_str_with(&Decoder::new(), content)
    }

    /// Decode a config from a string with a configured decoder.
    pub fn from_str_with(decoder: &Decoder, content: &str) -> Result<Self, LpmlError> {
        let root = decoder.decode(content)?;
        Ok(Self {
            root,
            raw_content: content.to_string(),
        })
    }

    /// Load and decode an LPML file.
    ///
    /// # Example
    /// ```ignore
    /// let config = LpmlConfig::from_file("/etc/game/player.lpml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LpmlError> {
        Self::from_file_with(&Decoder::new(), path)
    }

    /// Load and decode an LPML file with a configured decoder (root, strictness, loader).
    pub fn from_file_with<P: AsRef<Path>>(decoder: &Decoder, path: P) -> Result<Self, LpmlError> {
        let path = path.as_ref();
        let content = decoder.loader().read(path).map_err(|e| LpmlError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(306),
        })?;
        let root = decoder.decode_in_chain(&content, vec![path.to_path_buf()])?;

        Ok(Self {
            root,
            raw_content: content,
        })
    }

    /// Load a config file with fallback support.
    ///
    /// Tries the primary path first; if that file can't be read, tries the
    /// fallback path. Decode errors in the primary file are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, LpmlError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(LpmlError::FileError { code: Some(306), .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    LpmlError::FileError { message, .. } => LpmlError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(306),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Wrap an already decoded value.
    pub fn from_value(root: Value) -> Self {
        Self {
            root,
            raw_content: String::new(),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}
