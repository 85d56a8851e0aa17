// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::Value;
use crate::LpmlError;

/// Export a decoded LPML value to pretty-printed JSON.
///
/// Mappings become JSON objects in source order, sequences become arrays and
/// `null` stays `null`. Non-finite floats have no JSON form and are written as
/// `null` by `serde_json`.
///
/// # Examples
/// ```
/// let value = lpml::decode("name: hero\nitems:\n  - sword\n").unwrap();
/// let json = lpml::export::to_json(&value).unwrap();
/// assert!(json.contains("\"sword\""));
/// ```
pub fn to_json(value: &Value) -> Result<String, LpmlError> {
    serde_json::to_string_pretty(value).map_err(|e| LpmlError::ExportError {
        message: format!("Failed to serialize value to JSON: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Decode an LPML file and export the result to JSON.
///
/// # Examples
/// ```no_run
/// use lpml::export::export_lpml_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_lpml_file("player.lpml")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file can't be read or doesn't decode.
pub fn export_lpml_file<P: AsRef<Path>>(path: P) -> Result<String, LpmlError> {
    let value = crate::decode_file(path)?;
    to_json(&value)
}
