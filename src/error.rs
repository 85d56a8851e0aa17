// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

fn code_suffix(code: &Option<u32>) -> String {
    code.map_or(String::new(), |c| format!(" Code: {}", c))
}

/// The main error type for LPML decoding and typed access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpmlError {
    /// Raised in strict mode for lines the parser cannot place.
    #[error("[LPML] Syntax Error in page '{page}' at line {line}: {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    SyntaxError {
        message: String,
        page: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a line cannot be combined with the block it sits in.
    #[error("[LPML] Structural Error in page '{page}' at line {line}: {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    StructuralError {
        message: String,
        page: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a merge names a page that does not exist or loops back on itself.
    #[error("[LPML] Reference Error '{reference}': {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    ReferenceError {
        reference: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[LPML] File Error '{path}': {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a decoded value can't be converted to the requested type.
    #[error("[LPML] Type Error{}: {message}{}{}", line_suffix(.line), hint_suffix(.hint), code_suffix(.code))]
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[LPML] Validation Error{}: {message}{}{}", line_suffix(.line), hint_suffix(.hint), code_suffix(.code))]
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a decoded value can't be written out by `export`.
    #[error("[LPML] Export Error: {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a lookup path does not exist in the decoded value.
    #[error("[LPML] Path Error '{path}': {message}{}", hint_suffix(.hint))]
    PathError {
        message: String,
        path: String,
        hint: Option<String>,
    },
}

fn line_suffix(line: &usize) -> String {
    if *line > 0 {
        format!(" at line {}", line)
    } else {
        String::new()
    }
}

impl LpmlError {
    pub fn code(&self) -> Option<u32> {
        match self {
            LpmlError::SyntaxError { code, .. }
            | LpmlError::StructuralError { code, .. }
            | LpmlError::ReferenceError { code, .. }
            | LpmlError::FileError { code, .. }
            | LpmlError::TypeError { code, .. }
            | LpmlError::ValidationError { code, .. }
            | LpmlError::ExportError { code, .. } => *code,
            LpmlError::PathError { .. } => None,
        }
    }

    /// Helper for file-related errors when loading decode targets or merge sources.
    pub fn file_error(message: String, path: String) -> Self {
        LpmlError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location_hint_and_code() {
        let err = LpmlError::StructuralError {
            message: "cannot merge a sequence into a mapping".into(),
            page: "0".into(),
            line: 3,
            hint: Some("Merge mappings into mappings".into()),
            code: Some(203),
        };
        let text = err.to_string();
        assert_eq!(
            text,
            "[LPML] Structural Error in page '0' at line 3: cannot merge a sequence into a mapping Hint: Merge mappings into mappings Code: 203"
        );
    }

    #[test]
    fn test_type_error_without_line() {
        let err = LpmlError::TypeError {
            message: "Expected int, got string".into(),
            line: 0,
            hint: None,
            code: Some(402),
        };
        assert_eq!(err.to_string(), "[LPML] Type Error: Expected int, got string Code: 402");
        assert_eq!(err.code(), Some(402));
    }

    #[test]
    fn test_export_error_display() {
        let err = LpmlError::ExportError {
            message: "key must be a string".into(),
            hint: None,
            code: Some(500),
        };
        assert_eq!(err.to_string(), "[LPML] Export Error: key must be a string Code: 500");
        assert_eq!(err.code(), Some(500));
    }
}
