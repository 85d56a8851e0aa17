// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use crate::{LpmlError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> LpmlError {
    LpmlError::TypeError {
        message: format!("Expected {}, got {} {:?}", expected, value.kind(), value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

fn out_of_range(n: i64, target: &str, code: u32) -> LpmlError {
    LpmlError::TypeError {
        message: format!("Number {} out of range for {}", n, target),
        line: 0,
        hint: Some(format!("Use a value that fits in {}", target)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Use a string value in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            _ => Err(type_error("integer", &value, "Use a whole number (decimal or 0x hex)", 403)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        i32::try_from(n).map_err(|_| out_of_range(n, "i32", 407))
    }
}

impl TryFrom<Value> for u8 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u8::try_from(n).map_err(|_| out_of_range(n, "u8", 407))
    }
}

impl TryFrom<Value> for u16 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u16::try_from(n).map_err(|_| out_of_range(n, "u16", 407))
    }
}

impl TryFrom<Value> for u32 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n).map_err(|_| out_of_range(n, "u32", 407))
    }
}

impl TryFrom<Value> for u64 {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u64::try_from(n).map_err(|_| out_of_range(n, "u64", 407))
    }
}

impl TryFrom<Value> for usize {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        usize::try_from(n).map_err(|_| out_of_range(n, "usize", 407))
    }
}

impl TryFrom<Value> for bool {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(ref s) if s.to_lowercase() == "true" || s.to_lowercase() == "false" => {
                Err(LpmlError::TypeError {
                    message: format!("Invalid boolean value '{}'. Booleans are lowercase", s),
                    line: 0,
                    hint: Some("Use true/false or yes/no".into()),
                    code: Some(404),
                })
            }
            _ => Err(type_error("boolean", &value, "Use true/false or yes/no", 404)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = LpmlError>,
{
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(type_error("sequence", &value, "Use a `- item` list or [a, b] in your config", 405)),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = LpmlError>,
{
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(entries) => Ok(entries.into_iter().collect()),
            _ => Err(type_error("mapping", &value, "Use a `key:` block or {k: v} in your config", 406)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = LpmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k, String::try_from(v)?)))
                .collect(),
            _ => Err(type_error("mapping", &value, "Use a block with string values", 406)),
        }
    }
}
