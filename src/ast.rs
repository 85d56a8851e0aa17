// Author: Dustin Pilgrim
// License: MIT

use std::cell::Cell;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Keyed entries of a mapping. Equality ignores insertion order.
pub type Mapping = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Default for Value {
    fn default() -> Self {
        Value::Mapping(Mapping::new())
    }
}

impl Value {
    pub fn empty_mapping() -> Self {
        Value::Mapping(Mapping::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Floats, and ints widened to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        if let Value::Sequence(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        if let Value::Mapping(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// Looks up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// One `---`-delimited unit of an LPML input.
#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub source: String,
    pub(crate) result: OnceCell<Value>,
    pub(crate) resolving: Cell<bool>,
}

impl Page {
    pub fn new(title: String, source: String) -> Self {
        Self {
            title,
            source,
            result: OnceCell::new(),
            resolving: Cell::new(false),
        }
    }

    /// The memoized parse result, once the page has been parsed.
    pub fn result(&self) -> Option<&Value> {
        self.result.get()
    }
}

/// All pages of a single decode call, in input order.
#[derive(Debug, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
