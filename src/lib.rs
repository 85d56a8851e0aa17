pub mod ast;
pub mod config;
pub mod decoder;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod resolver;

use std::path::Path;

pub use ast::{Document, Mapping, Page, Value};
pub use config::LpmlConfig;
pub use decoder::{DecodeOptions, Decoder};
pub use error::LpmlError;
pub use resolver::{FsLoader, MemoryLoader, SourceLoader};

/// Decode LPML text with default options.
pub fn decode(text: &str) -> Result<Value, LpmlError> {
    Decoder::new().decode(text)
}

/// Read and decode an LPML file from the local filesystem.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Value, LpmlError> {
    Decoder::new().decode_file(path)
}
