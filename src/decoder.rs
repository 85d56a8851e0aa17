// Author: Dustin Pilgrim
// License: MIT

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::ast::{Document, Value};
use crate::parser::document::parse_page;
use crate::resolver::{FsLoader, SourceLoader};
use crate::LpmlError;

/// Knobs for a [`Decoder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Treat unrecognized lines, and lines left over after the top-level
    /// block, as errors instead of skipping them.
    pub strict: bool,
    /// Directory that absolute merge references resolve under.
    pub root: Option<PathBuf>,
}

/// Decodes LPML text into a [`Value`].
///
/// Each call builds its own [`Document`], so one decoder can serve several
/// threads at once.
pub struct Decoder {
    options: DecodeOptions,
    loader: Box<dyn SourceLoader>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").field("options", &self.options).finish_non_exhaustive()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            options: DecodeOptions::default(),
            loader: Box::new(FsLoader),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the filesystem used for `/path` merges and [`Decoder::decode_file`].
    pub fn with_loader<L: SourceLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.root = Some(root.into());
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub(crate) fn loader(&self) -> &dyn SourceLoader {
        self.loader.as_ref()
    }

    /// Decode every page of `text` and return the last page's value.
    ///
    /// # Example
    /// ```
    /// use lpml::{Decoder, Value};
    ///
    /// let value = Decoder::new().decode("name: Gesslar\nage: 10\n").unwrap();
    /// assert_eq!(value.get("age"), Some(&Value::Int(10)));
    /// ```
    pub fn decode(&self, text: &str) -> Result<Value, LpmlError> {
        self.decode_in_chain(text, Vec::new())
    }

    /// Read `path` through the decoder's loader and decode it.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<Value, LpmlError> {
        let path = path.as_ref();
        let text = self.loader.read(path).map_err(|e| {
            LpmlError::file_error(format!("Failed to read file: {}", e), path.display().to_string())
        })?;
        self.decode_in_chain(&text, vec![path.to_path_buf()])
    }

    pub(crate) fn decode_in_chain(&self, text: &str, files: Vec<PathBuf>) -> Result<Value, LpmlError> {
        let document = Document::paginate(text);
        debug!("decoding {} page(s): {:?}", document.len(), document.titles());

        let files = RefCell::new(files);
        let mut last = None;
        for page in &document.pages {
            last = Some(parse_page(self, &document, page, &files)?);
        }

        Ok(last.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decoder>();
    }

    #[test]
    fn test_builder_sets_options() {
        let decoder = Decoder::new().strict(true).root("/srv/lib");
        assert_eq!(
            decoder.options(),
            &DecodeOptions {
                strict: true,
                root: Some(PathBuf::from("/srv/lib")),
            }
        );
    }

    #[test]
    fn test_parallel_decodes() {
        let decoder = Decoder::new();
        let values: Vec<Value> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let decoder = &decoder;
                    s.spawn(move || decoder.decode(&format!("n: {}\n", i)).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (i, value) in values.iter().enumerate() {
            assert_eq!(value.get("n"), Some(&Value::Int(i as i64)));
        }
    }
}
