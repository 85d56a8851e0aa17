// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::ast::{Document, Value};
use crate::parser::document::parse_page;
use crate::parser::Parser;
use crate::LpmlError;

/// Host access to files named by absolute merge references.
pub trait SourceLoader: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads merge sources from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// In-memory file table, for hosts that keep their sources elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    files: IndexMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, text: S) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, text: S) {
        self.files.insert(path.into(), text.into());
    }
}

impl SourceLoader for MemoryLoader {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} is not loaded", path.display())))
    }
}

/// Map an absolute merge reference onto the host filesystem.
///
/// With a root, `/a/b.lpml` becomes `<root>/a/b.lpml`; a root starting with
/// `~/` is expanded against the home directory.
pub fn resolve_file_path(reference: &str, root: Option<&Path>) -> Result<PathBuf, LpmlError> {
    let Some(root) = root else {
        return Ok(PathBuf::from(reference));
    };

    let root = match root.to_str().and_then(|r| r.strip_prefix("~/")) {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| LpmlError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: root.display().to_string(),
                hint: Some("Set HOME or use an absolute root directory".into()),
                code: Some(305),
            })?;
            home.join(rest)
        }
        None => root.to_path_buf(),
    };

    Ok(root.join(reference.trim_start_matches('/')))
}

impl Parser<'_> {
    /// Resolve a merge reference: `/path` names a file, anything else a page title.
    pub(crate) fn inherit(&self, reference: &str) -> Result<Value, LpmlError> {
        if reference.starts_with('/') {
            self.inherit_file(reference)
        } else {
            self.inherit_page(reference)
        }
    }

    fn inherit_page(&self, title: &str) -> Result<Value, LpmlError> {
        let page = self.document.page(title).ok_or_else(|| LpmlError::ReferenceError {
            reference: title.to_string(),
            message: "No such inherited LPML page".into(),
            hint: Some(format!("Known pages: {}", self.document.titles().join(", "))),
            code: Some(301),
        })?;

        debug!("page '{}' merges page '{}'", self.page, title);
        parse_page(self.decoder, self.document, page, self.files)
    }

    fn inherit_file(&self, reference: &str) -> Result<Value, LpmlError> {
        let path = resolve_file_path(reference, self.decoder.options().root.as_deref())?;
        let loader = self.decoder.loader();

        if !loader.exists(&path) {
            return Err(LpmlError::FileError {
                message: "No such inherited file".into(),
                path: path.display().to_string(),
                hint: Some("Check the merge path and the decoder root".into()),
                code: Some(302),
            });
        }

        if self.files.borrow().contains(&path) {
            return Err(LpmlError::ReferenceError {
                reference: reference.to_string(),
                message: "Circular merge: file is already being decoded".into(),
                hint: Some("Remove the merge that leads back to this file".into()),
                code: Some(304),
            });
        }

        let text = loader.read(&path).map_err(|e| LpmlError::FileError {
            message: format!("Could not read inherited file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the file is readable".into()),
            code: Some(303),
        })?;

        debug!("page '{}' merges file {}", self.page, path.display());
        self.files.borrow_mut().push(path);
        let document = Document::single(reference.to_string(), &text);
        let result = parse_page(self.decoder, &document, &document.pages[0], self.files);
        self.files.borrow_mut().pop();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_root_is_verbatim() {
        let path = resolve_file_path("/etc/game/base.lpml", None).unwrap();
        assert_eq!(path, PathBuf::from("/etc/game/base.lpml"));
    }

    #[test]
    fn test_resolve_under_root() {
        let path = resolve_file_path("/std/armour.lpml", Some(Path::new("/srv/lib"))).unwrap();
        assert_eq!(path, PathBuf::from("/srv/lib/std/armour.lpml"));
    }

    #[test]
    fn test_resolve_expands_home_root() {
        if let Some(home) = dirs::home_dir() {
            let path = resolve_file_path("/a.lpml", Some(Path::new("~/mud"))).unwrap();
            assert_eq!(path, home.join("mud").join("a.lpml"));
        }
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with_file("/a.lpml", "x: 1\n");
        assert!(loader.exists(Path::new("/a.lpml")));
        assert!(!loader.exists(Path::new("/b.lpml")));
        assert_eq!(loader.read(Path::new("/a.lpml")).unwrap(), "x: 1\n");
        assert_eq!(
            loader.read(Path::new("/b.lpml")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
