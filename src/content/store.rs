//! The blog content store
//!
//! The store file holds one JSON list literal of post records and is
//! imported directly by the site's rendering layer. Appends are textual
//! insertions at the closing delimiter of the list, so records the
//! operator hand-edited keep their exact bytes and legacy entries are
//! never reformatted.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::BlogPost;

/// Errors raised by the content store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file is missing, unreadable, or does not hold a
    /// deserializable record list.
    #[error("blog store {path:?} could not be read: {message}")]
    Unreadable { path: PathBuf, message: String },

    /// The insertion point for an append could not be located.
    #[error("blog store {path:?} has no recognizable record list: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The updated store could not be persisted.
    #[error("blog store {path:?} could not be written: {message}")]
    Unwritable { path: PathBuf, message: String },
}

impl StoreError {
    fn unreadable(path: &Path, message: impl Into<String>) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    fn corrupt(path: &Path, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    fn unwritable(path: &Path, message: impl Into<String>) -> Self {
        Self::Unwritable {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// The content store holding the ordered list of blog posts
pub struct BlogStore {
    path: PathBuf,
}

impl BlogStore {
    /// Create a store handle for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full ordered sequence of records
    pub fn load(&self) -> Result<Vec<BlogPost>, StoreError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::unreadable(&self.path, e.to_string()))?;

        let (open, close) = list_bounds(&content)
            .ok_or_else(|| StoreError::unreadable(&self.path, "no list literal found"))?;

        serde_json::from_str(&content[open..=close])
            .map_err(|e| StoreError::unreadable(&self.path, e.to_string()))
    }

    /// Append one record at the end of the list literal
    ///
    /// Everything before the closing delimiter is preserved as-is,
    /// apart from trailing whitespace between the last record and the
    /// delimiter. A trailing comma left by hand editing is tolerated.
    pub fn append(&self, post: &BlogPost) -> Result<(), StoreError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::unreadable(&self.path, e.to_string()))?;

        let (_, close) = list_bounds(&content)
            .ok_or_else(|| StoreError::corrupt(&self.path, "closing `]` not found"))?;

        let entry = serde_json::to_string_pretty(post)
            .map_err(|e| StoreError::unwritable(&self.path, e.to_string()))?;

        let head = content[..close].trim_end();
        let needs_comma = !head.ends_with('[') && !head.ends_with(',');
        let tail = &content[close + 1..];

        let updated = format!(
            "{}{}\n{}\n]{}",
            head,
            if needs_comma { "," } else { "" },
            indent(&entry, "  "),
            tail
        );

        tracing::debug!("Appending {} to {:?}", post.slug, self.path);
        self.write_atomic(&updated)
    }

    /// All-or-nothing write: stage in a sibling file, then rename
    fn write_atomic(&self, content: &str) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, content).map_err(|e| StoreError::unwritable(&self.path, e.to_string()))?;

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::unwritable(&self.path, e.to_string())
        })
    }
}

/// Byte offsets of the outermost list literal's delimiters
fn list_bounds(content: &str) -> Option<(usize, usize)> {
    let open = content.find('[')?;
    let close = content.rfind(']')?;
    (open < close).then_some((open, close))
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
