//! Parsing of individual `git ls-tree -l` lines into [`TreeRecord`]s.
//!
//! A line has the shape
//!
//! ```text
//! <mode> SP <type> SP <object> SP+ <size> TAB <path>
//! ```
//!
//! Any run of whitespace is accepted between the columns. Everything after the
//! size column, minus the separating whitespace, is the path. Paths git quoted
//! because of special characters are unquoted.

use crate::path::{basename, split_path, unquote_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of object a listing entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Blob,
    Tree,
    /// A gitlink to a nested repository, rendered as an opaque leaf.
    Commit,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Blob => "blob",
            ItemKind::Tree => "tree",
            ItemKind::Commit => "commit",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(ItemKind::Blob),
            "tree" => Ok(ItemKind::Tree),
            "commit" => Ok(ItemKind::Commit),
            _ => Err(format!("unknown object type: {}", s)),
        }
    }
}

/// What a file mode means for `ls -F` style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Directory,
    File,
    Executable,
    Symlink,
    Gitlink,
    Unknown,
}

impl EntryMode {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "040000" => EntryMode::Directory,
            "100644" | "100664" => EntryMode::File,
            "100755" => EntryMode::Executable,
            "120000" => EntryMode::Symlink,
            "160000" => EntryMode::Gitlink,
            _ => EntryMode::Unknown,
        }
    }

    /// One-character suffix appended by `--classify`.
    pub fn suffix(&self) -> &'static str {
        match self {
            EntryMode::Directory | EntryMode::Gitlink => "/",
            EntryMode::Executable => "*",
            EntryMode::Symlink => "@",
            EntryMode::File | EntryMode::Unknown => "",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntryMode::Directory => "directory",
            EntryMode::File => "file",
            EntryMode::Executable => "executable",
            EntryMode::Symlink => "symlink",
            EntryMode::Gitlink => "gitlink",
            EntryMode::Unknown => "",
        }
    }
}

/// One entry of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeRecord {
    pub file_mode: String,
    /// `None` only for the synthetic root.
    pub item_type: Option<ItemKind>,
    pub object_id: String,
    /// Size in bytes, or `-` for trees and gitlinks.
    pub object_size: String,
    pub relative_path: String,
    pub basename: String,
    /// Path segments, consumed when the record is attached.
    pub segments: Vec<String>,
    pub name: String,
}

impl TreeRecord {
    /// Synthetic root of a listing, displayed as `name`.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parses a single line. Returns `None` if the line does not match the
    /// ls-tree grammar.
    pub fn parse(line: &str) -> Option<Self> {
        let (file_mode, rest) = next_column(line)?;
        if !file_mode.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (item_type, rest) = next_column(rest)?;
        let item_type = item_type.parse::<ItemKind>().ok()?;
        let (object_id, rest) = next_column(rest)?;
        if !object_id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        let (object_size, rest) = next_column(rest)?;
        if !object_size.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
            return None;
        }
        let quoted = rest.trim_start();
        if quoted.is_empty() {
            return None;
        }
        let relative_path = unquote_path(quoted);
        let relative_path = relative_path.as_ref();
        let base = basename(relative_path).to_string();
        Some(Self {
            file_mode: file_mode.to_string(),
            item_type: Some(item_type),
            object_id: object_id.to_string(),
            object_size: object_size.to_string(),
            relative_path: relative_path.to_string(),
            name: base.clone(),
            basename: base,
            segments: split_path(relative_path),
        })
    }

    pub fn entry_mode(&self) -> EntryMode {
        EntryMode::from_mode(&self.file_mode)
    }

    pub fn is_root(&self) -> bool {
        self.relative_path.is_empty()
    }
}

// Splits off a non-empty leading column and requires at least one whitespace
// character after it.
fn next_column(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    let end = input.find(char::is_whitespace)?;
    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
}
