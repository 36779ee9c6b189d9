//! Output formatting for listings.
//!
//! Provides functions to format a [`Listing`] as the aligned tree, as the name
//! column alone, or as nested JSON.

use crate::engine::Listing;
use crate::error::LsTreeError;
use crate::render::{render_rows, write_rows};
use crate::tree::{LsTree, NodeId};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Mode, type, object, size and name columns.
    Tree,
    /// The name column only.
    Names,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree | OutputFormat::Names => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the listing into a string.
///
/// `pretty` only affects JSON output.
pub fn format_output(
    listing: &Listing,
    format: OutputFormat,
    classify: bool,
    pretty: bool,
) -> Result<String, LsTreeError> {
    match format {
        OutputFormat::Tree => format_rows(listing, false, classify),
        OutputFormat::Names => format_rows(listing, true, classify),
        OutputFormat::Json => format_json(&listing.tree, pretty),
    }
}

/// Writes the formatted listing to a file.
pub fn write_output_to_file(
    listing: &Listing,
    format: OutputFormat,
    classify: bool,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), LsTreeError> {
    let content = format_output(listing, format, classify, pretty)?;
    fs::write(&path, content).map_err(|e| LsTreeError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_rows(listing: &Listing, name_only: bool, classify: bool) -> Result<String, LsTreeError> {
    let rows = render_rows(&listing.tree, &listing.render_options(name_only, classify));
    let mut out = Vec::with_capacity(rows.len() * 80);
    write_rows(&rows, name_only, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[derive(Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    path: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    mode: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    item_type: Option<crate::record::ItemKind>,
    #[serde(skip_serializing_if = "str::is_empty")]
    object: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode<'a>>,
}

fn json_node(tree: &LsTree, id: NodeId) -> JsonNode<'_> {
    let record = tree.record(id);
    JsonNode {
        name: &record.name,
        path: &record.relative_path,
        mode: &record.file_mode,
        item_type: record.item_type,
        object: &record.object_id,
        size: record.object_size.parse().ok(),
        children: tree.children(id).iter().map(|&c| json_node(tree, c)).collect(),
    }
}

fn format_json(tree: &LsTree, pretty: bool) -> Result<String, LsTreeError> {
    let root = json_node(tree, tree.root());
    let json = if pretty {
        serde_json::to_string_pretty(&root)?
    } else {
        serde_json::to_string(&root)?
    };
    Ok(json)
}
