//! # git-ls-anytree
//!
//! `git_ls_anytree` runs `git ls-tree -rtl --full-tree`, rebuilds the directory
//! hierarchy from its flat output and renders it like `tree(1)`, keeping the
//! mode, type, object and size columns aligned.
//!
//! The listing must arrive in ls-tree order, with every directory listed before
//! its contents. Any [`ListingSource`] can stand in for git.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use git_ls_anytree::{LsTreeBuilder, ls_anytree};
//!
//! let options = LsTreeBuilder::new("HEAD")
//!     .working_dir(".")
//!     .default_abbrev()
//!     .build();
//!
//! let listing = ls_anytree(&options).expect("git ls-tree failed");
//! listing.pretty_print(false, true).expect("failed to print");
//! ```

mod engine;
mod error;
mod options;
mod path;
mod record;
mod render;
mod source;
mod tree;

pub mod output;

pub use engine::{Listing, ls_anytree, ls_anytree_with};
pub use error::LsTreeError;
pub use options::{
    DEFAULT_ABBREV, FULL_OBJECT_WIDTH, LsTreeBuilder, LsTreeOptions, MINIMUM_ABBREV_JUSTIFICATION,
};
pub use path::{basename, split_path, unquote_path};
pub use record::{EntryMode, ItemKind, TreeRecord};
pub use render::{RenderOptions, RenderedRow, pretty_print, render_rows, write_rows};
pub use source::{GitCommand, ListingSource, StaticListing};
pub use tree::{LsTree, Node, NodeId};
