use crate::error::LsTreeError;
use crate::options::LsTreeOptions;
use crate::render::{RenderOptions, RenderedRow, pretty_print, render_rows};
use crate::source::{GitCommand, ListingSource};
use crate::tree::LsTree;
#[cfg(feature = "logging")]
use tracing;

/// A rebuilt listing together with the object column width it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub tree: LsTree,
    pub object_width: usize,
}

impl Listing {
    pub fn render_options(&self, name_only: bool, classify: bool) -> RenderOptions {
        RenderOptions {
            classify,
            name_only,
            object_width: self.object_width,
        }
    }

    pub fn render(&self, classify: bool) -> Vec<RenderedRow> {
        render_rows(&self.tree, &self.render_options(false, classify))
    }

    /// Prints the listing to standard output.
    pub fn pretty_print(&self, name_only: bool, classify: bool) -> Result<(), LsTreeError> {
        pretty_print(&self.tree, &self.render_options(name_only, classify))
    }
}

/// Runs `git ls-tree` as configured and rebuilds its hierarchy.
pub fn ls_anytree(options: &LsTreeOptions) -> Result<Listing, LsTreeError> {
    ls_anytree_with(&GitCommand::default(), options)
}

/// Like [`ls_anytree`], reading the listing from `source`.
pub fn ls_anytree_with<S>(source: &S, options: &LsTreeOptions) -> Result<Listing, LsTreeError>
where
    S: ListingSource + ?Sized,
{
    #[cfg(feature = "logging")]
    tracing::debug!("Listing {} in {}", options.tree_ish, options.working_dir.display());
    let lines = source.list(options)?;
    let tree = LsTree::from_lines(options.tree_ish.as_str(), &lines)?;
    Ok(Listing {
        tree,
        object_width: options.abbrev_justification(),
    })
}
