use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Abbreviation used by `--abbrev` without an explicit width.
pub const DEFAULT_ABBREV: usize = 7;
/// Object column width when no abbreviation is configured.
pub const FULL_OBJECT_WIDTH: usize = 40;
/// Narrowest object column, whatever abbreviation git was asked for.
pub const MINIMUM_ABBREV_JUSTIFICATION: usize = 6;

const BASE_LS_TREE_ARGS: [&str; 3] = ["ls-tree", "-rtl", "--full-tree"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LsTreeOptions {
    pub tree_ish: String,
    pub patterns: Vec<String>,
    pub trees_only: bool,
    pub working_dir: PathBuf,
    pub abbrev: Option<usize>,
}
impl Default for LsTreeOptions {
    fn default() -> Self {
        Self {
            tree_ish: "HEAD".to_string(),
            patterns: Vec::new(),
            trees_only: false,
            working_dir: PathBuf::from("."),
            abbrev: None,
        }
    }
}
impl LsTreeOptions {
    /// Arguments passed to `git`, subcommand included.
    pub fn git_args(&self) -> Vec<String> {
        let mut args: Vec<String> = BASE_LS_TREE_ARGS.iter().map(|a| a.to_string()).collect();
        if self.trees_only {
            args.push("-d".to_string());
        }
        if let Some(abbrev) = self.effective_abbrev() {
            args.push(format!("--abbrev={}", abbrev));
        }
        args.push(self.tree_ish.clone());
        args.extend(self.patterns.iter().cloned());
        args
    }
    /// Width the object column is padded to.
    pub fn abbrev_justification(&self) -> usize {
        match self.effective_abbrev() {
            Some(abbrev) => abbrev.max(MINIMUM_ABBREV_JUSTIFICATION),
            None => FULL_OBJECT_WIDTH,
        }
    }
    // A width of 0 means full object ids.
    fn effective_abbrev(&self) -> Option<usize> {
        self.abbrev.filter(|width| *width > 0)
    }
}
#[derive(Debug, Default)]
pub struct LsTreeBuilder {
    options: LsTreeOptions,
}
impl LsTreeBuilder {
    pub fn new(tree_ish: impl Into<String>) -> Self {
        Self {
            options: LsTreeOptions {
                tree_ish: tree_ish.into(),
                ..Default::default()
            },
        }
    }
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.patterns = patterns;
        self
    }
    pub fn trees_only(mut self, yes: bool) -> Self {
        self.options.trees_only = yes;
        self
    }
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.working_dir = dir.into();
        self
    }
    pub fn abbrev(mut self, width: usize) -> Self {
        self.options.abbrev = Some(width);
        self
    }
    pub fn default_abbrev(mut self) -> Self {
        self.options.abbrev = Some(DEFAULT_ABBREV);
        self
    }
    pub fn full_object_ids(mut self) -> Self {
        self.options.abbrev = None;
        self
    }
    pub fn build(self) -> LsTreeOptions {
        self.options
    }
}
