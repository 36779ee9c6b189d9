//! Command-line interface for git-ls-anytree.
//!
//! Runs `git ls-tree` on a tree-ish and prints the result as an aligned tree.

use clap::{Parser, ValueEnum};
use git_ls_anytree::{LsTreeBuilder, LsTreeOptions, ls_anytree, output};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// git-ls-anytree: git ls-tree printed as a tree
#[derive(Parser)]
#[command(
    name = "git-ls-anytree",
    version,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = "--abbrev[=n] is split into --abbrev, for the default width, and --abbrev-n <N>, to set a width."
)]
struct Cli {
    /// Reference to tree-ish
    #[arg(value_name = "tree-ish", default_value = "HEAD")]
    tree_ish: String,

    /// Subtrees within the main tree-ish
    patterns: Vec<String>,

    /// The directory to run git in (default current dir)
    #[arg(short = 'w', long = "working-directory")]
    working_directory: Option<PathBuf>,

    /// Only print the tree structure per git-ls-tree --name-(only|status)
    #[arg(long = "name-only", visible_alias = "name-status")]
    name_only: bool,

    /// Use git's default short hash of seven characters per git-ls-tree --abbrev
    #[arg(long, conflicts_with = "abbrev_n")]
    abbrev: bool,

    /// Set the object abbreviation per git-ls-tree --abbrev=n
    #[arg(long = "abbrev-n", value_name = "N")]
    abbrev_n: Option<usize>,

    /// Only print trees per git-ls-tree -d
    #[arg(short = 'd', long = "trees-only")]
    trees_only: bool,

    /// Append ( */@) to names per ls -F
    #[arg(short = 'F', long)]
    classify: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Tree,
    Json,
}

impl Cli {
    fn into_options(self) -> (LsTreeOptions, output::OutputFormat, bool, bool) {
        let working_dir = self
            .working_directory
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let mut builder = LsTreeBuilder::new(self.tree_ish)
            .patterns(self.patterns)
            .trees_only(self.trees_only)
            .working_dir(working_dir);

        builder = match (self.abbrev, self.abbrev_n) {
            (_, Some(width)) => builder.abbrev(width),
            (true, None) => builder.default_abbrev(),
            (false, None) => builder.full_object_ids(),
        };

        let format = match (self.format, self.name_only) {
            (Format::Json, _) => output::OutputFormat::Json,
            (Format::Tree, true) => output::OutputFormat::Names,
            (Format::Tree, false) => output::OutputFormat::Tree,
        };

        (builder.build(), format, self.classify, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, classify, pretty) = cli.into_options();

    let listing = match ls_anytree(&options) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(e.exit_code());
        }
    };

    let rendered = match output::format_output(&listing, format, classify, pretty) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(e.exit_code());
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let written = if format == output::OutputFormat::Json {
        writeln!(handle, "{}", rendered)
    } else {
        handle.write_all(rendered.as_bytes())
    };
    if written.and_then(|_| handle.flush()).is_err() {
        eprintln!("Failed to write to stdout");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use output::OutputFormat;

    fn parse(args: &[&str]) -> (LsTreeOptions, OutputFormat, bool, bool) {
        let argv = std::iter::once("git-ls-anytree").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_options()
    }

    #[test]
    fn defaults() {
        let (options, format, classify, pretty) = parse(&[]);
        assert_eq!(options.tree_ish, "HEAD");
        assert!(options.patterns.is_empty());
        assert!(!options.trees_only);
        assert_eq!(options.abbrev, None);
        assert_eq!(options.working_dir, std::env::current_dir().unwrap());
        assert_eq!(format, OutputFormat::Tree);
        assert!(!classify);
        assert!(!pretty);
    }

    #[test]
    fn tree_ish_patterns_and_working_directory() {
        let (options, ..) = parse(&["-w", "local/path", "qqq", "src", "docs"]);
        assert_eq!(options.tree_ish, "qqq");
        assert_eq!(options.patterns, vec!["src", "docs"]);
        assert_eq!(options.working_dir, PathBuf::from("local/path"));
    }

    #[test]
    fn abbrev_flags() {
        let (options, ..) = parse(&["--abbrev"]);
        assert_eq!(options.abbrev, Some(7));
        let (options, ..) = parse(&["--abbrev-n", "12"]);
        assert_eq!(options.abbrev, Some(12));
        assert_eq!(options.abbrev_justification(), 12);
        assert!(Cli::try_parse_from(["git-ls-anytree", "--abbrev", "--abbrev-n", "5"]).is_err());
    }

    #[test]
    fn name_only_and_alias_select_names() {
        let (_, format, ..) = parse(&["--name-only"]);
        assert_eq!(format, OutputFormat::Names);
        let (_, format, ..) = parse(&["--name-status"]);
        assert_eq!(format, OutputFormat::Names);
        let (_, format, ..) = parse(&["--name-only", "--format", "json"]);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn trees_only_classify_and_pretty() {
        let (options, format, classify, pretty) = parse(&["-d", "-F", "--format", "json", "-p"]);
        assert!(options.trees_only);
        assert!(options.git_args().contains(&"-d".to_string()));
        assert_eq!(format, OutputFormat::Json);
        assert!(classify);
        assert!(pretty);
        let (options, _, classify, _) = parse(&["--trees-only", "--classify"]);
        assert!(options.trees_only);
        assert!(classify);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["git-ls-anytree", "-v"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
