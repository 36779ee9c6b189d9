//! Rendering of an [`LsTree`] into aligned rows.
//!
//! Rendering happens in two passes. The first walks the tree in pre-order and
//! produces one row per node with its connector prefix. The second pads every
//! row so the name and size columns line up.

use crate::error::LsTreeError;
use crate::tree::{LsTree, NodeId};
use serde::Serialize;
use std::io::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// Width of the mode and type columns.
pub const FIXED_COLUMN_WIDTH: usize = 6;

// Labels shown in the root row of the full listing.
const HEADER_MODE: &str = "mode";
const HEADER_TYPE: &str = "type";
const HEADER_OBJECT: &str = "object";
const HEADER_SIZE: &str = "size";

/// One output row, already justified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Connector prefix, display name and classification suffix.
    pub line: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub object: String,
    pub size: String,
    pub depth: usize,
}

impl RenderedRow {
    /// Tab-separated `mode type object size name`.
    pub fn full(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.mode, self.item_type, self.object, self.size, self.line
        )
    }
}

/// How rows are produced and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append `ls -F` style suffixes to names.
    pub classify: bool,
    /// Print only the name column.
    pub name_only: bool,
    /// Width the object column is padded to.
    pub object_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            classify: false,
            name_only: false,
            object_width: crate::options::FULL_OBJECT_WIDTH,
        }
    }
}

/// Renders every node of `tree`, root first, into justified rows.
pub fn render_rows(tree: &LsTree, options: &RenderOptions) -> Vec<RenderedRow> {
    let mut rows = Vec::with_capacity(tree.len());
    let root = tree.root();
    rows.push(row_for(tree, root, String::new(), options));
    visit_children(tree, root, "", options, &mut rows);
    justify(&mut rows);
    rows
}

fn visit_children(
    tree: &LsTree,
    id: NodeId,
    indent: &str,
    options: &RenderOptions,
    rows: &mut Vec<RenderedRow>,
) {
    let children = tree.children(id);
    for (i, &child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        rows.push(row_for(tree, child, format!("{}{}", indent, connector), options));
        let next_indent = format!("{}{}", indent, if is_last { BLANK } else { VERTICAL });
        visit_children(tree, child, &next_indent, options, rows);
    }
}

fn row_for(tree: &LsTree, id: NodeId, prefix: String, options: &RenderOptions) -> RenderedRow {
    let record = tree.record(id);
    let name = if record.name.is_empty() {
        &record.basename
    } else {
        &record.name
    };
    let suffix = if options.classify {
        record.entry_mode().suffix()
    } else {
        ""
    };
    let (mode, item_type, object, size) = if id == tree.root() {
        (HEADER_MODE, HEADER_TYPE, HEADER_OBJECT, HEADER_SIZE)
    } else {
        (
            record.file_mode.as_str(),
            record.item_type.map_or("", |k| k.as_str()),
            record.object_id.as_str(),
            record.object_size.as_str(),
        )
    };
    RenderedRow {
        line: format!("{}{}{}", prefix, name, suffix),
        mode: format!("{:<width$}", mode, width = FIXED_COLUMN_WIDTH),
        item_type: format!("{:<width$}", item_type, width = FIXED_COLUMN_WIDTH),
        object: format!("{:<width$}", object, width = options.object_width),
        size: size.to_string(),
        depth: tree.depth(id),
    }
}

fn justify(rows: &mut [RenderedRow]) {
    let name_width = rows.iter().map(|r| r.line.chars().count()).max().unwrap_or(0);
    let size_width = rows.iter().map(|r| r.size.chars().count()).max().unwrap_or(0);
    for row in rows {
        row.line = format!("{:<width$}", row.line, width = name_width);
        row.size = format!("{:>width$}", row.size, width = size_width);
    }
}

/// Writes rendered rows, one per line.
pub fn write_rows<W: Write>(
    rows: &[RenderedRow],
    name_only: bool,
    out: &mut W,
) -> Result<(), LsTreeError> {
    for row in rows {
        let written = if name_only {
            writeln!(out, "{}", row.line)
        } else {
            writeln!(out, "{}", row.full())
        };
        written.map_err(LsTreeError::Write)?;
    }
    Ok(())
}

/// Renders `tree` and prints it to standard output.
pub fn pretty_print(tree: &LsTree, options: &RenderOptions) -> Result<(), LsTreeError> {
    let rows = render_rows(tree, options);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_rows(&rows, options.name_only, &mut handle)?;
    handle.flush().map_err(LsTreeError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TreeRecord;

    const LISTING: [&str; 6] = [
        "100644 blob   d6692984ebddd76ae0a5e7c4da181b4b3f61c9da  1051    README.rst",
        "040000 tree   b797423bbb11b5a485c91b63cec2cae5bdb80ebf     -    git_ls_anytree",
        "100664 blob   77d6f4ca23711533e724789a0a0045eab28c5ea6     6    git_ls_anytree/VERSION",
        "100755 blob   69b140ebd030332bdccc274ad9b92e9df1d225d9    20    executable",
        "120000 blob   19f0b03ae279fc7da9bdff15295c3585d71f6d1e    16    symlink",
        "160000 commit ad522a091429ba180c930f84b2a023b40de4dbcc     -    external-submodule",
    ];

    fn names(rows: &[RenderedRow]) -> Vec<&str> {
        rows.iter().map(|r| r.line.trim_end()).collect()
    }

    #[test]
    fn connectors_follow_sibling_position() {
        let tree = LsTree::from_lines("qqq", LISTING).unwrap();
        let rows = render_rows(&tree, &RenderOptions::default());
        assert_eq!(
            names(&rows),
            vec![
                "qqq",
                "├── README.rst",
                "├── git_ls_anytree",
                "│   └── VERSION",
                "├── executable",
                "├── symlink",
                "└── external-submodule",
            ]
        );
        assert_eq!(rows[3].depth, 2);
    }

    #[test]
    fn last_branch_indents_with_blanks() {
        let lines = [
            "040000 tree aaaa -\tsrc",
            "040000 tree bbbb -\tsrc/bin",
            "100644 blob cccc 10\tsrc/bin/main.rs",
            "100644 blob dddd 20\tsrc/lib.rs",
        ];
        let tree = LsTree::from_lines("HEAD", lines).unwrap();
        let rows = render_rows(&tree, &RenderOptions::default());
        assert_eq!(
            names(&rows),
            vec![
                "HEAD",
                "└── src",
                "    ├── bin",
                "    │   └── main.rs",
                "    └── lib.rs",
            ]
        );
    }

    #[test]
    fn classify_appends_suffixes() {
        let tree = LsTree::from_lines("qqq", LISTING).unwrap();
        let options = RenderOptions {
            classify: true,
            ..Default::default()
        };
        let rows = render_rows(&tree, &options);
        assert_eq!(
            names(&rows),
            vec![
                "qqq",
                "├── README.rst",
                "├── git_ls_anytree/",
                "│   └── VERSION",
                "├── executable*",
                "├── symlink@",
                "└── external-submodule/",
            ]
        );
    }

    #[test]
    fn name_column_is_justified() {
        let tree = LsTree::new(TreeRecord::root("0123456789"));
        let rows = render_rows(&tree, &RenderOptions::default());
        assert_eq!(rows[0].line.chars().count(), 10);
        let mut root = TreeRecord::root("0123456789");
        root.file_mode = "040000".into();
        let tree = LsTree::new(root);
        let options = RenderOptions {
            classify: true,
            ..Default::default()
        };
        let rows = render_rows(&tree, &options);
        assert_eq!(rows[0].line.chars().count(), 11);
    }

    #[test]
    fn all_lines_share_one_width() {
        let tree = LsTree::from_lines("qqq", LISTING).unwrap();
        let rows = render_rows(&tree, &RenderOptions::default());
        let widths: Vec<usize> = rows.iter().map(|r| r.line.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == "└── external-submodule".chars().count()));
    }

    #[test]
    fn size_column_is_right_justified() {
        let lines = [
            "100644 blob aaaa 1\ta",
            "100644 blob bbbb 1234\tb",
        ];
        let tree = LsTree::from_lines("HEAD", lines).unwrap();
        let rows = render_rows(&tree, &RenderOptions::default());
        assert_eq!(rows[1].size, "   1");
        assert_eq!(rows[2].size, "1234");
        assert_eq!(rows[0].size, "size");
    }

    #[test]
    fn object_and_fixed_columns_are_padded() {
        let tree = LsTree::from_lines("qqq", LISTING).unwrap();
        let rows = render_rows(&tree, &RenderOptions::default());
        assert_eq!(rows[0].object.len(), 40);
        assert_eq!(rows[0].mode, "mode  ");
        assert_eq!(rows[0].item_type, "type  ");
        assert_eq!(rows[6].item_type, "commit");
        let options = RenderOptions {
            object_width: 10,
            ..Default::default()
        };
        let short = LsTree::from_lines("HEAD", ["100644 blob 1a2b3c4 5\tx"]).unwrap();
        let rows = render_rows(&short, &options);
        assert_eq!(rows[0].object, "object    ");
        assert_eq!(rows[1].object, "1a2b3c4   ");
    }

    #[test]
    fn writes_full_and_name_only_rows() {
        let tree = LsTree::from_lines("HEAD", ["100644 blob 1a2b3c4 5\tx"]).unwrap();
        let options = RenderOptions {
            object_width: 7,
            ..Default::default()
        };
        let rows = render_rows(&tree, &options);
        let mut full = Vec::new();
        write_rows(&rows, false, &mut full).unwrap();
        assert_eq!(
            String::from_utf8(full).unwrap(),
            "mode  \ttype  \tobject \tsize\tHEAD \n100644\tblob  \t1a2b3c4\t   5\t└── x\n"
        );
        let mut names_only = Vec::new();
        write_rows(&rows, true, &mut names_only).unwrap();
        assert_eq!(String::from_utf8(names_only).unwrap(), "HEAD \n└── x\n");
    }
}
