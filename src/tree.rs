//! The hierarchy rebuilt from a flat ls-tree listing.
//!
//! Nodes live in an arena owned by [`LsTree`] and refer to each other through
//! [`NodeId`]s. Each node owns the ordered list of its children's ids and keeps
//! the id of its parent as a plain back-reference.

use crate::error::LsTreeError;
use crate::record::TreeRecord;
use std::collections::HashMap;
#[cfg(feature = "logging")]
use tracing;

/// Handle to a node of an [`LsTree`]. Only valid for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub record: TreeRecord,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // basename -> child, kept in step with `children`
    by_name: HashMap<String, NodeId>,
}

impl Node {
    fn new(record: TreeRecord, parent: Option<NodeId>) -> Self {
        Self {
            record,
            parent,
            children: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// The child whose basename is `name`.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsTree {
    nodes: Vec<Node>,
}

impl LsTree {
    /// Creates a tree holding only `root`.
    pub fn new(root: TreeRecord) -> Self {
        Self {
            nodes: vec![Node::new(root, None)],
        }
    }

    /// Builds a tree named `root_name` from raw listing lines.
    ///
    /// Lines must come in ls-tree order, every directory before its contents.
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`LsTreeError::MalformedLine`] for a line that is not ls-tree output,
    /// plus anything [`LsTree::attach`] reports.
    pub fn from_lines<I, S>(root_name: impl Into<String>, lines: I) -> Result<Self, LsTreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(TreeRecord::root(root_name));
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let record = TreeRecord::parse(line).ok_or_else(|| LsTreeError::MalformedLine {
                line_number: idx + 1,
                line: line.to_string(),
            })?;
            tree.attach(record)?;
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Attached {} nodes under {}", tree.len() - 1, tree.record(tree.root()).name);
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn record(&self, id: NodeId) -> &TreeRecord {
        &self.nodes[id.0].record
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_empty()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing has been attached under the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// The root reached by following parent links from `id`.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Path of `id` rebuilt from the basenames of its ancestors. Empty for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts: Vec<&str> = std::iter::once(id)
            .chain(self.ancestors(id))
            .filter(|n| self.nodes[n.0].parent.is_some())
            .map(|n| self.nodes[n.0].record.basename.as_str())
            .collect();
        parts.reverse();
        parts.join("/")
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id.0].parent, move |p| self.nodes[p.0].parent)
    }

    /// Every node below `id`, in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Looks a node up by its slash-delimited path.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self.nodes[current.0].child(segment)?;
        }
        Some(current)
    }

    /// Attaches `record` under the node its path points to and returns its id.
    ///
    /// The record's segments are consumed.
    ///
    /// # Errors
    ///
    /// [`LsTreeError::BrokenTree`] when an intermediate directory has not been
    /// attached yet, [`LsTreeError::DuplicateEntry`] when the parent already
    /// has a child with the same basename.
    pub fn attach(&mut self, mut record: TreeRecord) -> Result<NodeId, LsTreeError> {
        let segments = std::mem::take(&mut record.segments);
        if segments.is_empty() {
            return Err(LsTreeError::BrokenTree {
                owner: String::new(),
                missing: record.relative_path,
            });
        }
        let parent = self.walk_to_parent(self.root(), &segments)?;
        if self.nodes[parent.0].child(&record.basename).is_some() {
            return Err(LsTreeError::DuplicateEntry {
                parent: self.path_of(parent),
                name: record.basename,
            });
        }
        let id = NodeId(self.nodes.len());
        let name = record.basename.clone();
        self.nodes.push(Node::new(record, Some(parent)));
        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.push(id);
        parent_node.by_name.insert(name, id);
        Ok(id)
    }

    /// Attaches each record in order, stopping at the first failure.
    pub fn attach_all<I>(&mut self, records: I) -> Result<(), LsTreeError>
    where
        I: IntoIterator<Item = TreeRecord>,
    {
        for record in records {
            self.attach(record)?;
        }
        Ok(())
    }

    fn walk_to_parent(&self, start: NodeId, segments: &[String]) -> Result<NodeId, LsTreeError> {
        let mut current = start;
        let mut remaining = segments;
        while let [head, rest @ ..] = remaining {
            if rest.is_empty() {
                break;
            }
            current = self.nodes[current.0]
                .child(head)
                .ok_or_else(|| LsTreeError::BrokenTree {
                    owner: self.nodes[current.0].record.relative_path.clone(),
                    missing: head.clone(),
                })?;
            remaining = rest;
        }
        Ok(current)
    }
}
