//! Directory/file tree nodes held in an index-based arena.
//!
//! Ownership is strictly top-down: a directory owns its children by id,
//! and the child-to-parent back-reference is a plain arena index rather
//! than a shared pointer, so the tree cannot form reference cycles. The
//! tree is single-rooted and acyclic, child names are unique within a
//! directory, and children keep insertion order.
//!
//! Entry ids are only meaningful while the owning filesystem holds its
//! tree lock; they are never handed out across operations.

use crate::buffer::ContentBuffer;
use std::sync::{Arc, Mutex};

/// Arena index of one tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryId(usize);

const ROOT: EntryId = EntryId(0);

/// Kind-specific payload of a node.
#[derive(Debug)]
pub(crate) enum NodeKind {
    /// Insertion-ordered child ids.
    Directory { children: Vec<EntryId> },
    /// The entry's content buffer, shared with any open channels.
    File { data: Arc<Mutex<ContentBuffer>> },
}

#[derive(Debug)]
pub(crate) struct Node {
    /// `None` only for the root.
    name: Option<String>,
    /// `None` only for the root.
    parent: Option<EntryId>,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) const fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub(crate) const fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub(crate) fn file_data(&self) -> Option<Arc<Mutex<ContentBuffer>>> {
        match &self.kind {
            NodeKind::File { data } => Some(Arc::clone(data)),
            NodeKind::Directory { .. } => None,
        }
    }
}

/// The arena of all live entries of one filesystem.
#[derive(Debug)]
pub(crate) struct EntryTree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl EntryTree {
    /// Creates a tree holding only the root directory.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Some(Node {
                name: None,
                parent: None,
                kind: NodeKind::Directory {
                    children: Vec::new(),
                },
            })],
            free: Vec::new(),
        }
    }

    pub(crate) const fn root() -> EntryId {
        ROOT
    }

    pub(crate) fn node(&self, id: EntryId) -> &Node {
        self.nodes[id.0]
            .as_ref()
            .expect("entry id refers to a freed slot")
    }

    fn node_mut(&mut self, id: EntryId) -> &mut Node {
        self.nodes[id.0]
            .as_mut()
            .expect("entry id refers to a freed slot")
    }

    /// Walks `segments` from the root, one child-name lookup per
    /// segment. Any missing child or non-directory intermediate yields
    /// `None`; absence is for the caller to interpret.
    pub(crate) fn lookup(&self, segments: &[String]) -> Option<EntryId> {
        let mut current = ROOT;
        for segment in segments {
            current = self.child(current, segment)?;
        }
        Some(current)
    }

    /// Returns the child of `dir` named `name`, if `dir` is a directory
    /// holding one.
    pub(crate) fn child(&self, dir: EntryId, name: &str) -> Option<EntryId> {
        match &self.node(dir).kind {
            NodeKind::Directory { children } => children
                .iter()
                .copied()
                .find(|id| self.node(*id).name() == Some(name)),
            NodeKind::File { .. } => None,
        }
    }

    /// Returns the children of `dir` in insertion order, or `None` if
    /// `dir` is not a directory.
    pub(crate) fn children(&self, dir: EntryId) -> Option<&[EntryId]> {
        match &self.node(dir).kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub(crate) fn child_count(&self, dir: EntryId) -> usize {
        self.children(dir).map_or(0, <[EntryId]>::len)
    }

    /// Inserts a new node under `parent` and returns its id.
    ///
    /// The caller must have checked that `parent` is a directory with
    /// no child of that name.
    pub(crate) fn insert(&mut self, parent: EntryId, name: String, kind: NodeKind) -> EntryId {
        let id = self.alloc(Node {
            name: Some(name),
            parent: Some(parent),
            kind,
        });
        if let NodeKind::Directory { children } = &mut self.node_mut(parent).kind {
            children.push(id);
        }
        id
    }

    /// Detaches `id` from its parent and frees its slot.
    ///
    /// The caller must have checked that the node has no children.
    pub(crate) fn remove(&mut self, id: EntryId) {
        self.detach(id);
        self.nodes[id.0] = None;
        self.free.push(id.0);
    }

    /// Unlinks `id` from its current parent without freeing it.
    pub(crate) fn detach(&mut self, id: EntryId) {
        if let Some(parent) = self.node(id).parent {
            if let NodeKind::Directory { children } = &mut self.node_mut(parent).kind {
                children.retain(|child| *child != id);
            }
        }
        self.node_mut(id).parent = None;
    }

    /// Re-links a detached `id` under `parent` with a new name.
    pub(crate) fn attach(&mut self, id: EntryId, parent: EntryId, name: String) {
        {
            let node = self.node_mut(id);
            node.parent = Some(parent);
            node.name = Some(name);
        }
        if let NodeKind::Directory { children } = &mut self.node_mut(parent).kind {
            children.push(id);
        }
    }

    /// Returns the content size of `id`: buffer length for files,
    /// always 0 for directories.
    pub(crate) fn size_of(&self, id: EntryId) -> u64 {
        self.node(id).file_data().map_or(0, |data| {
            data.lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .len()
        })
    }

    fn alloc(&mut self, node: Node) -> EntryId {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = Some(node);
            EntryId(slot)
        } else {
            self.nodes.push(Some(node));
            EntryId(self.nodes.len() - 1)
        }
    }
}

pub(crate) fn new_directory() -> NodeKind {
    NodeKind::Directory {
        children: Vec::new(),
    }
}

pub(crate) fn new_file(data: ContentBuffer) -> NodeKind {
    NodeKind::File {
        data: Arc::new(Mutex::new(data)),
    }
}
