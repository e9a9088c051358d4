//! Result tree of an import: root nodes, group containers and connection
//! leaves.
//!
//! Nodes live in one arena and refer to each other by [`NodeId`]; every node
//! keeps its children in insertion order. The tree is built once per import
//! and then handed to the caller.

use serde::Serialize;

use super::types::ConnectionEntry;

/// Index of a node inside its [`ConnectionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

/// Category of a top-level root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RootNodeType {
    Connection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Root { name: String, root_type: RootNodeType },
    Container { name: String },
    Connection(ConnectionEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Root { name, .. } | NodeKind::Container { name } => name,
            NodeKind::Connection(entry) => &entry.name,
        }
    }

    /// Roots and group containers can hold children; connections cannot.
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, NodeKind::Connection(_))
    }

    pub fn connection(&self) -> Option<&ConnectionEntry> {
        match &self.kind {
            NodeKind::Connection(entry) => Some(entry),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl ConnectionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root_node(&mut self, name: impl Into<String>, root_type: RootNodeType) -> NodeId {
        let id = self.push(
            NodeKind::Root {
                name: name.into(),
                root_type,
            },
            None,
        );
        self.roots.push(id);
        id
    }

    /// Create a group container as the last child of `parent`.
    pub fn add_container(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.add_child(parent, NodeKind::Container { name: name.into() })
    }

    /// Attach a connection entry as the last child of `parent`.
    pub fn add_connection(&mut self, parent: NodeId, entry: ConnectionEntry) -> NodeId {
        self.add_child(parent, NodeKind::Connection(entry))
    }

    fn add_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        debug_assert!(self.node(parent).is_container(), "connections cannot hold children");
        let id = self.push(kind, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub fn root_nodes(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &TreeNode)> + '_ {
        self.nodes[id.0].children.iter().map(move |&c| (c, &self.nodes[c.0]))
    }

    /// First child container of `parent` whose name matches exactly.
    pub fn find_child_container(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|(_, node)| node.is_container() && node.name() == name)
            .map(|(id, _)| id)
    }

    /// Number of group containers (roots excluded).
    pub fn container_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Container { .. }))
            .count()
    }

    pub fn connection_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.connection().is_some()).count()
    }
}
