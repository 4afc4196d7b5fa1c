use serde::Serialize;

/// One node of a formula's transitive dependency tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTreeNode {
    pub name: String,
    pub children: Vec<DependencyTreeNode>,
}

impl DependencyTreeNode {
    pub fn new(name: impl Into<String>, children: Vec<DependencyTreeNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Number of nodes in the tree, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf chain, counted in nodes
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Plot coordinate of a tree node: `x` is the nesting depth, `y` stacks
/// nodes downward in visitation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreePoint {
    pub x: usize,
    pub y: i64,
    pub label: String,
}
