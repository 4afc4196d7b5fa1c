use crate::analytics::domain::{DependencyEdge, DependencyTreeNode, TreePoint};
use crate::shared::error::AnalyticsError;
use std::collections::{HashMap, HashSet};

/// DependencyTreeWalker service expanding a formula into its transitive
/// dependency tree and laying the tree out for plotting
pub struct DependencyTreeWalker;

impl DependencyTreeWalker {
    /// Builds the dependency tree rooted at `root`
    ///
    /// Children are the targets of edges whose source is the node, in edge
    /// order. A dependency shared by several parents is expanded under each
    /// of them.
    ///
    /// # Errors
    /// * `AnalyticsError::NotFound` if `root` is neither a source nor a target of any edge
    /// * `AnalyticsError::Cycle` if a node is reached again while it is still on the current path
    pub fn build_tree(
        edges: &[DependencyEdge],
        root: &str,
    ) -> Result<DependencyTreeNode, AnalyticsError> {
        let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut known = false;
        for edge in edges {
            children_of
                .entry(edge.package.as_str())
                .or_default()
                .push(edge.depends_on.as_str());
            known |= edge.package == root || edge.depends_on == root;
        }

        if !known {
            return Err(AnalyticsError::NotFound {
                name: root.to_string(),
            });
        }

        let mut path = Vec::new();
        let mut on_path = HashSet::new();
        Self::expand(root, &children_of, &mut path, &mut on_path)
    }

    fn expand<'a>(
        name: &'a str,
        children_of: &HashMap<&'a str, Vec<&'a str>>,
        path: &mut Vec<&'a str>,
        on_path: &mut HashSet<&'a str>,
    ) -> Result<DependencyTreeNode, AnalyticsError> {
        if !on_path.insert(name) {
            let start = path.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(AnalyticsError::Cycle { path: cycle });
        }
        path.push(name);

        let children = children_of
            .get(name)
            .map(|deps| {
                deps.iter()
                    .map(|dep| Self::expand(*dep, children_of, path, on_path))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        path.pop();
        on_path.remove(name);

        Ok(DependencyTreeNode::new(name, children))
    }

    /// Pre-order layout: `x` is the depth, `y` is minus the visit index so
    /// successive nodes stack downward like an indented listing
    pub fn linearize(tree: &DependencyTreeNode) -> Vec<TreePoint> {
        let mut points = Vec::with_capacity(tree.node_count());
        Self::visit(tree, 0, &mut |node, depth| {
            let y = -(points.len() as i64);
            points.push(TreePoint {
                x: depth,
                y,
                label: node.name.clone(),
            });
        });
        points
    }

    /// The same pre-order walk rendered as text, two spaces per level
    pub fn render_indented(tree: &DependencyTreeNode) -> String {
        let mut output = String::new();
        Self::visit(tree, 0, &mut |node, depth| {
            output.push_str(&"  ".repeat(depth));
            output.push_str(&node.name);
            output.push('\n');
        });
        output
    }

    fn visit<F>(node: &DependencyTreeNode, depth: usize, f: &mut F)
    where
        F: FnMut(&DependencyTreeNode, usize),
    {
        f(node, depth);
        for child in &node.children {
            Self::visit(child, depth + 1, f);
        }
    }
}
