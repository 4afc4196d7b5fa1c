use crate::analytics::domain::{AdjacencyCell, AdjacencyMatrix, DependencyEdge};
use std::collections::HashMap;

/// Matrix size used for the dependency heatmap
pub const DEFAULT_TOP_N: usize = 100;

/// DependencyMatrixBuilder service producing the adjacency matrix among the
/// most depended-upon packages
pub struct DependencyMatrixBuilder;

impl DependencyMatrixBuilder {
    /// Builds a `top_n × top_n` adjacency matrix
    ///
    /// Packages are ranked by in-degree (number of edges targeting them,
    /// duplicates included). Ties keep the order in which packages first
    /// appear as a target, so the same input always selects the same set.
    /// When fewer than `top_n` packages are ever depended upon, the matrix
    /// is sized to the number of candidates.
    pub fn build_matrix(edges: &[DependencyEdge], top_n: usize) -> AdjacencyMatrix {
        let labels = Self::top_depended_upon(edges, top_n);
        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut grid = vec![vec![AdjacencyCell::Absent; labels.len()]; labels.len()];
        for edge in edges {
            if let (Some(&row), Some(&col)) = (
                index.get(edge.package.as_str()),
                index.get(edge.depends_on.as_str()),
            ) {
                grid[row][col] = AdjacencyCell::Present;
            }
        }

        AdjacencyMatrix::new(labels, grid)
    }

    fn top_depended_upon(edges: &[DependencyEdge], top_n: usize) -> Vec<String> {
        // (first appearance, in-degree) per target
        let mut in_degree: HashMap<&str, (usize, usize)> = HashMap::new();
        for edge in edges {
            let next = in_degree.len();
            in_degree.entry(edge.depends_on.as_str()).or_insert((next, 0)).1 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = in_degree
            .into_iter()
            .map(|(name, (first_seen, degree))| (name, first_seen, degree))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));

        ranked
            .into_iter()
            .take(top_n)
            .map(|(name, _, _)| name.to_string())
            .collect()
    }
}
