use brew_analytics::prelude::*;
use std::path::Path;

/// Mock EdgeReader returning a fixed edge list for any path
#[derive(Default)]
pub struct MockEdgeReader {
    pub edges: Vec<DependencyEdge>,
}

#[allow(dead_code)]
impl MockEdgeReader {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            edges: pairs
                .iter()
                .map(|(a, b)| DependencyEdge::new(*a, *b))
                .collect(),
        }
    }
}

impl EdgeReader for MockEdgeReader {
    fn read_edges(&self, _path: &Path) -> Result<Vec<DependencyEdge>> {
        Ok(self.edges.clone())
    }
}
