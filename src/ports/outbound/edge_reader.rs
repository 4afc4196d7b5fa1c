use crate::analytics::domain::DependencyEdge;
use crate::shared::Result;
use std::path::Path;

/// EdgeReader port for loading a previously exported dependency relation
pub trait EdgeReader {
    /// Reads the edges stored at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not an edge list
    fn read_edges(&self, path: &Path) -> Result<Vec<DependencyEdge>>;
}
