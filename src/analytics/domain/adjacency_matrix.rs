use serde::{Serialize, Serializer};

/// Heatmap cell. `Absent` serializes as `null`, not `0`, so renderers leave
/// the cell blank instead of drawing a zero-weight edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyCell {
    Present,
    Absent,
}

impl AdjacencyCell {
    pub fn is_present(self) -> bool {
        self == AdjacencyCell::Present
    }
}

impl Serialize for AdjacencyCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AdjacencyCell::Present => serializer.serialize_u8(1),
            AdjacencyCell::Absent => serializer.serialize_none(),
        }
    }
}

/// Square dependency matrix over the most depended-upon packages.
///
/// Row `i` is a package, column `j` something it may depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    grid: Vec<Vec<AdjacencyCell>>,
}

impl AdjacencyMatrix {
    pub fn new(labels: Vec<String>, grid: Vec<Vec<AdjacencyCell>>) -> Self {
        Self { labels, grid }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn grid(&self) -> &[Vec<AdjacencyCell>] {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Looks a cell up by package names; `None` if either is not a label
    pub fn cell(&self, package: &str, depends_on: &str) -> Option<AdjacencyCell> {
        let row = self.labels.iter().position(|l| l == package)?;
        let col = self.labels.iter().position(|l| l == depends_on)?;
        Some(self.grid[row][col])
    }

    pub fn present_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_present())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_serialization() {
        let row = vec![AdjacencyCell::Present, AdjacencyCell::Absent];
        assert_eq!(serde_json::to_string(&row).unwrap(), "[1,null]");
    }

    #[test]
    fn test_cell_lookup() {
        let matrix = AdjacencyMatrix::new(
            vec!["x".to_string(), "y".to_string()],
            vec![
                vec![AdjacencyCell::Absent, AdjacencyCell::Present],
                vec![AdjacencyCell::Absent, AdjacencyCell::Absent],
            ],
        );
        assert_eq!(matrix.cell("x", "y"), Some(AdjacencyCell::Present));
        assert_eq!(matrix.cell("y", "x"), Some(AdjacencyCell::Absent));
        assert_eq!(matrix.cell("x", "z"), None);
        assert_eq!(matrix.present_count(), 1);
        assert_eq!(matrix.size(), 2);
    }
}
