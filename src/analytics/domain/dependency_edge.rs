use serde::{Deserialize, Serialize};

/// Directed relation: `package` depends on `depends_on`.
///
/// Serialized as a `[package, depends_on]` pair so edge files stay compact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct DependencyEdge {
    pub package: String,
    pub depends_on: String,
}

impl DependencyEdge {
    pub fn new(package: impl Into<String>, depends_on: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            depends_on: depends_on.into(),
        }
    }
}

impl From<(String, String)> for DependencyEdge {
    fn from((package, depends_on): (String, String)) -> Self {
        Self {
            package,
            depends_on,
        }
    }
}

impl From<DependencyEdge> for (String, String) {
    fn from(edge: DependencyEdge) -> Self {
        (edge.package, edge.depends_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_serializes_as_pair() {
        let edge = DependencyEdge::new("wget", "openssl@3");
        assert_eq!(
            serde_json::to_string(&edge).unwrap(),
            r#"["wget","openssl@3"]"#
        );
    }

    #[test]
    fn test_edge_list_deserializes_from_pairs() {
        let edges: Vec<DependencyEdge> =
            serde_json::from_str(r#"[["a","b"],["a","c"]]"#).unwrap();
        assert_eq!(
            edges,
            vec![DependencyEdge::new("a", "b"), DependencyEdge::new("a", "c")]
        );
    }
}
