use crate::analytics::domain::{DependencyEdge, PackageMetadata, RelationKind};
use std::collections::HashMap;

/// DependencyGraphBuilder service flattening formula metadata into edges
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    /// Emits one `(package, depends_on)` edge per entry of the selected
    /// relation list. Edges are not deduplicated.
    pub fn build_edges(metadata: &[PackageMetadata], kind: RelationKind) -> Vec<DependencyEdge> {
        metadata
            .iter()
            .flat_map(|m| {
                m.relation(kind)
                    .iter()
                    .map(move |dep| DependencyEdge::new(m.name.clone(), dep.clone()))
            })
            .collect()
    }

    /// How many times each formula is depended upon, most popular first.
    /// Ties are ordered by name.
    pub fn depended_upon_counts(edges: &[DependencyEdge]) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for edge in edges {
            *counts.entry(edge.depends_on.as_str()).or_default() += 1;
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str, deps: &[&str]) -> PackageMetadata {
        PackageMetadata {
            name: name.to_string(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            ..PackageMetadata::default()
        }
    }

    #[test]
    fn test_build_edges_cardinality() {
        let all = vec![
            metadata("wget", &["libidn2", "openssl@3"]),
            metadata("zlib", &[]),
            PackageMetadata::empty("missing"),
            metadata("curl", &["openssl@3"]),
        ];

        let edges = DependencyGraphBuilder::build_edges(&all, RelationKind::Dependencies);
        let expected: usize = all.iter().map(|m| m.dependencies.len()).sum();
        assert_eq!(edges.len(), expected);
        assert_eq!(edges[0], DependencyEdge::new("wget", "libidn2"));
        assert_eq!(edges[2], DependencyEdge::new("curl", "openssl@3"));
    }

    #[test]
    fn test_build_edges_selects_relation() {
        let mut wget = metadata("wget", &["openssl@3"]);
        wget.optional_dependencies = vec!["gpgme".to_string()];

        let edges = DependencyGraphBuilder::build_edges(&[wget], RelationKind::Optional);
        assert_eq!(edges, vec![DependencyEdge::new("wget", "gpgme")]);
    }

    #[test]
    fn test_build_edges_keeps_duplicates() {
        let edges = DependencyGraphBuilder::build_edges(
            &[metadata("a", &["b", "b"])],
            RelationKind::Dependencies,
        );
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_depended_upon_counts() {
        let edges = vec![
            DependencyEdge::new("wget", "openssl@3"),
            DependencyEdge::new("curl", "openssl@3"),
            DependencyEdge::new("curl", "brotli"),
            DependencyEdge::new("wget", "apr"),
        ];

        let counts = DependencyGraphBuilder::depended_upon_counts(&edges);
        assert_eq!(
            counts,
            vec![
                ("openssl@3".to_string(), 2),
                ("apr".to_string(), 1),
                ("brotli".to_string(), 1),
            ]
        );
    }
}
