use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata of one formula, as published by the formula API.
///
/// Only the fields the dependency pipeline needs are decoded; every list
/// defaults to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub recommended_dependencies: Vec<String>,
    #[serde(default)]
    pub optional_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_requirements")]
    pub requirements: Vec<String>,
}

impl PackageMetadata {
    /// Metadata with no relations, used when a formula could not be fetched
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn relation(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Dependencies => &self.dependencies,
            RelationKind::Recommended => &self.recommended_dependencies,
            RelationKind::Optional => &self.optional_dependencies,
            RelationKind::Requirements => &self.requirements,
        }
    }
}

/// Requirements are objects (`{"name": "xcode", ...}`) in the live API but
/// plain strings in exported files; accept both.
fn deserialize_requirements<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Requirement {
        Name(String),
        Object { name: String },
    }

    let requirements = Option::<Vec<Requirement>>::deserialize(deserializer)?;
    Ok(requirements
        .unwrap_or_default()
        .into_iter()
        .map(|r| match r {
            Requirement::Name(name) | Requirement::Object { name } => name,
        })
        .collect())
}

/// Which metadata list a dependency relation is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    #[default]
    Dependencies,
    Recommended,
    Optional,
    Requirements,
}

impl std::str::FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dependencies" | "deps" => Ok(RelationKind::Dependencies),
            "recommended" | "recommended_dependencies" => Ok(RelationKind::Recommended),
            "optional" | "optional_dependencies" => Ok(RelationKind::Optional),
            "requirements" => Ok(RelationKind::Requirements),
            _ => Err(format!(
                "Invalid relation: {}. Please specify 'dependencies', 'recommended', 'optional' or 'requirements'",
                s
            )),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Dependencies => write!(f, "dependencies"),
            RelationKind::Recommended => write!(f, "recommended"),
            RelationKind::Optional => write!(f, "optional"),
            RelationKind::Requirements => write!(f, "requirements"),
        }
    }
}

/// Result of a best-effort metadata fetch for one formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MetadataOutcome {
    Available(PackageMetadata),
    Unavailable { reason: String },
}

impl MetadataOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, MetadataOutcome::Available(_))
    }

    /// The fetched metadata, or an empty record named `name` when unavailable
    pub fn metadata_or_empty(&self, name: &str) -> PackageMetadata {
        match self {
            MetadataOutcome::Available(metadata) => metadata.clone(),
            MetadataOutcome::Unavailable { .. } => PackageMetadata::empty(name),
        }
    }
}

/// Formula name -> fetch outcome, one entry per requested name
pub type MetadataCollection = BTreeMap<String, MetadataOutcome>;

/// Flattens a collection into metadata records, substituting empty
/// metadata for unavailable entries
pub fn collection_metadata(collection: &MetadataCollection) -> Vec<PackageMetadata> {
    collection
        .iter()
        .map(|(name, outcome)| outcome.metadata_or_empty(name))
        .collect()
}
