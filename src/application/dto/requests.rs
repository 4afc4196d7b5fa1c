use crate::analytics::domain::RelationKind;
use std::path::PathBuf;

/// Where a dependency command gets its edges from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSourceSpec {
    /// Collect metadata for every formula in the install tables
    Live { refresh: bool },
    /// Load a previously exported edges file
    File(PathBuf),
}

/// Request for the dependency commands (`edges`, `tree`, `matrix`)
#[derive(Debug, Clone)]
pub struct DependencyRequest {
    pub relation: RelationKind,
    pub source: EdgeSourceSpec,
}

impl DependencyRequest {
    pub fn live(relation: RelationKind, refresh: bool) -> Self {
        Self {
            relation,
            source: EdgeSourceSpec::Live { refresh },
        }
    }

    pub fn from_file(relation: RelationKind, path: PathBuf) -> Self {
        Self {
            relation,
            source: EdgeSourceSpec::File(path),
        }
    }
}
