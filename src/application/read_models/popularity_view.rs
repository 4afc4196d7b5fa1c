use serde::Serialize;

/// How many formulas depend on `name` within one relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularityEntry {
    pub name: String,
    pub dependents: usize,
}

impl PopularityEntry {
    pub fn from_counts(counts: Vec<(String, usize)>) -> Vec<PopularityEntry> {
        counts
            .into_iter()
            .map(|(name, dependents)| PopularityEntry { name, dependents })
            .collect()
    }
}
