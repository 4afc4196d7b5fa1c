use serde::Serialize;

/// What the entries of an analytics document are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Formula,
    Cask,
}

impl ItemKind {
    pub fn key(self) -> &'static str {
        match self {
            ItemKind::Formula => "formula",
            ItemKind::Cask => "cask",
        }
    }
}

/// One normalized entry of an analytics document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountRow {
    pub name: String,
    pub count: u64,
    pub percent: f64,
}

/// A normalized analytics document: typed rows in API rank order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsTable {
    kind: ItemKind,
    rows: Vec<CountRow>,
}

impl AnalyticsTable {
    pub fn new(kind: ItemKind, rows: Vec<CountRow>) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn rows(&self) -> &[CountRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
