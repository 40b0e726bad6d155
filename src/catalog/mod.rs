//! Fixed catalog of analytical queries.
//!
//! Every question the dashboard can answer is a pre-written SQL aggregation
//! keyed by a human-readable label. The catalog is built once at startup and
//! never mutated; query text is opaque here and passed to the store verbatim
//! (including vendor extensions such as `YEAR()` and `LAG() OVER`).

mod queries;

use serde::{Deserialize, Serialize};

/// Error type for catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown query label: {0}")]
    UnknownLabel(String),
}

/// Which built-in catalog to serve.
///
/// The project ships two historical sets of questions over the retail orders
/// schema; neither is canonical, so the choice is a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// Ten single-table aggregations over `ro_table`.
    #[default]
    Core,
    /// Twenty queries joining `orders` and `products`, including window
    /// functions and `HAVING` filters.
    Extended,
}

impl CatalogVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogVariant::Core => "core",
            CatalogVariant::Extended => "extended",
        }
    }
}

/// One catalog entry: a display label and the SQL it stands for.
#[derive(Debug, Clone, Copy)]
pub struct QueryEntry {
    pub label: &'static str,
    pub sql: &'static str,
}

/// Ordered, immutable mapping from label to query text.
#[derive(Debug, Clone)]
pub struct QueryCatalog {
    entries: &'static [QueryEntry],
}

impl QueryCatalog {
    /// Build the catalog for the given variant.
    pub fn new(variant: CatalogVariant) -> Self {
        let entries = match variant {
            CatalogVariant::Core => queries::CORE,
            CatalogVariant::Extended => queries::EXTENDED,
        };
        Self { entries }
    }

    /// Labels in declaration order, each exactly once.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }

    /// The SQL text behind a label.
    pub fn sql_for(&self, label: &str) -> Result<&'static str, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.sql)
            .ok_or_else(|| CatalogError::UnknownLabel(label.to_string()))
    }

    pub fn entries(&self) -> &'static [QueryEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCatalog {
    fn default() -> Self {
        Self::new(CatalogVariant::default())
    }
}
