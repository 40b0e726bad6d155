//! The selection pipeline.
//!
//! One selection event runs label → SQL → fetch → classify → render and
//! answers with a [`Selection`] or a tagged [`DashboardError`]. The pipeline
//! holds no per-request state beyond the immutable catalog and rule table, so
//! a failed selection never taints the next one.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{CatalogError, QueryCatalog};
use crate::store::{Store, StoreError};
use crate::table::ResultTable;
use crate::viz::{self, ChartDirective, RenderError, RenderedFigure, RuleSet};

/// Everything that can go wrong while answering one selection.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl DashboardError {
    /// Stable tag for API payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardError::Catalog(_) => "lookup",
            DashboardError::Store(StoreError::Connection(_)) => "connection",
            DashboardError::Store(StoreError::Query(_)) => "query",
            DashboardError::Render(_) => "render",
        }
    }
}

/// The answer to one selection: the table plus the chart drawn from it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub label: String,
    pub table: ResultTable,
    pub directive: ChartDirective,
    pub figure: RenderedFigure,
}

/// Catalog + store + rule table, wired into one pipeline.
pub struct Dashboard {
    catalog: QueryCatalog,
    store: Arc<dyn Store>,
    rules: RuleSet,
}

impl Dashboard {
    pub fn new(catalog: QueryCatalog, store: Arc<dyn Store>, rules: RuleSet) -> Self {
        Self {
            catalog,
            store,
            rules,
        }
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    /// Answer one selection event.
    ///
    /// Errors propagate as values; nothing here retries, and the dashboard
    /// stays usable after any failure.
    pub async fn select(&self, label: &str) -> Result<Selection, DashboardError> {
        let sql = self.catalog.sql_for(label)?;
        debug!(%label, "running catalog query");

        let table = self.store.fetch(sql).await?;

        let classification = self.rules.classify(label);
        let directive = ChartDirective::derive(label, classification, &table)?;
        let figure = viz::render(&table, &directive)?;

        info!(
            %label,
            rows = table.row_count(),
            chart = directive.kind.as_str(),
            "selection answered"
        );
        Ok(Selection {
            label: label.to_string(),
            table,
            directive,
            figure,
        })
    }
}
