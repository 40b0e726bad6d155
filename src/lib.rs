//! # Retail Insights
//!
//! A browser-based analytics dashboard over a relational store of retail
//! order/product records. The user picks a named analytical question from a
//! fixed catalog; the server runs the corresponding pre-written SQL
//! aggregation against MySQL and answers with the result table plus an
//! auto-selected chart (bar or pie) rendered as SVG.
//!
//! ## Architecture
//!
//! One linear pipeline per selection event:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Presentation Shell (web)                 │
//! │        dropdown of catalog labels, table, chart          │
//! └─────────────────────────────────────────────────────────┘
//!                          │ label
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Query Catalog (catalog)                 │
//! │          fixed, ordered (label, SQL) entries             │
//! └─────────────────────────────────────────────────────────┘
//!                          │ SQL
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Data Fetcher (store)                   │
//! │       connect → execute → materialize → disconnect       │
//! └─────────────────────────────────────────────────────────┘
//!                          │ ResultTable
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │              Visualization Selector (viz)                │
//! │     keyword rule table → ChartDirective → SVG figure     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Query planning, joins, aggregation and window functions are the store's
//! job; tabular shape comes back as-is. This crate only wires the pipeline
//! and picks the chart.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod store;
pub mod table;
pub mod viz;
pub mod web;

pub use catalog::{CatalogError, CatalogVariant, QueryCatalog, QueryEntry};
pub use config::{Settings, SettingsError, StoreSettings};
pub use dashboard::{Dashboard, DashboardError, Selection};
pub use store::{MockStore, MySqlStore, Store, StoreError};
pub use table::{Cell, ResultTable};
pub use viz::{
    ChartDirective, ChartKind, Palette, RenderError, RenderedFigure, RuleSet, RulesetKind,
};
