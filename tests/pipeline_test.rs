//! End-to-end pipeline tests over a canned store.

use std::sync::Arc;

use retail_insights::{
    CatalogVariant, Cell, ChartKind, Dashboard, DashboardError, MockStore, Palette, QueryCatalog,
    ResultTable, RuleSet, StoreError,
};

fn dashboard_with(store: MockStore) -> Dashboard {
    Dashboard::new(
        QueryCatalog::new(CatalogVariant::Core),
        Arc::new(store),
        RuleSet::standard(),
    )
}

fn revenue_per_year() -> ResultTable {
    ResultTable::new(
        vec!["year".into(), "total_revenue".into()],
        vec![
            vec![Cell::Int(2021), Cell::Text("1000".into())],
            vec![Cell::Int(2022), Cell::Text("1500".into())],
        ],
    )
}

#[tokio::test]
async fn test_revenue_per_year_selection() {
    let dashboard = dashboard_with(MockStore::with_table(revenue_per_year()));

    let selection = dashboard
        .select("10. Total revenue generated per year")
        .await
        .unwrap();

    // Coolwarm bar, two bars, store order preserved.
    assert_eq!(selection.directive.kind, ChartKind::Bar);
    assert_eq!(selection.directive.palette, Palette::Coolwarm);
    assert_eq!(selection.directive.x_column, "year");
    assert_eq!(selection.directive.y_column, "total_revenue");
    assert_eq!(selection.table.label_column(), vec!["2021", "2022"]);
    assert_eq!(
        selection.table.numeric_column(1),
        Some(vec![1000.0, 1500.0])
    );
    assert!(selection.figure.svg.contains("<svg"));
    assert!(selection
        .figure
        .svg
        .contains("10. Total revenue generated per year"));
}

#[tokio::test]
async fn test_discount_selection_renders_pie() {
    let table = ResultTable::new(
        vec!["category".into(), "total_discount".into()],
        vec![
            vec![Cell::Text("Furniture".into()), Cell::Float(320.0)],
            vec![Cell::Text("Technology".into()), Cell::Float(180.0)],
        ],
    );
    let dashboard = dashboard_with(MockStore::with_table(table));

    let selection = dashboard
        .select("3. Total discount given for each category")
        .await
        .unwrap();
    assert_eq!(selection.directive.kind, ChartKind::Pie);
}

#[tokio::test]
async fn test_unknown_label_is_a_lookup_error() {
    let dashboard = dashboard_with(MockStore::with_table(revenue_per_year()));

    let err = dashboard.select("99. Not in the catalog").await.unwrap_err();
    assert!(matches!(err, DashboardError::Catalog(_)));
    assert_eq!(err.kind(), "lookup");
}

#[tokio::test]
async fn test_unreachable_store_surfaces_as_connection_error() {
    let dashboard = dashboard_with(MockStore::failing(StoreError::Connection(
        "Connection refused (os error 111)".into(),
    )));

    let err = dashboard
        .select("6. Total profit per category")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Store(StoreError::Connection(_))
    ));
    assert_eq!(err.kind(), "connection");
}

#[tokio::test]
async fn test_rejected_query_surfaces_as_query_error() {
    let dashboard = dashboard_with(MockStore::failing(StoreError::Query(
        "Table 'retail_orders.ro_table' doesn't exist".into(),
    )));

    let err = dashboard
        .select("6. Total profit per category")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "query");
}

#[tokio::test]
async fn test_narrow_result_is_a_render_error() {
    let table = ResultTable::new(vec!["count".into()], vec![vec![Cell::Int(5)]]);
    let dashboard = dashboard_with(MockStore::with_table(table));

    let err = dashboard
        .select("6. Total profit per category")
        .await
        .unwrap_err();
    assert!(matches!(err, DashboardError::Render(_)));
    assert_eq!(err.kind(), "render");
}

#[tokio::test]
async fn test_failure_does_not_block_the_next_selection() {
    // Selection events are isolated: after a failed fetch the same pipeline
    // wiring answers the next request normally.
    let failing = dashboard_with(MockStore::failing(StoreError::Connection(
        "store down".into(),
    )));
    assert!(failing
        .select("6. Total profit per category")
        .await
        .is_err());

    let recovered = dashboard_with(MockStore::with_table(revenue_per_year()));
    assert!(recovered
        .select("10. Total revenue generated per year")
        .await
        .is_ok());

    // And the failing dashboard itself still answers catalog lookups.
    assert_eq!(failing.catalog().len(), 10);
    assert!(failing
        .select("10. Total revenue generated per year")
        .await
        .is_err());
}
