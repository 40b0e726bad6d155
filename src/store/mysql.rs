//! MySQL-backed store.

use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Opts, OptsBuilder, Row, Value};
use tracing::{debug, warn};

use super::{Store, StoreError};
use crate::config::StoreSettings;
use crate::table::{Cell, ResultTable};

/// One-shot MySQL fetcher.
///
/// Each [`fetch`](Store::fetch) opens a fresh connection, runs the query, and
/// disconnects before returning, on the failure path too. Connection options
/// are fixed at construction.
pub struct MySqlStore {
    opts: Opts,
}

impl MySqlStore {
    pub fn new(settings: &StoreSettings) -> Self {
        let opts = OptsBuilder::default()
            .ip_or_hostname(settings.host.clone())
            .tcp_port(settings.port)
            .user(Some(settings.user.clone()))
            .pass(Some(settings.password.clone()))
            .db_name(Some(settings.database.clone()));
        Self { opts: Opts::from(opts) }
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn fetch(&self, sql: &str) -> Result<ResultTable, StoreError> {
        let mut conn = Conn::new(self.opts.clone())
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let fetched: Result<Vec<Row>, mysql_async::Error> = conn.query(sql).await;

        // Release the connection before inspecting the outcome so failed
        // queries do not leak it.
        if let Err(e) = conn.disconnect().await {
            warn!(error = %e, "disconnect after fetch failed");
        }

        let rows = fetched.map_err(classify_error)?;
        let table = materialize(rows);
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "fetched result set"
        );
        Ok(table)
    }
}

/// Server-side rejections (bad syntax, missing relation, type mismatch) are
/// query errors; everything else means we could not talk to the store.
fn classify_error(err: mysql_async::Error) -> StoreError {
    match err {
        mysql_async::Error::Server(e) => StoreError::Query(e.to_string()),
        other => StoreError::Connection(other.to_string()),
    }
}

fn materialize(rows: Vec<Row>) -> ResultTable {
    let columns = rows
        .first()
        .map(|row| {
            row.columns_ref()
                .iter()
                .map(|c| c.name_str().into_owned())
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .iter()
        .map(|row| {
            (0..row.len())
                .map(|i| row.as_ref(i).map(cell_from_value).unwrap_or(Cell::Null))
                .collect()
        })
        .collect();

    ResultTable::new(columns, rows)
}

fn cell_from_value(value: &Value) -> Cell {
    match value {
        Value::NULL => Cell::Null,
        Value::Int(i) => Cell::Int(*i),
        Value::UInt(u) => Cell::Int(*u as i64),
        Value::Float(f) => Cell::Float(f64::from(*f)),
        Value::Double(d) => Cell::Float(*d),
        // DECIMAL, VARCHAR and friends arrive as bytes in the text protocol.
        Value::Bytes(b) => Cell::Text(String::from_utf8_lossy(b).into_owned()),
        Value::Date(y, m, d, 0, 0, 0, 0) => Cell::Date(format!("{y:04}-{m:02}-{d:02}")),
        Value::Date(y, m, d, h, min, s, _) => {
            Cell::Date(format!("{y:04}-{m:02}-{d:02} {h:02}:{min:02}:{s:02}"))
        }
        Value::Time(neg, days, h, m, s, _) => {
            let sign = if *neg { "-" } else { "" };
            let hours = u32::from(*h) + days * 24;
            Cell::Text(format!("{sign}{hours:02}:{m:02}:{s:02}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_value_without_time_is_plain_date() {
        let cell = cell_from_value(&Value::Date(2022, 3, 14, 0, 0, 0, 0));
        assert_eq!(cell, Cell::Date("2022-03-14".into()));
    }

    #[test]
    fn test_decimal_bytes_stay_textual() {
        let cell = cell_from_value(&Value::Bytes(b"1234.56".to_vec()));
        assert_eq!(cell, Cell::Text("1234.56".into()));
        assert_eq!(cell.as_f64(), Some(1234.56));
    }

    #[test]
    fn test_unsigned_fits_into_int_cell() {
        assert_eq!(cell_from_value(&Value::UInt(42)), Cell::Int(42));
    }
}
