//! Query result tables.

use serde::{Deserialize, Serialize};

use crate::model::Value;
use crate::wrapper::{Context, TimezoneInfo};
use crate::{Error, Result};

/// Raw result as returned by a [`super::Connector`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Timezone of the graph service that produced the rows.
    pub timezone: TimezoneInfo,
    /// Server-side latency in microseconds.
    pub latency_us: i64,
}

/// Rendered result: one `{column: text}` object per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResult {
    pub headers: Vec<String>,
    pub tables: Vec<serde_json::Map<String, serde_json::Value>>,
    pub time_cost: i64,
}

impl ExecuteResult {
    pub fn from_query(result: &QueryResult, ctx: &Context) -> Result<Self> {
        let width = result.columns.len();
        let mut tables = Vec::with_capacity(result.rows.len());
        for (i, row) in result.rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::ExecutionError(format!(
                    "row {i} has {} cells, expected {width}",
                    row.len()
                )));
            }
            let mut cells = serde_json::Map::with_capacity(width);
            for (column, value) in result.columns.iter().zip(row) {
                let text = ctx.wrap(value).render()?;
                cells.insert(column.clone(), serde_json::Value::String(text));
            }
            tables.push(cells);
        }
        Ok(Self {
            headers: result.columns.clone(),
            tables,
            time_cost: result.latency_us,
        })
    }
}
