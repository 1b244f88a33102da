//! Edge payload.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A directed edge as returned by the engine.
///
/// The sign of `edge_type` carries direction: a negative type means the
/// edge was reached from its destination, so `src`/`dst` are swapped
/// relative to the stored edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: Value,
    pub dst: Value,
    pub edge_type: i32,
    pub name: String,
    pub ranking: i64,
    pub props: PropertyMap,
}

impl Edge {
    pub fn new(src: impl Into<Value>, dst: impl Into<Value>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            edge_type: 1,
            name: name.into(),
            ranking: 0,
            props: PropertyMap::new(),
        }
    }

    pub fn with_type(mut self, edge_type: i32) -> Self {
        self.edge_type = edge_type;
        self
    }

    pub fn with_ranking(mut self, ranking: i64) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.edge_type < 0
    }
}
