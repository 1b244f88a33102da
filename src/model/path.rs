//! Path payload — a start vertex followed by steps.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value, Vertex};

/// One hop of a path: the edge taken and the vertex it lands on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub dst: Vertex,
    /// Negative when the hop follows the edge against its stored direction.
    pub edge_type: i32,
    pub name: String,
    pub ranking: i64,
    pub props: PropertyMap,
}

impl Step {
    pub fn new(dst: Vertex, name: impl Into<String>, edge_type: i32, ranking: i64) -> Self {
        Self { dst, edge_type, name: name.into(), ranking, props: PropertyMap::new() }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// A path in the graph: src -[step]-> dst -[step]-> dst ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub src: Vertex,
    pub steps: Vec<Step>,
}

impl Path {
    pub fn single(src: Vertex) -> Self {
        Self { src, steps: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn end(&self) -> &Vertex {
        self.steps.last().map(|s| &s.dst).unwrap_or(&self.src)
    }

    /// Extend the path with one more hop.
    pub fn append(&mut self, step: Step) {
        self.steps.push(step);
    }
}
