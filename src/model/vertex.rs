//! Vertex payload: an id plus an ordered list of tags.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A tag attached to a vertex, with its properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub props: PropertyMap,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), props: PropertyMap::new() }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// A vertex as returned by the engine. `vid` is a string or an integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub vid: Value,
    pub tags: Vec<Tag>,
}

impl Vertex {
    pub fn new(vid: impl Into<Value>) -> Self {
        Self { vid: vid.into(), tags: Vec::new() }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}
