//! Node — a validated view over a vertex payload.

use std::collections::HashMap;

use crate::model::{PropertyMap, Value, Vertex};
use crate::{Error, Result};
use super::render::Renderer;
use super::{Context, ValueWrapper};

/// Vertex ids are strings or integers; anything else is malformed.
pub(crate) fn check_vid(vid: &Value, what: &str) -> Result<()> {
    match vid {
        Value::String(_) | Value::Int(_) => Ok(()),
        other => {
            tracing::debug!(kind = other.type_name(), what, "rejecting malformed vertex id");
            Err(Error::StructuralConstruction(format!(
                "{what} id must be a string or an int, got {}",
                other.type_name()
            )))
        }
    }
}

/// Property keys in ascending order.
pub(crate) fn sorted_keys(props: &PropertyMap) -> Vec<&str> {
    let mut keys: Vec<&str> = props.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// A vertex with its tags.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    vertex: &'a Vertex,
    ctx: &'a Context,
}

impl<'a> Node<'a> {
    pub fn new(vertex: &'a Vertex, ctx: &'a Context) -> Result<Self> {
        check_vid(&vertex.vid, "vertex")?;
        Ok(Self { vertex, ctx })
    }

    pub fn vertex(&self) -> &'a Vertex {
        self.vertex
    }

    pub fn id(&self) -> ValueWrapper<'a> {
        ValueWrapper::new(&self.vertex.vid, self.ctx)
    }

    /// Tag names in stored order.
    pub fn tags(&self) -> Vec<&'a str> {
        self.vertex.tags.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.vertex.tags.iter().any(|t| t.name == name)
    }

    fn tag_props(&self, name: &str) -> Result<&'a PropertyMap> {
        let vertex: &'a Vertex = self.vertex;
        vertex
            .tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.props)
            .ok_or_else(|| Error::NotFound(format!("tag '{name}' on vertex")))
    }

    /// Properties of one tag, wrapped under the node's context.
    pub fn properties(&self, tag: &str) -> Result<HashMap<&'a str, ValueWrapper<'a>>> {
        let ctx = self.ctx;
        Ok(self
            .tag_props(tag)?
            .iter()
            .map(|(k, v)| (k.as_str(), ValueWrapper::new(v, ctx)))
            .collect())
    }

    /// Property keys of one tag, sorted.
    pub fn keys(&self, tag: &str) -> Result<Vec<&'a str>> {
        Ok(sorted_keys(self.tag_props(tag)?))
    }

    /// Property values of one tag, in the order of [`Node::keys`].
    pub fn values(&self, tag: &str) -> Result<Vec<ValueWrapper<'a>>> {
        let props = self.tag_props(tag)?;
        Ok(sorted_keys(props)
            .into_iter()
            .filter_map(|k| props.get(k))
            .map(|v| ValueWrapper::new(v, self.ctx))
            .collect())
    }

    /// Same id, tags and properties.
    pub fn is_equal_to(&self, other: &Node<'_>) -> bool {
        self.vertex == other.vertex
    }

    /// `("vid" :tag1{k: v} :tag2{...})`
    pub fn render(&self) -> Result<String> {
        Renderer::new(self.ctx).node(self)
    }
}
