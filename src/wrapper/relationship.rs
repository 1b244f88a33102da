//! Relationship — a validated view over an edge payload.

use std::collections::HashMap;

use crate::model::Edge;
use crate::{Error, Result};
use super::node::{check_vid, sorted_keys};
use super::render::Renderer;
use super::{Context, ValueWrapper};

#[derive(Debug, Clone, Copy)]
pub struct Relationship<'a> {
    edge: &'a Edge,
    ctx: &'a Context,
}

impl<'a> Relationship<'a> {
    pub fn new(edge: &'a Edge, ctx: &'a Context) -> Result<Self> {
        check_vid(&edge.src, "edge source")?;
        check_vid(&edge.dst, "edge destination")?;
        if edge.src.kind() != edge.dst.kind() {
            return Err(Error::StructuralConstruction(format!(
                "edge '{}' mixes {} and {} vertex ids",
                edge.name,
                edge.src.type_name(),
                edge.dst.type_name()
            )));
        }
        Ok(Self { edge, ctx })
    }

    /// For edges already validated by `new`.
    pub(crate) fn from_checked(edge: &'a Edge, ctx: &'a Context) -> Self {
        Self { edge, ctx }
    }

    pub fn edge(&self) -> &'a Edge {
        self.edge
    }

    pub fn src_vertex_id(&self) -> ValueWrapper<'a> {
        ValueWrapper::new(&self.edge.src, self.ctx)
    }

    pub fn dst_vertex_id(&self) -> ValueWrapper<'a> {
        ValueWrapper::new(&self.edge.dst, self.ctx)
    }

    pub fn edge_name(&self) -> &'a str {
        &self.edge.name
    }

    pub fn ranking(&self) -> i64 {
        self.edge.ranking
    }

    /// True when the edge was reached against its stored direction.
    pub fn is_reversed(&self) -> bool {
        self.edge.is_reversed()
    }

    pub fn properties(&self) -> HashMap<&'a str, ValueWrapper<'a>> {
        let edge: &'a Edge = self.edge;
        edge.props
            .iter()
            .map(|(k, v)| (k.as_str(), ValueWrapper::new(v, self.ctx)))
            .collect()
    }

    /// Property keys, sorted.
    pub fn keys(&self) -> Vec<&'a str> {
        let edge: &'a Edge = self.edge;
        sorted_keys(&edge.props)
    }

    /// Property values in the order of [`Relationship::keys`].
    pub fn values(&self) -> Vec<ValueWrapper<'a>> {
        let edge: &'a Edge = self.edge;
        sorted_keys(&edge.props)
            .into_iter()
            .filter_map(|k| edge.props.get(k))
            .map(|v| ValueWrapper::new(v, self.ctx))
            .collect()
    }

    pub fn is_equal_to(&self, other: &Relationship<'_>) -> bool {
        self.edge == other.edge
    }

    /// `("src")-[:name]->("dst")@ranking{k: v}`
    pub fn render(&self) -> Result<String> {
        Renderer::new(self.ctx).relationship(self)
    }
}
