//! PathWrapper — a validated view over a path payload.

use crate::model::{Edge, Path, Value};
use crate::Result;
use super::render::Renderer;
use super::{Context, Node, Relationship};

/// One hop, oriented the way the edge is stored: `start` is the edge source.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub start: Node<'a>,
    pub relationship: Relationship<'a>,
    pub end: Node<'a>,
}

/// A path of nodes joined by relationships.
///
/// Relationships are normalized to their stored direction, so a hop that
/// walked an edge backwards yields the edge as `next -> current`.
#[derive(Debug, Clone)]
pub struct PathWrapper<'a> {
    path: &'a Path,
    ctx: &'a Context,
    nodes: Vec<Node<'a>>,
    edges: Vec<Edge>,
}

impl<'a> PathWrapper<'a> {
    pub fn new(path: &'a Path, ctx: &'a Context) -> Result<Self> {
        let mut nodes = Vec::with_capacity(path.steps.len() + 1);
        let mut edges = Vec::with_capacity(path.steps.len());
        let mut current = Node::new(&path.src, ctx)?;
        nodes.push(current);

        for step in &path.steps {
            let next = Node::new(&step.dst, ctx)?;
            let (src, dst) = if step.edge_type < 0 {
                (&step.dst.vid, &current.vertex().vid)
            } else {
                (&current.vertex().vid, &step.dst.vid)
            };
            let edge = Edge {
                src: src.clone(),
                dst: dst.clone(),
                edge_type: step.edge_type.saturating_abs(),
                name: step.name.clone(),
                ranking: step.ranking,
                props: step.props.clone(),
            };
            Relationship::new(&edge, ctx)?;
            edges.push(edge);
            nodes.push(next);
            current = next;
        }

        Ok(Self { path, ctx, nodes, edges })
    }

    pub fn raw(&self) -> &'a Path {
        self.path
    }

    /// Number of hops.
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    pub fn relationships(&self) -> Vec<Relationship<'_>> {
        self.edges
            .iter()
            .map(|e| Relationship::from_checked(e, self.ctx))
            .collect()
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        self.path
            .steps
            .iter()
            .zip(self.relationships())
            .enumerate()
            .map(|(i, (step, relationship))| {
                let (current, next) = (self.nodes[i], self.nodes[i + 1]);
                if step.edge_type < 0 {
                    Segment { start: next, relationship, end: current }
                } else {
                    Segment { start: current, relationship, end: next }
                }
            })
            .collect()
    }

    pub fn start_node(&self) -> Node<'a> {
        self.nodes[0]
    }

    pub fn end_node(&self) -> Node<'a> {
        self.nodes[self.nodes.len() - 1]
    }

    /// True if a vertex with the same id lies on the path.
    pub fn contains_node(&self, node: &Node<'_>) -> bool {
        let vid = &node.vertex().vid;
        self.nodes.iter().any(|n| &n.vertex().vid == vid)
    }

    /// True if the same stored edge (endpoints, name, ranking) is on the path.
    pub fn contains_relationship(&self, rel: &Relationship<'_>) -> bool {
        let wanted = stored_key(rel.edge());
        self.edges.iter().any(|e| stored_key(e) == wanted)
    }

    /// `(v1)-[:name@ranking]->(v2)<-[:name@ranking]-(v3)`
    pub fn render(&self) -> Result<String> {
        Renderer::new(self.ctx).path(self)
    }
}

fn stored_key(edge: &Edge) -> (&Value, &Value, &str, i64) {
    if edge.is_reversed() {
        (&edge.dst, &edge.src, &edge.name, edge.ranking)
    } else {
        (&edge.src, &edge.dst, &edge.name, edge.ranking)
    }
}
