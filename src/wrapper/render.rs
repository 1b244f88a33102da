//! Canonical text rendering.
//!
//! Nested values are expanded with an explicit work stack into a single
//! output buffer, so arbitrarily deep lists/maps never recurse on the call
//! stack and every collection is joined in one pass.

use smallvec::SmallVec;

use crate::model::{PropertyMap, Value, Vertex};
use crate::Result;
use super::{wkt, Context, Node, PathWrapper, Relationship};

/// Pending output, popped in LIFO order.
#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    Value(&'a Value),
    Text(&'static str),
    Str(&'a str),
    Int(i64),
}

type Frames<'a> = SmallVec<[Frame<'a>; 16]>;

pub(crate) struct Renderer<'a> {
    ctx: &'a Context,
    stack: Frames<'a>,
    out: String,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx, stack: SmallVec::new(), out: String::new() }
    }

    pub(crate) fn value(mut self, value: &'a Value) -> Result<String> {
        self.stack.push(Frame::Value(value));
        self.run()
    }

    pub(crate) fn node(mut self, node: &Node<'a>) -> Result<String> {
        let mut frames = Frames::new();
        vertex_frames(node.vertex(), &mut frames);
        self.schedule(frames);
        self.run()
    }

    pub(crate) fn relationship(mut self, rel: &Relationship<'a>) -> Result<String> {
        let mut frames = Frames::new();
        edge_frames(rel, &mut frames);
        self.schedule(frames);
        self.run()
    }

    pub(crate) fn path(mut self, path: &PathWrapper<'a>) -> Result<String> {
        let mut frames = Frames::new();
        path_frames(path, &mut frames);
        self.schedule(frames);
        self.run()
    }

    /// Push frames given in output order.
    fn schedule(&mut self, frames: Frames<'a>) {
        self.stack.extend(frames.into_iter().rev());
    }

    fn run(mut self) -> Result<String> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Text(s) => self.out.push_str(s),
                Frame::Str(s) => self.out.push_str(s),
                Frame::Int(i) => self.out.push_str(&i.to_string()),
                Frame::Value(v) => self.expand(v)?,
            }
        }
        Ok(self.out)
    }

    fn expand(&mut self, value: &'a Value) -> Result<()> {
        let ctx = self.ctx;
        let out = &mut self.out;
        match value {
            Value::Empty => {}
            Value::Null(n) => out.push_str(n.as_str()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => out.push_str(&i.to_string()),
            Value::Float(f) => out.push_str(&format_float(*f)),
            Value::String(bytes) => {
                out.push('"');
                out.push_str(&String::from_utf8_lossy(bytes));
                out.push('"');
            }
            Value::Date(raw) => {
                let date = ctx.factory().gen_date(raw, ctx.timezone())?;
                out.push_str(&date.to_string());
            }
            Value::Time(raw) => {
                let time = ctx.factory().gen_time(raw, ctx.timezone())?;
                out.push_str(&time.to_string());
            }
            Value::DateTime(raw) => {
                let dt = ctx.factory().gen_date_time(raw, ctx.timezone())?;
                out.push_str(&dt.to_string());
            }
            Value::Geography(geo) => wkt::write_wkt(out, geo),
            Value::Duration(d) => out.push_str(&d.to_string()),
            Value::Vertex(vertex) => {
                let node = ctx.factory().gen_node(vertex, ctx)?;
                let mut frames = Frames::new();
                vertex_frames(node.vertex(), &mut frames);
                self.schedule(frames);
            }
            Value::Edge(edge) => {
                let rel = ctx.factory().gen_relationship(edge, ctx)?;
                let mut frames = Frames::new();
                edge_frames(&rel, &mut frames);
                self.schedule(frames);
            }
            Value::Path(path) => {
                let path = ctx.factory().gen_path(path, ctx)?;
                let mut frames = Frames::new();
                path_frames(&path, &mut frames);
                self.schedule(frames);
            }
            Value::List(items) => self.schedule(seq_frames("[", items, "]")),
            Value::Set(items) => self.schedule(seq_frames("{", items, "}")),
            Value::Map(kvs) => {
                let mut frames = Frames::new();
                map_frames(kvs, &mut frames);
                self.schedule(frames);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Frame builders (output order)
// ============================================================================

fn seq_frames<'a>(open: &'static str, items: &'a [Value], close: &'static str) -> Frames<'a> {
    let mut frames = Frames::with_capacity(items.len() * 2 + 1);
    frames.push(Frame::Text(open));
    for (i, item) in items.iter().enumerate() {
        if i > 0 { frames.push(Frame::Text(", ")); }
        frames.push(Frame::Value(item));
    }
    frames.push(Frame::Text(close));
    frames
}

/// `{k0: v0, k1: v1}` with keys in ascending byte order.
fn map_frames<'a>(map: &'a PropertyMap, frames: &mut Frames<'a>) {
    let mut entries: Vec<(&'a String, &'a Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    frames.push(Frame::Text("{"));
    for (i, (k, v)) in entries.into_iter().enumerate() {
        if i > 0 { frames.push(Frame::Text(", ")); }
        frames.push(Frame::Str(k));
        frames.push(Frame::Text(": "));
        frames.push(Frame::Value(v));
    }
    frames.push(Frame::Text("}"));
}

/// `("vid" :tag1{k: v} :tag2{...})`
fn vertex_frames<'a>(vertex: &'a Vertex, frames: &mut Frames<'a>) {
    frames.push(Frame::Text("("));
    frames.push(Frame::Value(&vertex.vid));
    for tag in &vertex.tags {
        frames.push(Frame::Text(" :"));
        frames.push(Frame::Str(&tag.name));
        map_frames(&tag.props, frames);
    }
    frames.push(Frame::Text(")"));
}

/// `("src")-[:name]->("dst")@ranking{k: v}`, arrow reversed for reversed edges.
fn edge_frames<'a>(rel: &Relationship<'a>, frames: &mut Frames<'a>) {
    let edge = rel.edge();
    let (open, close) = if edge.is_reversed() { (")<-[:", "]-(") } else { (")-[:", "]->(") };
    frames.push(Frame::Text("("));
    frames.push(Frame::Value(&edge.src));
    frames.push(Frame::Text(open));
    frames.push(Frame::Str(&edge.name));
    frames.push(Frame::Text(close));
    frames.push(Frame::Value(&edge.dst));
    frames.push(Frame::Text(")@"));
    frames.push(Frame::Int(edge.ranking));
    map_frames(&edge.props, frames);
}

/// `(v1)-[:name@ranking]->(v2)<-[:name@ranking{k: v}]-(v3)`
fn path_frames<'a>(path: &PathWrapper<'a>, frames: &mut Frames<'a>) {
    let raw = path.raw();
    vertex_frames(&raw.src, frames);
    for step in &raw.steps {
        let reversed = step.edge_type < 0;
        frames.push(Frame::Text(if reversed { "<-[:" } else { "-[:" }));
        frames.push(Frame::Str(&step.name));
        frames.push(Frame::Text("@"));
        frames.push(Frame::Int(step.ranking));
        if !step.props.is_empty() {
            map_frames(&step.props, frames);
        }
        frames.push(Frame::Text(if reversed { "]-" } else { "]->" }));
        vertex_frames(&step.dst, frames);
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Shortest round-trip text of `v` in the engine's `%g` style: plain decimal
/// for decimal exponents in `[-4, 6)`, otherwise `d.ddde±XX`.
pub(crate) fn shortest(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{v}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        format!("{v}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Float cell text: shortest form, with `.0` appended when no `.` appears.
pub(crate) fn format_float(v: f64) -> String {
    let mut s = shortest(v);
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}
