//! Raw result value as produced by the graph engine's wire layer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Date, DateTime, Duration, Edge, Geography, Path, Time, Vertex};

/// A single result cell.
///
/// Exactly one payload is active at a time. `Empty` is the state of a cell
/// the engine left unset; it is distinct from `Null`, which carries a
/// [`NullType`] flavour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    #[default]
    Empty,
    Null(NullType),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Raw bytes; the engine does not guarantee UTF-8.
    String(Vec<u8>),

    // Temporal types (UTC fields)
    Date(Date),
    Time(Time),
    DateTime(DateTime),

    // Graph types
    Vertex(Box<Vertex>),
    Edge(Box<Edge>),
    Path(Box<Path>),

    // Containers
    List(Vec<Value>),
    Map(PropertyMap),
    /// Producer-deduplicated sequence. Order is kept as delivered.
    Set(Vec<Value>),

    Geography(Geography),
    Duration(Duration),
}

/// Property names to values, as carried by tags, edges and map values.
pub type PropertyMap = HashMap<String, Value>;

/// Null flavours reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullType {
    #[default]
    Null,
    NaN,
    BadData,
    BadType,
    ErrOverflow,
    UnknownProp,
    DivByZero,
    OutOfRange,
}

impl NullType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullType::Null => "__NULL__",
            NullType::NaN => "NaN",
            NullType::BadData => "BAD_DATA",
            NullType::BadType => "BAD_TYPE",
            NullType::ErrOverflow => "ERR_OVERFLOW",
            NullType::UnknownProp => "UNKNOWN_PROP",
            NullType::DivByZero => "DIV_BY_ZERO",
            NullType::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for NullType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Date,
    Time,
    DateTime,
    Vertex,
    Edge,
    Path,
    List,
    Map,
    Set,
    Geography,
    Duration,
    Empty,
}

impl ValueKind {
    /// Name reported to clients as the cell type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::DateTime => "datetime",
            ValueKind::Vertex => "vertex",
            ValueKind::Edge => "edge",
            ValueKind::Path => "path",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Set => "set",
            ValueKind::Geography => "geography",
            ValueKind::Duration => "duration",
            ValueKind::Empty => "empty",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Empty => ValueKind::Empty,
            Value::Null(_) => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Vertex(_) => ValueKind::Vertex,
            Value::Edge(_) => ValueKind::Edge,
            Value::Path(_) => ValueKind::Path,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Set(_) => ValueKind::Set,
            Value::Geography(_) => ValueKind::Geography,
            Value::Duration(_) => ValueKind::Duration,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_empty(&self) -> bool { matches!(self, Value::Empty) }
    pub fn is_null(&self) -> bool { matches!(self, Value::Null(_)) }
    pub fn is_bool(&self) -> bool { matches!(self, Value::Bool(_)) }
    pub fn is_int(&self) -> bool { matches!(self, Value::Int(_)) }
    pub fn is_float(&self) -> bool { matches!(self, Value::Float(_)) }
    pub fn is_string(&self) -> bool { matches!(self, Value::String(_)) }
    pub fn is_date(&self) -> bool { matches!(self, Value::Date(_)) }
    pub fn is_time(&self) -> bool { matches!(self, Value::Time(_)) }
    pub fn is_date_time(&self) -> bool { matches!(self, Value::DateTime(_)) }
    pub fn is_vertex(&self) -> bool { matches!(self, Value::Vertex(_)) }
    pub fn is_edge(&self) -> bool { matches!(self, Value::Edge(_)) }
    pub fn is_path(&self) -> bool { matches!(self, Value::Path(_)) }
    pub fn is_list(&self) -> bool { matches!(self, Value::List(_)) }
    pub fn is_map(&self) -> bool { matches!(self, Value::Map(_)) }
    pub fn is_set(&self) -> bool { matches!(self, Value::Set(_)) }
    pub fn is_geography(&self) -> bool { matches!(self, Value::Geography(_)) }
    pub fn is_duration(&self) -> bool { matches!(self, Value::Duration(_)) }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v.into_bytes()) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.as_bytes().to_vec()) } }
impl From<NullType> for Value { fn from(v: NullType) -> Self { Value::Null(v) } }
impl From<Date> for Value { fn from(v: Date) -> Self { Value::Date(v) } }
impl From<Time> for Value { fn from(v: Time) -> Self { Value::Time(v) } }
impl From<DateTime> for Value { fn from(v: DateTime) -> Self { Value::DateTime(v) } }
impl From<Vertex> for Value { fn from(v: Vertex) -> Self { Value::Vertex(Box::new(v)) } }
impl From<Edge> for Value { fn from(v: Edge) -> Self { Value::Edge(Box::new(v)) } }
impl From<Path> for Value { fn from(v: Path) -> Self { Value::Path(Box::new(v)) } }
impl From<Geography> for Value { fn from(v: Geography) -> Self { Value::Geography(v) } }
impl From<Duration> for Value { fn from(v: Duration) -> Self { Value::Duration(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
/// `[("k", v), ...]` becomes a map value; later duplicates win.
impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for Value {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null(NullType::Null)) }
}
