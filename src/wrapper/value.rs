//! ValueWrapper — typed access to a raw [`Value`] under a [`Context`].

use std::collections::HashMap;

use crate::model::{Date, Duration, Geography, NullType, Value, ValueKind};
use crate::{Error, Result};
use super::render::Renderer;
use super::{Context, DateTimeWrapper, Node, PathWrapper, Relationship, TimeWrapper};

/// Borrowed handle pairing a value with the context used to interpret it.
///
/// Cheap to copy; every nested wrapper it hands out shares the same context.
#[derive(Debug, Clone, Copy)]
pub struct ValueWrapper<'a> {
    value: &'a Value,
    ctx: &'a Context,
}

impl<'a> ValueWrapper<'a> {
    pub fn new(value: &'a Value, ctx: &'a Context) -> Self {
        Self { value, ctx }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn context(&self) -> &'a Context {
        self.ctx
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Type name as reported to clients (`"int"`, `"vertex"`, `"empty"`, ...).
    pub fn get_type(&self) -> &'static str {
        self.value.type_name()
    }

    fn mismatch(&self, expected: ValueKind) -> Error {
        Error::TypeMismatch { expected, actual: self.kind() }
    }

    fn wrap(&self, value: &'a Value) -> ValueWrapper<'a> {
        ValueWrapper::new(value, self.ctx)
    }

    // ========================================================================
    // Discriminant predicates
    // ========================================================================

    pub fn is_empty(&self) -> bool { self.value.is_empty() }
    pub fn is_null(&self) -> bool { self.value.is_null() }
    pub fn is_bool(&self) -> bool { self.value.is_bool() }
    pub fn is_int(&self) -> bool { self.value.is_int() }
    pub fn is_float(&self) -> bool { self.value.is_float() }
    pub fn is_string(&self) -> bool { self.value.is_string() }
    pub fn is_date(&self) -> bool { self.value.is_date() }
    pub fn is_time(&self) -> bool { self.value.is_time() }
    pub fn is_date_time(&self) -> bool { self.value.is_date_time() }
    pub fn is_vertex(&self) -> bool { self.value.is_vertex() }
    pub fn is_edge(&self) -> bool { self.value.is_edge() }
    pub fn is_path(&self) -> bool { self.value.is_path() }
    pub fn is_list(&self) -> bool { self.value.is_list() }
    pub fn is_set(&self) -> bool { self.value.is_set() }
    pub fn is_map(&self) -> bool { self.value.is_map() }
    pub fn is_geography(&self) -> bool { self.value.is_geography() }
    pub fn is_duration(&self) -> bool { self.value.is_duration() }

    // ========================================================================
    // Scalar extraction
    // ========================================================================

    pub fn as_null(&self) -> Result<NullType> {
        match self.value {
            Value::Null(n) => Ok(*n),
            _ => Err(self.mismatch(ValueKind::Null)),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self.value {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self.value {
            Value::Int(i) => Ok(*i),
            _ => Err(self.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self.value {
            Value::Float(f) => Ok(*f),
            _ => Err(self.mismatch(ValueKind::Float)),
        }
    }

    /// String payload, decoded as UTF-8 with replacement of invalid bytes.
    pub fn as_string(&self) -> Result<String> {
        match self.value {
            Value::String(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// String payload as delivered.
    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        match self.value {
            Value::String(bytes) => Ok(bytes.as_slice()),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    pub fn as_date(&self) -> Result<Date> {
        match self.value {
            Value::Date(d) => Ok(*d),
            _ => Err(self.mismatch(ValueKind::Date)),
        }
    }

    pub fn as_geography(&self) -> Result<&'a Geography> {
        match self.value {
            Value::Geography(g) => Ok(g),
            _ => Err(self.mismatch(ValueKind::Geography)),
        }
    }

    pub fn as_duration(&self) -> Result<Duration> {
        match self.value {
            Value::Duration(d) => Ok(*d),
            _ => Err(self.mismatch(ValueKind::Duration)),
        }
    }

    // ========================================================================
    // Temporal extraction (localized through the context)
    // ========================================================================

    pub fn as_time(&self) -> Result<TimeWrapper> {
        match self.value {
            Value::Time(raw) => self.ctx.factory().gen_time(raw, self.ctx.timezone()),
            _ => Err(self.mismatch(ValueKind::Time)),
        }
    }

    pub fn as_date_time(&self) -> Result<DateTimeWrapper> {
        match self.value {
            Value::DateTime(raw) => self.ctx.factory().gen_date_time(raw, self.ctx.timezone()),
            _ => Err(self.mismatch(ValueKind::DateTime)),
        }
    }

    // ========================================================================
    // Composite extraction
    // ========================================================================

    /// List elements in delivered order.
    pub fn as_list(&self) -> Result<Vec<ValueWrapper<'a>>> {
        match self.value {
            Value::List(items) => Ok(items.iter().map(|v| self.wrap(v)).collect()),
            _ => Err(self.mismatch(ValueKind::List)),
        }
    }

    /// Set elements in delivered order. No deduplication happens here.
    pub fn as_dedup_list(&self) -> Result<Vec<ValueWrapper<'a>>> {
        match self.value {
            Value::Set(items) => Ok(items.iter().map(|v| self.wrap(v)).collect()),
            _ => Err(self.mismatch(ValueKind::Set)),
        }
    }

    /// Map entries. Iteration order is unspecified.
    pub fn as_map(&self) -> Result<HashMap<&'a str, ValueWrapper<'a>>> {
        match self.value {
            Value::Map(kvs) => Ok(kvs.iter().map(|(k, v)| (k.as_str(), self.wrap(v))).collect()),
            _ => Err(self.mismatch(ValueKind::Map)),
        }
    }

    pub fn as_node(&self) -> Result<Node<'a>> {
        match self.value {
            Value::Vertex(vertex) => self.ctx.factory().gen_node(vertex, self.ctx),
            _ => Err(self.mismatch(ValueKind::Vertex)),
        }
    }

    pub fn as_relationship(&self) -> Result<Relationship<'a>> {
        match self.value {
            Value::Edge(edge) => self.ctx.factory().gen_relationship(edge, self.ctx),
            _ => Err(self.mismatch(ValueKind::Edge)),
        }
    }

    pub fn as_path(&self) -> Result<PathWrapper<'a>> {
        match self.value {
            Value::Path(path) => self.ctx.factory().gen_path(path, self.ctx),
            _ => Err(self.mismatch(ValueKind::Path)),
        }
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Canonical text of the value.
    ///
    /// Map keys are sorted; lists and sets keep their order. Temporal values
    /// are localized with the context timezone. Construction failures of
    /// nested temporal or graph values are returned, never swallowed.
    pub fn render(&self) -> Result<String> {
        Renderer::new(self.ctx).value(self.value)
    }
}
