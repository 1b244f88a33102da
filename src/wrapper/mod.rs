//! # Value Wrappers
//!
//! Read-only views over [`crate::model`] values. Every wrapper borrows the
//! raw value and a [`Context`]; nothing here owns or mutates wire data.
//!
//! ```text
//! Value ──wrap(ctx)──> ValueWrapper ──as_*()──> typed payload / Node / PathWrapper
//!                                   └─render()─> canonical text
//! ```

pub mod value;
pub mod temporal;
pub mod node;
pub mod relationship;
pub mod path;
pub mod wkt;
mod render;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{Date, DateTime, Edge, Path, Time, Vertex};
use crate::Result;

pub use value::ValueWrapper;
pub use temporal::{DateWrapper, TimeWrapper, DateTimeWrapper};
pub use node::Node;
pub use relationship::Relationship;
pub use path::{PathWrapper, Segment};
pub use wkt::to_wkt;

// ============================================================================
// Timezone
// ============================================================================

/// Timezone reported by the graph service for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    /// Seconds east of UTC.
    pub offset: i32,
    /// Display name, e.g. `"+08:00"` or `"Asia/Shanghai"`. Not interpreted.
    pub name: String,
}

impl TimezoneInfo {
    pub fn new(offset: i32, name: impl Into<String>) -> Self {
        Self { offset, name: name.into() }
    }

    pub fn utc() -> Self {
        Self::new(0, "UTC")
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Constructs the derived wrappers.
///
/// Engine versions differ in how they encode temporal and graph payloads;
/// a version-specific factory overrides the constructors it needs and keeps
/// the defaults for the rest.
pub trait Factory: Send + Sync + fmt::Debug {
    fn gen_date(&self, raw: &Date, tz: &TimezoneInfo) -> Result<DateWrapper> {
        DateWrapper::new(*raw, tz)
    }

    fn gen_time(&self, raw: &Time, tz: &TimezoneInfo) -> Result<TimeWrapper> {
        TimeWrapper::new(*raw, tz)
    }

    fn gen_date_time(&self, raw: &DateTime, tz: &TimezoneInfo) -> Result<DateTimeWrapper> {
        DateTimeWrapper::new(*raw, tz)
    }

    fn gen_node<'a>(&self, vertex: &'a Vertex, ctx: &'a Context) -> Result<Node<'a>> {
        Node::new(vertex, ctx)
    }

    fn gen_relationship<'a>(&self, edge: &'a Edge, ctx: &'a Context) -> Result<Relationship<'a>> {
        Relationship::new(edge, ctx)
    }

    fn gen_path<'a>(&self, path: &'a Path, ctx: &'a Context) -> Result<PathWrapper<'a>> {
        PathWrapper::new(path, ctx)
    }
}

/// Factory with the stock constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl Factory for DefaultFactory {}

// ============================================================================
// Context
// ============================================================================

/// Shared, read-only state threaded through every wrapper.
#[derive(Debug, Clone)]
pub struct Context {
    factory: Arc<dyn Factory>,
    timezone: TimezoneInfo,
}

impl Context {
    pub fn new(factory: Arc<dyn Factory>, timezone: TimezoneInfo) -> Self {
        Self { factory, timezone }
    }

    /// Default factory with the given timezone.
    pub fn with_timezone(timezone: TimezoneInfo) -> Self {
        Self::new(Arc::new(DefaultFactory), timezone)
    }

    pub fn factory(&self) -> &dyn Factory {
        self.factory.as_ref()
    }

    pub fn timezone(&self) -> &TimezoneInfo {
        &self.timezone
    }

    /// Wrap a raw value for inspection under this context.
    pub fn wrap<'a>(&'a self, value: &'a crate::model::Value) -> ValueWrapper<'a> {
        ValueWrapper::new(value, self)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::with_timezone(TimezoneInfo::utc())
    }
}
