//! # nebula-wrapper — Typed Graph Query Results
//!
//! Extraction and canonical text rendering of the values a graph query
//! engine returns: scalars, temporals, vertices, edges, paths, containers,
//! geography and durations.
//!
//! ## Design Principles
//!
//! 1. **True sum type**: `Value` holds exactly one payload; there is no
//!    "two fields set" state to disambiguate
//! 2. **Explicit context**: timezone and factory travel by reference into
//!    every nested wrapper, never through globals
//! 3. **Fallible everywhere**: type mismatches and malformed payloads are
//!    `Err`, never panics
//! 4. **Stable text**: `render()` output is a compatibility surface
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_wrapper::{Context, TimezoneInfo, Value};
//!
//! # fn example() -> nebula_wrapper::Result<()> {
//! let ctx = Context::with_timezone(TimezoneInfo::new(8 * 3600, "+08:00"));
//! let value = Value::from(vec![("b", 1), ("a", 2)]);
//!
//! let wrapped = ctx.wrap(&value);
//! assert_eq!(wrapped.get_type(), "map");
//! assert_eq!(wrapped.render()?, "{a: 2, b: 1}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod wrapper;
pub mod gateway;

// ============================================================================
// Re-exports: Model (the wire DTOs)
// ============================================================================

pub use model::{
    Value, NullType, ValueKind, PropertyMap,
    Vertex, Tag, Edge, Path, Step,
    Geography, Coordinate,
    Date, Time, DateTime, Duration,
};

// ============================================================================
// Re-exports: Wrappers
// ============================================================================

pub use wrapper::{
    Context, TimezoneInfo, Factory, DefaultFactory,
    ValueWrapper, Node, Relationship, PathWrapper, Segment,
    DateWrapper, TimeWrapper, DateTimeWrapper,
    to_wkt,
};

// ============================================================================
// Re-exports: Gateway boundary
// ============================================================================

pub use gateway::{
    GatewayConfig, ExecuteRequest, Response,
    Connector, SessionRegistry, SessionId,
    QueryResult, ExecuteResult,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to convert value {actual} to {expected}")]
    TypeMismatch { expected: ValueKind, actual: ValueKind },

    #[error("Temporal construction error: {0}")]
    TemporalConstruction(String),

    #[error("Structural construction error: {0}")]
    StructuralConstruction(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
