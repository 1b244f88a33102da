//! # Wire Model
//!
//! Raw result values exactly as the engine's deserializer produces them.
//! Pure data — no I/O, no state, no timezone handling.

pub mod value;
pub mod vertex;
pub mod edge;
pub mod path;
pub mod geography;
pub mod temporal;

pub use value::{Value, NullType, ValueKind, PropertyMap};
pub use vertex::{Vertex, Tag};
pub use edge::Edge;
pub use path::{Path, Step};
pub use geography::{Geography, Coordinate, Point, LineString, Polygon};
pub use temporal::{Date, Time, DateTime, Duration};
