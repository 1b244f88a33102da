//! Geography payloads: point, line string and polygon.

use serde::{Deserialize, Serialize};

/// Planar coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coord: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub coord_list: Vec<Coordinate>,
}

/// Polygon as a list of rings. Rings are kept verbatim; closure is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub coord_list_list: Vec<Vec<Coordinate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geography {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
}

impl Geography {
    pub fn point(x: f64, y: f64) -> Self {
        Geography::Point(Point { coord: Coordinate::new(x, y) })
    }

    pub fn line_string(coords: impl IntoIterator<Item = impl Into<Coordinate>>) -> Self {
        Geography::LineString(LineString {
            coord_list: coords.into_iter().map(Into::into).collect(),
        })
    }

    pub fn polygon<R, C>(rings: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        Geography::Polygon(Polygon {
            coord_list_list: rings
                .into_iter()
                .map(|ring| ring.into_iter().map(Into::into).collect())
                .collect(),
        })
    }
}
