//! Well-Known-Text encoding of geography values.

use crate::model::{Coordinate, Geography};
use super::render::shortest;

/// Encode `geo` as WKT. An absent geography encodes as the empty string.
pub fn to_wkt(geo: Option<&Geography>) -> String {
    let mut out = String::new();
    if let Some(geo) = geo {
        write_wkt(&mut out, geo);
    }
    out
}

pub(crate) fn write_wkt(out: &mut String, geo: &Geography) {
    match geo {
        Geography::Point(pt) => {
            out.push_str("POINT(");
            write_coord(out, &pt.coord);
            out.push(')');
        }
        Geography::LineString(ls) => {
            out.push_str("LINESTRING(");
            write_coords(out, &ls.coord_list);
            out.push(')');
        }
        Geography::Polygon(pg) => {
            out.push_str("POLYGON(");
            for (i, ring) in pg.coord_list_list.iter().enumerate() {
                if i > 0 { out.push_str(", "); }
                out.push('(');
                write_coords(out, ring);
                out.push(')');
            }
            out.push(')');
        }
    }
}

fn write_coords(out: &mut String, coords: &[Coordinate]) {
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 { out.push_str(", "); }
        write_coord(out, coord);
    }
}

fn write_coord(out: &mut String, coord: &Coordinate) {
    out.push_str(&shortest(coord.x));
    out.push(' ');
    out.push_str(&shortest(coord.y));
}

impl std::fmt::Display for Geography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_wkt(Some(self)))
    }
}
