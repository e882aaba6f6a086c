#![warn(missing_docs)]

//! SVG export of sliced cross-sections.
//!
//! A [`Polygon`](strata_slicer::Polygon) renders as a single `<path>`
//! with the even-odd fill rule, one closed subpath per loop, so holes
//! punch through the filled exterior without any winding bookkeeping.

use std::io;
use std::path::Path as FilePath;

use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use strata_slicer::{Polygon, SimplePolygon};

/// Build an SVG document for one cross-section, scaled uniformly.
pub fn document(polygon: &Polygon, scale: f64) -> Document {
    let mut data = Data::new();
    for path in polygon.paths() {
        data = subpath(data, path, scale);
    }

    let path = Path::new().set("fill-rule", "evenodd").set("d", data);

    Document::new()
        .set("height", "100%")
        .set("width", "100%")
        .set("style", "fill: darkgrey; stroke: black; stroke-width: 2;")
        .add(path)
}

/// Append one closed subpath (`M … L … z`) to the path data.
fn subpath(mut data: Data, path: &SimplePolygon, scale: f64) -> Data {
    let mut points = path.points.iter().map(|p| (p.x * scale, p.y * scale));
    let Some(first) = points.next() else {
        return data;
    };

    data = data.move_to(first);
    for point in points {
        data = data.line_to(point);
    }
    data.close()
}

/// Write one cross-section to an SVG file.
pub fn save(path: impl AsRef<FilePath>, polygon: &Polygon, scale: f64) -> io::Result<()> {
    svg::save(path, &document(polygon, scale))
}
