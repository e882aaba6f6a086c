//! STL parsing, binary and ASCII.
//!
//! Binary layout: an 80-byte header (ignored), a little-endian `u32`
//! triangle count, then 50 bytes per triangle (normal and three vertices
//! as 12 little-endian `f32`, plus a 2-byte attribute count, ignored).
//!
//! ASCII grammar:
//!
//! ```text
//! solid NAME
//!   facet normal ni nj nk
//!     outer loop
//!       vertex x y z   (three times)
//!     endloop
//!   endfacet
//!   ...
//! endsolid NAME
//! ```
//!
//! The two formats are told apart by the `solid` prefix of the first five
//! bytes.

use std::fs;
use std::path::Path;

use strata_math::{Point3, Vec3};
use tracing::debug;

use crate::{Mesh, MeshError, Result, Triangle};

/// Load an STL mesh from disk.
///
/// Rejects files without an `.stl` extension, then auto-detects binary
/// vs. ASCII content.
pub fn load(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let is_stl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
    if !is_stl {
        return Err(MeshError::UnsupportedFormat(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let mesh = parse(&bytes)?;
    debug!(
        triangles = mesh.num_triangles(),
        path = %path.display(),
        "loaded STL mesh"
    );
    Ok(mesh)
}

/// Parse STL data, auto-detecting binary vs. ASCII.
pub fn parse(bytes: &[u8]) -> Result<Mesh> {
    if bytes.starts_with(b"solid") {
        parse_ascii(bytes)
    } else {
        parse_binary(bytes)
    }
}

/// Parse binary STL data.
pub fn parse_binary(bytes: &[u8]) -> Result<Mesh> {
    const HEADER: usize = 80 + 4;
    const RECORD: usize = 50;

    if bytes.len() < HEADER {
        return Err(MeshError::Syntax(
            "file too short for a binary STL header".into(),
        ));
    }

    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    let body = &bytes[HEADER..];
    if body.len() < count * RECORD {
        return Err(MeshError::Syntax(format!(
            "header declares {count} triangles but the file is truncated"
        )));
    }

    let mut triangles = Vec::with_capacity(count);
    for record in body.chunks_exact(RECORD).take(count) {
        let f = |i: usize| {
            let o = i * 4;
            f32::from_le_bytes([record[o], record[o + 1], record[o + 2], record[o + 3]]) as f64
        };
        triangles.push(Triangle {
            normal: Vec3::new(f(0), f(1), f(2)),
            vertices: [
                Point3::new(f(3), f(4), f(5)),
                Point3::new(f(6), f(7), f(8)),
                Point3::new(f(9), f(10), f(11)),
            ],
        });
        // Trailing 2 attribute bytes are ignored.
    }

    Ok(Mesh::new(triangles))
}

/// Parse ASCII STL data.
pub fn parse_ascii(bytes: &[u8]) -> Result<Mesh> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| MeshError::Syntax("ASCII STL is not valid UTF-8".into()))?;

    let header_end = text.find('\n').unwrap_or(text.len());
    let header = text[..header_end].trim();
    if header != "solid" && !header.starts_with("solid ") {
        return Err(MeshError::Syntax(
            "first line must start with `solid`".into(),
        ));
    }

    let mut tokens = text[header_end..].split_whitespace();
    let mut triangles = Vec::new();
    loop {
        match tokens.next() {
            Some("facet") => triangles.push(parse_facet(&mut tokens)?),
            Some("endsolid") => break,
            Some(other) => {
                return Err(MeshError::Syntax(format!(
                    "unexpected `{other}`, expected `facet` or `endsolid`"
                )))
            }
            None => return Err(MeshError::Syntax("missing `endsolid`".into())),
        }
    }

    Ok(Mesh::new(triangles))
}

/// Parse one facet body, after its leading `facet` keyword.
fn parse_facet<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Triangle> {
    expect(tokens, "normal")?;
    let normal = Vec3::new(float(tokens)?, float(tokens)?, float(tokens)?);

    expect(tokens, "outer")?;
    expect(tokens, "loop")?;

    let mut vertices = [Point3::origin(); 3];
    for vertex in &mut vertices {
        expect(tokens, "vertex")?;
        *vertex = Point3::new(float(tokens)?, float(tokens)?, float(tokens)?);
    }

    expect(tokens, "endloop")?;
    expect(tokens, "endfacet")?;

    Ok(Triangle { normal, vertices })
}

fn expect<'a>(tokens: &mut impl Iterator<Item = &'a str>, keyword: &str) -> Result<()> {
    match tokens.next() {
        Some(token) if token == keyword => Ok(()),
        Some(token) => Err(MeshError::Syntax(format!(
            "expected `{keyword}`, found `{token}`"
        ))),
        None => Err(MeshError::Syntax(format!(
            "expected `{keyword}`, found end of file"
        ))),
    }
}

fn float<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64> {
    let token = tokens
        .next()
        .ok_or_else(|| MeshError::Syntax("expected a number, found end of file".into()))?;
    token
        .parse()
        .map_err(|_| MeshError::Syntax(format!("expected a number, found `{token}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SINGLE_FACET: &str = "solid test
facet normal 0 0 1
    outer loop
        vertex 0 0 0
        vertex 1 0 0
        vertex 0 1 0
    endloop
endfacet
endsolid test
";

    #[test]
    fn test_ascii_single_facet() {
        let mesh = parse(SINGLE_FACET.as_bytes()).unwrap();
        assert_eq!(mesh.num_triangles(), 1);
        let tri = &mesh.triangles[0];
        assert_relative_eq!(tri.normal.z, 1.0);
        assert_relative_eq!(tri.vertices[1].x, 1.0);
        assert_relative_eq!(tri.vertices[2].y, 1.0);
    }

    #[test]
    fn test_ascii_scientific_notation() {
        let data = SINGLE_FACET.replace("vertex 1 0 0", "vertex 1.5e-1 0 0");
        let mesh = parse(data.as_bytes()).unwrap();
        assert_relative_eq!(mesh.triangles[0].vertices[1].x, 0.15);
    }

    #[test]
    fn test_ascii_missing_endsolid() {
        let data = SINGLE_FACET.replace("endsolid test\n", "");
        let err = parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, MeshError::Syntax(_)), "got {err:?}");
    }

    #[test]
    fn test_ascii_bad_keyword() {
        let data = SINGLE_FACET.replace("outer loop", "outer hoop");
        let err = parse(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected `loop`"), "got {err}");
    }

    #[test]
    fn test_ascii_bad_number() {
        let data = SINGLE_FACET.replace("vertex 0 1 0", "vertex 0 one 0");
        let err = parse(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected a number"), "got {err}");
    }

    #[test]
    fn test_ascii_missing_header() {
        let err = parse_ascii(b"facet normal 0 0 1").unwrap_err();
        assert!(err.to_string().contains("solid"), "got {err}");
    }

    /// Serialize triangles into binary STL bytes.
    fn binary_stl(triangles: &[[f32; 12]]) -> Vec<u8> {
        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            for value in tri {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
            bytes.extend_from_slice(&[0, 0]);
        }
        bytes
    }

    #[test]
    fn test_binary_roundtrip() {
        let bytes = binary_stl(&[
            [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, -1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 2.0, 0.0, 1.0, 2.0],
        ]);
        let mesh = parse(&bytes).unwrap();
        assert_eq!(mesh.num_triangles(), 2);
        assert_relative_eq!(mesh.triangles[1].vertices[0].z, 2.0);
        assert_relative_eq!(mesh.triangles[1].normal.z, -1.0);
    }

    #[test]
    fn test_binary_truncated() {
        let mut bytes = binary_stl(&[[0.0; 12]]);
        bytes.truncate(bytes.len() - 10);
        let err = parse(&bytes).unwrap_err();
        assert!(err.to_string().contains("truncated"), "got {err}");
    }

    #[test]
    fn test_binary_short_header() {
        let err = parse(&[0u8; 40]).unwrap_err();
        assert!(matches!(err, MeshError::Syntax(_)));
    }

    #[test]
    fn test_load_rejects_extension() {
        let err = load("model.obj").unwrap_err();
        assert!(matches!(err, MeshError::UnsupportedFormat(_)));
    }
}
