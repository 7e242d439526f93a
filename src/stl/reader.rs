use std::collections::HashMap;
use std::io::{ErrorKind, Read};

use super::{SurfaceMesh, Triangle, Vector3, Vertex};
use crate::error::ToolError;

const HEADER_LEN: usize = 80;
const NORMAL_LEN: usize = 12;
const ATTRIBUTE_LEN: usize = 2;
const ASCII_MARKER: &[u8] = b"solid ";

/// Parse a binary STL stream.
///
/// Vertices with bit-identical coordinates are merged; ids follow first appearance.
/// ASCII STL (header starting with `solid `) is rejected.
pub fn read_stl<R: Read>(mut input: R) -> crate::error::Result<SurfaceMesh> {
    let mut header = [0u8; HEADER_LEN];
    read_exact(&mut input, &mut header, "header")?;
    if header.starts_with(ASCII_MARKER) {
        return Err(ToolError::stl(
            "ASCII files are not yet supported. Please save the STL file in BINARY format.",
        ));
    }
    tracing::debug!(header = %String::from_utf8_lossy(&header).trim_end_matches('\0'), "STL header");

    let mut count = [0u8; 4];
    read_exact(&mut input, &mut count, "triangle count")?;
    let triangle_count = u32::from_le_bytes(count) as usize;
    tracing::info!(triangles = triangle_count, "number of triangles");

    let mut index: HashMap<[u32; 3], usize> = HashMap::new();
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut triangles = Vec::with_capacity(triangle_count.min(1 << 20));

    let mut record = [0u8; NORMAL_LEN + 36 + ATTRIBUTE_LEN];
    for i in 0..triangle_count {
        read_exact(&mut input, &mut record, &format!("triangle {i}"))?;

        let coords = &record[NORMAL_LEN..NORMAL_LEN + 36];
        let mut ids = [0usize; 3];
        for (corner, id) in ids.iter_mut().enumerate() {
            let at = |k: usize| {
                let off = (corner * 3 + k) * 4;
                f32::from_le_bytes([coords[off], coords[off + 1], coords[off + 2], coords[off + 3]])
            };
            let location = Vector3 {
                x: at(0),
                y: at(1),
                z: at(2),
            };
            *id = *index.entry(location.key()).or_insert_with(|| {
                let id = vertices.len();
                vertices.push(Vertex { id, location });
                id
            });
        }
        triangles.push(Triangle(ids));
    }

    Ok(SurfaceMesh {
        vertices,
        triangles,
    })
}

fn read_exact<R: Read>(input: &mut R, buf: &mut [u8], what: &str) -> crate::error::Result<()> {
    input.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            ToolError::stl(format!("truncated STL file while reading {what}"))
        } else {
            ToolError::Io(e)
        }
    })
}
