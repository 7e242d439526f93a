// Binary STL reading and legacy VTK export of the de-duplicated surface mesh

pub mod reader;
pub mod vtk;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Bit-exact identity used for vertex de-duplication.
    pub(crate) fn key(&self) -> [u32; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: usize,
    pub location: Vector3,
}

/// Three vertex ids into [`SurfaceMesh::vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [usize; 3]);

/// Shared-vertex triangle mesh. `vertices[i].id == i` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

/// Read a binary STL file from disk.
pub fn read_stl_file(path: &Path) -> crate::error::Result<SurfaceMesh> {
    tracing::info!(file = %path.display(), "reading STL file");
    let file = File::open(path)?;
    reader::read_stl(BufReader::new(file))
}

/// Write `mesh` as a legacy ASCII VTK PolyData file.
pub fn write_vtk_file(mesh: &SurfaceMesh, path: &Path) -> crate::error::Result<()> {
    tracing::info!(file = %path.display(), "writing VTK file");
    let mut out = BufWriter::new(File::create(path)?);
    vtk::write_vtk(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}
