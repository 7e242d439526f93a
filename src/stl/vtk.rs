use std::io::Write;

use super::SurfaceMesh;

/// Serialize `mesh` as legacy ASCII VTK PolyData (format version 2.0).
///
/// Every vertex is also emitted as a single VERTICES cell.
pub fn write_vtk<W: Write>(mesh: &SurfaceMesh, out: &mut W) -> std::io::Result<()> {
    let n = mesh.vertices.len();

    writeln!(out, "# vtk DataFile Version 2.0")?;
    writeln!(out, "STL to VTK")?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET POLYDATA")?;

    writeln!(out, "POINTS {n} float")?;
    for v in &mesh.vertices {
        writeln!(
            out,
            "{:.6} {:.6} {:.6}",
            v.location.x, v.location.y, v.location.z
        )?;
    }

    writeln!(out, "VERTICES 1 {}", n + 1)?;
    write!(out, "{n}")?;
    for v in &mesh.vertices {
        write!(out, " {}", v.id)?;
    }
    writeln!(out)?;

    let t = mesh.triangles.len();
    writeln!(out, "POLYGONS {t} {}", t * 4)?;
    for tri in &mesh.triangles {
        let [a, b, c] = tri.0;
        writeln!(out, "3 {a} {b} {c}")?;
    }

    Ok(())
}
