use std::io::Write;

use crate::error::Result;
use crate::types::TriangleMesh;

/// Write `mesh` as Wavefront OBJ.
///
/// One `v` line per vertex, 1-indexed `f` lines for triangles, `l` lines
/// for surviving explicit edges.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, out: &mut W) -> Result<()> {
    for v in mesh.positions.chunks_exact(3) {
        writeln!(out, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for &[a, b, c] in &mesh.triangles {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    for &[a, b] in &mesh.edges {
        writeln!(out, "l {} {}", a + 1, b + 1)?;
    }
    Ok(())
}
