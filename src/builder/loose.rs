use crate::builder::adjacency::FaceAdjacency;
use crate::types::TriangleMesh;

/// Delete explicit edges that border no face.
///
/// Vertices and triangles are never touched; an explicit edge shared with a
/// surviving triangle stays.
pub fn remove_loose_edges(mesh: &mut TriangleMesh) -> usize {
    if mesh.edges.is_empty() {
        return 0;
    }

    let adj = FaceAdjacency::build(&mesh.triangles);
    let before = mesh.edges.len();
    mesh.edges
        .retain(|&[a, b]| adj.faces_for_edge(a, b).is_some());
    before - mesh.edges.len()
}
