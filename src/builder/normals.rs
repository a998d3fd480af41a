use std::collections::VecDeque;

use glam::DVec3;

use crate::builder::adjacency::FaceAdjacency;
use crate::types::TriangleMesh;

/// Geometric normal of face `f` (cross product of two edges, unnormalized).
pub fn face_normal(mesh: &TriangleMesh, f: usize) -> DVec3 {
    let [a, b, c] = mesh.triangles[f];
    let pa = mesh.position(a as usize);
    let pb = mesh.position(b as usize);
    let pc = mesh.position(c as usize);
    (pb - pa).cross(pc - pa)
}

/// Propagate a consistent winding across each connected face patch.
///
/// Two faces sharing an edge agree when they traverse that edge in opposite
/// directions; a neighbor traversing it in the same direction gets two of
/// its indices swapped. Flood fill from an arbitrary seed per patch, seed
/// winding kept as-is. Orientation is consistent, not volume-outward.
///
/// Returns the number of faces flipped.
pub fn orient_consistent(mesh: &mut TriangleMesh) -> usize {
    let face_count = mesh.triangles.len();
    if face_count == 0 {
        return 0;
    }

    let adj = FaceAdjacency::build(&mesh.triangles);
    let mut visited = vec![false; face_count];
    let mut queue = VecDeque::new();
    let mut flipped = 0;

    for seed in 0..face_count {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(f) = queue.pop_front() {
            let tri = mesh.triangles[f];
            let directed = [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])];

            for (from, to) in directed {
                let Some(faces) = adj.faces_for_edge(from, to) else {
                    continue;
                };
                for &n in faces {
                    if n == f || visited[n] {
                        continue;
                    }
                    if traverses(&mesh.triangles[n], from, to) {
                        mesh.triangles[n].swap(1, 2);
                        flipped += 1;
                    }
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }
    }

    flipped
}

/// Whether `tri` contains the directed edge `from -> to`.
fn traverses(tri: &[u32; 3], from: u32, to: u32) -> bool {
    (tri[0] == from && tri[1] == to)
        || (tri[1] == from && tri[2] == to)
        || (tri[2] == from && tri[0] == to)
}
