use crate::error::RenderError;
use log::error;
use nalgebra::Vector4;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Local-space geometry: homogeneous vertices, directed edges, per-vertex
/// colors, and the triangles derived from the edges.
///
/// Triangles are computed once in the constructor and never change.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vector4<f32>>,
    edges: Vec<[usize; 2]>,
    triangles: Vec<[usize; 3]>,
    colors: Vec<[u8; 3]>,
}

impl Mesh {
    /// Builds a mesh without validating anything.
    ///
    /// Bad indices or a short color list do not fail here; the renderer
    /// skips triangles it cannot resolve.
    pub fn new(vertices: Vec<Vector4<f32>>, edges: Vec<[usize; 2]>, colors: Vec<[u8; 3]>) -> Self {
        let triangles = triangles_from_edges(&edges);
        Self {
            vertices,
            edges,
            triangles,
            colors,
        }
    }

    /// Same as [`Mesh::new`] but rejects out-of-range edges, self loops and a
    /// color list whose length differs from the vertex list.
    pub fn try_new(
        vertices: Vec<Vector4<f32>>,
        edges: Vec<[usize; 2]>,
        colors: Vec<[u8; 3]>,
    ) -> Result<Self, RenderError> {
        validate(&vertices, &edges, &colors).inspect_err(|e| error!("Invalid mesh: {}", e))?;
        Ok(Self::new(vertices, edges, colors))
    }

    /// Axis-aligned cube centered on the origin. See [`cube_geometry`].
    pub fn cube(length: f32, colors: Vec<[u8; 3]>) -> Self {
        let (vertices, edges) = cube_geometry(length);
        Self::new(vertices, edges, colors)
    }

    pub fn vertices(&self) -> &[Vector4<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

/// Vertices and edges of a cube with side `length`, centered on the origin.
///
/// The 18 edges are grouped by first endpoint in ascending order and
/// describe two triangles per face.
#[rustfmt::skip]
pub fn cube_geometry(length: f32) -> (Vec<Vector4<f32>>, Vec<[usize; 2]>) {
    let a = length / 2.0;

    let vertices = vec![
        Vector4::new( a,  a,  a, 1.0),
        Vector4::new(-a,  a,  a, 1.0),
        Vector4::new( a, -a,  a, 1.0),
        Vector4::new(-a, -a,  a, 1.0),
        Vector4::new( a,  a, -a, 1.0),
        Vector4::new(-a,  a, -a, 1.0),
        Vector4::new( a, -a, -a, 1.0),
        Vector4::new(-a, -a, -a, 1.0),
    ];

    let edges = vec![
        [0, 1], [0, 2], [0, 3], [0, 4], [0, 6],
        [1, 3], [1, 4], [1, 5],
        [2, 3], [2, 6], [2, 7],
        [3, 5], [3, 7],
        [4, 5], [4, 6], [4, 7],
        [5, 7],
        [6, 7],
    ];

    (vertices, edges)
}

/// Derives triangular faces from a directed edge list.
///
/// `(v0, v1, v2)` is a triangle when `(v0, v1)` and `(v0, v2)` are both
/// stored, `(v0, v1)` comes first in the list, and `(v1, v2)` is stored in
/// exactly that direction. Edges sharing a first endpoint need not be
/// adjacent in the input. The result is deduplicated and sorted.
pub fn triangles_from_edges(edges: &[[usize; 2]]) -> Vec<[usize; 3]> {
    let stored: HashSet<[usize; 2]> = edges.iter().copied().collect();

    let mut fans: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &[from, to] in edges {
        fans.entry(from).or_default().push(to);
    }

    let mut triangles = BTreeSet::new();
    for (&v0, targets) in &fans {
        for (i, &v1) in targets.iter().enumerate() {
            for &v2 in &targets[i + 1..] {
                if stored.contains(&[v1, v2]) {
                    triangles.insert([v0, v1, v2]);
                }
            }
        }
    }

    triangles.into_iter().collect()
}

fn validate(
    vertices: &[Vector4<f32>],
    edges: &[[usize; 2]],
    colors: &[[u8; 3]],
) -> Result<(), RenderError> {
    if colors.len() != vertices.len() {
        return Err(RenderError::ColorCountMismatch {
            vertices: vertices.len(),
            colors: colors.len(),
        });
    }

    for (edge, &[from, to]) in edges.iter().enumerate() {
        if let Some(&vertex) = [from, to].iter().find(|&&v| v >= vertices.len()) {
            return Err(RenderError::EdgeOutOfRange {
                edge,
                vertex,
                vertex_count: vertices.len(),
            });
        }
        if from == to {
            return Err(RenderError::SelfLoop { edge, vertex: from });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_triangles() {
        let cube = Mesh::cube(2.0, vec![[0, 0, 0]; 8]);
        assert_eq!(cube.edges().len(), 18);
        assert_eq!(cube.triangles().len(), 12);

        let stored: HashSet<[usize; 2]> = cube.edges().iter().copied().collect();
        let connected = |a: usize, b: usize| stored.contains(&[a, b]) || stored.contains(&[b, a]);

        for &[a, b, c] in cube.triangles() {
            assert!(a != b && b != c && a != c);
            assert!(connected(a, b) && connected(b, c) && connected(a, c));
        }
    }

    #[test]
    fn test_cube_triangles_pair_up_per_face() {
        let cube = Mesh::cube(2.0, vec![[0, 0, 0]; 8]);
        let v = cube.vertices();

        // Every face is an axis plane at +-1; count triangles lying on each.
        let mut per_face = BTreeMap::new();
        for t in cube.triangles() {
            for axis in 0..3 {
                let value = v[t[0]][axis];
                if t.iter().all(|&i| v[i][axis] == value) {
                    *per_face.entry((axis, value > 0.0)).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(per_face.len(), 6);
        assert!(per_face.values().all(|&n| n == 2));
    }

    #[test]
    fn test_edge_direction_matters() {
        // (0,1), (0,2) with (2,1) stored backwards: no triangle.
        assert!(triangles_from_edges(&[[0, 1], [0, 2], [2, 1]]).is_empty());
        assert_eq!(triangles_from_edges(&[[0, 1], [0, 2], [1, 2]]), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_ungrouped_edges_still_found() {
        let shuffled = [[1, 2], [0, 1], [3, 0], [0, 2]];
        assert_eq!(triangles_from_edges(&shuffled), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_duplicate_edges_deduplicated() {
        let edges = [[0, 1], [0, 2], [0, 1], [1, 2], [1, 2]];
        assert_eq!(triangles_from_edges(&edges), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        let verts = vec![Vector4::new(0.0, 0.0, 0.0, 1.0); 3];

        let err = Mesh::try_new(verts.clone(), vec![[0, 3]], vec![[0, 0, 0]; 3]).unwrap_err();
        assert!(matches!(err, RenderError::EdgeOutOfRange { edge: 0, vertex: 3, vertex_count: 3 }));

        let err = Mesh::try_new(verts.clone(), vec![[0, 1], [2, 2]], vec![[0, 0, 0]; 3]).unwrap_err();
        assert!(matches!(err, RenderError::SelfLoop { edge: 1, vertex: 2 }));

        let err = Mesh::try_new(verts.clone(), vec![], vec![[0, 0, 0]; 2]).unwrap_err();
        assert!(matches!(err, RenderError::ColorCountMismatch { vertices: 3, colors: 2 }));

        assert!(Mesh::try_new(verts, vec![[0, 1], [0, 2], [1, 2]], vec![[0, 0, 0]; 3]).is_ok());
    }

    #[test]
    fn test_permissive_new_accepts_anything() {
        let mesh = Mesh::new(vec![], vec![[0, 7], [0, 9], [7, 9]], vec![]);
        assert_eq!(mesh.triangles(), &[[0, 7, 9]]);
    }
}
