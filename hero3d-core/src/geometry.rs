/// Wireframe templates for the hero scene polyhedra
use nalgebra::Vector3;

use crate::error::GeometryError;

/// A point or direction in 3D space
pub type Point3D = Vector3<f64>;

/// An edge between two vertices, by index into the owning vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Object-space vertices and the edges connecting them
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Point3D>,
    pub edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Point3D>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Check that every edge references an existing vertex
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        for (edge_index, edge) in self.edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= vertex_count {
                    return Err(GeometryError::EdgeOutOfRange {
                        edge: edge_index,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Unit cube with corners at every (±1, ±1, ±1).
    ///
    /// Vertex `i` takes +1 on x, y, z when bit 0, 1, 2 of `i` is set.
    pub fn cube() -> Self {
        let vertices = (0..8)
            .map(|i| {
                let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
                Point3D::new(sign(1), sign(2), sign(4))
            })
            .collect();

        let edges = vec![
            // Front face
            Edge::new(0, 1),
            Edge::new(1, 3),
            Edge::new(3, 2),
            Edge::new(2, 0),
            // Back face
            Edge::new(4, 5),
            Edge::new(5, 7),
            Edge::new(7, 6),
            Edge::new(6, 4),
            // Connecting
            Edge::new(0, 4),
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];

        Self::new(vertices, edges)
    }

    /// Octahedron with one vertex on each half-axis
    pub fn octahedron() -> Self {
        let vertices = vec![
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(0.0, -1.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(-1.0, 0.0, 0.0),
            Point3D::new(0.0, 0.0, 1.0),
            Point3D::new(0.0, 0.0, -1.0),
        ];

        let edges = vec![
            // Top pyramid
            Edge::new(0, 2),
            Edge::new(0, 3),
            Edge::new(0, 4),
            Edge::new(0, 5),
            // Bottom pyramid
            Edge::new(1, 2),
            Edge::new(1, 3),
            Edge::new(1, 4),
            Edge::new(1, 5),
            // Equator
            Edge::new(2, 4),
            Edge::new(4, 3),
            Edge::new(3, 5),
            Edge::new(5, 2),
        ];

        Self::new(vertices, edges)
    }

    /// Regular tetrahedron on alternating cube corners
    pub fn tetrahedron() -> Self {
        let vertices = vec![
            Point3D::new(1.0, 1.0, 1.0),
            Point3D::new(-1.0, -1.0, 1.0),
            Point3D::new(-1.0, 1.0, -1.0),
            Point3D::new(1.0, -1.0, -1.0),
        ];

        let edges = vec![
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(0, 3),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 1),
        ];

        Self::new(vertices, edges)
    }
}
