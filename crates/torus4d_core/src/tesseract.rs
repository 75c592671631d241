//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w)
//! and 32 edges. Two vertices share an edge when they differ in exactly
//! one coordinate.

use torus4d_math::Vec4;

pub const TESSERACT_VERTEX_COUNT: usize = 16;
pub const TESSERACT_EDGE_COUNT: usize = 32;

/// Wireframe tesseract shared by every placement
#[derive(Clone, Debug)]
pub struct TesseractMesh {
    vertices: [Vec4; TESSERACT_VERTEX_COUNT],
    edges: [(usize, usize); TESSERACT_EDGE_COUNT],
}

impl TesseractMesh {
    /// Create a tesseract whose coordinates are all `±scale`
    pub fn new(scale: f32) -> Self {
        let s = scale;

        // Using binary counting: bit k of the index selects the sign of axis k
        let vertices = [
            Vec4::new(-s, -s, -s, -s), // 0  = 0b0000
            Vec4::new( s, -s, -s, -s), // 1  = 0b0001
            Vec4::new(-s,  s, -s, -s), // 2  = 0b0010
            Vec4::new( s,  s, -s, -s), // 3  = 0b0011
            Vec4::new(-s, -s,  s, -s), // 4  = 0b0100
            Vec4::new( s, -s,  s, -s), // 5  = 0b0101
            Vec4::new(-s,  s,  s, -s), // 6  = 0b0110
            Vec4::new( s,  s,  s, -s), // 7  = 0b0111
            Vec4::new(-s, -s, -s,  s), // 8  = 0b1000
            Vec4::new( s, -s, -s,  s), // 9  = 0b1001
            Vec4::new(-s,  s, -s,  s), // 10 = 0b1010
            Vec4::new( s,  s, -s,  s), // 11 = 0b1011
            Vec4::new(-s, -s,  s,  s), // 12 = 0b1100
            Vec4::new( s, -s,  s,  s), // 13 = 0b1101
            Vec4::new(-s,  s,  s,  s), // 14 = 0b1110
            Vec4::new( s,  s,  s,  s), // 15 = 0b1111
        ];

        Self {
            vertices,
            edges: Self::compute_edges(),
        }
    }

    pub fn vertices(&self) -> &[Vec4; TESSERACT_VERTEX_COUNT] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize); TESSERACT_EDGE_COUNT] {
        &self.edges
    }

    /// Index pairs whose binary representations differ in one bit
    fn compute_edges() -> [(usize, usize); TESSERACT_EDGE_COUNT] {
        let mut edges = [(0usize, 0usize); TESSERACT_EDGE_COUNT];
        let mut n = 0;
        for i in 0..TESSERACT_VERTEX_COUNT {
            for axis in 0..4 {
                let j = i ^ (1 << axis);
                if i < j {
                    edges[n] = (i, j);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, TESSERACT_EDGE_COUNT);
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tesseract_vertex_count() {
        let t = TesseractMesh::new(1.0);
        assert_eq!(t.vertices().len(), 16);
    }

    #[test]
    fn test_tesseract_vertices_positions() {
        let t = TesseractMesh::new(0.15);
        assert_eq!(t.vertices()[0], Vec4::splat(-0.15));
        assert_eq!(t.vertices()[15], Vec4::splat(0.15));
        for v in t.vertices() {
            for c in v.to_array() {
                assert_eq!(c.abs(), 0.15);
            }
        }
    }

    #[test]
    fn test_edges_differ_in_one_coordinate() {
        let t = TesseractMesh::new(1.0);
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for &(a, b) in t.edges() {
            assert!(a < b);
            assert_eq!((a ^ b).count_ones(), 1, "({}, {}) is not an edge", a, b);

            let va = t.vertices()[a].to_array();
            let vb = t.vertices()[b].to_array();
            let differing = va.iter().zip(vb.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(differing, 1);

            assert!(seen.insert((a, b)), "duplicate edge ({}, {})", a, b);
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let t = TesseractMesh::new(1.0);
        let mut degree = [0; 16];
        for &(a, b) in t.edges() {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }
}
