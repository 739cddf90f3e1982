//! Unit cube geometry
//!
//! The cube is modeled with 24 vertices rather than 8 so each face can
//! carry its own texture coordinates. `positions[i]` and `tex_coords[i]`
//! always describe the same logical vertex; the index buffer stitches
//! them into 12 triangles, two per face, wound to face outward.

/// Number of logical vertices in the cube (4 per face, 6 faces)
pub const VERTEX_COUNT: usize = 24;

/// Number of indices in the cube (3 per triangle, 2 triangles per face)
pub const INDEX_COUNT: usize = 36;

/// Geometry for a unit cube centered at the origin
///
/// Edge length 1.0, so every coordinate is ±0.5. The data is plain CPU
/// memory; [`GeometryBuffers`](super::buffers::GeometryBuffers) uploads
/// it once into immutable GPU buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    /// Vertex positions, four per face
    pub positions: [[f32; 3]; VERTEX_COUNT],

    /// Texture coordinates, paired with `positions` by index
    pub tex_coords: [[f32; 2]; VERTEX_COUNT],

    /// Triangle indices into the vertex arrays
    pub indices: [u16; INDEX_COUNT],
}

impl CubeMesh {
    /// The unit cube used by the renderer
    #[rustfmt::skip]
    pub fn unit() -> Self {
        Self {
            positions: [
                // front face
                [-0.5, -0.5,  0.5],
                [ 0.5, -0.5,  0.5],
                [ 0.5,  0.5,  0.5],
                [-0.5,  0.5,  0.5],

                // back face
                [-0.5, -0.5, -0.5],
                [ 0.5, -0.5, -0.5],
                [ 0.5,  0.5, -0.5],
                [-0.5,  0.5, -0.5],

                // right face
                [ 0.5, -0.5,  0.5],
                [ 0.5, -0.5, -0.5],
                [ 0.5,  0.5, -0.5],
                [ 0.5,  0.5,  0.5],

                // left face
                [-0.5, -0.5,  0.5],
                [-0.5, -0.5, -0.5],
                [-0.5,  0.5, -0.5],
                [-0.5,  0.5,  0.5],

                // top face
                [-0.5,  0.5,  0.5],
                [ 0.5,  0.5,  0.5],
                [ 0.5,  0.5, -0.5],
                [-0.5,  0.5, -0.5],

                // bottom face
                [-0.5, -0.5,  0.5],
                [ 0.5, -0.5,  0.5],
                [ 0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
            ],
            tex_coords: [
                // front face
                [0.0, 1.0],
                [1.0, 1.0],
                [1.0, 0.0],
                [0.0, 0.0],

                // back face
                [1.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
                [1.0, 0.0],

                // right face
                [0.0, 1.0],
                [1.0, 1.0],
                [1.0, 0.0],
                [0.0, 0.0],

                // left face
                [1.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
                [1.0, 0.0],

                // top face
                [0.0, 1.0],
                [1.0, 1.0],
                [1.0, 0.0],
                [0.0, 0.0],

                // bottom face
                [1.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
                [1.0, 0.0],
            ],
            indices: [
                // front face
                0, 1, 2,
                2, 3, 0,

                // back face
                5, 4, 7,
                7, 6, 5,

                // right face
                8, 9, 10,
                10, 11, 8,

                // left face
                13, 12, 15,
                15, 14, 13,

                // top face
                16, 17, 18,
                18, 19, 16,

                // bottom face
                21, 20, 23,
                23, 22, 21,
            ],
        }
    }
}

impl Default for CubeMesh {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_buffer_covers_every_face_twice() {
        let mesh = CubeMesh::unit();
        assert_eq!(mesh.indices.len(), 36);

        // Every index stays inside the vertex arrays.
        assert!(mesh.indices.iter().all(|&i| (i as usize) < VERTEX_COUNT));

        // Each face owns vertices [4f, 4f + 4); its two triangles must
        // reference only those and use all four corners.
        for face in 0..6 {
            let lo = (face * 4) as u16;
            let tri = &mesh.indices[face * 6..face * 6 + 6];
            assert!(tri.iter().all(|&i| i >= lo && i < lo + 4));

            let mut corners: Vec<u16> = tri.to_vec();
            corners.sort_unstable();
            corners.dedup();
            assert_eq!(corners.len(), 4, "face {face} does not span 4 corners");
        }
    }

    #[test]
    fn positions_and_tex_coords_are_paired() {
        let mesh = CubeMesh::unit();
        assert_eq!(mesh.positions.len(), mesh.tex_coords.len());
        assert_eq!(mesh.positions.len(), VERTEX_COUNT);

        // Unit cube: every coordinate is exactly +-0.5.
        for p in &mesh.positions {
            for c in p {
                assert!(c.abs() == 0.5, "position component {c} off the cube surface");
            }
        }
        for t in &mesh.tex_coords {
            for c in t {
                assert!(*c == 0.0 || *c == 1.0);
            }
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = CubeMesh::unit();

        // For each triangle, the geometric normal must point away from
        // the cube center (positive dot product with the centroid).
        for tri in mesh.indices.chunks_exact(3) {
            let p = |i: u16| {
                let v = mesh.positions[i as usize];
                nalgebra::Vector3::new(v[0], v[1], v[2])
            };
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            let normal = (b - a).cross(&(c - a));
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(&centroid) > 0.0,
                "triangle {tri:?} winds inward"
            );
        }
    }
}
