//! Compile-time constant cube geometry.
//!
//! Unit cube corners at ±0.5. The position and color tables are index-aligned:
//! the front face (+Z, listed first) is red, the back face green. Faces are
//! listed corner-order top-left, bottom-left, bottom-right, top-right.

/// Cube corner positions, one `[x, y, z]` per corner.
pub const CUBE_POSITIONS: [[f32; 3]; 8] = [
    // Front face
    [-0.5, 0.5, 0.5],  // top left
    [-0.5, -0.5, 0.5], // bottom left
    [0.5, -0.5, 0.5],  // bottom right
    [0.5, 0.5, 0.5],   // top right
    // Back face
    [-0.5, 0.5, -0.5],  // top left
    [-0.5, -0.5, -0.5], // bottom left
    [0.5, -0.5, -0.5],  // bottom right
    [0.5, 0.5, -0.5],   // top right
];

/// Per-corner RGBA colors, index-aligned with [`CUBE_POSITIONS`].
pub const CUBE_COLORS: [[f32; 4]; 8] = [
    // Front face (red)
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    // Back face (green)
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
];

/// Triangle indices: 6 faces × 2 triangles × 3 vertices.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // Front face
    4, 5, 6, 4, 6, 7, // Back face
    0, 4, 7, 0, 7, 3, // Top face
    1, 5, 6, 1, 6, 2, // Bottom face
    0, 1, 5, 0, 5, 4, // Left face
    3, 2, 6, 3, 6, 7, // Right face
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_buffer_is_36_triangles_within_range() {
        assert_eq!(CUBE_INDICES.len(), 36);
        assert_eq!(CUBE_INDICES.len() % 3, 0);
        for &i in &CUBE_INDICES {
            assert!(i < 8, "index {i} out of corner range");
        }
    }

    #[test]
    fn every_corner_is_referenced() {
        let used: HashSet<u16> = CUBE_INDICES.iter().copied().collect();
        assert_eq!(used.len(), 8);
    }

    #[test]
    fn triangles_are_non_degenerate() {
        for tri in CUBE_INDICES.chunks_exact(3) {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }

    #[test]
    fn front_face_is_red_back_face_is_green() {
        for i in 0..4 {
            assert_eq!(CUBE_COLORS[i], [1.0, 0.0, 0.0, 1.0]);
            assert_eq!(CUBE_COLORS[i + 4], [0.0, 1.0, 0.0, 1.0]);
        }
        // Front corners sit at +Z, back corners at -Z.
        for i in 0..4 {
            assert_eq!(CUBE_POSITIONS[i][2], 0.5);
            assert_eq!(CUBE_POSITIONS[i + 4][2], -0.5);
        }
    }

    #[test]
    fn corners_lie_on_unit_cube() {
        for p in &CUBE_POSITIONS {
            for c in p {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }
}
