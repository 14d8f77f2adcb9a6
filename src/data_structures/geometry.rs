//! Static geometry for the demos.

use crate::data_structures::vertex::{ColorVertex, CubeVertex};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

pub const TRIANGLE: [ColorVertex; 3] = [
    ColorVertex::new([0.0, 0.6, 0.0, 1.0], RED),
    ColorVertex::new([-0.5, -0.6, 0.0, 1.0], GREEN),
    ColorVertex::new([0.5, -0.6, 0.0, 1.0], BLUE),
];

pub const SQUARE: [ColorVertex; 4] = [
    // bottom left
    ColorVertex::new([-0.8, -0.8, 0.0, 1.0], RED),
    // top left
    ColorVertex::new([-0.8, 0.8, 0.0, 1.0], YELLOW),
    // top right
    ColorVertex::new([0.8, 0.8, 0.0, 1.0], CYAN),
    // bottom right
    ColorVertex::new([0.8, -0.8, 0.0, 1.0], BLUE),
];

pub const SQUARE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

macro_rules! face {
    ($color:expr, $a:expr, $b:expr, $c:expr, $d:expr) => {
        [
            CubeVertex::new($a, $color, [0.0, 1.0]),
            CubeVertex::new($b, $color, [0.0, 0.0]),
            CubeVertex::new($c, $color, [1.0, 0.0]),
            CubeVertex::new($d, $color, [1.0, 1.0]),
        ]
    };
}

const BACK: [CubeVertex; 4] = face!(
    RED,
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0]
);
const FRONT: [CubeVertex; 4] = face!(
    BLUE,
    [-1.0, -1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0]
);
const LEFT: [CubeVertex; 4] = face!(
    YELLOW,
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0]
);
const RIGHT: [CubeVertex; 4] = face!(
    WHITE,
    [1.0, -1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0]
);
const TOP: [CubeVertex; 4] = face!(
    GREEN,
    [-1.0, 1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0]
);
const BOTTOM: [CubeVertex; 4] = face!(
    MAGENTA,
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0]
);

/// Unit cube spanning -1..1, four vertices per face so each face keeps its
/// own color and UV square.
pub const CUBE: [CubeVertex; 24] = [
    BACK[0], BACK[1], BACK[2], BACK[3],
    FRONT[0], FRONT[1], FRONT[2], FRONT[3],
    LEFT[0], LEFT[1], LEFT[2], LEFT[3],
    RIGHT[0], RIGHT[1], RIGHT[2], RIGHT[3],
    TOP[0], TOP[1], TOP[2], TOP[3],
    BOTTOM[0], BOTTOM[1], BOTTOM[2], BOTTOM[3],
];

/// Two triangles per face, counter-clockwise when seen from outside in a
/// z-forward (left-handed) clip space.
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    3, 2, 1, 3, 1, 0,       // back
    4, 5, 6, 4, 6, 7,       // front
    9, 10, 11, 8, 9, 11,    // left
    15, 14, 13, 15, 13, 12, // right
    19, 18, 17, 19, 17, 16, // top
    21, 22, 23, 20, 21, 23, // bottom
];

/// Unrolls an indexed mesh into a plain vertex list for non-indexed draws.
///
/// Indices pointing past `vertices` are dropped together with the rest of
/// their triangle, as is a trailing partial triangle.
pub fn expand_indexed<V: Copy>(vertices: &[V], indices: &[u16]) -> Vec<V> {
    let leftover = indices.len() % 3;
    if leftover != 0 {
        log::warn!(
            "Skipping {} trailing indices: {:?} is not a full triangle",
            leftover,
            &indices[indices.len() - leftover..]
        );
    }
    let mut expanded = Vec::with_capacity(indices.len() - leftover);
    for triangle in indices.chunks_exact(3) {
        let corners: Option<Vec<V>> = triangle
            .iter()
            .map(|&i| vertices.get(i as usize).copied())
            .collect();
        match corners {
            Some(corners) => expanded.extend(corners),
            None => log::warn!("Skipping triangle {:?}: index out of range", triangle),
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    fn xyz(v: &CubeVertex) -> Vector3<f32> {
        Vector3::new(v.position[0], v.position[1], v.position[2])
    }

    #[test]
    fn indices_stay_in_range() {
        assert!(SQUARE_INDICES.iter().all(|&i| (i as usize) < SQUARE.len()));
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE.len()));
    }

    #[test]
    fn every_cube_vertex_is_a_corner() {
        for v in CUBE.iter() {
            assert!(v.position[..3].iter().all(|c| c.abs() == 1.0));
            assert_eq!(v.position[3], 1.0);
        }
    }

    #[test]
    fn each_face_is_flat_and_single_colored() {
        for face in CUBE.chunks_exact(4) {
            let color = face[0].color;
            assert!(face.iter().all(|v| v.color == color));
            // one axis is constant across the face
            let flat = (0..3).any(|axis| face.iter().all(|v| v.position[axis] == face[0].position[axis]));
            assert!(flat);
        }
    }

    #[test]
    fn cube_triangles_wind_consistently() {
        for tri in CUBE_INDICES.chunks_exact(3) {
            let a = xyz(&CUBE[tri[0] as usize]);
            let b = xyz(&CUBE[tri[1] as usize]);
            let c = xyz(&CUBE[tri[2] as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.magnitude() > 0.0, "degenerate triangle {:?}", tri);
            assert!(
                normal.dot(centroid) < 0.0,
                "triangle {:?} winds the other way",
                tri
            );
        }
    }

    #[test]
    fn expand_indexed_unrolls_the_cube() {
        let expanded = expand_indexed(&CUBE, &CUBE_INDICES);
        assert_eq!(expanded.len(), 36);
        assert_eq!(expanded[0], CUBE[3]);
        assert_eq!(expanded[35], CUBE[23]);
    }

    #[test]
    fn expand_indexed_drops_broken_triangles() {
        let expanded = expand_indexed(&SQUARE, &[0, 1, 2, 0, 2, 9]);
        assert_eq!(expanded, vec![SQUARE[0], SQUARE[1], SQUARE[2]]);
    }

    #[test]
    fn expand_indexed_drops_trailing_partial_triangles() {
        let expanded = expand_indexed(&SQUARE, &[0, 1, 2, 0, 2]);
        assert_eq!(expanded, vec![SQUARE[0], SQUARE[1], SQUARE[2]]);
        assert!(expand_indexed(&SQUARE, &[3]).is_empty());
    }
}
