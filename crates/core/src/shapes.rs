//! Shapes module - the 7-entry shape catalog and matrix rotation
//!
//! Every shape is a 4x4 boolean mask. Rotations are derived on demand with
//! [`rotate_shape`]; the catalog only stores the spawn orientation.

use crate::rng::SimpleRng;
use crate::types::{Rgb, ShapeKind, ShapeMatrix, SHAPE_COUNT, SHAPE_SIZE};

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
}

impl Shape {
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}

const X: bool = true;
const O: bool = false;

/// The catalog, in identifier order (`SHAPES[id - 1]`).
pub const SHAPES: [Shape; SHAPE_COUNT as usize] = [
    Shape {
        kind: ShapeKind::I,
        matrix: [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::J,
        matrix: [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::L,
        matrix: [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::O,
        matrix: [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::S,
        matrix: [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::T,
        matrix: [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    },
    Shape {
        kind: ShapeKind::Z,
        matrix: [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    },
];

/// Get the catalog entry for a shape kind.
pub fn get_shape(kind: ShapeKind) -> Shape {
    SHAPES[(kind.id() - 1) as usize]
}

/// Draw a uniformly random shape.
///
/// Returns an owned copy of the matrix, the color and the 1-based identifier.
pub fn random_shape(rng: &mut SimpleRng) -> (ShapeMatrix, Rgb, u8) {
    let shape = SHAPES[rng.next_range(SHAPE_COUNT as u32) as usize];
    (shape.matrix, shape.color(), shape.id())
}

/// Rotate a 4x4 matrix a quarter turn: `result[i][j] = input[j][3 - i]`.
pub fn rotate_shape(matrix: &ShapeMatrix) -> ShapeMatrix {
    let mut rotated = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = matrix[j][SHAPE_SIZE - 1 - i];
        }
    }
    rotated
}

/// Iterate the `(col, row)` offsets of the occupied cells of a matrix.
pub fn occupied_cells(matrix: &ShapeMatrix) -> impl Iterator<Item = (i8, i8)> + '_ {
    matrix.iter().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(j, _)| (j as i8, i as i8))
    })
}
