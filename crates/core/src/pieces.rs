//! Pieces module - the shape catalog
//!
//! Every piece kind owns four fixed rotation masks inside a 5x5 local frame.
//! Rotation `r + 1` is the clockwise turn of rotation `r` about the frame
//! centre (2, 2), except for O which keeps one mask in all four states.
//! Rotating is a plain index into this table: there are no kick offsets.

use crate::types::PieceKind;

/// Offset of a single mino inside the 5x5 local frame
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from the frame's top-left corner
pub type PieceShape = [MinoOffset; 4];

/// Number of rotation states per kind
pub const ROTATIONS: u8 = 4;

/// Rotation masks indexed by `[PieceKind::index()][rotation]`
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(1, 2), (2, 2), (3, 2), (4, 2)],
        [(2, 1), (2, 2), (2, 3), (2, 4)],
    ],
    // O
    [
        [(1, 2), (2, 2), (1, 3), (2, 3)],
        [(1, 2), (2, 2), (1, 3), (2, 3)],
        [(1, 2), (2, 2), (1, 3), (2, 3)],
        [(1, 2), (2, 2), (1, 3), (2, 3)],
    ],
    // T
    [
        [(1, 2), (2, 2), (3, 2), (2, 3)],
        [(2, 1), (1, 2), (2, 2), (2, 3)],
        [(2, 1), (1, 2), (2, 2), (3, 2)],
        [(2, 1), (2, 2), (3, 2), (2, 3)],
    ],
    // L
    [
        [(1, 2), (2, 2), (3, 2), (1, 3)],
        [(1, 1), (2, 1), (2, 2), (2, 3)],
        [(3, 1), (1, 2), (2, 2), (3, 2)],
        [(2, 1), (2, 2), (2, 3), (3, 3)],
    ],
    // J
    [
        [(1, 2), (2, 2), (3, 2), (3, 3)],
        [(2, 1), (2, 2), (1, 3), (2, 3)],
        [(1, 1), (1, 2), (2, 2), (3, 2)],
        [(2, 1), (3, 1), (2, 2), (2, 3)],
    ],
    // S
    [
        [(2, 2), (3, 2), (1, 3), (2, 3)],
        [(1, 1), (1, 2), (2, 2), (2, 3)],
        [(2, 1), (3, 1), (1, 2), (2, 2)],
        [(2, 1), (2, 2), (3, 2), (3, 3)],
    ],
    // Z
    [
        [(1, 2), (2, 2), (2, 3), (3, 3)],
        [(2, 1), (1, 2), (2, 2), (1, 3)],
        [(1, 1), (2, 1), (2, 2), (3, 2)],
        [(3, 1), (2, 2), (3, 2), (2, 3)],
    ],
];

/// Get the rotation mask for a piece kind; `rotation` is taken mod 4
pub fn rotation_mask(kind: PieceKind, rotation: u8) -> PieceShape {
    SHAPES[kind.index()][(rotation % ROTATIONS) as usize]
}

/// Spawn anchor for a board of the given width: the 5x5 frame's top-left
/// corner sits at (width / 2 - 2, 0).
pub fn spawn_position(board_width: u8) -> (i32, i32) {
    (board_width as i32 / 2 - 2, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SHAPE_FRAME;

    fn rotate_cw_about_centre(shape: PieceShape) -> Vec<MinoOffset> {
        let mut out: Vec<MinoOffset> = shape.iter().map(|&(x, y)| (4 - y, x)).collect();
        out.sort();
        out
    }

    fn sorted(shape: PieceShape) -> Vec<MinoOffset> {
        let mut v = shape.to_vec();
        v.sort();
        v
    }

    #[test]
    fn every_mask_has_four_distinct_cells_in_frame() {
        for kind in PieceKind::ALL {
            for r in 0..ROTATIONS {
                let mut cells = sorted(rotation_mask(kind, r));
                cells.dedup();
                assert_eq!(cells.len(), 4, "{:?} rotation {}", kind, r);
                assert!(cells
                    .iter()
                    .all(|&(x, y)| (0..SHAPE_FRAME).contains(&x) && (0..SHAPE_FRAME).contains(&y)));
            }
        }
    }

    #[test]
    fn next_rotation_is_clockwise_turn_about_centre() {
        for kind in PieceKind::ALL {
            if kind == PieceKind::O {
                continue;
            }
            for r in 0..ROTATIONS {
                assert_eq!(
                    rotate_cw_about_centre(rotation_mask(kind, r)),
                    sorted(rotation_mask(kind, r + 1)),
                    "{:?} {} -> {}",
                    kind,
                    r,
                    r + 1
                );
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = rotation_mask(PieceKind::O, 0);
        for r in 1..ROTATIONS {
            assert_eq!(rotation_mask(PieceKind::O, r), north);
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(rotation_mask(PieceKind::T, 5), rotation_mask(PieceKind::T, 1));
        assert_eq!(rotation_mask(PieceKind::I, 8), rotation_mask(PieceKind::I, 0));
    }

    #[test]
    fn spawn_position_centres_the_frame() {
        assert_eq!(spawn_position(10), (3, 0));
        assert_eq!(spawn_position(11), (3, 0));
        assert_eq!(spawn_position(4), (0, 0));
    }
}
