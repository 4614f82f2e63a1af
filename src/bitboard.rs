//! Bit layout of the board.
//!
//! A position fits in a single `u64`. Each column takes `HEIGHT + 1` bits, the
//! extra one being a sentinel that stops carries from leaking into the next
//! column:
//!
//! ```text
//!   6 13 20 27 34 41 48
//!  ---------------------
//! | 5 12 19 26 33 40 47 |
//! | 4 11 18 25 32 39 46 |
//! | 3 10 17 24 31 38 45 |
//! | 2  9 16 23 30 37 44 |
//! | 1  8 15 22 29 36 43 |
//! | 0  7 14 21 28 35 42 |
//!  ---------------------
//! ```

/// Number of columns.
pub const WIDTH: usize = 7;

/// Number of playable rows.
pub const HEIGHT: usize = 6;

/// Number of playable cells.
pub const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Index of the centre column.
pub const CENTRE: usize = WIDTH / 2;

/// Lowest score an external solver can assign to a position.
pub const MIN_SCORE: i32 = -(BOARD_SIZE as i32) / 2 + 3;

/// Highest score an external solver can assign to a position.
pub const MAX_SCORE: i32 = (BOARD_SIZE as i32 + 1) / 2 + 3;

const _: () = assert!(WIDTH * (HEIGHT + 1) <= 64, "board does not fit in a u64");

/// Bit 0 of every column.
pub const BOTTOM_MASK: u64 = bottom_mask();

/// Every playable cell, sentinels excluded.
pub const BOARD_MASK: u64 = BOTTOM_MASK * ((1 << HEIGHT) - 1);

/// The sentinel bit above every column.
pub const SENTINEL_MASK: u64 = BOTTOM_MASK << HEIGHT;

const fn bottom_mask() -> u64 {
    let mut mask = 0;
    let mut col = 0;
    while col < WIDTH {
        mask |= bottom_mask_col(col);
        col += 1;
    }
    mask
}

/// Bit index of `(col, row)`, row 0 being the bottom of the board.
#[inline]
pub const fn bit_index(col: usize, row: usize) -> usize {
    row + col * (HEIGHT + 1)
}

/// Topmost playable cell of `col`. Set in the occupancy mask iff the column is full.
#[inline]
pub const fn top_mask_col(col: usize) -> u64 {
    1 << (HEIGHT - 1 + col * (HEIGHT + 1))
}

/// Bottom cell of `col`.
#[inline]
pub const fn bottom_mask_col(col: usize) -> u64 {
    1 << (col * (HEIGHT + 1))
}

/// All playable cells of `col`.
#[inline]
pub const fn column_mask(col: usize) -> u64 {
    ((1 << HEIGHT) - 1) << (col * (HEIGHT + 1))
}

/// Iterate over the indices of the set bits of `mask`, lowest first.
#[inline]
pub fn bits(mask: u64) -> Bits {
    Bits { mask }
}

/// Iterate over the columns touched by `mask`, left to right.
pub fn columns(mask: u64) -> impl Iterator<Item = usize> {
    (0..WIDTH).filter(move |&col| mask & column_mask(col) != 0)
}

/// Iterator over set-bit indices of a mask.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    mask: u64,
}

impl Iterator for Bits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 {
            return None;
        }
        let bit = self.mask.trailing_zeros() as usize;
        // Clear lowest set bit
        self.mask &= self.mask - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bits {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sizes() {
        assert_eq!(BOTTOM_MASK.count_ones() as usize, WIDTH);
        assert_eq!(BOARD_MASK.count_ones() as usize, BOARD_SIZE);
        assert_eq!(SENTINEL_MASK.count_ones() as usize, WIDTH);
        assert_eq!(BOARD_MASK & SENTINEL_MASK, 0);
    }

    #[test]
    fn test_bottom_mask_layout() {
        let expected: u64 = (0..WIDTH).map(|c| 1u64 << (c * 7)).sum();
        assert_eq!(BOTTOM_MASK, expected);
    }

    #[test]
    fn test_column_masks_partition_board() {
        let mut union = 0;
        for col in 0..WIDTH {
            let mask = column_mask(col);
            assert_eq!(mask.count_ones() as usize, HEIGHT);
            assert_eq!(union & mask, 0, "column {} overlaps", col);
            assert_ne!(mask & top_mask_col(col), 0);
            assert_ne!(mask & bottom_mask_col(col), 0);
            union |= mask;
        }
        assert_eq!(union, BOARD_MASK);
    }

    #[test]
    fn test_bit_index() {
        assert_eq!(bit_index(0, 0), 0);
        assert_eq!(bit_index(0, 5), 5);
        assert_eq!(bit_index(1, 0), 7);
        assert_eq!(bit_index(6, 5), 47);
        assert_eq!(1u64 << bit_index(3, HEIGHT - 1), top_mask_col(3));
    }

    #[test]
    fn test_top_mask_is_below_sentinel() {
        for col in 0..WIDTH {
            assert_eq!(top_mask_col(col) << 1 & SENTINEL_MASK, top_mask_col(col) << 1);
        }
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(MIN_SCORE, -18);
        assert_eq!(MAX_SCORE, 24);
        assert_eq!(CENTRE, 3);
    }

    #[test]
    fn test_bits() {
        let mask = (1u64 << 3) | (1 << 20) | (1 << 47);
        let indices: Vec<usize> = bits(mask).collect();
        assert_eq!(indices, vec![3, 20, 47]);
        assert_eq!(bits(mask).len(), 3);
    }

    #[test]
    fn test_bits_empty() {
        assert_eq!(bits(0).next(), None);
    }

    #[test]
    fn test_columns() {
        let mask = bottom_mask_col(1) | top_mask_col(4) | column_mask(6);
        let cols: Vec<usize> = columns(mask).collect();
        assert_eq!(cols, vec![1, 4, 6]);
        assert_eq!(columns(0).count(), 0);
    }
}
