//! Alignment detection over a single player's disc mask.
//!
//! Every direction is a constant bit stride in the column-major layout:
//! 1 (vertical), `HEIGHT + 1` (horizontal), `HEIGHT + 2` (rising diagonal,
//! `/`) and `HEIGHT` (falling diagonal, `\`). Sentinel bits are never owned by
//! a player, so runs cannot continue across a column boundary.

use crate::bitboard::{BOARD_MASK, HEIGHT};

/// Direction of a four-in-a-row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Horizontal,
    FallingDiagonal,
    RisingDiagonal,
    Vertical,
}

impl Alignment {
    pub const ALL: [Alignment; 4] = [
        Alignment::Horizontal,
        Alignment::FallingDiagonal,
        Alignment::RisingDiagonal,
        Alignment::Vertical,
    ];

    /// Bit distance between two neighbouring cells along this direction.
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            Alignment::Horizontal => HEIGHT + 1,
            Alignment::FallingDiagonal => HEIGHT,
            Alignment::RisingDiagonal => HEIGHT + 2,
            Alignment::Vertical => 1,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Alignment::Horizontal => "horizontal",
            Alignment::FallingDiagonal => "falling diagonal",
            Alignment::RisingDiagonal => "rising diagonal",
            Alignment::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

/// Cells that complete three of `player`'s discs along stride `s`, in both
/// directions and including the gap patterns `xx.x` and `x.xx`.
#[inline]
fn open_threes(player: u64, s: usize) -> u64 {
    let pair = (player << s) & (player << (2 * s));
    let mut r = pair & (player << (3 * s));
    r |= pair & (player >> s);

    let pair = (player >> s) & (player >> (2 * s));
    r |= pair & (player << s);
    r |= pair & (player >> (3 * s));
    r
}

/// Every empty cell where `player` would complete four in a row.
///
/// `player` is the mask of one side's discs, `mask` the occupancy of both.
/// The result may contain cells that are not playable yet (floating cells);
/// intersect with [`Position::possible`](crate::position::Position::possible)
/// to keep only the reachable ones.
#[inline]
pub fn compute_winning_positions(player: u64, mask: u64) -> u64 {
    // Vertical: only the cell on top of a stack of three.
    let mut r = (player << 1) & (player << 2) & (player << 3);

    r |= open_threes(player, Alignment::Horizontal.stride());
    r |= open_threes(player, Alignment::FallingDiagonal.stride());
    r |= open_threes(player, Alignment::RisingDiagonal.stride());

    r & (BOARD_MASK ^ mask)
}

/// The first direction in which `player` already owns four aligned discs.
#[inline]
pub fn won_alignment(player: u64) -> Option<Alignment> {
    Alignment::ALL.into_iter().find(|alignment| {
        let s = alignment.stride();
        let m = player & (player >> s);
        m & (m >> (2 * s)) != 0
    })
}

/// True if `player` owns four aligned discs in any direction.
#[inline]
pub fn has_won(player: u64) -> bool {
    won_alignment(player).is_some()
}
