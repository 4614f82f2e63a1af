use std::fmt;

use crate::bitboard::{
    bit_index, bottom_mask_col, column_mask, top_mask_col, BOARD_MASK, BOARD_SIZE, BOTTOM_MASK,
    CENTRE, HEIGHT, WIDTH,
};
use crate::error::{PositionError, NO_COLUMN};
use crate::side::Side;
use crate::win::{self, Alignment};

/// A Connect Four position stored as two bitboards.
///
/// `mask` holds every occupied cell and `current` the cells of the player to
/// move. Ownership is relative: [`Position::play`] swaps the two players by
/// XOR-ing `current` with `mask` before dropping the new disc, so the disc just
/// played always ends up on the opponent's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    current: u64,
    mask: u64,
    moves: usize,
}

impl Position {
    /// The empty board.
    pub const fn new() -> Self {
        Position {
            current: 0,
            mask: 0,
            moves: 0,
        }
    }

    /// Parse a board drawn row by row from the top-left corner.
    ///
    /// Only `.`, `o` and `x` are significant (in either case); everything else,
    /// including whitespace and separators, is skipped. `x` marks the player to
    /// move and `o` the opponent. Exactly `WIDTH * HEIGHT` significant
    /// characters are required.
    ///
    /// The board is not checked for reachability: floating discs, unbalanced
    /// disc counts and already won boards are accepted as drawn.
    pub fn from_board_string(board_string: &str) -> Result<Self, PositionError> {
        let mut position = Position::new();
        let mut count = 0;

        for c in board_string.chars() {
            let side = match c.to_ascii_lowercase() {
                '.' => None,
                c @ ('x' | 'o') => Side::from_char(c),
                _ => continue,
            };

            if count < BOARD_SIZE {
                if let Some(side) = side {
                    let row = HEIGHT - count / WIDTH - 1;
                    let col = count % WIDTH;
                    let bit = 1u64 << bit_index(col, row);

                    position.mask |= bit;
                    if side == Side::Current {
                        position.current |= bit;
                    }
                    position.moves += 1;
                }
            }
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(PositionError::InvalidBoardStringLength {
                actual: count,
                expected: BOARD_SIZE,
            });
        }

        Ok(position)
    }

    /// Replay a sequence of 0-based column digits from the empty board.
    ///
    /// Parsing stops at the first non-digit, out-of-range column, full column or
    /// move that would win the game. Sequences ending in a win are therefore not
    /// representable. An empty sequence is rejected with
    /// [`PositionError::InvalidColumn`] carrying [`NO_COLUMN`].
    pub fn from_moves(move_sequence: &str) -> Result<Self, PositionError> {
        let mut position = Position::new();

        for (index, character) in move_sequence.chars().enumerate() {
            let column = character
                .to_digit(10)
                .ok_or(PositionError::InvalidCharacter { character, index })?
                as usize;

            if column >= WIDTH {
                return Err(PositionError::InvalidColumn {
                    column: column as i32,
                    index,
                });
            }
            if !position.is_playable(column) {
                return Err(PositionError::InvalidFullColumnMove { column, index });
            }
            if position.is_winning_move(column) {
                return Err(PositionError::InvalidWinningMove { column, index });
            }

            position.play(column);
        }

        if position.moves == 0 {
            return Err(PositionError::InvalidColumn {
                column: NO_COLUMN,
                index: 0,
            });
        }

        Ok(position)
    }

    /// Discs of the player to move.
    #[inline]
    pub fn current_player_mask(&self) -> u64 {
        self.current
    }

    /// Discs of the player who moved last.
    #[inline]
    pub fn opponent_mask(&self) -> u64 {
        self.current ^ self.mask
    }

    /// Every occupied cell.
    #[inline]
    pub fn occupancy_mask(&self) -> u64 {
        self.mask
    }

    /// Number of discs on the board.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Owner of the disc at `(col, row)`, row 0 being the bottom.
    pub fn side_at(&self, col: usize, row: usize) -> Option<Side> {
        debug_assert!(col < WIDTH && row < HEIGHT);
        let bit = 1u64 << bit_index(col, row);
        if self.mask & bit == 0 {
            None
        } else if self.current & bit != 0 {
            Some(Side::Current)
        } else {
            Some(Side::Opponent)
        }
    }

    /// True if `col` still has room. `col` must be less than `WIDTH`.
    #[inline]
    pub fn is_playable(&self, col: usize) -> bool {
        debug_assert!(col < WIDTH);
        self.mask & top_mask_col(col) == 0
    }

    /// Drop a disc for the player to move into `col`.
    ///
    /// `col` must be playable (see [`Position::is_playable`]). This is only
    /// checked in debug builds; playing a full column otherwise sets the
    /// column's sentinel bit and leaves the position inconsistent.
    #[inline]
    pub fn play(&mut self, col: usize) {
        debug_assert!(
            col < WIDTH && self.is_playable(col),
            "column {} is not playable",
            col
        );
        self.current ^= self.mask;
        self.mask |= self.mask + bottom_mask_col(col);
        self.moves += 1;
    }

    /// One bit per non-full column: the cell a disc would land on.
    #[inline]
    pub fn possible(&self) -> u64 {
        (self.mask + BOTTOM_MASK) & BOARD_MASK
    }

    /// Playable cells that do not give the opponent an immediate win.
    ///
    /// Returns 0 when every move loses, including when the opponent already has
    /// two playable winning cells.
    pub fn possible_non_losing_moves(&self) -> u64 {
        let mut possible = self.possible();
        let opponent_win = self.opponent_winning_positions();

        let forced_moves = possible & opponent_win;
        if forced_moves != 0 {
            if forced_moves & (forced_moves - 1) != 0 {
                // Two threats cannot both be blocked.
                return 0;
            }
            possible = forced_moves;
        }

        // Never play directly below an opponent's winning cell.
        possible & !(opponent_win >> 1)
    }

    /// Empty cells completing four in a row for the player to move.
    #[inline]
    pub fn winning_positions(&self) -> u64 {
        win::compute_winning_positions(self.current, self.mask)
    }

    /// Empty cells completing four in a row for the opponent.
    #[inline]
    pub fn opponent_winning_positions(&self) -> u64 {
        win::compute_winning_positions(self.opponent_mask(), self.mask)
    }

    /// True if playing `col` wins immediately. False for full columns.
    #[inline]
    pub fn is_winning_move(&self, col: usize) -> bool {
        self.winning_positions() & self.possible() & column_mask(col) != 0
    }

    /// True if any playable column wins immediately.
    #[inline]
    pub fn can_win_next(&self) -> bool {
        self.winning_positions() & self.possible() != 0
    }

    /// Number of winning cells the player to move would have after taking
    /// `move_bit`, a single playable cell. Used for move ordering.
    #[inline]
    pub fn score_move(&self, move_bit: u64) -> u32 {
        win::compute_winning_positions(self.current | move_bit, self.mask).count_ones()
    }

    /// True if either player already has four in a row.
    #[inline]
    pub fn is_won_position(&self) -> bool {
        win::has_won(self.current) || win::has_won(self.opponent_mask())
    }

    /// Side owning a completed four in a row and its direction.
    pub fn winning_alignment(&self) -> Option<(Side, Alignment)> {
        win::won_alignment(self.current)
            .map(|alignment| (Side::Current, alignment))
            .or_else(|| {
                win::won_alignment(self.opponent_mask())
                    .map(|alignment| (Side::Opponent, alignment))
            })
    }

    /// Identity shared by a position and its left-right reflection.
    ///
    /// `current + mask` is unique per position: adding the player's discs to
    /// the occupancy carries each column into a distinct pattern. The smaller of
    /// the two reflections is returned.
    pub fn key(&self) -> u64 {
        let key = self.current + self.mask;
        let mirrored = self.mirrored();
        key.min(mirrored.current + mirrored.mask)
    }

    /// The same position with the columns reversed.
    pub fn mirrored(&self) -> Position {
        Position {
            current: mirror_columns(self.current),
            mask: mirror_columns(self.mask),
            moves: self.moves,
        }
    }
}

fn mirror_columns(bits: u64) -> u64 {
    let mut mirrored = 0;

    for col in 0..CENTRE {
        let other = WIDTH - 1 - col;
        let shift = (other - col) * (HEIGHT + 1);
        mirrored |= ((bits & column_mask(col)) << shift) | ((bits & column_mask(other)) >> shift);
    }

    if WIDTH % 2 == 1 {
        mirrored |= bits & column_mask(CENTRE);
    }

    mirrored
}

/// Draw the board as accepted by [`Position::from_board_string`]: one line per
/// row from the top, `x` for the player to move, `o` for the opponent.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for col in 0..WIDTH {
                let c = match self.side_at(col, row) {
                    Some(side) => side.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
