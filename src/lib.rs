pub mod bitboard;
pub mod error;
pub mod position;
pub mod side;
pub mod win;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use bitboard::{HEIGHT, WIDTH};
pub use error::PositionError;
pub use position::Position;
pub use side::Side;
pub use win::Alignment;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn bitfour(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyPosition>()?;
    m.add("WIDTH", bitboard::WIDTH)?;
    m.add("HEIGHT", bitboard::HEIGHT)?;
    m.add("MIN_SCORE", bitboard::MIN_SCORE)?;
    m.add("MAX_SCORE", bitboard::MAX_SCORE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::bitboard::{columns, HEIGHT, WIDTH};
    use crate::error::PositionError;
    use crate::position::Position;

    fn value_error(err: PositionError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Position")]
    #[derive(Clone)]
    pub struct PyPosition {
        position: Position,
    }

    #[pymethods]
    impl PyPosition {
        #[new]
        pub fn new() -> Self {
            PyPosition {
                position: Position::new(),
            }
        }

        #[staticmethod]
        pub fn from_board_string(board_string: &str) -> PyResult<Self> {
            Position::from_board_string(board_string)
                .map(|position| PyPosition { position })
                .map_err(value_error)
        }

        #[staticmethod]
        pub fn from_moves(move_sequence: &str) -> PyResult<Self> {
            Position::from_moves(move_sequence)
                .map(|position| PyPosition { position })
                .map_err(value_error)
        }

        pub fn move_count(&self) -> usize {
            self.position.move_count()
        }

        pub fn current_player_mask(&self) -> u64 {
            self.position.current_player_mask()
        }

        pub fn occupancy_mask(&self) -> u64 {
            self.position.occupancy_mask()
        }

        /// 'x' for the player to move, 'o' for the opponent, None if empty.
        pub fn side_at(&self, col: usize, row: usize) -> PyResult<Option<char>> {
            if col >= WIDTH || row >= HEIGHT {
                return Err(PyErr::new::<pyo3::exceptions::PyIndexError, _>(format!(
                    "cell ({}, {}) is outside the board",
                    col, row
                )));
            }
            Ok(self.position.side_at(col, row).map(|side| side.to_char()))
        }

        pub fn is_playable(&self, col: usize) -> bool {
            col < WIDTH && self.position.is_playable(col)
        }

        pub fn play(&mut self, col: usize) -> PyResult<()> {
            if !self.is_playable(col) {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "column {} is not playable",
                    col
                )));
            }
            self.position.play(col);
            Ok(())
        }

        pub fn possible(&self) -> u64 {
            self.position.possible()
        }

        pub fn possible_non_losing_moves(&self) -> u64 {
            self.position.possible_non_losing_moves()
        }

        pub fn non_losing_columns(&self) -> Vec<usize> {
            columns(self.position.possible_non_losing_moves()).collect()
        }

        pub fn is_winning_move(&self, col: usize) -> bool {
            col < WIDTH && self.position.is_winning_move(col)
        }

        pub fn can_win_next(&self) -> bool {
            self.position.can_win_next()
        }

        pub fn score_move(&self, move_bit: u64) -> u32 {
            self.position.score_move(move_bit)
        }

        pub fn is_won_position(&self) -> bool {
            self.position.is_won_position()
        }

        pub fn key(&self) -> u64 {
            self.position.key()
        }

        pub fn mirrored(&self) -> PyPosition {
            PyPosition {
                position: self.position.mirrored(),
            }
        }

        pub fn clone(&self) -> PyPosition {
            PyPosition {
                position: self.position,
            }
        }

        pub fn __str__(&self) -> String {
            self.position.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Position(moves={}, key={:#x})",
                self.position.move_count(),
                self.position.key()
            )
        }

        pub fn __eq__(&self, other: &PyPosition) -> bool {
            self.position == other.position
        }

        pub fn __hash__(&self) -> u64 {
            self.position.key()
        }
    }
}
