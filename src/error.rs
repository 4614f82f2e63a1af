/// Errors returned when building a [`Position`](crate::position::Position) from text.
///
/// Columns are 0-based, exactly as they appear in a move sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("invalid board string length: found {actual}, expected {expected}")]
    InvalidBoardStringLength { actual: usize, expected: usize },

    #[error("invalid character: character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// Column outside the board. `column` is [`NO_COLUMN`] when the move
    /// sequence was empty.
    #[error("invalid column {column} at index {index}")]
    InvalidColumn { column: i32, index: usize },

    #[error("invalid move at index {index}: column {column} is full")]
    InvalidFullColumnMove { column: usize, index: usize },

    #[error("invalid move at index {index}: column {column} results in a win")]
    InvalidWinningMove { column: usize, index: usize },
}

/// Column reported by [`PositionError::InvalidColumn`] when no move was read.
pub const NO_COLUMN: i32 = -1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_string_length_display() {
        let err = PositionError::InvalidBoardStringLength {
            actual: 41,
            expected: 42,
        };
        assert_eq!(
            err.to_string(),
            "invalid board string length: found 41, expected 42"
        );
    }

    #[test]
    fn test_invalid_character_display() {
        let err = PositionError::InvalidCharacter {
            character: 'a',
            index: 2,
        };
        assert_eq!(err.to_string(), "invalid character: character 'a' at index 2");
    }

    #[test]
    fn test_empty_sequence_display() {
        let err = PositionError::InvalidColumn {
            column: NO_COLUMN,
            index: 0,
        };
        assert_eq!(err.to_string(), "invalid column -1 at index 0");
    }

    #[test]
    fn test_move_errors_display() {
        let full = PositionError::InvalidFullColumnMove { column: 3, index: 6 };
        assert_eq!(full.to_string(), "invalid move at index 6: column 3 is full");

        let win = PositionError::InvalidWinningMove { column: 0, index: 6 };
        assert_eq!(
            win.to_string(),
            "invalid move at index 6: column 0 results in a win"
        );
    }
}
