/// Owner of a disc, relative to the player whose turn it is.
///
/// A `Position` never stores absolute colours: after every move the roles swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player to move.
    Current,
    /// The player who moved last.
    Opponent,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Current => Side::Opponent,
            Side::Opponent => Side::Current,
        }
    }

    /// Board-string character for this side.
    pub fn to_char(&self) -> char {
        match self {
            Side::Current => 'x',
            Side::Opponent => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'x' | 'X' => Some(Side::Current),
            'o' | 'O' => Some(Side::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side_str = match self {
            Side::Current => "Current",
            Side::Opponent => "Opponent",
        };
        write!(f, "{}", side_str)
    }
}
