use crate::position::Position;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as the board string, which carries both masks and the move count.
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Position::from_board_string(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_serde_empty() {
        let position = Position::new();

        let json = serde_json::to_string(&position).expect("serialize");
        assert_eq!(json, format!("\"{}\"", ".......\\n".repeat(6)));

        let position2: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(position2, position);
    }

    #[test]
    fn test_position_serde_roundtrip() {
        let position = Position::from_moves("3342215").expect("valid sequence");

        let json = serde_json::to_string(&position).expect("serialize");
        let position2: Position = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(position2, position);
        assert_eq!(position2.key(), position.key());
        assert_eq!(position2.move_count(), 7);
    }

    #[test]
    fn test_position_deserialize_compact_board() {
        let json = format!("\"{}...o...x..x..o\"", ".".repeat(28));
        let position: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(position.move_count(), 4);
    }

    #[test]
    fn test_position_deserialize_invalid_length() {
        let err = serde_json::from_str::<Position>(r#""....""#).expect_err("too short");
        assert!(err
            .to_string()
            .contains("invalid board string length: found 4, expected 42"));
    }
}
