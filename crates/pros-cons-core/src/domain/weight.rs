//! Weight value object (1 to 5 importance scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Importance of an argument: 1 (lowest) to 5 (highest).
///
/// Serialized as the bare number so the frontend and any future backend see
/// the same `1..=5` integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weight {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Weight {
    /// The five values offered by the weight picker, lowest first.
    pub const ALL: [Weight; 5] = [Weight::One, Weight::Two, Weight::Three, Weight::Four, Weight::Five];

    /// Creates a Weight from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, DomainError> {
        match value {
            1 => Ok(Weight::One),
            2 => Ok(Weight::Two),
            3 => Ok(Weight::Three),
            4 => Ok(Weight::Four),
            5 => Ok(Weight::Five),
            _ => Err(DomainError::invalid(format!("weight must be 1-5, got {}", value))),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Weight {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weight::try_from_u8(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.value()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_try_from_u8_accepts_one_through_five() {
        for (n, expected) in (1u8..=5).zip(Weight::ALL) {
            assert_eq!(Weight::try_from_u8(n).unwrap(), expected);
            assert_eq!(expected.value(), n);
        }
    }

    #[test]
    fn weight_try_from_u8_rejects_out_of_range() {
        assert!(matches!(Weight::try_from_u8(0), Err(DomainError::InvalidInput(_))));
        assert!(matches!(Weight::try_from_u8(6), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn weight_defaults_to_three() {
        assert_eq!(Weight::default(), Weight::Three);
    }

    #[test]
    fn weight_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Weight::Four).unwrap(), "4");
        let parsed: Weight = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Weight::Two);
        assert!(serde_json::from_str::<Weight>("9").is_err());
    }
}
