//! Dial states and simulation results.
//!
//! A [`DialState`] is the full input of the hierarchy: one value in `1..=10`
//! per dial. Values 1–8 route through the algedonode contacts, 9 and 10 are
//! the escape lines. The hierarchy answers each state with at most one lit
//! light, reported as a [`LightResult`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of dials (one per algedonode row).
pub const DIAL_COUNT: usize = 4;
/// Lowest dial value.
pub const MIN_DIAL_VALUE: u8 = 1;
/// Highest dial value.
pub const MAX_DIAL_VALUE: u8 = 10;
/// Number of distinct dial states (`10^4`).
pub const STATE_COUNT: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Dial {dial} value {value} is outside 1..=10")]
    OutOfRange { dial: usize, value: i64 },
    #[error("Expected 4 dial values, got {0}")]
    WrongLength(usize),
    #[error("Invalid dial value '{0}'")]
    Parse(String),
}

// ---------------------------------------------------------------------------
// Dial state
// ---------------------------------------------------------------------------

/// Values of the four dials, dial 0 first.
///
/// Always in range: the only ways to build one are the checked constructors
/// and the lexicographic enumeration in [`DialState::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 4]", into = "[u8; 4]")]
pub struct DialState([u8; DIAL_COUNT]);

impl DialState {
    /// Build a state, rejecting any value outside `1..=10`.
    pub fn new(values: [u8; DIAL_COUNT]) -> Result<Self, StateError> {
        for (dial, &value) in values.iter().enumerate() {
            if !(MIN_DIAL_VALUE..=MAX_DIAL_VALUE).contains(&value) {
                return Err(StateError::OutOfRange {
                    dial,
                    value: value as i64,
                });
            }
        }
        Ok(Self(values))
    }

    /// Caller guarantees every value is in range.
    pub(crate) fn from_valid(values: [u8; DIAL_COUNT]) -> Self {
        debug_assert!(values
            .iter()
            .all(|v| (MIN_DIAL_VALUE..=MAX_DIAL_VALUE).contains(v)));
        Self(values)
    }

    /// The state with every dial at 1.
    pub fn first() -> Self {
        Self([MIN_DIAL_VALUE; DIAL_COUNT])
    }

    pub fn values(&self) -> [u8; DIAL_COUNT] {
        self.0
    }

    /// Value of one dial.
    pub fn value(&self, dial: usize) -> u8 {
        self.0[dial]
    }

    /// Position of this state in lexicographic order (`[1,1,1,1]` is 0).
    pub fn ordinal(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &v| acc * 10 + (v - MIN_DIAL_VALUE) as usize)
    }

    /// Inverse of [`DialState::ordinal`]. `None` past the last state.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= STATE_COUNT {
            return None;
        }
        let mut values = [MIN_DIAL_VALUE; DIAL_COUNT];
        let mut rest = ordinal;
        for slot in values.iter_mut().rev() {
            *slot = (rest % 10) as u8 + MIN_DIAL_VALUE;
            rest /= 10;
        }
        Some(Self(values))
    }

    /// Every state, `[1,1,1,1]` through `[10,10,10,10]`, dial 0 most significant.
    pub fn all() -> impl Iterator<Item = DialState> {
        (0..STATE_COUNT).filter_map(DialState::from_ordinal)
    }
}

impl TryFrom<[u8; DIAL_COUNT]> for DialState {
    type Error = StateError;

    fn try_from(values: [u8; DIAL_COUNT]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<DialState> for [u8; DIAL_COUNT] {
    fn from(state: DialState) -> Self {
        state.0
    }
}

impl fmt::Display for DialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

/// Accepts `1,2,3,4`, `1 2 3 4` or `[1, 2, 3, 4]`.
impl FromStr for DialState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != DIAL_COUNT {
            return Err(StateError::WrongLength(parts.len()));
        }

        let mut values = [0u8; DIAL_COUNT];
        for (dial, part) in parts.iter().enumerate() {
            let value: i64 = part
                .parse()
                .map_err(|_| StateError::Parse(part.to_string()))?;
            if !(MIN_DIAL_VALUE as i64..=MAX_DIAL_VALUE as i64).contains(&value) {
                return Err(StateError::OutOfRange { dial, value });
            }
            values[dial] = value as u8;
        }
        Ok(Self(values))
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Which of the two lights under a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AOrB {
    A,
    B,
}

impl fmt::Display for AOrB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AOrB::A => write!(f, "A"),
            AOrB::B => write!(f, "B"),
        }
    }
}

/// The lit light: its column and whether it is the A or B light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightResult {
    pub column: usize,
    pub a_or_b: AOrB,
}

impl fmt::Display for LightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a_or_b, self.column)
    }
}

/// One evaluated state and the light it produced (`None` if nothing lit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub state: DialState,
    pub result: Option<LightResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            DialState::new([1, 0, 3, 4]),
            Err(StateError::OutOfRange { dial: 1, value: 0 })
        );
        assert!(DialState::new([1, 2, 3, 11]).is_err());
        assert!(DialState::new([10, 10, 10, 10]).is_ok());
    }

    #[test]
    fn enumeration_is_lexicographic_and_complete() {
        let states: Vec<DialState> = DialState::all().collect();
        assert_eq!(states.len(), STATE_COUNT);
        assert_eq!(states[0].values(), [1, 1, 1, 1]);
        assert_eq!(states[1].values(), [1, 1, 1, 2]);
        assert_eq!(states[10].values(), [1, 1, 2, 1]);
        assert_eq!(states[STATE_COUNT - 1].values(), [10, 10, 10, 10]);
        assert!(states.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ordinal_matches_enumeration_index() {
        for (i, state) in DialState::all().enumerate().step_by(37) {
            assert_eq!(state.ordinal(), i);
        }
        assert_eq!(DialState::from_ordinal(STATE_COUNT), None);
    }

    #[test]
    fn parses_common_spellings() {
        let expected = DialState::new([1, 9, 10, 4]).unwrap();
        assert_eq!("1,9,10,4".parse::<DialState>().unwrap(), expected);
        assert_eq!("1 9 10 4".parse::<DialState>().unwrap(), expected);
        assert_eq!("[1, 9, 10, 4]".parse::<DialState>().unwrap(), expected);
        assert_eq!(expected.to_string(), "[1, 9, 10, 4]");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "1,2,3".parse::<DialState>(),
            Err(StateError::WrongLength(3))
        );
        assert_eq!(
            "1,2,x,4".parse::<DialState>(),
            Err(StateError::Parse("x".into()))
        );
        assert_eq!(
            "1,2,3,-4".parse::<DialState>(),
            Err(StateError::OutOfRange { dial: 3, value: -4 })
        );
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: DialState = serde_json::from_str("[2,3,4,5]").unwrap();
        assert_eq!(ok.values(), [2, 3, 4, 5]);
        assert!(serde_json::from_str::<DialState>("[2,3,4,12]").is_err());
    }
}
