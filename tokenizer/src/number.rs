use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A non-negative integer of arbitrary size, as found in a run of digits.
///
/// Runs that fit into an [`u64`] are kept as a native integer.
/// Anything larger keeps its digits, without leading zeroes, so that
/// something like a 40 digit build counter still compares correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    Small(u64),
    Big(Box<str>),
}

impl Number {
    /// The number zero.
    pub const ZERO: Number = Number {
        repr: Repr::Small(0),
    };

    /// Parses a run of ASCII digits.
    ///
    /// Leading zeroes are ignored and an empty run is zero.
    /// The input is expected to consist of ASCII digits only,
    /// which is what the lexer hands out for [`crate::Kind::Number`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use software_version_tokenizer::Number;
    /// assert_eq!(Number::parse("0012"), Number::from(12));
    /// assert_eq!(Number::parse("0012").to_u64(), Some(12));
    /// assert_eq!(Number::parse("98765432109876543210987654321").to_u64(), None);
    /// ```
    pub fn parse(digits: &str) -> Self {
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Self::ZERO;
        }
        let repr = match digits.parse::<u64>() {
            Ok(num) => Repr::Small(num),
            Err(_) => Repr::Big(digits.into()),
        };
        Self { repr }
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Small(0))
    }

    /// Returns the number as an [`u64`], or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        match self.repr {
            Repr::Small(num) => Some(num),
            Repr::Big(_) => None,
        }
    }

    /// Returns the number as an [`u64`], saturating at [`u64::MAX`].
    pub fn saturating_u64(&self) -> u64 {
        self.to_u64().unwrap_or(u64::MAX)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Number {
    fn from(num: u64) -> Self {
        Self {
            repr: Repr::Small(num),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Small(lhs), Repr::Small(rhs)) => lhs.cmp(rhs),
            // anything that does not fit into an u64 is larger than u64::MAX
            (Repr::Small(_), Repr::Big(_)) => Ordering::Less,
            (Repr::Big(_), Repr::Small(_)) => Ordering::Greater,
            (Repr::Big(lhs), Repr::Big(rhs)) => lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs)),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(num) => Display::fmt(num, f),
            Repr::Big(digits) => f.pad(digits),
        }
    }
}
