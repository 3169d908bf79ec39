//! The ledger's rational epoch.
//!
//! A point in time is expressed as `number + index / length`, where `number` counts whole
//! epochs and `index / length` is the fraction of the current epoch elapsed. Headers pack it
//! into a `u64` as `number | index << 24 | length << 40`.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

const NUMBER_BITS: u32 = 24;
const INDEX_BITS: u32 = 16;
const LENGTH_BITS: u32 = 16;

const NUMBER_MASK: u64 = (1 << NUMBER_BITS) - 1;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;
const LENGTH_MASK: u64 = (1 << LENGTH_BITS) - 1;

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Epoch {
    number: u64,
    index: u64,
    length: u64,
}

impl Epoch {
    pub const ZERO: Epoch = Epoch {
        number: 0,
        index: 0,
        length: 1,
    };

    /// Builds a normalized epoch: a zero length becomes 1 and an index past the length carries
    /// into the number, saturating at `u64::MAX`.
    pub fn new(number: u64, index: u64, length: u64) -> Self {
        if length == 0 {
            return Self {
                number,
                index: 0,
                length: 1,
            };
        }
        Self {
            number: number.saturating_add(index / length),
            index: index % length,
            length,
        }
    }

    /// Like [`Epoch::new`], but returns [`None`] instead of saturating when the carry overflows
    /// the number.
    pub fn checked_new(number: u64, index: u64, length: u64) -> Option<Self> {
        if length == 0 {
            return Some(Self::new(number, 0, 1));
        }
        Some(Self {
            number: number.checked_add(index / length)?,
            index: index % length,
            length,
        })
    }

    pub fn from_packed(value: u64) -> Self {
        Self::new(
            value & NUMBER_MASK,
            (value >> NUMBER_BITS) & INDEX_MASK,
            (value >> (NUMBER_BITS + INDEX_BITS)) & LENGTH_MASK,
        )
    }

    /// Packs into the header representation, if every field fits its bit width.
    pub fn to_packed(&self) -> Option<u64> {
        if self.number > NUMBER_MASK || self.index > INDEX_MASK || self.length > LENGTH_MASK {
            return None;
        }
        Some(
            self.number
                | (self.index << NUMBER_BITS)
                | (self.length << (NUMBER_BITS + INDEX_BITS)),
        )
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Returns the epoch as the fraction `numerator / denominator`.
    pub fn to_fraction(&self) -> (u128, u128) {
        let length = self.length as u128;
        (self.number as u128 * length + self.index as u128, length)
    }

    /// Adds a whole number of epochs, keeping the fractional part. Returns [`None`] on
    /// overflow.
    pub fn checked_add_epochs(&self, epochs: u64) -> Option<Self> {
        Some(Self {
            number: self.number.checked_add(epochs)?,
            ..*self
        })
    }

    /// Addition, returning [`None`] if the sum is not representable.
    pub fn checked_add(&self, rhs: Epoch) -> Option<Epoch> {
        let lcm = lcm(self.length, rhs.length);
        let sum = self.scaled_to(lcm)?.checked_add(rhs.scaled_to(lcm)?)?;
        Self::from_scaled(sum, lcm)
    }

    /// Subtraction, returning [`None`] if `rhs` is later than `self` or the difference is not
    /// representable.
    pub fn checked_sub(&self, rhs: Epoch) -> Option<Epoch> {
        let lcm = lcm(self.length, rhs.length);
        let diff = self.scaled_to(lcm)?.checked_sub(rhs.scaled_to(lcm)?)?;
        Self::from_scaled(diff, lcm)
    }

    fn scaled_to(&self, denominator: u128) -> Option<u128> {
        let (num, den) = self.to_fraction();
        num.checked_mul(denominator / den)
    }

    fn from_scaled(value: u128, denominator: u128) -> Option<Self> {
        let number = u64::try_from(value / denominator).ok()?;
        let index = u64::try_from(value % denominator).ok()?;
        let length = u64::try_from(denominator).ok()?;
        Some(Self::new(number, index, length))
    }
}

impl PartialEq for Epoch {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Epoch {}

impl PartialOrd for Epoch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Epoch {
    fn cmp(&self, other: &Self) -> Ordering {
        // normalized: index < length, so whole epochs decide first
        let lhs = self.index as u128 * other.length as u128;
        let rhs = other.index as u128 * self.length as u128;
        self.number.cmp(&other.number).then(lhs.cmp(&rhs))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}/{}", self.number, self.index, self.length)
    }
}

impl FromStr for Epoch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedEpoch(s.to_owned());
        let parse = |v: &str| v.trim().parse::<u64>().map_err(|_| malformed());

        let Some((number, frac)) = s.split_once('+') else {
            return Ok(Self::new(parse(s)?, 0, 1));
        };
        let (index, length) = frac.split_once('/').ok_or_else(malformed)?;
        let length = parse(length)?;
        if length == 0 {
            return Err(malformed());
        }
        Self::checked_new(parse(number)?, parse(index)?, length).ok_or_else(malformed)
    }
}

impl TryFrom<String> for Epoch {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Epoch> for String {
    fn from(value: Epoch) -> Self {
        value.to_string()
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u128 {
    let (a, b) = (a as u128, b as u128);
    a / gcd(a, b) * b
}
