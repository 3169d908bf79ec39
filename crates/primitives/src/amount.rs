use std::fmt;

use serde::{Deserialize, Serialize};

/// Unsigned fixed-point amount with 8 decimals, stored as an integer number of shannons.
///
/// Cell capacities are denominated in this unit (1 CKB = 10^8 shannons). The 128-bit backing
/// leaves room for products of amounts and rates without intermediate overflow.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
pub struct FixedPoint(u128);

impl FixedPoint {
    /// The zero amount.
    pub const ZERO: FixedPoint = Self(0);

    /// The maximum value of an amount.
    pub const MAX: FixedPoint = Self(u128::MAX);

    /// Serialized length of the backing integer.
    pub const SIZE: usize = 16;

    /// The number of shannons in 1 CKB.
    pub const SHANNONS_PER_CKB: u128 = 100_000_000;

    pub const fn from_shannons(value: u128) -> Self {
        Self(value)
    }

    pub const fn shannons(&self) -> u128 {
        self.0
    }

    /// Converts a whole number of CKB into a [`FixedPoint`] in const context.
    ///
    /// ## Panics
    ///
    /// Panics if the value multiplied by [`Self::SHANNONS_PER_CKB`] overflows.
    pub const fn from_ckb(ckb: u128) -> Self {
        match ckb.checked_mul(Self::SHANNONS_PER_CKB) {
            Some(amount) => Self(amount),
            None => panic!("number of shannons greater than u128::MAX"),
        }
    }

    /// Checked addition. Returns [`None`] if overflow occurred.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction. Returns [`None`] if overflow occurred.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Checked multiplication by a scalar. Returns [`None`] if overflow occurred.
    pub fn checked_mul(self, rhs: u128) -> Option<Self> {
        self.0.checked_mul(rhs).map(Self)
    }

    /// Checked division by a scalar. Returns [`None`] if `rhs == 0`.
    pub fn checked_div(self, rhs: u128) -> Option<Self> {
        self.0.checked_div(rhs).map(Self)
    }

    /// Saturating subtraction, returning [`Self::ZERO`] on underflow.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub fn to_le_bytes(self) -> [u8; Self::SIZE] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(u128::from_le_bytes(bytes))
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SHANNONS_PER_CKB;
        let frac = self.0 % Self::SHANNONS_PER_CKB;
        write!(f, "{whole}.{frac:08}")
    }
}
