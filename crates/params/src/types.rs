//! Types for the router parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ParamsError;

/// Number of basis points in one whole unit (100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A fee or reward rate expressed in basis points.
///
/// Guaranteed to be at most [`BPS_DENOMINATOR`], so applying it to an amount
/// never produces more than the amount itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Bps(u16);

impl Bps {
    /// The zero rate.
    pub const ZERO: Bps = Bps(0);

    /// Creates a new rate, rejecting values above [`BPS_DENOMINATOR`].
    pub const fn new(bps: u16) -> Result<Self, ParamsError> {
        if bps as u64 > BPS_DENOMINATOR {
            return Err(ParamsError::BpsOutOfRange(bps));
        }
        Ok(Bps(bps))
    }

    /// Returns the raw basis-point value.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Applies this rate to an amount, rounding down.
    pub const fn apply(self, amount: u64) -> u64 {
        ((amount as u128 * self.0 as u128) / BPS_DENOMINATOR as u128) as u64
    }
}

impl TryFrom<u16> for Bps {
    type Error = ParamsError;

    fn try_from(bps: u16) -> Result<Self, Self::Error> {
        Self::new(bps)
    }
}

impl From<Bps> for u16 {
    fn from(bps: Bps) -> Self {
        bps.0
    }
}

impl fmt::Display for Bps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bps_bounds() {
        assert!(Bps::new(0).is_ok());
        assert!(Bps::new(10_000).is_ok());
        assert!(Bps::new(10_001).is_err());
        assert!(Bps::new(u16::MAX).is_err());
    }

    #[test]
    fn bps_apply_rounds_down() {
        let rate = Bps::new(5).unwrap();
        assert_eq!(rate.apply(100_060_030), 50_030);
        assert_eq!(rate.apply(1_999), 0);

        let full = Bps::new(10_000).unwrap();
        assert_eq!(full.apply(12_345), 12_345);

        assert_eq!(Bps::ZERO.apply(u64::MAX), 0);
    }

    #[test]
    fn bps_apply_never_overflows() {
        let full = Bps::new(10_000).unwrap();
        assert_eq!(full.apply(u64::MAX), u64::MAX);
    }
}
