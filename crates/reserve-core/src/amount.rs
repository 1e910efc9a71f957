//! Fixed-point token amounts
//!
//! Amounts are unsigned integers counted in base units, with
//! [`DECIMALS`] fractional digits. There is no floating point anywhere in the
//! amount path: parsing and formatting work digit by digit.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by every amount
pub const DECIMALS: u8 = 8;

/// Base units per whole token (`10^DECIMALS`)
pub const BASE_UNITS_PER_TOKEN: u128 = 100_000_000;

/// Fixed supply cap, in base units: 21,000,000 whole tokens.
///
/// Set at genesis; there is no runtime path that changes it.
pub const MAX_SUPPLY: Amount = Amount(21_000_000 * BASE_UNITS_PER_TOKEN);

/// Non-negative token amount in base units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create from a raw count of base units
    pub const fn from_base_units(units: u128) -> Self {
        Self(units)
    }

    /// Create from a whole number of tokens, `None` on overflow
    pub fn from_whole(tokens: u128) -> Option<Self> {
        tokens.checked_mul(BASE_UNITS_PER_TOKEN).map(Self)
    }

    /// Raw count of base units
    pub const fn base_units(self) -> u128 {
        self.0
    }

    /// True for the zero amount
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction, `None` if `other > self`
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Saturating subtraction
    pub fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / BASE_UNITS_PER_TOKEN;
        let frac = self.0 % BASE_UNITS_PER_TOKEN;
        write!(f, "{whole}.{frac:0width$}", width = DECIMALS as usize)
    }
}

/// Failure to parse a decimal amount string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid character {0:?} in amount")]
    InvalidDigit(char),
    #[error("more than {DECIMALS} fractional digits")]
    TooPrecise,
    #[error("amount overflows")]
    Overflow,
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        if frac.len() > DECIMALS as usize {
            return Err(ParseAmountError::TooPrecise);
        }

        let mut units: u128 = 0;
        let padding = DECIMALS as usize - frac.len();
        let digits = whole
            .chars()
            .chain(frac.chars())
            .chain(std::iter::repeat('0').take(padding));
        for c in digits {
            let digit = c.to_digit(10).ok_or(ParseAmountError::InvalidDigit(c))?;
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(u128::from(digit)))
                .ok_or(ParseAmountError::Overflow)?;
        }
        Ok(Amount(units))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
