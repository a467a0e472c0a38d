//! Logic level type.
//!
//! This module defines the single-wire signal carried through every circuit. It provides:
//! 1. **Logic Levels:** A two-valued `Bit` with no third "undefined" state.
//! 2. **Symbol Conversion:** Checked conversion from the `'0'`/`'1'` character symbols.
//! 3. **Serialization:** `"0"`/`"1"` string form for configuration files.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CircuitError;

/// A single logic level on a wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bit {
    /// Logic low.
    #[default]
    #[serde(rename = "0")]
    Zero,
    /// Logic high.
    #[serde(rename = "1")]
    One,
}

impl Bit {
    /// Returns `true` for logic high.
    #[inline(always)]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns the character symbol (`'0'` or `'1'`) for this level.
    #[inline(always)]
    pub const fn symbol(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Parses a character symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol`   - The character to parse.
    /// * `position` - Position of the character within its bus, reported on failure.
    ///
    /// # Returns
    ///
    /// The parsed `Bit`, or `CircuitError::InvalidSymbol` for anything other than `'0'`/`'1'`.
    pub const fn from_symbol(symbol: char, position: usize) -> Result<Self, CircuitError> {
        match symbol {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            _ => Err(CircuitError::InvalidSymbol { symbol, position }),
        }
    }
}

impl From<bool> for Bit {
    #[inline(always)]
    fn from(level: bool) -> Self {
        if level { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    #[inline(always)]
    fn from(bit: Bit) -> Self {
        bit.is_high()
    }
}

impl TryFrom<char> for Bit {
    type Error = CircuitError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol, 0)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
