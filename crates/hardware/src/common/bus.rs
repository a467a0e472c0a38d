//! Bit bus type.
//!
//! A `Bus` is an ordered, fixed-length group of wires, most-significant bit first.
//! It provides the following:
//! 1. **Construction:** Parsing from `'0'`/`'1'` strings and the constant generators `lo`, `hi` and `bus`.
//! 2. **Width Checks:** Helpers that report `WidthMismatch` before any gate runs.
//! 3. **Numeric Views:** Unsigned conversions used by the fast execution paths and cluster addressing.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::bit::Bit;
use super::error::{CircuitError, CircuitResult};

/// Widest bus that can be viewed as a native unsigned integer.
pub const MAX_NUMERIC_WIDTH: usize = u128::BITS as usize;

/// An ordered group of bits, most-significant bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bus(Vec<Bit>);

/// Creates a bus of `width` bits, every one driven to `value`.
pub fn bus(width: usize, value: Bit) -> Bus {
    Bus(vec![value; width])
}

/// Creates an all-zero bus of `width` bits.
pub fn lo(width: usize) -> Bus {
    bus(width, Bit::Zero)
}

/// Creates a bus of `width` bits that is zero except for the least-significant bit.
///
/// `hi(0)` is the empty bus.
pub fn hi(width: usize) -> Bus {
    let mut out = lo(width);
    if let Some(lsb) = out.0.last_mut() {
        *lsb = Bit::One;
    }
    out
}

impl Bus {
    /// Wraps an ordered list of bits (most-significant first).
    pub const fn new(bits: Vec<Bit>) -> Self {
        Self(bits)
    }

    /// Creates a 1-bit bus.
    pub fn single(bit: Bit) -> Self {
        Self(vec![bit])
    }

    /// Number of wires on the bus.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the zero-width bus.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying bits.
    #[inline(always)]
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Iterates over the bits, most-significant first.
    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.0.iter()
    }

    /// Returns the bit at `index` (0 is the most-significant bit).
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.0.get(index).copied()
    }

    /// Returns the most-significant bit, or `None` for an empty bus.
    pub fn msb(&self) -> Option<Bit> {
        self.0.first().copied()
    }

    /// Returns the bus without its most-significant bit.
    pub fn tail(&self) -> Self {
        Self(self.0.iter().skip(1).copied().collect())
    }

    /// Returns a new bus with `other` appended after `self`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut bits = Vec::with_capacity(self.width() + other.width());
        bits.extend_from_slice(&self.0);
        bits.extend_from_slice(&other.0);
        Self(bits)
    }

    /// Replicates a 1-bit bus across `width` wires.
    ///
    /// Used to fan a control signal out to every lane of a data bus.
    ///
    /// # Returns
    ///
    /// The widened bus, or `WidthMismatch` if `self` is not exactly one bit wide.
    pub fn broadcast(&self, width: usize) -> CircuitResult<Self> {
        self.expect_width(1)?;
        Ok(bus(width, self.0[0]))
    }

    /// Checks that the bus is exactly `expected` bits wide.
    pub fn expect_width(&self, expected: usize) -> CircuitResult<()> {
        if self.width() == expected {
            Ok(())
        } else {
            Err(CircuitError::WidthMismatch {
                expected,
                found: self.width(),
            })
        }
    }

    /// Checks that `self` and `other` have the same width.
    pub fn expect_same_width(&self, other: &Self) -> CircuitResult<()> {
        other.expect_width(self.width())
    }

    /// Interprets the bus as an unsigned integer.
    ///
    /// # Returns
    ///
    /// The numeric value, or `None` if the bus is wider than [`MAX_NUMERIC_WIDTH`].
    pub fn to_unsigned(&self) -> Option<u128> {
        if self.width() > MAX_NUMERIC_WIDTH {
            return None;
        }
        Some(
            self.0
                .iter()
                .fold(0u128, |acc, bit| (acc << 1) | u128::from(bit.is_high())),
        )
    }

    /// Renders the low `width` bits of `value` as a bus, zero-padding on the left.
    pub fn from_unsigned(value: u128, width: usize) -> Self {
        Self(
            (0..width)
                .rev()
                .map(|shift| {
                    let set = shift < MAX_NUMERIC_WIDTH && (value >> shift) & 1 == 1;
                    Bit::from(set)
                })
                .collect(),
        )
    }
}

impl Index<usize> for Bus {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.0[index]
    }
}

impl FromIterator<Bit> for Bus {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Bus {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bus {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Bit> for Bus {
    fn from(bit: Bit) -> Self {
        Self::single(bit)
    }
}

impl FromStr for Bus {
    type Err = CircuitError;

    /// Parses a `'0'`/`'1'` string, most-significant bit first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| Bit::from_symbol(symbol, position))
            .collect()
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
