//! Combinational gates.
//!
//! Every gate in this module is derived from the two-input NAND. It provides:
//! 1. **Primitive:** Bitwise `nand` over equal-width buses.
//! 2. **Derived Gates:** `not`, `and`, `or`, `nor`, `xor`, `nxor` built by the usual identities.
//! 3. **Reductions:** N-way `nand_way`, `and_way` and `or_way` collapsing a bus to one bit.
//!
//! All gates are pure. Binary gates return `WidthMismatch` for operands of unequal width.

use crate::common::{Bit, Bus, CircuitResult};

/// The only primitive: a single two-input NAND.
#[inline(always)]
const fn nand_bit(a: Bit, b: Bit) -> Bit {
    if a.is_high() && b.is_high() {
        Bit::Zero
    } else {
        Bit::One
    }
}

/// Bitwise NAND of two equal-width buses.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bus;
/// use nandsim_core::logic::gates::nand;
///
/// let a: Bus = "0011".parse().unwrap();
/// let b: Bus = "0101".parse().unwrap();
/// assert_eq!(nand(&a, &b).unwrap().to_string(), "1110");
/// ```
pub fn nand(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    a.expect_same_width(b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| nand_bit(x, y)).collect())
}

/// Bitwise NOT, wired as a NAND with both inputs tied together.
pub fn not(a: &Bus) -> Bus {
    a.iter().map(|&x| nand_bit(x, x)).collect()
}

/// Bitwise AND: `not(nand(a, b))`.
pub fn and(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    Ok(not(&nand(a, b)?))
}

/// Bitwise OR: `nand(not(a), not(b))`.
pub fn or(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    nand(&not(a), &not(b))
}

/// Bitwise NOR: `not(or(a, b))`.
pub fn nor(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    Ok(not(&or(a, b)?))
}

/// Bitwise XOR: `or(and(a, not(b)), and(not(a), b))`.
pub fn xor(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    or(&and(a, &not(b))?, &and(&not(a), b)?)
}

/// Bitwise XNOR: `not(xor(a, b))`.
pub fn nxor(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    Ok(not(&xor(a, b)?))
}

/// N-way AND: a 1-bit bus that is high only when every bit of `a` is high.
///
/// The empty bus reduces to `"1"`.
pub fn and_way(a: &Bus) -> Bus {
    let out = a.iter().fold(Bit::One, |acc, &bit| {
        let n = nand_bit(acc, bit);
        nand_bit(n, n)
    });
    Bus::single(out)
}

/// N-way NAND: `"0"` only when every bit of `a` is high.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bus;
/// use nandsim_core::logic::gates::nand_way;
///
/// assert_eq!(nand_way(&"11111111".parse::<Bus>().unwrap()).to_string(), "0");
/// assert_eq!(nand_way(&"11111110".parse::<Bus>().unwrap()).to_string(), "1");
/// ```
pub fn nand_way(a: &Bus) -> Bus {
    not(&and_way(a))
}

/// N-way OR: a 1-bit bus that is high when any bit of `a` is high.
///
/// Built as `nand_way(not(a))`. The empty bus reduces to `"0"`.
pub fn or_way(a: &Bus) -> Bus {
    nand_way(&not(a))
}
