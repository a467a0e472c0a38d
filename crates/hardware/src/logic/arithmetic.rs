//! Arithmetic layer: adders and the incrementer.
//!
//! This module implements unsigned binary addition. It provides:
//! 1. **Adder Cells:** `half_add` and `full_add` built from XOR/AND gates.
//! 2. **Ripple-Carry Adder:** `add`, wrapping modulo `2^width`.
//! 3. **Incrementer:** `inc`, adding the constant `hi(width)`.
//!
//! `add` and `inc` honor the execution mode: `GateAccurate` chains a full adder per
//! bit starting from the least-significant end, `Fast` uses native integer addition
//! and re-renders the low `width` bits. Both produce identical buses.

use crate::common::{Bit, Bus, CircuitResult, hi, lo};
use crate::config::ExecMode;
use crate::logic::gates::{and, xor};

/// Sum and carry produced by an adder cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOutput {
    /// Sum bit(s).
    pub sum: Bus,
    /// Carry-out bit(s).
    pub carry: Bus,
}

/// Half adder: `sum = xor(a, b)`, `carry = and(a, b)`.
pub fn half_add(a: &Bus, b: &Bus) -> CircuitResult<AddOutput> {
    Ok(AddOutput {
        sum: xor(a, b)?,
        carry: and(a, b)?,
    })
}

/// Full adder built from two chained half adders.
///
/// At most one of the two intermediate carries can be set, so XOR-ing them
/// is equivalent to OR-ing them.
pub fn full_add(a: &Bus, b: &Bus, c: &Bus) -> CircuitResult<AddOutput> {
    let first = half_add(a, b)?;
    let second = half_add(&first.sum, c)?;
    Ok(AddOutput {
        sum: second.sum,
        carry: xor(&first.carry, &second.carry)?,
    })
}

/// Adds two equal-width buses, discarding the final carry.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bus;
/// use nandsim_core::config::ExecMode;
/// use nandsim_core::logic::arithmetic::add;
///
/// let a: Bus = "1111".parse().unwrap();
/// let b: Bus = "0001".parse().unwrap();
/// assert_eq!(add(&a, &b, ExecMode::GateAccurate).unwrap().to_string(), "0000");
/// assert_eq!(add(&a, &b, ExecMode::Fast).unwrap().to_string(), "0000");
/// ```
pub fn add(a: &Bus, b: &Bus, mode: ExecMode) -> CircuitResult<Bus> {
    a.expect_same_width(b)?;
    match mode {
        ExecMode::Fast => Ok(add_fast(a, b)),
        ExecMode::GateAccurate => add_ripple(a, b),
    }
}

/// Increments a bus by one, wrapping from all-ones to all-zeros.
pub fn inc(a: &Bus, mode: ExecMode) -> CircuitResult<Bus> {
    add(a, &hi(a.width()), mode)
}

fn add_ripple(a: &Bus, b: &Bus) -> CircuitResult<Bus> {
    let width = a.width();
    let mut bits = vec![Bit::Zero; width];
    let mut carry = lo(1);
    for i in (0..width).rev() {
        let cell = full_add(&Bus::single(a[i]), &Bus::single(b[i]), &carry)?;
        bits[i] = cell.sum[0];
        carry = cell.carry;
    }
    Ok(Bus::new(bits))
}

fn add_fast(a: &Bus, b: &Bus) -> Bus {
    let width = a.width();
    if let (Some(x), Some(y)) = (a.to_unsigned(), b.to_unsigned()) {
        return Bus::from_unsigned(x.wrapping_add(y), width);
    }
    // Wider than a native word: plain carry propagation over bools.
    let mut bits = vec![Bit::Zero; width];
    let mut carry = false;
    for i in (0..width).rev() {
        let (x, y) = (a[i].is_high(), b[i].is_high());
        bits[i] = Bit::from(x ^ y ^ carry);
        carry = (x && y) || (carry && (x ^ y));
    }
    Bus::new(bits)
}
