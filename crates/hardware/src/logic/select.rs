//! Selection layer: multiplexers and demultiplexers.
//!
//! This module routes buses by a binary selector. It provides:
//! 1. **Multiplexing:** `sel2` for two inputs and the recursive `sel` tree for `2^k` inputs.
//! 2. **Demultiplexing:** The recursive `dsel` and its fixed 2/4/8-way unrollings.
//!
//! Selectors are MSB-first: the most-significant selector bit picks between the
//! first and second half of the inputs, so `sel(inputs, binary(j))` yields `inputs[j]`.
//! Widths are validated once, up front, before any recursion.

use crate::common::{Bit, Bus, CircuitError, CircuitResult, lo};
use crate::logic::gates::{and, nand, not};

/// Two-way multiplexer: `a` when `s = 0`, `b` when `s = 1`.
///
/// Wired as `nand(nand(not(s), a), nand(b, s))` with `s` fanned out across the bus.
pub fn sel2(a: &Bus, b: &Bus, s: &Bus) -> CircuitResult<Bus> {
    a.expect_same_width(b)?;
    let s = s.broadcast(a.width())?;
    nand(&nand(&not(&s), a)?, &nand(b, &s)?)
}

/// Multiplexes `2^k` equal-width inputs with a `k`-bit selector.
///
/// # Arguments
///
/// * `inputs` - Data inputs; the count must be a power of two.
/// * `select` - Selector bus, exactly `log2(inputs.len())` bits wide.
///
/// # Returns
///
/// The selected input, `InputCount` for a non-power-of-two input count, or
/// `WidthMismatch` for a mis-sized selector or unequal input widths.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bus;
/// use nandsim_core::logic::select::sel;
///
/// let inputs: Vec<Bus> = ["00", "01", "10", "11"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let out = sel(&inputs, &"10".parse().unwrap()).unwrap();
/// assert_eq!(out.to_string(), "10");
/// ```
pub fn sel(inputs: &[Bus], select: &Bus) -> CircuitResult<Bus> {
    let count = inputs.len();
    if !count.is_power_of_two() {
        return Err(CircuitError::InputCount(count));
    }
    select.expect_width(count.trailing_zeros() as usize)?;
    let width = inputs[0].width();
    for input in &inputs[1..] {
        input.expect_width(width)?;
    }
    sel_tree(inputs, select.bits())
}

fn sel_tree(inputs: &[Bus], select: &[Bit]) -> CircuitResult<Bus> {
    match (inputs, select) {
        ([only], []) => Ok(only.clone()),
        ([a, b], [s]) => sel2(a, b, &Bus::single(*s)),
        (_, [top, rest @ ..]) => {
            let (hi, lo) = inputs.split_at(inputs.len() / 2);
            sel2(
                &sel_tree(hi, rest)?,
                &sel_tree(lo, rest)?,
                &Bus::single(*top),
            )
        }
        (_, []) => Err(CircuitError::InputCount(inputs.len())),
    }
}

/// Routes `data` to one of `2^k` lanes chosen by a `k`-bit selector.
///
/// Every other lane carries the zero bus. An empty selector yields the single lane `[data]`.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bus;
/// use nandsim_core::logic::select::dsel;
///
/// let lanes = dsel(&"11".parse().unwrap(), &"01".parse().unwrap()).unwrap();
/// let lanes: Vec<String> = lanes.iter().map(Bus::to_string).collect();
/// assert_eq!(lanes, ["00", "11", "00", "00"]);
/// ```
pub fn dsel(data: &Bus, select: &Bus) -> CircuitResult<Vec<Bus>> {
    dsel_tree(data, select.bits())
}

fn dsel_tree(data: &Bus, select: &[Bit]) -> CircuitResult<Vec<Bus>> {
    let Some((&top, rest)) = select.split_first() else {
        return Ok(vec![data.clone()]);
    };
    let [hi, lo] = dsel2(data, &Bus::single(top))?;
    if rest.is_empty() {
        return Ok(vec![hi, lo]);
    }
    let mut lanes = dsel_tree(&hi, rest)?;
    lanes.extend(dsel_tree(&lo, rest)?);
    Ok(lanes)
}

/// Two-way demultiplexer: `[data, 0]` when `s = 0`, `[0, data]` when `s = 1`.
pub fn dsel2(data: &Bus, s: &Bus) -> CircuitResult<[Bus; 2]> {
    let s = s.broadcast(data.width())?;
    Ok([and(data, &not(&s))?, and(data, &s)?])
}

/// Four-way demultiplexer with a 2-bit selector.
pub fn dsel4(data: &Bus, s: &Bus) -> CircuitResult<[Bus; 4]> {
    s.expect_width(2)?;
    let [ab, cd] = dsel2(data, &Bus::single(s[0]))?;
    let [a, b] = dsel2(&ab, &Bus::single(s[1]))?;
    let [c, d] = dsel2(&cd, &Bus::single(s[1]))?;
    Ok([a, b, c, d])
}

/// Eight-way demultiplexer with a 3-bit selector.
pub fn dsel8(data: &Bus, s: &Bus) -> CircuitResult<[Bus; 8]> {
    s.expect_width(3)?;
    let [a_d, e_h] = dsel2(data, &Bus::single(s[0]))?;
    let rest = s.tail();
    let [a, b, c, d] = dsel4(&a_d, &rest)?;
    let [e, f, g, h] = dsel4(&e_h, &rest)?;
    Ok([a, b, c, d, e, f, g, h])
}

/// Pads a lane list with zero buses up to the next power of two.
///
/// Used when fewer physical inputs exist than a selector can address.
pub(crate) fn pad_lanes(mut lanes: Vec<Bus>, width: usize) -> Vec<Bus> {
    let target = lanes.len().next_power_of_two();
    lanes.resize(target, lo(width));
    lanes
}
