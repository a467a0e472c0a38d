//! Addressable register cluster (RAM).
//!
//! `count` word registers of `width` bits selected by a binary address of
//! `ceil(log2(count))` bits.
//!
//! In `GateAccurate` mode the `load` line is demultiplexed across every register,
//! every register is evaluated each cycle with its own load bit, and the outputs
//! are recombined by a multiplexer keyed on the address. In `Fast` mode the address
//! indexes the register array directly. A write therefore touches exactly one
//! register in either mode.

use tracing::trace;

use crate::common::{Bus, CircuitError, CircuitResult, hi, lo};
use crate::config::ExecMode;
use crate::logic::select::{dsel, pad_lanes, sel};
use crate::seq::WordRegister;
use crate::sim::SimContext;

/// A bank of word registers addressed by a binary bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    width: usize,
    address_width: usize,
    registers: Vec<WordRegister>,
}

impl Cluster {
    /// Creates a cluster of `count` zeroed registers, each `width` bits wide.
    ///
    /// # Returns
    ///
    /// The cluster, or `InputCount(0)` when `count` is zero.
    pub fn new(width: usize, count: usize) -> CircuitResult<Self> {
        if count == 0 {
            return Err(CircuitError::InputCount(count));
        }
        Ok(Self {
            width,
            address_width: count.next_power_of_two().trailing_zeros() as usize,
            registers: vec![WordRegister::new(width); count],
        })
    }

    /// Width of each register in bits.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of registers.
    pub fn count(&self) -> usize {
        self.registers.len()
    }

    /// Width of the address bus in bits.
    pub const fn address_width(&self) -> usize {
        self.address_width
    }

    /// Returns the value stored at `address` without evaluating a cycle.
    pub fn peek(&self, address: &Bus) -> CircuitResult<Bus> {
        let index = self.decode(address)?;
        Ok(self.registers[index].value())
    }

    /// Evaluates one cycle.
    ///
    /// # Arguments
    ///
    /// * `ctx`     - Simulation context providing the clock and execution mode.
    /// * `data`    - Value to write; must be `width` bits.
    /// * `address` - Register address; must be `address_width` bits.
    /// * `load`    - 1-bit write enable.
    ///
    /// # Returns
    ///
    /// The value held at `address` after this cycle. On any error no register is written.
    pub fn eval(
        &mut self,
        ctx: &SimContext,
        data: &Bus,
        address: &Bus,
        load: &Bus,
    ) -> CircuitResult<Bus> {
        data.expect_width(self.width)?;
        load.expect_width(1)?;
        let index = self.decode(address)?;
        if load[0].is_high() {
            trace!(index, value = %data, "cluster write");
        }

        match ctx.mode() {
            ExecMode::Fast => self.registers[index].eval(ctx, data, load),
            ExecMode::GateAccurate => {
                let loads = dsel(load, address)?;
                let mut outputs = Vec::with_capacity(loads.len());
                for (register, lane_load) in self.registers.iter_mut().zip(&loads) {
                    outputs.push(register.eval(ctx, data, lane_load)?);
                }
                sel(&pad_lanes(outputs, self.width), address)
            }
        }
    }

    /// Reads the register at `address` (one cycle with `load = 0`).
    pub fn read(&mut self, ctx: &SimContext, address: &Bus) -> CircuitResult<Bus> {
        let data = lo(self.width);
        self.eval(ctx, &data, address, &lo(1))
    }

    /// Writes `data` to the register at `address` (one cycle with `load = 1`).
    pub fn write(&mut self, ctx: &SimContext, address: &Bus, data: &Bus) -> CircuitResult<Bus> {
        self.eval(ctx, data, address, &hi(1))
    }

    fn decode(&self, address: &Bus) -> CircuitResult<usize> {
        address.expect_width(self.address_width)?;
        let index = address
            .to_unsigned()
            .and_then(|value| usize::try_from(value).ok())
            .unwrap_or(usize::MAX);
        if index >= self.registers.len() {
            return Err(CircuitError::InvalidAddress {
                address: index,
                count: self.registers.len(),
            });
        }
        Ok(index)
    }
}
