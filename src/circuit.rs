//! Combinational adder and subtractor circuits.
//!
//! The single-bit building blocks the ALU ripples across register
//! positions. Each primitive is a pure function of its input bits, built
//! only from the gate operations in [`gate`](crate::gate).
//!
//! # Composition
//!
//! The full adder is two half-adders and an OR:
//!
//! ```text
//! sum   = HA_sum(HA_sum(x, y), c)
//! carry = HA_carry(x, y) | HA_carry(HA_sum(x, y), c)
//! ```
//!
//! and the full subtractor is the mirror construction from two
//! half-subtractors:
//!
//! ```text
//! difference = HS_diff(HS_diff(x, y), b)
//! borrow     = HS_borrow(x, y) | HS_borrow(HS_diff(x, y), b)
//! ```
//!
//! # Truth Tables
//!
//! Full adder (`x + y + c`):
//!
//! | x | y | c | sum | carry |
//! |---|---|---|-----|-------|
//! | 0 | 0 | 0 |  0  |   0   |
//! | 0 | 0 | 1 |  1  |   0   |
//! | 0 | 1 | 0 |  1  |   0   |
//! | 0 | 1 | 1 |  0  |   1   |
//! | 1 | 0 | 0 |  1  |   0   |
//! | 1 | 0 | 1 |  0  |   1   |
//! | 1 | 1 | 0 |  0  |   1   |
//! | 1 | 1 | 1 |  1  |   1   |
//!
//! Full subtractor (`x - y - b`):
//!
//! | x | y | b | difference | borrow |
//! |---|---|---|------------|--------|
//! | 0 | 0 | 0 |     0      |   0    |
//! | 0 | 0 | 1 |     1      |   1    |
//! | 0 | 1 | 0 |     1      |   1    |
//! | 0 | 1 | 1 |     0      |   1    |
//! | 1 | 0 | 0 |     1      |   0    |
//! | 1 | 0 | 1 |     0      |   0    |
//! | 1 | 1 | 0 |     0      |   0    |
//! | 1 | 1 | 1 |     1      |   1    |
//!
//! # Example
//!
//! ```
//! use ripple_alu::circuit::full_adder;
//! use ripple_alu::gate::Bit;
//!
//! // 1 + 1 + 1 = 11b
//! let out = full_adder(Bit::ONE, Bit::ONE, Bit::ONE);
//! assert_eq!(out.sum, Bit::ONE);
//! assert_eq!(out.carry, Bit::ONE);
//! ```

use crate::gate::Bit;

/// Output of a half- or full-adder stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdderOutput {
    /// Sum bit of the stage.
    pub sum: Bit,
    /// Carry out of the stage.
    pub carry: Bit,
}

/// Output of a half- or full-subtractor stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtractorOutput {
    /// Difference bit of the stage.
    pub difference: Bit,
    /// Borrow out of the stage.
    pub borrow: Bit,
}

/// Half adder: `x + y` with no carry-in.
///
/// `sum = x XOR y`, `carry = x AND y`.
#[inline(always)]
pub const fn half_adder(x: Bit, y: Bit) -> AdderOutput {
    AdderOutput {
        sum: x.xor(y),
        carry: x.and(y),
    }
}

/// Full adder: `x + y + carry_in`, composed from two half-adders.
///
/// `sum = x XOR y XOR c`, `carry = (x AND y) OR ((x XOR y) AND c)`.
#[inline(always)]
pub const fn full_adder(x: Bit, y: Bit, carry_in: Bit) -> AdderOutput {
    let first = half_adder(x, y);
    let second = half_adder(first.sum, carry_in);
    AdderOutput {
        sum: second.sum,
        carry: first.carry.or(second.carry),
    }
}

/// Half subtractor: `x - y` with no borrow-in.
///
/// `difference = x XOR y`, `borrow = (NOT x) AND y`.
#[inline(always)]
pub const fn half_subtractor(x: Bit, y: Bit) -> SubtractorOutput {
    SubtractorOutput {
        difference: x.xor(y),
        borrow: x.not().and(y),
    }
}

/// Full subtractor: `x - y - borrow_in`, composed from two
/// half-subtractors.
///
/// `difference = x XOR y XOR b`,
/// `borrow = ((NOT x) AND y) OR ((NOT (x XOR y)) AND b)`.
#[inline(always)]
pub const fn full_subtractor(x: Bit, y: Bit, borrow_in: Bit) -> SubtractorOutput {
    let first = half_subtractor(x, y);
    let second = half_subtractor(first.difference, borrow_in);
    SubtractorOutput {
        difference: second.difference,
        borrow: first.borrow.or(second.borrow),
    }
}
