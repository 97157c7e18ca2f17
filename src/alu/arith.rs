//! Ripple-carry arithmetic operations.
//!
//! Every operation here loops over bit positions from the LSB upward,
//! driving each position through a full adder or full subtractor and
//! propagating the carry or borrow to the next position. Subtraction is
//! realized as addition of the two's complement (`lhs + !rhs + 1`);
//! multiplication as shift-and-add; division as repeated subtraction.

use crate::circuit::{full_adder, full_subtractor};
use crate::gate::Bit;
use crate::mov::mov;
use crate::register::Register;

use super::{Alu, Flags};

impl<const WIDTH: usize> Alu<WIDTH> {
    /// Add `rhs` into `lhs` through the ripple-carry chain.
    ///
    /// Flags: ZF iff every sum bit was zero; SF = result MSB; CF = carry
    /// out of the MSB; OF iff the operand signs were equal and the result
    /// sign differs from them.
    pub fn add(&mut self, lhs: &mut Register<WIDTH>, rhs: &Register<WIDTH>) {
        let lhs_sign = lhs.msb();
        let rhs_sign = rhs.msb();
        let mut carry = Bit::ZERO;
        let mut zf = Bit::ONE;

        for i in 0..WIDTH {
            let out = full_adder(lhs.bit(i), rhs.bit(i), carry);
            lhs.set_bit(i, out.sum);
            carry = out.carry;
            zf = zf.and(out.sum.not());
        }
        self.flags.zf = zf;
        self.flags.sf = lhs.msb();
        self.flags.cf = carry;
        self.flags.of = lhs_sign.xnor(rhs_sign).and(self.flags.sf.xor(lhs_sign));
    }

    /// Subtract `rhs` from `lhs` via two's-complement addition:
    /// `lhs + !rhs + 1`.
    ///
    /// Flags: ZF/SF as for [`add`](Alu::add); CF is the complement of
    /// the final carry, so CF=1 signals that a borrow occurred; OF iff
    /// the operand signs differed and the result sign differs from the
    /// original `lhs` sign.
    pub fn sub(&mut self, lhs: &mut Register<WIDTH>, rhs: &Register<WIDTH>) {
        let lhs_sign = lhs.msb();
        let rhs_sign = rhs.msb();
        let mut carry = Bit::ONE;
        let mut zf = Bit::ONE;

        for i in 0..WIDTH {
            let out = full_adder(lhs.bit(i), rhs.bit(i).not(), carry);
            lhs.set_bit(i, out.sum);
            carry = out.carry;
            zf = zf.and(out.sum.not());
        }
        self.flags.zf = zf;
        self.flags.sf = lhs.msb();
        self.flags.cf = carry.not();
        self.flags.of = lhs_sign.xor(rhs_sign).and(self.flags.sf.xor(lhs_sign));
    }

    /// Compare `lhs` against `rhs` without modifying either.
    ///
    /// Performs the subtraction on an internal copy; the only side effect
    /// is the flag state, set exactly as [`sub`](Alu::sub) would.
    pub fn cmp(&mut self, lhs: &Register<WIDTH>, rhs: &Register<WIDTH>) {
        let mut scratch = Register::ZERO;
        mov(&mut scratch, lhs);
        self.sub(&mut scratch, rhs);
    }

    /// Multiply `lhs` by `rhs` (unsigned shift-and-add), keeping the low
    /// `WIDTH` bits of the product.
    ///
    /// For each set bit of the multiplier the shifted multiplicand is
    /// accumulated with [`add`](Alu::add). Final flags are whatever the
    /// last accumulation left; if `rhs` has no set bits the flags are
    /// simply those from before the call. The numeric result never
    /// depends on intermediate flag values.
    pub fn mul(&mut self, lhs: &mut Register<WIDTH>, rhs: &Register<WIDTH>) {
        let mut multiplicand = Register::ZERO;
        mov(&mut multiplicand, lhs);
        mov(lhs, &Register::ZERO);

        for i in 0..WIDTH {
            if rhs.bit(i).level() {
                self.add(lhs, &multiplicand);
            }
            // The multiplicand advance is internal plumbing; its shift
            // flags are discarded.
            let saved = self.flags;
            self.shl(&mut multiplicand, 1);
            self.flags = saved;
        }
    }

    /// Divide `lhs` by `rhs` (unsigned, repeated subtraction), storing
    /// the quotient in `lhs` and discarding the remainder.
    ///
    /// Division by zero is not an error: the quotient is zeroed and the
    /// flags are forced to ZF=CF=OF=1, SF=0 — the signaling convention of
    /// this design. Callers check the flags, not a `Result`.
    ///
    /// Otherwise ZF reflects a zero quotient, SF its MSB, and CF=OF=0.
    /// Runtime is proportional to the quotient's magnitude.
    pub fn div(&mut self, lhs: &mut Register<WIDTH>, rhs: &Register<WIDTH>) {
        self.cmp(rhs, &Register::ZERO);

        if self.flags.zf.level() {
            mov(lhs, &Register::ZERO);
            self.flags = Flags {
                cf: Bit::ONE,
                zf: Bit::ONE,
                sf: Bit::ZERO,
                of: Bit::ONE,
            };
            return;
        }
        let mut quotient = Register::ZERO;
        let mut remainder = Register::ZERO;
        mov(&mut remainder, lhs);

        loop {
            self.sub(&mut remainder, rhs);

            if self.flags.cf.level() {
                // Borrow: the subtraction went below zero. Undo and stop.
                self.add(&mut remainder, rhs);
                break;
            }
            self.inc(&mut quotient);
        }
        mov(lhs, &quotient);
        self.flags.sf = lhs.msb();
        self.cmp(lhs, &Register::ZERO);
        self.flags.cf = Bit::ZERO;
        self.flags.of = Bit::ZERO;
    }

    /// Increment `reg` by one.
    ///
    /// The ripple stops as soon as a position produces no further carry;
    /// the result and flags are identical to a full ripple. OF is set iff
    /// the most positive value was incremented (sign flips 0 to 1). CF is
    /// left untouched, matching conventional INC behavior.
    pub fn inc(&mut self, reg: &mut Register<WIDTH>) {
        let msb_before = reg.msb();
        let mut carry = Bit::ONE;

        for i in 0..WIDTH {
            let out = full_adder(reg.bit(i), Bit::ZERO, carry);
            reg.set_bit(i, out.sum);
            carry = out.carry;

            if !carry.level() {
                break;
            }
        }
        self.flags.zf = Bit::new(reg.is_zero());
        self.flags.sf = reg.msb();
        self.flags.of = msb_before.not().and(self.flags.sf);
    }

    /// Decrement `reg` by one.
    ///
    /// Ripple-borrow through the full subtractor, stopping once the
    /// borrow dies out. OF is set iff the most negative value was
    /// decremented (sign flips 1 to 0). CF is left untouched, matching
    /// conventional DEC behavior.
    pub fn dec(&mut self, reg: &mut Register<WIDTH>) {
        let msb_before = reg.msb();
        let mut borrow = Bit::ONE;

        for i in 0..WIDTH {
            let out = full_subtractor(reg.bit(i), Bit::ZERO, borrow);
            reg.set_bit(i, out.difference);
            borrow = out.borrow;

            if !borrow.level() {
                break;
            }
        }
        self.flags.zf = Bit::new(reg.is_zero());
        self.flags.sf = reg.msb();
        self.flags.of = msb_before.and(self.flags.sf.not());
    }

    /// Negate `reg` (two's complement): `reg = 0 - reg`.
    ///
    /// CF is set iff the original value was non-zero (equivalently,
    /// CF = NOT ZF) — a convention of this design, not a general carry
    /// rule. OF is set iff the result is the most negative pattern:
    /// negating the minimum value wraps back to itself, and no other
    /// input produces that pattern.
    pub fn neg(&mut self, reg: &mut Register<WIDTH>) {
        let mut negated = Register::ZERO;
        self.sub(&mut negated, reg);
        mov(reg, &negated);

        self.cmp(reg, &Register::ZERO);
        self.flags.cf = self.flags.zf.not();

        let mut lower_any = Bit::ZERO;
        for i in 0..WIDTH - 1 {
            lower_any = lower_any.or(reg.bit(i));
        }
        self.flags.of = reg.msb().and(lower_any.not());
    }
}
