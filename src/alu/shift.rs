//! Logical and arithmetic shifts.
//!
//! Count edge policy: a count of 0 is a flag-refresh-only identity
//! (CF=OF=0, ZF/SF recomputed); a count at or beyond the width saturates
//! to a full shift-out. This differs deliberately from the rotates,
//! which reduce their count modulo the width — mirroring how shift and
//! rotate hardware typically diverge.

use crate::gate::Bit;
use crate::mov::mov;
use crate::register::Register;

use super::Alu;

impl<const WIDTH: usize> Alu<WIDTH> {
    /// Logical left shift by `count` bits, filling with zeros.
    ///
    /// CF is the last bit shifted out of the MSB end (for a saturating
    /// full shift, the original MSB). OF = SF XOR CF for a single-bit
    /// shift, otherwise 0.
    pub fn shl(&mut self, reg: &mut Register<WIDTH>, count: u32) {
        if count == 0 {
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = Bit::ZERO;
            self.flags.of = Bit::ZERO;
            return;
        }
        let count = count as usize;

        if count >= WIDTH {
            let shifted_out = reg.msb();
            mov(reg, &Register::ZERO);
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = shifted_out;
            self.flags.of = Bit::ZERO;
            return;
        }
        let shifted_out = reg.bit(WIDTH - count);

        for i in (0..WIDTH - count).rev() {
            let bit = reg.bit(i);
            reg.set_bit(i + count, bit);
        }
        for i in 0..count {
            reg.set_bit(i, Bit::ZERO);
        }
        self.cmp(reg, &Register::ZERO);
        self.flags.cf = shifted_out;
        self.flags.of = if count == 1 {
            self.flags.sf.xor(shifted_out)
        } else {
            Bit::ZERO
        };
    }

    /// Logical right shift by `count` bits, filling with zeros.
    ///
    /// CF is the last bit shifted out of the LSB end. OF is always 0:
    /// logical shifts define no signed overflow.
    pub fn shr(&mut self, reg: &mut Register<WIDTH>, count: u32) {
        if count == 0 {
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = Bit::ZERO;
            self.flags.of = Bit::ZERO;
            return;
        }
        let count = count as usize;

        if count >= WIDTH {
            let shifted_out = reg.bit(0);
            mov(reg, &Register::ZERO);
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = shifted_out;
            self.flags.of = Bit::ZERO;
            return;
        }
        let shifted_out = reg.bit(count - 1);

        for i in 0..WIDTH - count {
            let bit = reg.bit(i + count);
            reg.set_bit(i, bit);
        }
        for i in WIDTH - count..WIDTH {
            reg.set_bit(i, Bit::ZERO);
        }
        self.cmp(reg, &Register::ZERO);
        self.flags.cf = shifted_out;
        self.flags.of = Bit::ZERO;
    }

    /// Arithmetic right shift by `count` bits, filling with the original
    /// sign bit.
    ///
    /// Identical bit movement to [`shr`](Alu::shr) but sign-preserving;
    /// a saturating full shift leaves the register sign-filled. CF is the
    /// last bit shifted out of the LSB end; OF is always 0.
    pub fn sar(&mut self, reg: &mut Register<WIDTH>, count: u32) {
        if count == 0 {
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = Bit::ZERO;
            self.flags.of = Bit::ZERO;
            return;
        }
        let count = count as usize;
        let sign = reg.msb();

        if count >= WIDTH {
            let shifted_out = reg.bit(0);
            for i in 0..WIDTH {
                reg.set_bit(i, sign);
            }
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = shifted_out;
            self.flags.of = Bit::ZERO;
            return;
        }
        let shifted_out = reg.bit(count - 1);

        for i in 0..WIDTH - count {
            let bit = reg.bit(i + count);
            reg.set_bit(i, bit);
        }
        for i in WIDTH - count..WIDTH {
            reg.set_bit(i, sign);
        }
        self.cmp(reg, &Register::ZERO);
        self.flags.cf = shifted_out;
        self.flags.of = Bit::ZERO;
    }
}
