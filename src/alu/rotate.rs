//! Bit rotations.
//!
//! Rotates reduce their count modulo the width, so a full rotation is a
//! true identity — unlike the shifts, which saturate. Each rotation is
//! performed as a sequence of single-bit steps: the bit leaving one end
//! wraps into the other and latches into CF.

use crate::gate::Bit;
use crate::register::Register;

use super::Alu;

impl<const WIDTH: usize> Alu<WIDTH> {
    /// Rotate left by `count mod WIDTH` single-bit steps.
    ///
    /// CF is the last bit that wrapped out of the MSB into the LSB.
    /// OF = SF XOR CF when the effective count is exactly 1, else 0.
    pub fn rol(&mut self, reg: &mut Register<WIDTH>, count: u32) {
        let count = count as usize % WIDTH;

        if count == 0 {
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = Bit::ZERO;
            self.flags.of = Bit::ZERO;
            return;
        }
        let mut wrapped = Bit::ZERO;

        for _ in 0..count {
            let msb = reg.msb();

            for i in (1..WIDTH).rev() {
                let bit = reg.bit(i - 1);
                reg.set_bit(i, bit);
            }
            reg.set_bit(0, msb);
            wrapped = msb;
        }
        self.cmp(reg, &Register::ZERO);
        self.flags.cf = wrapped;
        self.flags.of = if count == 1 {
            self.flags.sf.xor(wrapped)
        } else {
            Bit::ZERO
        };
    }

    /// Rotate right by `count mod WIDTH` single-bit steps.
    ///
    /// CF is the last bit that wrapped out of the LSB into the MSB.
    /// When the effective count is exactly 1, OF is the XOR of the two
    /// most significant bits of the result, else 0.
    pub fn ror(&mut self, reg: &mut Register<WIDTH>, count: u32) {
        let count = count as usize % WIDTH;

        if count == 0 {
            self.cmp(reg, &Register::ZERO);
            self.flags.cf = Bit::ZERO;
            self.flags.of = Bit::ZERO;
            return;
        }
        let mut wrapped = Bit::ZERO;

        for _ in 0..count {
            let lsb = reg.bit(0);

            for i in 0..WIDTH - 1 {
                let bit = reg.bit(i + 1);
                reg.set_bit(i, bit);
            }
            reg.set_bit(WIDTH - 1, lsb);
            wrapped = lsb;
        }
        self.cmp(reg, &Register::ZERO);
        self.flags.cf = wrapped;
        self.flags.of = if count == 1 {
            reg.bit(WIDTH - 1).xor(reg.bit(WIDTH - 2))
        } else {
            Bit::ZERO
        };
    }
}
