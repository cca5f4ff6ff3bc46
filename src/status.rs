//! # Processor Status Register
//!
//! The P register as a bitfield with named bits. The UNUSED bit (0x20) reads
//! as 1 on real hardware; every mutation in this crate goes through
//! [`crate::Cpu`]'s single setter so the invariant holds after each
//! instruction.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The eight processor status bits, NV-BDIZC.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry out of the last arithmetic or shift operation.
        const CARRY = 0x01;
        /// Last result was zero.
        const ZERO = 0x02;
        /// IRQ servicing disabled (set by reset, SEI, and BRK).
        const INTERRUPT_DISABLE = 0x04;
        /// Binary-coded-decimal mode for ADC/SBC.
        const DECIMAL = 0x08;
        /// Set only in status bytes pushed by BRK and PHP.
        const BREAK = 0x10;
        /// Hardwired high on the NMOS 6502.
        const UNUSED = 0x20;
        /// Signed overflow of the last arithmetic operation.
        const OVERFLOW = 0x40;
        /// Bit 7 of the last result.
        const NEGATIVE = 0x80;
    }
}

impl Default for Status {
    /// Power-on state: interrupts disabled, UNUSED high.
    fn default() -> Self {
        Status::INTERRUPT_DISABLE | Status::UNUSED
    }
}

impl fmt::Display for Status {
    /// Renders the flag string in NV-BDIZC order, lowercase for clear bits.
    ///
    /// ```
    /// use mos6502::Status;
    ///
    /// let p = Status::NEGATIVE | Status::CARRY | Status::UNUSED;
    /// assert_eq!(p.to_string(), "Nv-bdizC");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag: Status, set: char, clear: char| {
            if self.contains(flag) {
                set
            } else {
                clear
            }
        };
        write!(
            f,
            "{}{}-{}{}{}{}{}",
            bit(Status::NEGATIVE, 'N', 'n'),
            bit(Status::OVERFLOW, 'V', 'v'),
            bit(Status::BREAK, 'B', 'b'),
            bit(Status::DECIMAL, 'D', 'd'),
            bit(Status::INTERRUPT_DISABLE, 'I', 'i'),
            bit(Status::ZERO, 'Z', 'z'),
            bit(Status::CARRY, 'C', 'c'),
        )
    }
}
