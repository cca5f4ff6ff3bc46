//! # Stack Operations
//!
//! PHA/PLA move the accumulator through the stack; PHP/PLP move the status
//! register. The stack occupies 0x0100-0x01FF and grows downward; SP wraps
//! within the page.
//!
//! Pushed status bytes always carry Break set (a 6502 convention shared with
//! BRK); pulled status bytes have Break cleared and Unused forced high.

use crate::status::Status;
use crate::Cpu;

/// PHA: push the accumulator.
pub(crate) fn execute_pha(cpu: &mut Cpu) {
    let a = cpu.a;
    cpu.push(a);
}

/// PLA: pull the accumulator; Z and N follow the pulled value.
pub(crate) fn execute_pla(cpu: &mut Cpu) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.update_zero_negative(value);
}

/// PHP: push the status register with Break set.
pub(crate) fn execute_php(cpu: &mut Cpu) {
    let byte = (cpu.p | Status::BREAK).bits();
    cpu.push(byte);
}

/// PLP: pull the status register; Break is cleared, Unused forced high.
pub(crate) fn execute_plp(cpu: &mut Cpu) {
    let mut p = Status::from_bits_retain(cpu.pull());
    p.remove(Status::BREAK);
    cpu.set_p(p);
}
