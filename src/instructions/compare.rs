//! # Compare Instructions
//!
//! CMP, CPX, CPY: subtract memory from a register for flag purposes only.
//! Carry reports an unsigned `register >= M`, Zero equality, Negative bit 7
//! of the 8-bit difference. The register itself is never modified.

use crate::status::Status;
use crate::{AddressingMode, Cpu, Error};

fn compare(cpu: &mut Cpu, register: u8, mode: AddressingMode) -> Result<(), Error> {
    let value = cpu.operand_value(mode)?;
    let diff = register.wrapping_sub(value);
    cpu.set_flag(Status::CARRY, register >= value);
    cpu.update_zero_negative(diff);
    Ok(())
}

/// CMP: compare accumulator with memory.
pub(crate) fn execute_cmp(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    compare(cpu, cpu.a, mode)
}

/// CPX: compare X with memory.
pub(crate) fn execute_cpx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    compare(cpu, cpu.x, mode)
}

/// CPY: compare Y with memory.
pub(crate) fn execute_cpy(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    compare(cpu, cpu.y, mode)
}
