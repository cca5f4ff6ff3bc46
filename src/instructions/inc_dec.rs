//! # Increment and Decrement Instructions
//!
//! INC/DEC read-modify-write a memory byte; INX/INY/DEX/DEY touch the index
//! registers. All wrap at the 8-bit boundary and set Zero and Negative from
//! the result.

use crate::{AddressingMode, Cpu, Error};

/// INC: increment the byte at the effective address.
pub(crate) fn execute_inc(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let addr = cpu.operand_address(mode)?;
    let result = cpu.read_byte(addr).wrapping_add(1);
    cpu.write_byte(addr, result);
    cpu.update_zero_negative(result);
    Ok(())
}

/// DEC: decrement the byte at the effective address.
pub(crate) fn execute_dec(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let addr = cpu.operand_address(mode)?;
    let result = cpu.read_byte(addr).wrapping_sub(1);
    cpu.write_byte(addr, result);
    cpu.update_zero_negative(result);
    Ok(())
}

/// INX: increment X.
pub(crate) fn execute_inx(cpu: &mut Cpu) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.update_zero_negative(result);
}

/// INY: increment Y.
pub(crate) fn execute_iny(cpu: &mut Cpu) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.update_zero_negative(result);
}

/// DEX: decrement X.
pub(crate) fn execute_dex(cpu: &mut Cpu) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.update_zero_negative(result);
}

/// DEY: decrement Y.
pub(crate) fn execute_dey(cpu: &mut Cpu) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.update_zero_negative(result);
}
