//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR over the accumulator or a memory byte. The carry flag
//! receives the bit shifted out; rotates feed the old carry in at the other
//! end. Zero and Negative follow the result.

use crate::status::Status;
use crate::{AddressingMode, Cpu, Error};

/// Applies `op` to the accumulator or to the byte at the effective address.
fn read_modify_write(
    cpu: &mut Cpu,
    mode: AddressingMode,
    op: fn(&mut Cpu, u8) -> u8,
) -> Result<(), Error> {
    if mode == AddressingMode::Accumulator {
        let result = op(cpu, cpu.a);
        cpu.a = result;
    } else {
        let addr = cpu.operand_address(mode)?;
        let value = cpu.read_byte(addr);
        let result = op(cpu, value);
        cpu.write_byte(addr, result);
    }
    Ok(())
}

fn asl_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.set_flag(Status::CARRY, value & 0x80 != 0);
    let result = value << 1;
    cpu.update_zero_negative(result);
    result
}

fn lsr_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.set_flag(Status::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    cpu.update_zero_negative(result);
    result
}

fn rol_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = u8::from(cpu.flag(Status::CARRY));
    cpu.set_flag(Status::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    cpu.update_zero_negative(result);
    result
}

fn ror_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = u8::from(cpu.flag(Status::CARRY));
    cpu.set_flag(Status::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    cpu.update_zero_negative(result);
    result
}

/// ASL: shift left, bit 7 into Carry.
pub(crate) fn execute_asl(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    read_modify_write(cpu, mode, asl_value)
}

/// LSR: logical shift right, bit 0 into Carry.
pub(crate) fn execute_lsr(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    read_modify_write(cpu, mode, lsr_value)
}

/// ROL: rotate left through Carry.
pub(crate) fn execute_rol(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    read_modify_write(cpu, mode, rol_value)
}

/// ROR: rotate right through Carry.
pub(crate) fn execute_ror(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    read_modify_write(cpu, mode, ror_value)
}
