//! # Load and Store Instructions
//!
//! LDA/LDX/LDY load a register and set Zero/Negative from it; STA/STX/STY
//! write a register to memory and leave every flag alone.

use crate::{AddressingMode, Cpu, Error};

/// LDA: load the accumulator.
pub(crate) fn execute_lda(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let value = cpu.operand_value(mode)?;
    cpu.a = value;
    cpu.update_zero_negative(value);
    Ok(())
}

/// LDX: load the X register.
pub(crate) fn execute_ldx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let value = cpu.operand_value(mode)?;
    cpu.x = value;
    cpu.update_zero_negative(value);
    Ok(())
}

/// LDY: load the Y register.
pub(crate) fn execute_ldy(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let value = cpu.operand_value(mode)?;
    cpu.y = value;
    cpu.update_zero_negative(value);
    Ok(())
}

/// STA: store the accumulator. No flags touched.
pub(crate) fn execute_sta(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let addr = cpu.operand_address(mode)?;
    cpu.write_byte(addr, cpu.a);
    Ok(())
}

/// STX: store the X register. No flags touched.
pub(crate) fn execute_stx(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let addr = cpu.operand_address(mode)?;
    cpu.write_byte(addr, cpu.x);
    Ok(())
}

/// STY: store the Y register. No flags touched.
pub(crate) fn execute_sty(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Error> {
    let addr = cpu.operand_address(mode)?;
    cpu.write_byte(addr, cpu.y);
    Ok(())
}
