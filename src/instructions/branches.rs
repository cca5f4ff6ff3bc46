//! # Branch Instructions
//!
//! The eight conditional branches, one per testable status flag polarity:
//! BPL/BMI (Negative), BVC/BVS (Overflow), BCC/BCS (Carry), BNE/BEQ (Zero).
//!
//! All use relative addressing: a signed 8-bit offset applied to PC after
//! the operand fetch. A taken branch costs one extra cycle, and one more
//! when the target lands on a different page; `Cpu::step` charges both from
//! the `branch_taken`/`page_crossed` transients recorded here.

use crate::status::Status;
use crate::Cpu;

/// Shared branch body: fetch the offset, then redirect PC if `condition`.
///
/// The offset is fetched even when the branch falls through, so PC always
/// ends up past the two instruction bytes. Page crossing compares the high
/// byte of the target against the PC after the operand fetch.
fn branch_if(cpu: &mut Cpu, condition: bool) {
    let offset = cpu.fetch_byte() as i8;
    if condition {
        cpu.branch_taken = true;
        let base = cpu.pc;
        let target = base.wrapping_add_signed(i16::from(offset));
        cpu.page_crossed = base & 0xFF00 != target & 0xFF00;
        cpu.pc = target;
    }
}

/// BPL: branch if Negative clear.
pub(crate) fn execute_bpl(cpu: &mut Cpu) {
    branch_if(cpu, !cpu.flag(Status::NEGATIVE));
}

/// BMI: branch if Negative set.
pub(crate) fn execute_bmi(cpu: &mut Cpu) {
    branch_if(cpu, cpu.flag(Status::NEGATIVE));
}

/// BVC: branch if Overflow clear.
pub(crate) fn execute_bvc(cpu: &mut Cpu) {
    branch_if(cpu, !cpu.flag(Status::OVERFLOW));
}

/// BVS: branch if Overflow set.
pub(crate) fn execute_bvs(cpu: &mut Cpu) {
    branch_if(cpu, cpu.flag(Status::OVERFLOW));
}

/// BCC: branch if Carry clear.
pub(crate) fn execute_bcc(cpu: &mut Cpu) {
    branch_if(cpu, !cpu.flag(Status::CARRY));
}

/// BCS: branch if Carry set.
pub(crate) fn execute_bcs(cpu: &mut Cpu) {
    branch_if(cpu, cpu.flag(Status::CARRY));
}

/// BNE: branch if Zero clear.
pub(crate) fn execute_bne(cpu: &mut Cpu) {
    branch_if(cpu, !cpu.flag(Status::ZERO));
}

/// BEQ: branch if Zero set.
pub(crate) fn execute_beq(cpu: &mut Cpu) {
    branch_if(cpu, cpu.flag(Status::ZERO));
}
