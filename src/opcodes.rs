//! # Opcode Metadata Table
//!
//! The complete 256-entry table that is the single source of truth for 6502
//! instruction decoding:
//!
//! - **151 documented instructions** with mnemonic, addressing mode, base
//!   cycle cost, and the cycle-penalty flags used by `Cpu::step`.
//! - **105 illegal opcodes**, marked `"???"`; executing one fails the step
//!   with [`crate::Error::IllegalOpcode`].
//!
//! Base cycles exclude the dynamic penalties. The two adder flags say which
//! penalties an opcode is subject to: `page_cross_adds_cycle` charges one
//! cycle when the effective-address arithmetic crossed a page, and
//! `branch_adds_cycle` charges one cycle for a taken branch plus one more
//! when the branch target sits on a different page.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Static metadata for a single opcode byte.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, OPCODE_TABLE};
///
/// // LDA absolute,X (opcode 0xBD)
/// let lda_abx = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda_abx.mnemonic, "LDA");
/// assert_eq!(lda_abx.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda_abx.base_cycles, 4);
/// assert!(lda_abx.page_cross_adds_cycle);
/// assert!(!lda_abx.illegal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Three-letter instruction name, `"???"` for illegal opcodes.
    pub mnemonic: &'static str,

    /// How the operand bytes after the opcode are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle cost before dynamic penalties. Illegal opcodes carry 0.
    pub base_cycles: u8,

    /// Instruction length including the opcode byte (1-3).
    pub size_bytes: u8,

    /// One extra cycle when the effective address crossed a page.
    pub page_cross_adds_cycle: bool,

    /// One extra cycle when taken, plus one more on a page cross.
    pub branch_adds_cycle: bool,

    /// Entry has no documented instruction; `step` fails on it.
    pub illegal: bool,
}

/// Instruction length implied by the addressing mode.
const fn mode_size(mode: AddressingMode) -> u8 {
    match mode {
        Implicit | Accumulator => 1,
        Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 2,
        Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
    }
}

/// A documented opcode with a fixed cycle cost.
const fn op(mnemonic: &'static str, mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        base_cycles,
        size_bytes: mode_size(mode),
        page_cross_adds_cycle: false,
        branch_adds_cycle: false,
        illegal: false,
    }
}

/// A documented opcode that pays one cycle on a page cross.
const fn op_px(mnemonic: &'static str, mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        base_cycles,
        size_bytes: mode_size(mode),
        page_cross_adds_cycle: true,
        branch_adds_cycle: false,
        illegal: false,
    }
}

/// A conditional branch: relative mode, 2 base cycles, taken/page penalties.
const fn branch(mnemonic: &'static str) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_adds_cycle: false,
        branch_adds_cycle: true,
        illegal: false,
    }
}

/// An undocumented opcode; executing it is an error.
const fn illegal() -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_adds_cycle: false,
        branch_adds_cycle: false,
        illegal: true,
    }
}

/// The 256-entry dispatch table, indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use mos6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!((brk.mnemonic, brk.base_cycles, brk.size_bytes), ("BRK", 7, 1));
///
/// assert!(OPCODE_TABLE[0x02].illegal);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00-0x0F
    op("BRK", Implicit, 7),      // 0x00
    op("ORA", IndirectX, 6),     // 0x01
    illegal(),                   // 0x02
    illegal(),                   // 0x03
    illegal(),                   // 0x04
    op("ORA", ZeroPage, 3),      // 0x05
    op("ASL", ZeroPage, 5),      // 0x06
    illegal(),                   // 0x07
    op("PHP", Implicit, 3),      // 0x08
    op("ORA", Immediate, 2),     // 0x09
    op("ASL", Accumulator, 2),   // 0x0A
    illegal(),                   // 0x0B
    illegal(),                   // 0x0C
    op("ORA", Absolute, 4),      // 0x0D
    op("ASL", Absolute, 6),      // 0x0E
    illegal(),                   // 0x0F
    // 0x10-0x1F
    branch("BPL"),               // 0x10
    op_px("ORA", IndirectY, 5),  // 0x11
    illegal(),                   // 0x12
    illegal(),                   // 0x13
    illegal(),                   // 0x14
    op("ORA", ZeroPageX, 4),     // 0x15
    op("ASL", ZeroPageX, 6),     // 0x16
    illegal(),                   // 0x17
    op("CLC", Implicit, 2),      // 0x18
    op_px("ORA", AbsoluteY, 4),  // 0x19
    illegal(),                   // 0x1A
    illegal(),                   // 0x1B
    illegal(),                   // 0x1C
    op_px("ORA", AbsoluteX, 4),  // 0x1D
    op("ASL", AbsoluteX, 7),     // 0x1E
    illegal(),                   // 0x1F
    // 0x20-0x2F
    op("JSR", Absolute, 6),      // 0x20
    op("AND", IndirectX, 6),     // 0x21
    illegal(),                   // 0x22
    illegal(),                   // 0x23
    op("BIT", ZeroPage, 3),      // 0x24
    op("AND", ZeroPage, 3),      // 0x25
    op("ROL", ZeroPage, 5),      // 0x26
    illegal(),                   // 0x27
    op("PLP", Implicit, 4),      // 0x28
    op("AND", Immediate, 2),     // 0x29
    op("ROL", Accumulator, 2),   // 0x2A
    illegal(),                   // 0x2B
    op("BIT", Absolute, 4),      // 0x2C
    op("AND", Absolute, 4),      // 0x2D
    op("ROL", Absolute, 6),      // 0x2E
    illegal(),                   // 0x2F
    // 0x30-0x3F
    branch("BMI"),               // 0x30
    op_px("AND", IndirectY, 5),  // 0x31
    illegal(),                   // 0x32
    illegal(),                   // 0x33
    illegal(),                   // 0x34
    op("AND", ZeroPageX, 4),     // 0x35
    op("ROL", ZeroPageX, 6),     // 0x36
    illegal(),                   // 0x37
    op("SEC", Implicit, 2),      // 0x38
    op_px("AND", AbsoluteY, 4),  // 0x39
    illegal(),                   // 0x3A
    illegal(),                   // 0x3B
    illegal(),                   // 0x3C
    op_px("AND", AbsoluteX, 4),  // 0x3D
    op("ROL", AbsoluteX, 7),     // 0x3E
    illegal(),                   // 0x3F
    // 0x40-0x4F
    op("RTI", Implicit, 6),      // 0x40
    op("EOR", IndirectX, 6),     // 0x41
    illegal(),                   // 0x42
    illegal(),                   // 0x43
    illegal(),                   // 0x44
    op("EOR", ZeroPage, 3),      // 0x45
    op("LSR", ZeroPage, 5),      // 0x46
    illegal(),                   // 0x47
    op("PHA", Implicit, 3),      // 0x48
    op("EOR", Immediate, 2),     // 0x49
    op("LSR", Accumulator, 2),   // 0x4A
    illegal(),                   // 0x4B
    op("JMP", Absolute, 3),      // 0x4C
    op("EOR", Absolute, 4),      // 0x4D
    op("LSR", Absolute, 6),      // 0x4E
    illegal(),                   // 0x4F
    // 0x50-0x5F
    branch("BVC"),               // 0x50
    op_px("EOR", IndirectY, 5),  // 0x51
    illegal(),                   // 0x52
    illegal(),                   // 0x53
    illegal(),                   // 0x54
    op("EOR", ZeroPageX, 4),     // 0x55
    op("LSR", ZeroPageX, 6),     // 0x56
    illegal(),                   // 0x57
    op("CLI", Implicit, 2),      // 0x58
    op_px("EOR", AbsoluteY, 4),  // 0x59
    illegal(),                   // 0x5A
    illegal(),                   // 0x5B
    illegal(),                   // 0x5C
    op_px("EOR", AbsoluteX, 4),  // 0x5D
    op("LSR", AbsoluteX, 7),     // 0x5E
    illegal(),                   // 0x5F
    // 0x60-0x6F
    op("RTS", Implicit, 6),      // 0x60
    op("ADC", IndirectX, 6),     // 0x61
    illegal(),                   // 0x62
    illegal(),                   // 0x63
    illegal(),                   // 0x64
    op("ADC", ZeroPage, 3),      // 0x65
    op("ROR", ZeroPage, 5),      // 0x66
    illegal(),                   // 0x67
    op("PLA", Implicit, 4),      // 0x68
    op("ADC", Immediate, 2),     // 0x69
    op("ROR", Accumulator, 2),   // 0x6A
    illegal(),                   // 0x6B
    op("JMP", Indirect, 5),      // 0x6C
    op("ADC", Absolute, 4),      // 0x6D
    op("ROR", Absolute, 6),      // 0x6E
    illegal(),                   // 0x6F
    // 0x70-0x7F
    branch("BVS"),               // 0x70
    op_px("ADC", IndirectY, 5),  // 0x71
    illegal(),                   // 0x72
    illegal(),                   // 0x73
    illegal(),                   // 0x74
    op("ADC", ZeroPageX, 4),     // 0x75
    op("ROR", ZeroPageX, 6),     // 0x76
    illegal(),                   // 0x77
    op("SEI", Implicit, 2),      // 0x78
    op_px("ADC", AbsoluteY, 4),  // 0x79
    illegal(),                   // 0x7A
    illegal(),                   // 0x7B
    illegal(),                   // 0x7C
    op_px("ADC", AbsoluteX, 4),  // 0x7D
    op("ROR", AbsoluteX, 7),     // 0x7E
    illegal(),                   // 0x7F
    // 0x80-0x8F
    illegal(),                   // 0x80
    op("STA", IndirectX, 6),     // 0x81
    illegal(),                   // 0x82
    illegal(),                   // 0x83
    op("STY", ZeroPage, 3),      // 0x84
    op("STA", ZeroPage, 3),      // 0x85
    op("STX", ZeroPage, 3),      // 0x86
    illegal(),                   // 0x87
    op("DEY", Implicit, 2),      // 0x88
    illegal(),                   // 0x89
    op("TXA", Implicit, 2),      // 0x8A
    illegal(),                   // 0x8B
    op("STY", Absolute, 4),      // 0x8C
    op("STA", Absolute, 4),      // 0x8D
    op("STX", Absolute, 4),      // 0x8E
    illegal(),                   // 0x8F
    // 0x90-0x9F
    branch("BCC"),               // 0x90
    op("STA", IndirectY, 6),     // 0x91
    illegal(),                   // 0x92
    illegal(),                   // 0x93
    op("STY", ZeroPageX, 4),     // 0x94
    op("STA", ZeroPageX, 4),     // 0x95
    op("STX", ZeroPageY, 4),     // 0x96
    illegal(),                   // 0x97
    op("TYA", Implicit, 2),      // 0x98
    op("STA", AbsoluteY, 5),     // 0x99
    op("TXS", Implicit, 2),      // 0x9A
    illegal(),                   // 0x9B
    illegal(),                   // 0x9C
    op("STA", AbsoluteX, 5),     // 0x9D
    illegal(),                   // 0x9E
    illegal(),                   // 0x9F
    // 0xA0-0xAF
    op("LDY", Immediate, 2),     // 0xA0
    op("LDA", IndirectX, 6),     // 0xA1
    op("LDX", Immediate, 2),     // 0xA2
    illegal(),                   // 0xA3
    op("LDY", ZeroPage, 3),      // 0xA4
    op("LDA", ZeroPage, 3),      // 0xA5
    op("LDX", ZeroPage, 3),      // 0xA6
    illegal(),                   // 0xA7
    op("TAY", Implicit, 2),      // 0xA8
    op("LDA", Immediate, 2),     // 0xA9
    op("TAX", Implicit, 2),      // 0xAA
    illegal(),                   // 0xAB
    op("LDY", Absolute, 4),      // 0xAC
    op("LDA", Absolute, 4),      // 0xAD
    op("LDX", Absolute, 4),      // 0xAE
    illegal(),                   // 0xAF
    // 0xB0-0xBF
    branch("BCS"),               // 0xB0
    op_px("LDA", IndirectY, 5),  // 0xB1
    illegal(),                   // 0xB2
    illegal(),                   // 0xB3
    op("LDY", ZeroPageX, 4),     // 0xB4
    op("LDA", ZeroPageX, 4),     // 0xB5
    op("LDX", ZeroPageY, 4),     // 0xB6
    illegal(),                   // 0xB7
    op("CLV", Implicit, 2),      // 0xB8
    op_px("LDA", AbsoluteY, 4),  // 0xB9
    op("TSX", Implicit, 2),      // 0xBA
    illegal(),                   // 0xBB
    op_px("LDY", AbsoluteX, 4),  // 0xBC
    op_px("LDA", AbsoluteX, 4),  // 0xBD
    op_px("LDX", AbsoluteY, 4),  // 0xBE
    illegal(),                   // 0xBF
    // 0xC0-0xCF
    op("CPY", Immediate, 2),     // 0xC0
    op("CMP", IndirectX, 6),     // 0xC1
    illegal(),                   // 0xC2
    illegal(),                   // 0xC3
    op("CPY", ZeroPage, 3),      // 0xC4
    op("CMP", ZeroPage, 3),      // 0xC5
    op("DEC", ZeroPage, 5),      // 0xC6
    illegal(),                   // 0xC7
    op("INY", Implicit, 2),      // 0xC8
    op("CMP", Immediate, 2),     // 0xC9
    op("DEX", Implicit, 2),      // 0xCA
    illegal(),                   // 0xCB
    op("CPY", Absolute, 4),      // 0xCC
    op("CMP", Absolute, 4),      // 0xCD
    op("DEC", Absolute, 6),      // 0xCE
    illegal(),                   // 0xCF
    // 0xD0-0xDF
    branch("BNE"),               // 0xD0
    op_px("CMP", IndirectY, 5),  // 0xD1
    illegal(),                   // 0xD2
    illegal(),                   // 0xD3
    illegal(),                   // 0xD4
    op("CMP", ZeroPageX, 4),     // 0xD5
    op("DEC", ZeroPageX, 6),     // 0xD6
    illegal(),                   // 0xD7
    op("CLD", Implicit, 2),      // 0xD8
    op_px("CMP", AbsoluteY, 4),  // 0xD9
    illegal(),                   // 0xDA
    illegal(),                   // 0xDB
    illegal(),                   // 0xDC
    op_px("CMP", AbsoluteX, 4),  // 0xDD
    op("DEC", AbsoluteX, 7),     // 0xDE
    illegal(),                   // 0xDF
    // 0xE0-0xEF
    op("CPX", Immediate, 2),     // 0xE0
    op("SBC", IndirectX, 6),     // 0xE1
    illegal(),                   // 0xE2
    illegal(),                   // 0xE3
    op("CPX", ZeroPage, 3),      // 0xE4
    op("SBC", ZeroPage, 3),      // 0xE5
    op("INC", ZeroPage, 5),      // 0xE6
    illegal(),                   // 0xE7
    op("INX", Implicit, 2),      // 0xE8
    op("SBC", Immediate, 2),     // 0xE9
    op("NOP", Implicit, 2),      // 0xEA
    illegal(),                   // 0xEB
    op("CPX", Absolute, 4),      // 0xEC
    op("SBC", Absolute, 4),      // 0xED
    op("INC", Absolute, 6),      // 0xEE
    illegal(),                   // 0xEF
    // 0xF0-0xFF
    branch("BEQ"),               // 0xF0
    op_px("SBC", IndirectY, 5),  // 0xF1
    illegal(),                   // 0xF2
    illegal(),                   // 0xF3
    illegal(),                   // 0xF4
    op("SBC", ZeroPageX, 4),     // 0xF5
    op("INC", ZeroPageX, 6),     // 0xF6
    illegal(),                   // 0xF7
    op("SED", Implicit, 2),      // 0xF8
    op_px("SBC", AbsoluteY, 4),  // 0xF9
    illegal(),                   // 0xFA
    illegal(),                   // 0xFB
    illegal(),                   // 0xFC
    op_px("SBC", AbsoluteX, 4),  // 0xFD
    op("INC", AbsoluteX, 7),     // 0xFE
    illegal(),                   // 0xFF
];
