//! # Addressing Modes
//!
//! The 13 ways a 6502 instruction derives its operand from the bytes that
//! follow the opcode and from the register file.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes an instruction
/// consumes and how the effective address (or immediate value) is computed
/// from them.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address within the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X reads from (0x80 + X) mod 256
    ZeroPageX,

    /// Zero-page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y reads from (0x80 + Y) mod 256
    ZeroPageY,

    /// Signed 8-bit branch offset, applied to PC after the operand fetch.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    /// Crossing a page boundary may cost one extra cycle.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    /// Crossing a page boundary may cost one extra cycle.
    AbsoluteY,

    /// Jump through a 16-bit pointer; only JMP uses it.
    ///
    /// Example: JMP ($FFFC)
    /// Subject to the NMOS page-wrap quirk when the pointer sits at 0xXXFF.
    Indirect,

    /// Indexed indirect: pointer at (operand + X) within the zero page.
    ///
    /// Example: LDA ($40,X) — the pointer's high byte is fetched from
    /// (operand + X + 1) mod 256; it never leaves the zero page.
    IndirectX,

    /// Indirect indexed: pointer at the zero-page operand, then + Y.
    ///
    /// Example: LDA ($40),Y
    /// Crossing a page boundary may cost one extra cycle.
    IndirectY,
}
