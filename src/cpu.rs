//! # CPU State and Execution
//!
//! The `Cpu` struct holds the 6502 register file and drives the
//! fetch-decode-execute loop against the [`Bus`].
//!
//! ## Execution Model
//!
//! - [`Cpu::step`] executes exactly one instruction and returns its cycle
//!   cost. A step is observationally atomic: no state is visible between its
//!   internal phases, and bus side effects occur in program order.
//! - [`Cpu::run`] polls a host predicate before each step, never inside one.
//!   The predicate is the only cancellation point; hosts impose timeouts or
//!   cycle budgets through it.
//!
//! ## Cycle Accounting
//!
//! Executors record the two per-step transients (`page_crossed`,
//! `branch_taken`); `step` combines them with the opcode's penalty flags from
//! the [`OPCODE_TABLE`]:
//!
//! ```text
//! cycles = base
//!        + (page_cross_adds_cycle && page_crossed)
//!        + branch_adds_cycle * (branch_taken * (1 + page_crossed))
//! ```

use crate::bus::Bus;
use crate::instructions::{alu, branches, compare, control, flags, inc_dec, load_store, shifts,
    stack, transfer};
use crate::opcodes::OPCODE_TABLE;
use crate::status::Status;
use crate::{AddressingMode, Error};
use std::fmt;

/// Snapshot of the architectural register file.
///
/// # Examples
///
/// ```
/// use mos6502::{Bus, Cpu};
///
/// let mut bus = Bus::default();
/// bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
/// let cpu = Cpu::new(bus);
///
/// let state = cpu.state();
/// assert_eq!(state.pc, 0x8000);
/// assert_eq!(state.sp, 0xFD);
/// assert_eq!(state.to_string(), "A:00 X:00 Y:00 PC:8000 SP:FD P:nv-bdIzc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Program counter.
    pub pc: u16,
    /// Stack pointer; the stack lives at `0x0100 | sp`.
    pub sp: u8,
    /// Processor status.
    pub p: Status,
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} PC:{:04X} SP:{:02X} P:{}",
            self.a, self.x, self.y, self.pc, self.sp, self.p
        )
    }
}

/// 6502 CPU: register file, dispatch, and the step loop.
///
/// All memory traffic goes through the owned [`Bus`]; the host reaches the
/// bus between steps via [`Cpu::bus`] / [`Cpu::bus_mut`].
///
/// # Examples
///
/// ```
/// use mos6502::{Bus, Cpu};
///
/// let mut bus = Bus::default();
/// bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
/// bus.load(0x8000, &[0xE8, 0xE8]).unwrap(); // INX, INX
///
/// let mut cpu = Cpu::new(bus);
/// cpu.step().unwrap();
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 2);
/// assert_eq!(cpu.cycles(), 4);
/// ```
pub struct Cpu {
    /// Accumulator
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer; full stack address is 0x0100 | sp
    pub(crate) sp: u8,

    /// Processor status; UNUSED is kept high by `set_p`
    pub(crate) p: Status,

    /// Effective-address arithmetic crossed a page this step
    pub(crate) page_crossed: bool,

    /// A conditional branch was taken this step
    pub(crate) branch_taken: bool,

    /// Total cycles executed since construction
    pub(crate) cycles: u64,

    /// Memory bus carrying RAM and devices
    pub(crate) bus: Bus,
}

impl Cpu {
    /// Creates a CPU bound to `bus` and performs a reset.
    ///
    /// Reset state: `A = X = Y = 0`, `SP = 0xFD`, `P` has InterruptDisable
    /// and Unused set, and `PC` is loaded from the little-endian word at
    /// 0xFFFC/0xFFFD. No bus writes occur.
    pub fn new(bus: Bus) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFD,
            p: Status::default(),
            page_crossed: false,
            branch_taken: false,
            cycles: 0,
            bus,
        };
        cpu.reset();
        cpu
    }

    /// Re-initializes the register file from the reset vector.
    ///
    /// The dispatch table, the bus, and the cumulative cycle counter are
    /// untouched; no bus writes occur.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.p = Status::default();
        self.page_crossed = false;
        self.branch_taken = false;
        self.pc = self.read_word(0xFFFC);
    }

    /// Executes exactly one instruction and returns its cycle cost.
    ///
    /// Phases: clear the per-step transients, fetch the opcode (PC moves past
    /// it), look the opcode up, run its executor (which consumes operand
    /// bytes, advancing PC), then account cycles from the table's penalty
    /// flags.
    ///
    /// An opcode with an illegal table entry fails with
    /// [`Error::IllegalOpcode`]; PC has advanced past the opcode byte and
    /// nothing else was mutated.
    pub fn step(&mut self) -> Result<u32, Error> {
        self.page_crossed = false;
        self.branch_taken = false;

        let opcode = self.fetch_byte();
        let meta = OPCODE_TABLE[opcode as usize];
        if meta.illegal {
            return Err(Error::IllegalOpcode(opcode));
        }

        self.execute(opcode, meta.mnemonic, meta.addressing_mode)?;

        let mut cycles = u32::from(meta.base_cycles);
        if meta.page_cross_adds_cycle && self.page_crossed {
            cycles += 1;
        }
        if meta.branch_adds_cycle && self.branch_taken {
            cycles += 1;
            if self.page_crossed {
                cycles += 1;
            }
        }
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    /// Steps while `predicate` holds, returning the accumulated cycles.
    ///
    /// The predicate is consulted before each step, never mid-instruction.
    /// When it first returns false, the accumulated cycle count is returned;
    /// a failing step surfaces its error immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Bus, Cpu};
    ///
    /// let mut bus = Bus::default();
    /// bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    /// bus.load(0x8000, &[0xE8, 0xE8, 0xE8]).unwrap(); // INX x3
    ///
    /// let mut cpu = Cpu::new(bus);
    /// let cycles = cpu.run(|cpu| cpu.pc() != 0x8002).unwrap();
    /// assert_eq!(cycles, 4);
    /// assert_eq!(cpu.x(), 2);
    /// ```
    pub fn run<P>(&mut self, mut predicate: P) -> Result<u64, Error>
    where
        P: FnMut(&Cpu) -> bool,
    {
        let mut total: u64 = 0;
        while predicate(self) {
            total += u64::from(self.step()?);
        }
        Ok(total)
    }

    /// Snapshot of the register file.
    pub fn state(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            p: self.p,
        }
    }

    // ========== Register Getters ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value; the stack top lives at `0x0100 | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Processor status register.
    pub fn p(&self) -> Status {
        self.p
    }

    /// Whether `flag` is set in the status register.
    pub fn flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    /// Total cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters (host and test harness use) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register. The Unused bit is forced high.
    ///
    /// Every status mutation in the crate funnels through this setter, which
    /// is what keeps the Unused invariant after each instruction.
    pub fn set_p(&mut self, p: Status) {
        self.p = p | Status::UNUSED;
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        let mut p = self.p;
        p.set(flag, value);
        self.set_p(p);
    }

    // ========== Bus Access ==========

    /// The bus the CPU executes against.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable access to the bus, for hosts poking memory between steps.
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Rebinds the CPU to a new bus, returning the old one.
    ///
    /// Registers are left as they are; call [`Cpu::reset`] to restart from
    /// the new bus's reset vector.
    pub fn set_bus(&mut self, bus: Bus) -> Bus {
        std::mem::replace(&mut self.bus, bus)
    }

    // ========== Memory Helpers ==========

    pub(crate) fn read_byte(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Little-endian word read with carry into the next address.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = u16::from(self.read_byte(addr));
        let hi = u16::from(self.read_byte(addr.wrapping_add(1)));
        (hi << 8) | lo
    }

    /// Little-endian word read reproducing the NMOS indirect-jump quirk:
    /// when `addr` sits at the end of a page (0xXXFF), the high byte is
    /// fetched from the start of the *same* page (0xXX00).
    pub(crate) fn read_word_bug(&self, addr: u16) -> u16 {
        let lo = u16::from(self.read_byte(addr));
        let hi_addr = if addr & 0x00FF == 0x00FF {
            addr & 0xFF00
        } else {
            addr.wrapping_add(1)
        };
        let hi = u16::from(self.read_byte(hi_addr));
        (hi << 8) | lo
    }

    /// Word read through a zero-page pointer; the high byte wraps within the
    /// zero page.
    pub(crate) fn read_word_zero_page(&self, base: u8) -> u16 {
        let lo = u16::from(self.read_byte(u16::from(base)));
        let hi = u16::from(self.read_byte(u16::from(base.wrapping_add(1))));
        (hi << 8) | lo
    }

    /// Fetches the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = u16::from(self.fetch_byte());
        let hi = u16::from(self.fetch_byte());
        (hi << 8) | lo
    }

    // ========== Stack Helpers ==========

    /// Pushes a byte at 0x0100 | SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.write_byte(0x0100 | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(0x0100 | u16::from(self.sp))
    }

    /// Pushes a word high-byte-first, so the stack reads back little-endian.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pulls a word pushed by [`Cpu::push_word`].
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = u16::from(self.pull());
        let hi = u16::from(self.pull());
        (hi << 8) | lo
    }

    // ========== Flag Helpers ==========

    /// Sets Zero and Negative from a result byte.
    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        let mut p = self.p;
        p.set(Status::ZERO, value == 0);
        p.set(Status::NEGATIVE, value & 0x80 != 0);
        self.set_p(p);
    }

    // ========== Operand Resolution ==========

    /// Computes the effective address for a memory-operand mode, consuming
    /// operand bytes at PC.
    ///
    /// `page_crossed` is set from the address arithmetic alone, before any
    /// read of the target byte, so the penalty cycle is charged even when the
    /// target is a device.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> Result<u16, Error> {
        match mode {
            AddressingMode::ZeroPage => Ok(u16::from(self.fetch_byte())),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Ok(u16::from(base.wrapping_add(self.x)))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Ok(u16::from(base.wrapping_add(self.y)))
            }
            AddressingMode::Absolute => Ok(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(u16::from(self.x));
                self.page_crossed = base & 0xFF00 != addr & 0xFF00;
                Ok(addr)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(u16::from(self.y));
                self.page_crossed = base & 0xFF00 != addr & 0xFF00;
                Ok(addr)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                Ok(self.read_word_bug(pointer))
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_byte().wrapping_add(self.x);
                Ok(self.read_word_zero_page(base))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_word_zero_page(zp);
                let addr = base.wrapping_add(u16::from(self.y));
                self.page_crossed = base & 0xFF00 != addr & 0xFF00;
                Ok(addr)
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => Err(Error::InvalidAddressingMode(mode)),
        }
    }

    /// Reads the operand byte for a value-consuming instruction.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> Result<u8, Error> {
        match mode {
            AddressingMode::Immediate => Ok(self.fetch_byte()),
            AddressingMode::Accumulator => Ok(self.a),
            AddressingMode::Implicit | AddressingMode::Relative | AddressingMode::Indirect => {
                Err(Error::InvalidAddressingMode(mode))
            }
            _ => {
                let addr = self.operand_address(mode)?;
                Ok(self.read_byte(addr))
            }
        }
    }

    // ========== Dispatch ==========

    fn execute(&mut self, opcode: u8, mnemonic: &str, mode: AddressingMode) -> Result<(), Error> {
        match mnemonic {
            "ADC" => alu::execute_adc(self, mode)?,
            "AND" => alu::execute_and(self, mode)?,
            "ASL" => shifts::execute_asl(self, mode)?,
            "BCC" => branches::execute_bcc(self),
            "BCS" => branches::execute_bcs(self),
            "BEQ" => branches::execute_beq(self),
            "BIT" => alu::execute_bit(self, mode)?,
            "BMI" => branches::execute_bmi(self),
            "BNE" => branches::execute_bne(self),
            "BPL" => branches::execute_bpl(self),
            "BRK" => control::execute_brk(self),
            "BVC" => branches::execute_bvc(self),
            "BVS" => branches::execute_bvs(self),
            "CLC" => flags::execute_clc(self),
            "CLD" => flags::execute_cld(self),
            "CLI" => flags::execute_cli(self),
            "CLV" => flags::execute_clv(self),
            "CMP" => compare::execute_cmp(self, mode)?,
            "CPX" => compare::execute_cpx(self, mode)?,
            "CPY" => compare::execute_cpy(self, mode)?,
            "DEC" => inc_dec::execute_dec(self, mode)?,
            "DEX" => inc_dec::execute_dex(self),
            "DEY" => inc_dec::execute_dey(self),
            "EOR" => alu::execute_eor(self, mode)?,
            "INC" => inc_dec::execute_inc(self, mode)?,
            "INX" => inc_dec::execute_inx(self),
            "INY" => inc_dec::execute_iny(self),
            "JMP" => control::execute_jmp(self, mode)?,
            "JSR" => control::execute_jsr(self),
            "LDA" => load_store::execute_lda(self, mode)?,
            "LDX" => load_store::execute_ldx(self, mode)?,
            "LDY" => load_store::execute_ldy(self, mode)?,
            "LSR" => shifts::execute_lsr(self, mode)?,
            "NOP" => control::execute_nop(self),
            "ORA" => alu::execute_ora(self, mode)?,
            "PHA" => stack::execute_pha(self),
            "PHP" => stack::execute_php(self),
            "PLA" => stack::execute_pla(self),
            "PLP" => stack::execute_plp(self),
            "ROL" => shifts::execute_rol(self, mode)?,
            "ROR" => shifts::execute_ror(self, mode)?,
            "RTI" => control::execute_rti(self),
            "RTS" => control::execute_rts(self),
            "SBC" => alu::execute_sbc(self, mode)?,
            "SEC" => flags::execute_sec(self),
            "SED" => flags::execute_sed(self),
            "SEI" => flags::execute_sei(self),
            "STA" => load_store::execute_sta(self, mode)?,
            "STX" => load_store::execute_stx(self, mode)?,
            "STY" => load_store::execute_sty(self, mode)?,
            "TAX" => transfer::execute_tax(self),
            "TAY" => transfer::execute_tay(self),
            "TSX" => transfer::execute_tsx(self),
            "TXA" => transfer::execute_txa(self),
            "TXS" => transfer::execute_txs(self),
            "TYA" => transfer::execute_tya(self),
            // Unreachable from a correct table; surfaced rather than panicked
            _ => return Err(Error::IllegalOpcode(opcode)),
        }
        Ok(())
    }
}
