//! # 6502 Emulator Core
//!
//! A software emulator of the MOS 6502 8-bit microprocessor together with a
//! 16-bit memory bus onto which RAM and memory-mapped peripheral devices are
//! composed.
//!
//! The crate is built to run period-accurate 6502 machine code — most notably
//! Microsoft's 6502 BASIC ROM — against a host-provided I/O surface, so that a
//! UI, test harness, or command-line runner can observe textual output and
//! inject textual input.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Bus, Cpu};
//!
//! // 64KB of RAM, reset vector pointing at 0x8000
//! let mut bus = Bus::default();
//! bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
//!
//! // LDA #$41
//! bus.load(0x8000, &[0xA9, 0x41]).unwrap();
//!
//! // Construction performs a reset: PC is loaded from 0xFFFC/0xFFFD
//! let mut cpu = Cpu::new(bus);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x41);
//! ```
//!
//! ## Architecture
//!
//! Three components, composed bottom-up:
//!
//! - [`Bus`] — contiguous RAM (1..=65536 bytes) plus an ordered list of
//!   attached [`Device`]s. Every 16-bit read/write is routed to the first
//!   device that claims the address, falling back to RAM, falling back to the
//!   open-bus value 0xFF.
//! - [`Device`] — a capability-selected collaborator: "do you handle this
//!   address?", "read", "write". [`ConsoleBridge`] is the reference
//!   implementation.
//! - [`Cpu`] — architectural register state plus the 256-entry
//!   [`OPCODE_TABLE`] dispatch. `step` executes exactly one instruction;
//!   `run` drives the step loop under a host predicate.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `bus` - memory bus routing RAM and devices
//! - `devices` - the `Device` trait and the console bridge
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `status` - the processor status register

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::Bus;
pub use cpu::{Cpu, CpuState};
pub use devices::console::{ConsoleBridge, ConsoleInput, ConsoleOutput};
pub use devices::Device;
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

use thiserror::Error;

/// Errors surfaced by bus construction, program loading, and execution.
///
/// All errors are synchronous and non-retriable: the operation that caused
/// them fails, nothing is caught or retried internally, and no error mutates
/// state beyond what its variant documents. The CPU stays inspectable after a
/// failed `step` and can be [`Cpu::reset`] to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A RAM size outside `1..=65536` was requested, or a load would extend
    /// past the end of configured RAM. Bus state is unchanged.
    #[error("address or size out of range for the configured RAM")]
    OutOfRange,

    /// `step` fetched an opcode with no documented instruction behind it.
    ///
    /// PC has already advanced past the opcode byte; no other register was
    /// mutated. Contains the opcode byte for debugging.
    #[error("opcode 0x{0:02X} is not a documented 6502 instruction")]
    IllegalOpcode(u8),

    /// An executor was invoked with an addressing mode it does not support.
    ///
    /// Indicates a dispatch-table bug; a correct build never surfaces this.
    #[error("addressing mode {0:?} is not supported by this instruction")]
    InvalidAddressingMode(AddressingMode),
}
