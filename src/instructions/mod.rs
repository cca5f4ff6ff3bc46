//! # 6502 Instruction Implementations
//!
//! Executors for the 56 documented instructions, organized by family. An
//! executor consumes operand bytes through the CPU's fetch helpers (which
//! advance PC), applies register and bus mutations in program order, and
//! records the `page_crossed`/`branch_taken` transients. Cycle arithmetic
//! stays in `Cpu::step`.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
