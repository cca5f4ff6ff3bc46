//! Table-wide sweeps: PC advancement, the Unused-bit invariant, and the
//! illegal-opcode contract, driven from the metadata itself.

use mos6502::{Bus, Cpu, Error, Status, OPCODE_TABLE};

fn setup_cpu() -> Cpu {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    Cpu::new(bus)
}

/// Opcodes whose PC movement is data-dependent (branches and control flow).
fn redirects_pc(mnemonic: &str) -> bool {
    matches!(
        mnemonic,
        "BCC" | "BCS" | "BEQ" | "BMI" | "BNE" | "BPL" | "BVC" | "BVS" | "JMP" | "JSR" | "RTS"
            | "RTI" | "BRK"
    )
}

#[test]
fn test_pc_advances_by_instruction_size() {
    for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
        if meta.illegal || redirects_pc(meta.mnemonic) {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.bus_mut()
            .load(0x8000, &[opcode as u8, 0x00, 0x00])
            .unwrap();

        cpu.step().unwrap_or_else(|e| panic!("{} failed: {e}", meta.mnemonic));

        assert_eq!(
            cpu.pc(),
            0x8000 + u16::from(meta.size_bytes),
            "PC advance for {} (0x{opcode:02X})",
            meta.mnemonic
        );
    }
}

#[test]
fn test_unused_bit_set_after_every_documented_opcode() {
    for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
        if meta.illegal {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.bus_mut()
            .load(0x8000, &[opcode as u8, 0x00, 0x00])
            .unwrap();

        cpu.step().unwrap_or_else(|e| panic!("{} failed: {e}", meta.mnemonic));

        assert!(
            cpu.flag(Status::UNUSED),
            "Unused bit cleared by {} (0x{opcode:02X})",
            meta.mnemonic
        );
    }
}

#[test]
fn test_every_documented_opcode_charges_at_least_base_cycles() {
    for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
        if meta.illegal {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.bus_mut()
            .load(0x8000, &[opcode as u8, 0x00, 0x00])
            .unwrap();

        let cycles = cpu
            .step()
            .unwrap_or_else(|e| panic!("{} failed: {e}", meta.mnemonic));

        assert!(
            cycles >= u32::from(meta.base_cycles),
            "{} (0x{opcode:02X}) charged {cycles} < base {}",
            meta.mnemonic,
            meta.base_cycles
        );
        assert!(
            cycles <= u32::from(meta.base_cycles) + 2,
            "{} (0x{opcode:02X}) charged {cycles}, beyond any penalty",
            meta.mnemonic
        );
    }
}

#[test]
fn test_every_illegal_opcode_fails_step() {
    for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
        if !meta.illegal {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x8000, opcode as u8);

        assert_eq!(cpu.step(), Err(Error::IllegalOpcode(opcode as u8)));
        assert_eq!(cpu.pc(), 0x8001, "PC for illegal 0x{opcode:02X}");
        assert_eq!(cpu.cycles(), 0, "no cycles charged for 0x{opcode:02X}");
    }
}
