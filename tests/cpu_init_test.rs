//! Reset protocol tests: power-on state, the reset vector, and recovery.

use mos6502::{Bus, Cpu, Status};

#[test]
fn test_reset_vector_honored() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x34, 0x12]).unwrap();

    let cpu = Cpu::new(bus);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag(Status::INTERRUPT_DISABLE));
    assert!(cpu.flag(Status::UNUSED));
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
}

#[test]
fn test_reset_rereads_vector() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    let mut cpu = Cpu::new(bus);
    assert_eq!(cpu.pc(), 0x8000);

    // Host rewrites the vector, then resets
    cpu.bus_mut().load(0xFFFC, &[0x00, 0x90]).unwrap();
    cpu.reset();
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_reset_clears_registers_and_flags() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    let mut cpu = Cpu::new(bus);

    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x40);
    cpu.set_p(Status::all());

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.p(), Status::INTERRUPT_DISABLE | Status::UNUSED);
}

#[test]
fn test_reset_performs_no_bus_writes() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    bus.load(0x0100, &[0xAA; 0x100]).unwrap(); // sentinel stack page

    let cpu = Cpu::new(bus);

    for addr in 0x0100..=0x01FF {
        assert_eq!(cpu.bus().read(addr), 0xAA);
    }
}

#[test]
fn test_reset_vector_above_small_ram_reads_open_bus() {
    // With 1KB of RAM and no devices, the vector reads as 0xFFFF
    let bus = Bus::new(0x0400).unwrap();
    let cpu = Cpu::new(bus);
    assert_eq!(cpu.pc(), 0xFFFF);
}
