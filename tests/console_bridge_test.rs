//! The console bridge as seen by 6502 code: output latch, input status,
//! input data, and the fallback source.

use mos6502::{Bus, ConsoleBridge, Cpu};

/// CPU wired to a console at the default addresses, reset vector 0x8000.
fn setup_console_cpu() -> (Cpu, mos6502::ConsoleOutput) {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    let console = ConsoleBridge::new();
    let output = console.output_handle();
    bus.attach(Box::new(console));
    (Cpu::new(bus), output)
}

#[test]
fn test_program_writes_a_character() {
    // LDA #$41, STA $F001, BRK
    let (mut cpu, output) = setup_console_cpu();
    cpu.bus_mut()
        .load(0x8000, &[0xA9, 0x41, 0x8D, 0x01, 0xF0, 0x00])
        .unwrap();

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(output.bytes(), vec![0x41]);
    assert_eq!(output.to_string_lossy(), "A");
}

#[test]
fn test_program_polls_input_status() {
    // LDA $F004 twice, with input arriving in between
    let (mut cpu, _) = setup_console_cpu();
    cpu.bus_mut()
        .load(0x8000, &[0xAD, 0x04, 0xF0, 0xAD, 0x04, 0xF0])
        .unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0); // nothing buffered

    cpu.bus()
        .device_at::<ConsoleBridge>(0xF004)
        .unwrap()
        .submit_input("X");

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 1);
}

#[test]
fn test_program_reads_input_fifo_in_order() {
    let (mut cpu, _) = setup_console_cpu();
    cpu.bus_mut()
        .load(0x8000, &[0xAD, 0x05, 0xF0, 0xAD, 0x05, 0xF0, 0xAD, 0x05, 0xF0])
        .unwrap();
    cpu.bus()
        .device_at::<ConsoleBridge>(0xF005)
        .unwrap()
        .submit_input("OK");

    cpu.step().unwrap();
    assert_eq!(cpu.a(), b'O');
    cpu.step().unwrap();
    assert_eq!(cpu.a(), b'K');
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0); // exhausted, no fallback
}

#[test]
fn test_fallback_source_feeds_empty_fifo() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    bus.load(0x8000, &[0xAD, 0x05, 0xF0, 0xAD, 0x05, 0xF0]).unwrap();

    let mut console = ConsoleBridge::new();
    let mut spare = vec![b'z'];
    console.set_input_fallback(move || spare.pop());
    bus.attach(Box::new(console));

    let mut cpu = Cpu::new(bus);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), b'z');
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0);
}

#[test]
fn test_writes_to_input_registers_are_dropped() {
    // STA $F004, STA $F005: claimed by the device, so RAM stays clear and
    // the input side is unaffected
    let (mut cpu, _) = setup_console_cpu();
    cpu.bus_mut()
        .load(0x8000, &[0x8D, 0x04, 0xF0, 0x8D, 0x05, 0xF0])
        .unwrap();
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    cpu.step().unwrap();

    let console = cpu.bus().device_at::<ConsoleBridge>(0xF004).unwrap();
    assert_eq!(console.pending_input(), 0);
    assert_eq!(cpu.bus().read(0xF004), 0); // still reads as "no input"
}

#[test]
fn test_output_callback_sees_bytes_eagerly() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    bus.load(0x8000, &[0x8D, 0x01, 0xF0]).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = Rc::clone(&seen);
    let mut console = ConsoleBridge::new();
    console.set_output_callback(move |byte| seen_clone.borrow_mut().push(byte));
    bus.attach(Box::new(console));

    let mut cpu = Cpu::new(bus);
    cpu.set_a(b'!');
    cpu.step().unwrap();

    assert_eq!(*seen.borrow(), vec![b'!']);
}

#[test]
fn test_custom_register_addresses() {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    bus.load(0x8000, &[0x8D, 0x00, 0xE0]).unwrap(); // STA $E000

    let console = ConsoleBridge::with_addresses(0xE000, 0xE001, 0xE002);
    let output = console.output_handle();
    bus.attach(Box::new(console));

    let mut cpu = Cpu::new(bus);
    cpu.set_a(b'Q');
    cpu.step().unwrap();

    assert_eq!(output.bytes(), vec![b'Q']);
    // The default addresses are plain RAM on this bus
    assert_eq!(cpu.bus().read(0xF001), 0x00);
}
