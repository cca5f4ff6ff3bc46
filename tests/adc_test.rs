//! ADC: binary carry/overflow behavior and decimal mode.

use mos6502::{Bus, Cpu, Status};

fn setup_cpu() -> Cpu {
    let mut bus = Bus::default();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    Cpu::new(bus)
}

/// CPU about to run `ADC #value` with the given accumulator and carry.
fn setup_adc(a: u8, value: u8, carry: bool) -> Cpu {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x69, value]).unwrap();
    cpu.set_a(a);
    cpu.set_flag(Status::CARRY, carry);
    cpu
}

// ========== Binary Mode ==========

#[test]
fn test_adc_simple_addition() {
    let mut cpu = setup_adc(0x10, 0x20, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag(Status::CARRY));
    assert!(!cpu.flag(Status::OVERFLOW));
    assert!(!cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_adc_includes_carry_in() {
    let mut cpu = setup_adc(0x10, 0x20, true);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x31);
}

#[test]
fn test_adc_carry_out() {
    let mut cpu = setup_adc(0xFF, 0x01, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::OVERFLOW)); // 0xFF is -1; -1 + 1 = 0 is fine
}

#[test]
fn test_adc_overflow_positive_operands() {
    // 0x50 + 0x50 = 0xA0: two positives yielding a negative
    let mut cpu = setup_adc(0x50, 0x50, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag(Status::OVERFLOW));
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::CARRY));
}

#[test]
fn test_adc_overflow_negative_operands() {
    // 0x90 + 0x90 = 0x120: two negatives yielding a positive
    let mut cpu = setup_adc(0x90, 0x90, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag(Status::OVERFLOW));
    assert!(cpu.flag(Status::CARRY));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_adc(0x50, 0x90, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag(Status::OVERFLOW));
}

// ========== End-to-End: LDA then ADC ==========

#[test]
fn test_adc_overflow_scenario() {
    // A9 50 69 50: LDA #$50, ADC #$50
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xA9, 0x50, 0x69, 0x50, 0x00]).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag(Status::OVERFLOW));
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::CARRY));
}

// ========== Decimal Mode ==========

/// CPU about to run `ADC #value` in decimal mode.
fn setup_adc_decimal(a: u8, value: u8, carry: bool) -> Cpu {
    let mut cpu = setup_adc(a, value, carry);
    cpu.set_flag(Status::DECIMAL, true);
    cpu
}

#[test]
fn test_adc_decimal_simple() {
    let mut cpu = setup_adc_decimal(0x15, 0x27, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42); // 15 + 27 = 42 in BCD
    assert!(!cpu.flag(Status::CARRY));
}

#[test]
fn test_adc_decimal_carry_in() {
    let mut cpu = setup_adc_decimal(0x15, 0x27, true);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x43);
}

#[test]
fn test_adc_decimal_carry_out() {
    let mut cpu = setup_adc_decimal(0x58, 0x46, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x04); // 58 + 46 = 104 -> 04 carry
    assert!(cpu.flag(Status::CARRY));
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_adc_decimal_wrap_to_zero() {
    let mut cpu = setup_adc_decimal(0x99, 0x01, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00); // 99 + 1 = 100 -> 00 carry
    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::ZERO)); // Z follows the final accumulator
}

#[test]
fn test_adc_decimal_overflow_uses_binary_formula() {
    // Binary: 0x50 + 0x50 = 0xA0 overflows; the decimal result differs
    let mut cpu = setup_adc_decimal(0x50, 0x50, false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00); // 50 + 50 = 100 -> 00 carry
    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::OVERFLOW));
}
