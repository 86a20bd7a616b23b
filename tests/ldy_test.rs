//! Tests for the LDY (Load Y Register) instruction.
//!
//! LDY supports immediate, zero page, zero page,X, absolute and absolute,X.

use mos6502_core::{FlatMemory, MemoryBus, Registers, CPU};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut registers = Registers::power_on();
    registers.set_pc(0x8000);
    CPU::new(registers, FlatMemory::new())
}

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();

    // LDY #$80
    cpu.memory_mut().load(0x8000, &[0xA0, 0x80]);
    cpu.step().unwrap();

    assert_eq!(cpu.registers().y(), 0x80);
    assert!(cpu.registers().flag_n());
    assert!(!cpu.registers().flag_z());
}

#[test]
fn test_ldy_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_y(0x33);

    cpu.ldy_immediate(0x00);

    assert_eq!(cpu.registers().y(), 0x00);
    assert!(cpu.registers().flag_z());
}

#[test]
fn test_ldy_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x00A0, 0x14);

    cpu.ldy_zero_page(0xA0);

    assert_eq!(cpu.registers().y(), 0x14);
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0003, 0x7E);
    cpu.registers_mut().set_x(0x04);

    // 0xFF + 0x04 wraps to 0x03
    cpu.ldy_zero_page_x(0xFF);

    assert_eq!(cpu.registers().y(), 0x7E);
}

#[test]
fn test_ldy_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x01);

    cpu.ldy_absolute(0x0600);

    assert_eq!(cpu.registers().y(), 0x01);
    assert!(!cpu.registers().flag_z());
    assert!(!cpu.registers().flag_n());
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x06FF, 0xF0);
    cpu.registers_mut().set_x(0xFF);

    cpu.ldy_absolute_x(0x0600);

    assert_eq!(cpu.registers().y(), 0xF0);
    assert!(cpu.registers().flag_n());
}

#[test]
fn test_ldy_through_step() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_x(0x01);
    cpu.memory_mut().write(0x0050, 0x0A);
    cpu.memory_mut().write(0x0051, 0x0B);
    cpu.memory_mut().write(0x1234, 0x0C);
    cpu.memory_mut().write(0x1235, 0x0D);

    cpu.memory_mut().load(
        0x8000,
        &[
            0xA4, 0x50, // LDY $50
            0xB4, 0x50, // LDY $50,X
            0xAC, 0x34, 0x12, // LDY $1234
            0xBC, 0x34, 0x12, // LDY $1234,X
        ],
    );

    for expected in [0x0A, 0x0B, 0x0C, 0x0D] {
        cpu.step().unwrap();
        assert_eq!(cpu.registers().y(), expected);
    }
}
