//! Tests for the STA (Store Accumulator) instruction.
//!
//! Tests cover:
//! - All 7 addressing modes
//! - Flags and registers are never modified by a store
//! - The (zp),Y form indexes with Y

use mos6502_core::{FlatMemory, MemoryBus, Registers, CPU};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut registers = Registers::power_on();
    registers.set_pc(0x8000);
    CPU::new(registers, FlatMemory::new())
}

// ========== Basic STA Operation Tests ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0x42);

    cpu.sta_zero_page(0x10);

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.registers().a(), 0x42);
}

#[test]
fn test_sta_does_not_change_flags() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0x00);
    let status = cpu.registers().status();

    cpu.sta_absolute(0x0200);

    assert_eq!(cpu.memory().read(0x0200), 0x00);
    assert_eq!(cpu.registers().status(), status);
    assert!(!cpu.registers().flag_z());
}

#[test]
fn test_sta_negative_value_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0x80);

    cpu.sta_zero_page(0x00);

    assert_eq!(cpu.memory().read(0x0000), 0x80);
    assert!(!cpu.registers().flag_n());
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_sta_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0x5A);
    cpu.registers_mut().set_x(0x10);

    cpu.sta_zero_page_x(0xF8);

    assert_eq!(cpu.memory().read(0x0008), 0x5A);
    assert_eq!(cpu.memory().read(0x0108), 0x00);
}

#[test]
fn test_sta_absolute_x_and_y() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0x77);
    cpu.registers_mut().set_x(0x01);
    cpu.registers_mut().set_y(0x02);

    cpu.sta_absolute_x(0x0300);
    cpu.sta_absolute_y(0x0300);

    assert_eq!(cpu.memory().read(0x0301), 0x77);
    assert_eq!(cpu.memory().read(0x0302), 0x77);
    assert_eq!(cpu.memory().read(0x0300), 0x00);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_word(0x0024, 0x0700);
    cpu.registers_mut().set_a(0x19);
    cpu.registers_mut().set_x(0x04);

    cpu.sta_indirect_x(0x20);

    assert_eq!(cpu.memory().read(0x0700), 0x19);
}

#[test]
fn test_sta_indirect_y_uses_y_index() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0020, 0x30);
    cpu.memory_mut().write(0x0021, 0x40);
    cpu.registers_mut().set_a(0xAB);
    cpu.registers_mut().set_x(0x07);
    cpu.registers_mut().set_y(0x01);

    cpu.sta_indirect_y(0x20);

    assert_eq!(cpu.memory().read(0x4031), 0xAB);
    // Not (zp,X) and not the pointer plus X
    assert_eq!(cpu.memory().read(0x4037), 0x00);
    assert_eq!(cpu.memory().read(0x0027), 0x00);
}

#[test]
fn test_sta_indirect_y_through_step() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_word(0x0080, 0x1000);
    cpu.registers_mut().set_a(0x3E);
    cpu.registers_mut().set_y(0x10);

    // STA ($80),Y
    cpu.memory_mut().load(0x8000, &[0x91, 0x80]);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1010), 0x3E);
    assert_eq!(cpu.registers().pc(), 0x8002);
}

#[test]
fn test_sta_all_modes_through_step() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_a(0xC3);
    cpu.registers_mut().set_x(0x01);
    cpu.registers_mut().set_y(0x02);
    cpu.memory_mut().write_word(0x0041, 0x0600);
    cpu.memory_mut().write_word(0x0050, 0x0700);

    cpu.memory_mut().load(
        0x8000,
        &[
            0x85, 0x10, // STA $10
            0x95, 0x10, // STA $10,X
            0x8D, 0x00, 0x05, // STA $0500
            0x9D, 0x00, 0x05, // STA $0500,X
            0x99, 0x00, 0x05, // STA $0500,Y
            0x81, 0x40, // STA ($40,X)
            0x91, 0x50, // STA ($50),Y
        ],
    );
    for _ in 0..7 {
        cpu.step().unwrap();
    }

    for addr in [0x0010, 0x0011, 0x0500, 0x0501, 0x0502, 0x0600, 0x0702] {
        assert_eq!(cpu.memory().read(addr), 0xC3, "address 0x{addr:04X}");
    }
}
