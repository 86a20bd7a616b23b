//! Tests for the STY (Store Y Register) instruction.

use mos6502_core::{FlatMemory, MemoryBus, Registers, CPU};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut registers = Registers::power_on();
    registers.set_pc(0x8000);
    CPU::new(registers, FlatMemory::new())
}

#[test]
fn test_sty_zero_page() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_y(0x12);

    cpu.sty_zero_page(0x40);

    assert_eq!(cpu.memory().read(0x0040), 0x12);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_y(0x34);
    cpu.registers_mut().set_x(0x80);

    cpu.sty_zero_page_x(0x90);

    assert_eq!(cpu.memory().read(0x0010), 0x34);
}

#[test]
fn test_sty_absolute_through_step() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_y(0xF0);
    let status = cpu.registers().status();

    // STY $2000
    cpu.memory_mut().load(0x8000, &[0x8C, 0x00, 0x20]);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2000), 0xF0);
    assert_eq!(cpu.registers().status(), status);
    assert_eq!(cpu.registers().pc(), 0x8003);
}
