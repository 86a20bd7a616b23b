//! Tests for table-driven dispatch through `execute()` and `step()`.

use mos6502_core::{AddressingMode, Error, FlatMemory, MemoryBus, Operand, Registers, CPU};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut registers = Registers::power_on();
    registers.set_pc(0x8000);
    CPU::new(registers, FlatMemory::new())
}

#[test]
fn test_execute_does_not_move_pc() {
    let mut cpu = setup_cpu();

    cpu.execute(0xA9, Operand::Byte(0x01)).unwrap();
    cpu.execute(0xAA, Operand::None).unwrap();

    assert_eq!(cpu.registers().x(), 0x01);
    assert_eq!(cpu.registers().pc(), 0x8000);
}

#[test]
fn test_execute_store_with_word_operand() {
    let mut cpu = setup_cpu();
    cpu.registers_mut().set_y(0x0A);

    // STY $4000
    cpu.execute(0x8C, Operand::Word(0x4000)).unwrap();

    assert_eq!(cpu.memory().read(0x4000), 0x0A);
}

#[test]
fn test_execute_unimplemented_leaves_state() {
    let mut cpu = setup_cpu();
    let before = *cpu.registers();

    // JMP $1234
    let result = cpu.execute(0x4C, Operand::Word(0x1234));

    assert_eq!(result, Err(Error::UnimplementedOpcode(0x4C)));
    assert_eq!(*cpu.registers(), before);
}

#[test]
fn test_execute_operand_mismatch() {
    let mut cpu = setup_cpu();

    let result = cpu.execute(0xA9, Operand::None);

    assert_eq!(
        result,
        Err(Error::OperandMismatch {
            opcode: 0xA9,
            mode: AddressingMode::Immediate,
            operand: Operand::None,
        })
    );
    assert_eq!(cpu.registers().a(), 0x00);
}

#[test]
fn test_step_runs_a_program() {
    let mut cpu = setup_cpu();

    let program = [
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0xA9, 0x2A, // LDA #$2A
        0x8D, 0x00, 0x02, // STA $0200
        0xA8, // TAY
        0x8C, 0x01, 0x02, // STY $0201
        0xBA, // TSX
        0x86, 0x10, // STX $10
    ];
    cpu.memory_mut().load(0x8000, &program);

    let mut listing = Vec::new();
    while cpu.registers().pc() < 0x8000 + program.len() as u16 {
        listing.push(cpu.step().unwrap().to_string());
    }

    assert_eq!(
        listing,
        [
            "LDX #$FF",
            "TXS",
            "LDA #$2A",
            "STA $0200",
            "TAY",
            "STY $0201",
            "TSX",
            "STX $10",
        ]
    );
    assert_eq!(cpu.registers().sp(), 0xFF);
    assert_eq!(cpu.memory().read(0x0200), 0x2A);
    assert_eq!(cpu.memory().read(0x0201), 0x2A);
    assert_eq!(cpu.memory().read(0x0010), 0xFF);
}

#[test]
fn test_step_reports_unimplemented_opcode() {
    let mut cpu = setup_cpu();
    // NOP
    cpu.memory_mut().load(0x8000, &[0xEA]);

    assert_eq!(cpu.step(), Err(Error::UnimplementedOpcode(0xEA)));
    assert_eq!(cpu.registers().pc(), 0x8001);
}

#[test]
fn test_step_on_illegal_opcode() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x02]);

    assert_eq!(cpu.step(), Err(Error::UnimplementedOpcode(0x02)));
    assert_eq!(cpu.registers().pc(), 0x8001);
}
