//! Fuzz target for table dispatch with arbitrary operands.
//!
//! Any opcode paired with any operand must either run or return an error.

#![no_main]

use arbitrary::Arbitrary;
use mos6502_core::{Error, FlatMemory, Operand, Registers, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOperand {
    None,
    Byte(u8),
    Word(u16),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    opcode: u8,
    operand: FuzzOperand,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    zero_page: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);

    let mut registers = Registers::power_on();
    registers.set_a(input.a);
    registers.set_x(input.x);
    registers.set_y(input.y);
    registers.set_sp(input.sp);

    let operand = match input.operand {
        FuzzOperand::None => Operand::None,
        FuzzOperand::Byte(value) => Operand::Byte(value),
        FuzzOperand::Word(value) => Operand::Word(value),
    };

    let mut cpu = CPU::new(registers, memory);
    let before = *cpu.registers();

    match cpu.execute(input.opcode, operand) {
        Ok(()) => assert!(OPCODE_TABLE[input.opcode as usize].operation.is_some()),
        Err(Error::UnimplementedOpcode(opcode)) => {
            assert_eq!(opcode, input.opcode);
            assert_eq!(*cpu.registers(), before);
        }
        Err(_) => assert_eq!(*cpu.registers(), before),
    }
    assert_eq!(cpu.registers().pc(), before.pc());
});
