//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary register files and memory contents, then
//! steps one instruction and checks that PC moved past it.

#![no_main]

use arbitrary::Arbitrary;
use mos6502_core::{FlatMemory, Registers, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register file for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    /// Packed NV-BDIZC status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents, where the indirect pointers live
    zero_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x4000, &input.memory.main_memory);
    // Written last so the instruction survives a PC inside the other regions
    memory.load(input.registers.pc, &input.memory.instruction_bytes);

    let mut registers = Registers::default();
    registers.set_a(input.registers.a);
    registers.set_x(input.registers.x);
    registers.set_y(input.registers.y);
    registers.set_sp(input.registers.sp);
    registers.set_pc(input.registers.pc);
    registers.set_status(input.registers.status);

    let mut cpu = CPU::new(registers, memory);

    // Unimplemented opcodes return an error; only panics are bugs
    let _ = cpu.step();

    let size = OPCODE_TABLE[input.memory.instruction_bytes[0] as usize].size_bytes as u16;
    assert_eq!(cpu.registers().pc(), input.registers.pc.wrapping_add(size));
});
