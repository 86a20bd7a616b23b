//! # CPU State and Dispatch
//!
//! This module contains the `CPU` struct, which owns the register file and
//! the memory bus, and the table-driven dispatcher.
//!
//! ## Execution Model
//!
//! Instructions reach the semantics in one of three ways:
//! - Named methods (`lda_zero_page_x`, `txs`, ...), one per opcode
//! - `execute()`: look up an opcode in `OPCODE_TABLE` and run its operation
//! - `step()`: fetch the instruction at PC, advance PC past it, execute it
//!
//! Only one operation runs at a time; each borrows the CPU mutably.

use log::{debug, trace};

use crate::{instructions, Error, FlatMemory, Instruction, MemoryBus, Operand, Registers, Result, OPCODE_TABLE};

/// 6502 CPU: a register file plus the memory it operates on.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use mos6502_core::{FlatMemory, MemoryBus, Registers, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0010, 0x42);
///
/// let mut cpu = CPU::new(Registers::power_on(), memory);
/// cpu.registers_mut().set_x(0x05);
///
/// // LDA $0B,X
/// cpu.lda_zero_page_x(0x0B);
/// assert_eq!(cpu.registers().a(), 0x42);
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Register file
    pub(crate) registers: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU from a register file and a memory bus, taking ownership
    /// of both.
    pub fn new(registers: Registers, memory: M) -> Self {
        Self { registers, memory }
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Returns the register file for pre-loading or modification.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus for pre-loading or modification.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its register file and memory.
    pub fn into_parts(self) -> (Registers, M) {
        (self.registers, self.memory)
    }

    /// Executes `opcode` with `operand` through the opcode table.
    ///
    /// PC is left alone; advancing it is the caller's job (see `step`).
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the operation ran
    /// - `Err(Error::UnimplementedOpcode(opcode))` if the opcode is not a
    ///   load, store or transfer
    /// - `Err(Error::OperandMismatch { .. })` if `operand` does not fit the
    ///   opcode's addressing mode
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{Error, Operand, Registers, CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(Registers::default(), FlatMemory::new());
    ///
    /// cpu.execute(0xA2, Operand::Byte(0x80)).unwrap(); // LDX #$80
    /// assert_eq!(cpu.registers().x(), 0x80);
    ///
    /// assert_eq!(
    ///     cpu.execute(0x69, Operand::Byte(0x01)), // ADC #$01
    ///     Err(Error::UnimplementedOpcode(0x69))
    /// );
    /// ```
    pub fn execute(&mut self, opcode: u8, operand: Operand) -> Result<()> {
        let metadata = &OPCODE_TABLE[opcode as usize];

        let Some(operation) = metadata.operation else {
            debug!("opcode 0x{opcode:02X} ({}) is not implemented", metadata.mnemonic);
            return Err(Error::UnimplementedOpcode(opcode));
        };

        instructions::execute(
            &mut self.registers,
            &mut self.memory,
            opcode,
            operation,
            metadata.addressing_mode,
            operand,
        )
        .inspect_err(|err| debug!("dispatch failed: {err}"))
    }

    /// Fetches, decodes and executes the instruction at PC.
    ///
    /// PC advances past the instruction before it executes, so it is moved
    /// even when the opcode turns out to be unimplemented.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{FlatMemory, Registers, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x8000, &[0xA9, 0x42, 0xAA]); // LDA #$42; TAX
    ///
    /// let mut registers = Registers::power_on();
    /// registers.set_pc(0x8000);
    /// let mut cpu = CPU::new(registers, memory);
    ///
    /// let first = cpu.step().unwrap();
    /// assert_eq!(first.to_string(), "LDA #$42");
    /// cpu.step().unwrap();
    ///
    /// assert_eq!(cpu.registers().x(), 0x42);
    /// assert_eq!(cpu.registers().pc(), 0x8003);
    /// ```
    pub fn step(&mut self) -> Result<Instruction> {
        let pc = self.registers.pc;
        let opcode = self.memory.read(pc);
        let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;

        let mut bytes = [0u8; 3];
        for (offset, byte) in (0..size).zip(bytes.iter_mut()) {
            *byte = self.memory.read(pc.wrapping_add(offset));
        }

        let instruction = Instruction::decode(&bytes[..size as usize], pc)?;
        self.registers.pc = pc.wrapping_add(size);

        self.execute(instruction.opcode, instruction.operand)?;
        trace!("{:04X}  {:<12} {}", pc, instruction.to_string(), self.registers);

        Ok(instruction)
    }
}
