//! # 6502 Instruction Semantics
//!
//! This module contains the semantics of the data-movement instructions,
//! organized by category. Each category exposes the core operation as a
//! free function over the register file and memory, plus one named `CPU`
//! method per opcode.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod load_store;
pub(crate) mod transfer;

use crate::{addressing, AddressingMode, Error, MemoryBus, Operand, Operation, Registers, Result};

/// Executes one tagged operation from the opcode table.
///
/// Fails only when `operand` does not fit `mode`; the operation itself
/// cannot fail.
pub(crate) fn execute<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    opcode: u8,
    operation: Operation,
    mode: AddressingMode,
    operand: Operand,
) -> Result<()> {
    let mismatch = || Error::OperandMismatch {
        opcode,
        mode,
        operand,
    };

    match operation {
        Operation::Load(target) => {
            let value = addressing::operand_value(mode, operand, registers, memory)
                .ok_or_else(mismatch)?;
            load_store::load(registers, target, value);
        }
        Operation::Store(source) => {
            let addr = addressing::effective_address(mode, operand, registers, memory)
                .ok_or_else(mismatch)?;
            load_store::store(registers, memory, source, addr);
        }
        Operation::Transfer { from, to } => {
            if !mode.accepts(operand) {
                return Err(mismatch());
            }
            transfer::transfer(registers, from, to);
        }
    }

    Ok(())
}
