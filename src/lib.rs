//! # 6502 Load/Store/Transfer Semantics Core
//!
//! A bit-exact model of the NMOS 6502 data-movement instructions: the loads
//! (LDA, LDX, LDY), the stores (STA, STX, STY) and the register transfers
//! (TAX, TAY, TXA, TYA, TSX, TXS), over a flat wrap-around memory and a
//! register file with the seven condition flags.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502_core::{FlatMemory, MemoryBus, Registers, CPU};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0x0020, 0x30);
//! memory.write(0x0021, 0x40);
//! memory.write(0x4031, 0x99);
//!
//! let mut cpu = CPU::new(Registers::power_on(), memory);
//! cpu.registers_mut().set_y(0x01);
//!
//! // LDA ($20),Y
//! cpu.lda_indirect_y(0x20);
//! assert_eq!(cpu.registers().a(), 0x99);
//! assert!(cpu.registers().flag_n());
//!
//! // The same instruction through the opcode table
//! cpu.execute(0xB1, mos6502_core::Operand::Byte(0x20)).unwrap();
//! assert_eq!(cpu.registers().a(), 0x99);
//! ```
//!
//! ## Architecture
//!
//! - **Explicit state**: `CPU` owns a `Registers` and a `MemoryBus`; every
//!   operation borrows them mutably, one at a time.
//! - **Table-driven dispatch**: each opcode byte maps to an
//!   `OpcodeMetadata` entry whose `operation` tag names the semantic class.
//! - **Total semantics**: addresses wrap instead of faulting, so no
//!   instruction can fail. Errors only come from dispatch and construction.
//!
//! ## Modules
//!
//! - `addressing` - Addressing modes and effective address arithmetic
//! - `cpu` - CPU container, named operations and table dispatch
//! - `instruction` - Instruction decoding and assembly formatting
//! - `memory` - MemoryBus trait and the flat memory store
//! - `opcodes` - Opcode metadata table
//! - `registers` - Register file and flag helpers

pub mod addressing;
pub mod cpu;
pub mod instruction;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Semantic operations (reached through `CPU` methods)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::CPU;
pub use instruction::Instruction;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{find_opcode, OpcodeMetadata, Operation, OPCODE_TABLE};
pub use registers::{FlagWidth, Register, Registers};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the core.
///
/// The instruction semantics themselves never fail; these come from table
/// dispatch, instruction decoding and memory construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The opcode is not a load, store or transfer instruction.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// The operand handed to the dispatcher does not fit the opcode's addressing mode.
    #[error("opcode 0x{opcode:02X} ({mode:?}) cannot take operand {operand:?}")]
    OperandMismatch {
        opcode: u8,
        mode: AddressingMode,
        operand: Operand,
    },

    /// Decoding was asked to read an instruction from an empty slice.
    #[error("no bytes to decode")]
    EmptyInstruction,

    /// Fewer bytes than the instruction occupies were available to decode.
    #[error("opcode 0x{opcode:02X} needs {needed} bytes but only {available} were given")]
    TruncatedInstruction {
        opcode: u8,
        needed: usize,
        available: usize,
    },

    /// A memory store of zero bytes was requested.
    #[error("memory size must be at least one byte")]
    InvalidMemorySize,

    /// The memory store could not be allocated.
    #[error("failed to allocate {size} bytes of memory")]
    MemoryAllocation { size: usize },
}
