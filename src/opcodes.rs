//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that drives dispatch.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with "???" mnemonic
//!
//! Each entry records the mnemonic, addressing mode and instruction size.
//! Entries in the load/store/transfer family also carry an `Operation` tag
//! naming their semantic class; every other entry has `operation: None` and
//! is rejected by the dispatcher.

use crate::addressing::AddressingMode;
use crate::registers::Register;

use AddressingMode::*;

/// Semantic class of a load, store or register transfer instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Read the effective value into a register, then update N and Z.
    Load(Register),

    /// Write a register to the effective address. No flags change.
    Store(Register),

    /// Copy one register into another. Updates N and Z unless the
    /// destination is the stack pointer.
    Transfer { from: Register, to: Register },
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use mos6502_core::{AddressingMode, Operation, Register, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.operation, Some(Operation::Load(Register::A)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Semantic class, present for the load/store/transfer family only.
    pub operation: Option<Operation>,
}

impl OpcodeMetadata {
    /// True for the 151 documented opcodes.
    pub fn is_documented(&self) -> bool {
        self.mnemonic != "???"
    }
}

const fn entry(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    size_bytes: u8,
    operation: Option<Operation>,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes,
        operation,
    }
}

const ILLEGAL: OpcodeMetadata = entry("???", Implicit, 1, None);

/// Looks up the opcode byte for a mnemonic and addressing mode.
///
/// ```
/// use mos6502_core::{find_opcode, AddressingMode};
///
/// assert_eq!(find_opcode("STA", AddressingMode::IndirectY), Some(0x91));
/// assert_eq!(find_opcode("STX", AddressingMode::AbsoluteY), None);
/// ```
pub fn find_opcode(mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .position(|m| {
            m.is_documented()
                && m.mnemonic.eq_ignore_ascii_case(mnemonic)
                && m.addressing_mode == mode
        })
        .map(|index| index as u8)
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ entry("BRK", Implicit, 1, None),
    /* 0x01 */ entry("ORA", IndirectX, 2, None),
    /* 0x02 */ ILLEGAL,
    /* 0x03 */ ILLEGAL,
    /* 0x04 */ ILLEGAL,
    /* 0x05 */ entry("ORA", ZeroPage, 2, None),
    /* 0x06 */ entry("ASL", ZeroPage, 2, None),
    /* 0x07 */ ILLEGAL,
    /* 0x08 */ entry("PHP", Implicit, 1, None),
    /* 0x09 */ entry("ORA", Immediate, 2, None),
    /* 0x0A */ entry("ASL", Accumulator, 1, None),
    /* 0x0B */ ILLEGAL,
    /* 0x0C */ ILLEGAL,
    /* 0x0D */ entry("ORA", Absolute, 3, None),
    /* 0x0E */ entry("ASL", Absolute, 3, None),
    /* 0x0F */ ILLEGAL,
    /* 0x10 */ entry("BPL", Relative, 2, None),
    /* 0x11 */ entry("ORA", IndirectY, 2, None),
    /* 0x12 */ ILLEGAL,
    /* 0x13 */ ILLEGAL,
    /* 0x14 */ ILLEGAL,
    /* 0x15 */ entry("ORA", ZeroPageX, 2, None),
    /* 0x16 */ entry("ASL", ZeroPageX, 2, None),
    /* 0x17 */ ILLEGAL,
    /* 0x18 */ entry("CLC", Implicit, 1, None),
    /* 0x19 */ entry("ORA", AbsoluteY, 3, None),
    /* 0x1A */ ILLEGAL,
    /* 0x1B */ ILLEGAL,
    /* 0x1C */ ILLEGAL,
    /* 0x1D */ entry("ORA", AbsoluteX, 3, None),
    /* 0x1E */ entry("ASL", AbsoluteX, 3, None),
    /* 0x1F */ ILLEGAL,
    /* 0x20 */ entry("JSR", Absolute, 3, None),
    /* 0x21 */ entry("AND", IndirectX, 2, None),
    /* 0x22 */ ILLEGAL,
    /* 0x23 */ ILLEGAL,
    /* 0x24 */ entry("BIT", ZeroPage, 2, None),
    /* 0x25 */ entry("AND", ZeroPage, 2, None),
    /* 0x26 */ entry("ROL", ZeroPage, 2, None),
    /* 0x27 */ ILLEGAL,
    /* 0x28 */ entry("PLP", Implicit, 1, None),
    /* 0x29 */ entry("AND", Immediate, 2, None),
    /* 0x2A */ entry("ROL", Accumulator, 1, None),
    /* 0x2B */ ILLEGAL,
    /* 0x2C */ entry("BIT", Absolute, 3, None),
    /* 0x2D */ entry("AND", Absolute, 3, None),
    /* 0x2E */ entry("ROL", Absolute, 3, None),
    /* 0x2F */ ILLEGAL,
    /* 0x30 */ entry("BMI", Relative, 2, None),
    /* 0x31 */ entry("AND", IndirectY, 2, None),
    /* 0x32 */ ILLEGAL,
    /* 0x33 */ ILLEGAL,
    /* 0x34 */ ILLEGAL,
    /* 0x35 */ entry("AND", ZeroPageX, 2, None),
    /* 0x36 */ entry("ROL", ZeroPageX, 2, None),
    /* 0x37 */ ILLEGAL,
    /* 0x38 */ entry("SEC", Implicit, 1, None),
    /* 0x39 */ entry("AND", AbsoluteY, 3, None),
    /* 0x3A */ ILLEGAL,
    /* 0x3B */ ILLEGAL,
    /* 0x3C */ ILLEGAL,
    /* 0x3D */ entry("AND", AbsoluteX, 3, None),
    /* 0x3E */ entry("ROL", AbsoluteX, 3, None),
    /* 0x3F */ ILLEGAL,
    /* 0x40 */ entry("RTI", Implicit, 1, None),
    /* 0x41 */ entry("EOR", IndirectX, 2, None),
    /* 0x42 */ ILLEGAL,
    /* 0x43 */ ILLEGAL,
    /* 0x44 */ ILLEGAL,
    /* 0x45 */ entry("EOR", ZeroPage, 2, None),
    /* 0x46 */ entry("LSR", ZeroPage, 2, None),
    /* 0x47 */ ILLEGAL,
    /* 0x48 */ entry("PHA", Implicit, 1, None),
    /* 0x49 */ entry("EOR", Immediate, 2, None),
    /* 0x4A */ entry("LSR", Accumulator, 1, None),
    /* 0x4B */ ILLEGAL,
    /* 0x4C */ entry("JMP", Absolute, 3, None),
    /* 0x4D */ entry("EOR", Absolute, 3, None),
    /* 0x4E */ entry("LSR", Absolute, 3, None),
    /* 0x4F */ ILLEGAL,
    /* 0x50 */ entry("BVC", Relative, 2, None),
    /* 0x51 */ entry("EOR", IndirectY, 2, None),
    /* 0x52 */ ILLEGAL,
    /* 0x53 */ ILLEGAL,
    /* 0x54 */ ILLEGAL,
    /* 0x55 */ entry("EOR", ZeroPageX, 2, None),
    /* 0x56 */ entry("LSR", ZeroPageX, 2, None),
    /* 0x57 */ ILLEGAL,
    /* 0x58 */ entry("CLI", Implicit, 1, None),
    /* 0x59 */ entry("EOR", AbsoluteY, 3, None),
    /* 0x5A */ ILLEGAL,
    /* 0x5B */ ILLEGAL,
    /* 0x5C */ ILLEGAL,
    /* 0x5D */ entry("EOR", AbsoluteX, 3, None),
    /* 0x5E */ entry("LSR", AbsoluteX, 3, None),
    /* 0x5F */ ILLEGAL,
    /* 0x60 */ entry("RTS", Implicit, 1, None),
    /* 0x61 */ entry("ADC", IndirectX, 2, None),
    /* 0x62 */ ILLEGAL,
    /* 0x63 */ ILLEGAL,
    /* 0x64 */ ILLEGAL,
    /* 0x65 */ entry("ADC", ZeroPage, 2, None),
    /* 0x66 */ entry("ROR", ZeroPage, 2, None),
    /* 0x67 */ ILLEGAL,
    /* 0x68 */ entry("PLA", Implicit, 1, None),
    /* 0x69 */ entry("ADC", Immediate, 2, None),
    /* 0x6A */ entry("ROR", Accumulator, 1, None),
    /* 0x6B */ ILLEGAL,
    /* 0x6C */ entry("JMP", Indirect, 3, None),
    /* 0x6D */ entry("ADC", Absolute, 3, None),
    /* 0x6E */ entry("ROR", Absolute, 3, None),
    /* 0x6F */ ILLEGAL,
    /* 0x70 */ entry("BVS", Relative, 2, None),
    /* 0x71 */ entry("ADC", IndirectY, 2, None),
    /* 0x72 */ ILLEGAL,
    /* 0x73 */ ILLEGAL,
    /* 0x74 */ ILLEGAL,
    /* 0x75 */ entry("ADC", ZeroPageX, 2, None),
    /* 0x76 */ entry("ROR", ZeroPageX, 2, None),
    /* 0x77 */ ILLEGAL,
    /* 0x78 */ entry("SEI", Implicit, 1, None),
    /* 0x79 */ entry("ADC", AbsoluteY, 3, None),
    /* 0x7A */ ILLEGAL,
    /* 0x7B */ ILLEGAL,
    /* 0x7C */ ILLEGAL,
    /* 0x7D */ entry("ADC", AbsoluteX, 3, None),
    /* 0x7E */ entry("ROR", AbsoluteX, 3, None),
    /* 0x7F */ ILLEGAL,
    /* 0x80 */ ILLEGAL,
    /* 0x81 */ entry("STA", IndirectX, 2, Some(Operation::Store(Register::A))),
    /* 0x82 */ ILLEGAL,
    /* 0x83 */ ILLEGAL,
    /* 0x84 */ entry("STY", ZeroPage, 2, Some(Operation::Store(Register::Y))),
    /* 0x85 */ entry("STA", ZeroPage, 2, Some(Operation::Store(Register::A))),
    /* 0x86 */ entry("STX", ZeroPage, 2, Some(Operation::Store(Register::X))),
    /* 0x87 */ ILLEGAL,
    /* 0x88 */ entry("DEY", Implicit, 1, None),
    /* 0x89 */ ILLEGAL,
    /* 0x8A */ entry("TXA", Implicit, 1, Some(Operation::Transfer { from: Register::X, to: Register::A })),
    /* 0x8B */ ILLEGAL,
    /* 0x8C */ entry("STY", Absolute, 3, Some(Operation::Store(Register::Y))),
    /* 0x8D */ entry("STA", Absolute, 3, Some(Operation::Store(Register::A))),
    /* 0x8E */ entry("STX", Absolute, 3, Some(Operation::Store(Register::X))),
    /* 0x8F */ ILLEGAL,
    /* 0x90 */ entry("BCC", Relative, 2, None),
    /* 0x91 */ entry("STA", IndirectY, 2, Some(Operation::Store(Register::A))),
    /* 0x92 */ ILLEGAL,
    /* 0x93 */ ILLEGAL,
    /* 0x94 */ entry("STY", ZeroPageX, 2, Some(Operation::Store(Register::Y))),
    /* 0x95 */ entry("STA", ZeroPageX, 2, Some(Operation::Store(Register::A))),
    /* 0x96 */ entry("STX", ZeroPageY, 2, Some(Operation::Store(Register::X))),
    /* 0x97 */ ILLEGAL,
    /* 0x98 */ entry("TYA", Implicit, 1, Some(Operation::Transfer { from: Register::Y, to: Register::A })),
    /* 0x99 */ entry("STA", AbsoluteY, 3, Some(Operation::Store(Register::A))),
    /* 0x9A */ entry("TXS", Implicit, 1, Some(Operation::Transfer { from: Register::X, to: Register::SP })),
    /* 0x9B */ ILLEGAL,
    /* 0x9C */ ILLEGAL,
    /* 0x9D */ entry("STA", AbsoluteX, 3, Some(Operation::Store(Register::A))),
    /* 0x9E */ ILLEGAL,
    /* 0x9F */ ILLEGAL,
    /* 0xA0 */ entry("LDY", Immediate, 2, Some(Operation::Load(Register::Y))),
    /* 0xA1 */ entry("LDA", IndirectX, 2, Some(Operation::Load(Register::A))),
    /* 0xA2 */ entry("LDX", Immediate, 2, Some(Operation::Load(Register::X))),
    /* 0xA3 */ ILLEGAL,
    /* 0xA4 */ entry("LDY", ZeroPage, 2, Some(Operation::Load(Register::Y))),
    /* 0xA5 */ entry("LDA", ZeroPage, 2, Some(Operation::Load(Register::A))),
    /* 0xA6 */ entry("LDX", ZeroPage, 2, Some(Operation::Load(Register::X))),
    /* 0xA7 */ ILLEGAL,
    /* 0xA8 */ entry("TAY", Implicit, 1, Some(Operation::Transfer { from: Register::A, to: Register::Y })),
    /* 0xA9 */ entry("LDA", Immediate, 2, Some(Operation::Load(Register::A))),
    /* 0xAA */ entry("TAX", Implicit, 1, Some(Operation::Transfer { from: Register::A, to: Register::X })),
    /* 0xAB */ ILLEGAL,
    /* 0xAC */ entry("LDY", Absolute, 3, Some(Operation::Load(Register::Y))),
    /* 0xAD */ entry("LDA", Absolute, 3, Some(Operation::Load(Register::A))),
    /* 0xAE */ entry("LDX", Absolute, 3, Some(Operation::Load(Register::X))),
    /* 0xAF */ ILLEGAL,
    /* 0xB0 */ entry("BCS", Relative, 2, None),
    /* 0xB1 */ entry("LDA", IndirectY, 2, Some(Operation::Load(Register::A))),
    /* 0xB2 */ ILLEGAL,
    /* 0xB3 */ ILLEGAL,
    /* 0xB4 */ entry("LDY", ZeroPageX, 2, Some(Operation::Load(Register::Y))),
    /* 0xB5 */ entry("LDA", ZeroPageX, 2, Some(Operation::Load(Register::A))),
    /* 0xB6 */ entry("LDX", ZeroPageY, 2, Some(Operation::Load(Register::X))),
    /* 0xB7 */ ILLEGAL,
    /* 0xB8 */ entry("CLV", Implicit, 1, None),
    /* 0xB9 */ entry("LDA", AbsoluteY, 3, Some(Operation::Load(Register::A))),
    /* 0xBA */ entry("TSX", Implicit, 1, Some(Operation::Transfer { from: Register::SP, to: Register::X })),
    /* 0xBB */ ILLEGAL,
    /* 0xBC */ entry("LDY", AbsoluteX, 3, Some(Operation::Load(Register::Y))),
    /* 0xBD */ entry("LDA", AbsoluteX, 3, Some(Operation::Load(Register::A))),
    /* 0xBE */ entry("LDX", AbsoluteY, 3, Some(Operation::Load(Register::X))),
    /* 0xBF */ ILLEGAL,
    /* 0xC0 */ entry("CPY", Immediate, 2, None),
    /* 0xC1 */ entry("CMP", IndirectX, 2, None),
    /* 0xC2 */ ILLEGAL,
    /* 0xC3 */ ILLEGAL,
    /* 0xC4 */ entry("CPY", ZeroPage, 2, None),
    /* 0xC5 */ entry("CMP", ZeroPage, 2, None),
    /* 0xC6 */ entry("DEC", ZeroPage, 2, None),
    /* 0xC7 */ ILLEGAL,
    /* 0xC8 */ entry("INY", Implicit, 1, None),
    /* 0xC9 */ entry("CMP", Immediate, 2, None),
    /* 0xCA */ entry("DEX", Implicit, 1, None),
    /* 0xCB */ ILLEGAL,
    /* 0xCC */ entry("CPY", Absolute, 3, None),
    /* 0xCD */ entry("CMP", Absolute, 3, None),
    /* 0xCE */ entry("DEC", Absolute, 3, None),
    /* 0xCF */ ILLEGAL,
    /* 0xD0 */ entry("BNE", Relative, 2, None),
    /* 0xD1 */ entry("CMP", IndirectY, 2, None),
    /* 0xD2 */ ILLEGAL,
    /* 0xD3 */ ILLEGAL,
    /* 0xD4 */ ILLEGAL,
    /* 0xD5 */ entry("CMP", ZeroPageX, 2, None),
    /* 0xD6 */ entry("DEC", ZeroPageX, 2, None),
    /* 0xD7 */ ILLEGAL,
    /* 0xD8 */ entry("CLD", Implicit, 1, None),
    /* 0xD9 */ entry("CMP", AbsoluteY, 3, None),
    /* 0xDA */ ILLEGAL,
    /* 0xDB */ ILLEGAL,
    /* 0xDC */ ILLEGAL,
    /* 0xDD */ entry("CMP", AbsoluteX, 3, None),
    /* 0xDE */ entry("DEC", AbsoluteX, 3, None),
    /* 0xDF */ ILLEGAL,
    /* 0xE0 */ entry("CPX", Immediate, 2, None),
    /* 0xE1 */ entry("SBC", IndirectX, 2, None),
    /* 0xE2 */ ILLEGAL,
    /* 0xE3 */ ILLEGAL,
    /* 0xE4 */ entry("CPX", ZeroPage, 2, None),
    /* 0xE5 */ entry("SBC", ZeroPage, 2, None),
    /* 0xE6 */ entry("INC", ZeroPage, 2, None),
    /* 0xE7 */ ILLEGAL,
    /* 0xE8 */ entry("INX", Implicit, 1, None),
    /* 0xE9 */ entry("SBC", Immediate, 2, None),
    /* 0xEA */ entry("NOP", Implicit, 1, None),
    /* 0xEB */ ILLEGAL,
    /* 0xEC */ entry("CPX", Absolute, 3, None),
    /* 0xED */ entry("SBC", Absolute, 3, None),
    /* 0xEE */ entry("INC", Absolute, 3, None),
    /* 0xEF */ ILLEGAL,
    /* 0xF0 */ entry("BEQ", Relative, 2, None),
    /* 0xF1 */ entry("SBC", IndirectY, 2, None),
    /* 0xF2 */ ILLEGAL,
    /* 0xF3 */ ILLEGAL,
    /* 0xF4 */ ILLEGAL,
    /* 0xF5 */ entry("SBC", ZeroPageX, 2, None),
    /* 0xF6 */ entry("INC", ZeroPageX, 2, None),
    /* 0xF7 */ ILLEGAL,
    /* 0xF8 */ entry("SED", Implicit, 1, None),
    /* 0xF9 */ entry("SBC", AbsoluteY, 3, None),
    /* 0xFA */ ILLEGAL,
    /* 0xFB */ ILLEGAL,
    /* 0xFC */ ILLEGAL,
    /* 0xFD */ entry("SBC", AbsoluteX, 3, None),
    /* 0xFE */ entry("INC", AbsoluteX, 3, None),
    /* 0xFF */ ILLEGAL,
];
