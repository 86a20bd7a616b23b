//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the effective
//! address arithmetic for the memory modes. Each mode determines how many
//! operand bytes follow the opcode and how they combine with the index
//! registers.
//!
//! All arithmetic wraps:
//! - Zero page indexed and the indirect pointer fetches stay inside page zero
//! - Absolute indexed and indirect indexed wrap at 0xFFFF

use std::fmt;

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: TAX, TXS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234 (load from address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X, wraps at 0xFFFF)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y, wraps at 0xFFFF)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit
    /// address stored there, load from it)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read the 16-bit address stored at 0x40, add Y,
    /// load from the result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> usize {
        use AddressingMode::*;

        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// True if `operand` has the width this mode expects.
    pub fn accepts(self, operand: Operand) -> bool {
        operand.len() == self.operand_len()
    }
}

/// Operand bytes of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// No operand (implicit and accumulator modes)
    None,
    /// One operand byte (immediate value, zero page address, branch offset)
    Byte(u8),
    /// Two operand bytes, combined little-endian
    Word(u16),
}

impl Operand {
    /// Builds an operand from the bytes following an opcode.
    ///
    /// Two or more bytes form a little-endian word; extra bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match *bytes {
            [] => Operand::None,
            [value] => Operand::Byte(value),
            [lo, hi, ..] => Operand::Word(u16::from_le_bytes([lo, hi])),
        }
    }

    /// Number of bytes the operand occupies in the instruction stream.
    pub const fn len(self) -> usize {
        match self {
            Operand::None => 0,
            Operand::Byte(_) => 1,
            Operand::Word(_) => 2,
        }
    }

    /// True for `Operand::None`.
    pub const fn is_empty(self) -> bool {
        matches!(self, Operand::None)
    }
}

impl From<u8> for Operand {
    fn from(value: u8) -> Self {
        Operand::Byte(value)
    }
}

impl From<u16> for Operand {
    fn from(value: u16) -> Self {
        Operand::Word(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::None => Ok(()),
            Operand::Byte(value) => write!(f, "${value:02X}"),
            Operand::Word(value) => write!(f, "${value:04X}"),
        }
    }
}

// ========== Effective Address Arithmetic ==========

/// `zp,X` / `zp,Y`: the sum wraps inside page zero.
pub fn zero_page_indexed(zp: u8, index: u8) -> u16 {
    zp.wrapping_add(index) as u16
}

/// `abs,X` / `abs,Y`: the sum wraps at the top of the address space.
pub fn absolute_indexed(base: u16, index: u8) -> u16 {
    base.wrapping_add(index as u16)
}

/// Reads the little-endian pointer stored at `zp`. The high byte comes from
/// `zp + 1` within page zero, so a pointer at 0xFF takes its high byte from
/// 0x00.
pub fn zero_page_pointer<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16);
    let hi = memory.read(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// `(zp,X)`: add X to the zero page operand, then dereference.
pub fn indexed_indirect<M: MemoryBus>(memory: &M, zp: u8, x: u8) -> u16 {
    zero_page_pointer(memory, zp.wrapping_add(x))
}

/// `(zp),Y`: dereference the zero page operand, then add Y.
pub fn indirect_indexed<M: MemoryBus>(memory: &M, zp: u8, y: u8) -> u16 {
    absolute_indexed(zero_page_pointer(memory, zp), y)
}

/// Resolves the effective address for a memory addressing mode.
///
/// Returns `None` for modes no load or store uses (implicit, accumulator,
/// immediate, relative, JMP's indirect) and for an operand of the wrong width.
pub fn effective_address<M: MemoryBus>(
    mode: AddressingMode,
    operand: Operand,
    registers: &Registers,
    memory: &M,
) -> Option<u16> {
    use AddressingMode::*;

    match (mode, operand) {
        (ZeroPage, Operand::Byte(zp)) => Some(zp as u16),
        (ZeroPageX, Operand::Byte(zp)) => Some(zero_page_indexed(zp, registers.x())),
        (ZeroPageY, Operand::Byte(zp)) => Some(zero_page_indexed(zp, registers.y())),
        (Absolute, Operand::Word(addr)) => Some(addr),
        (AbsoluteX, Operand::Word(addr)) => Some(absolute_indexed(addr, registers.x())),
        (AbsoluteY, Operand::Word(addr)) => Some(absolute_indexed(addr, registers.y())),
        (IndirectX, Operand::Byte(zp)) => Some(indexed_indirect(memory, zp, registers.x())),
        (IndirectY, Operand::Byte(zp)) => Some(indirect_indexed(memory, zp, registers.y())),
        _ => None,
    }
}

/// Resolves the effective value an instruction reads: the operand itself
/// for immediate mode, the byte at the effective address otherwise.
pub fn operand_value<M: MemoryBus>(
    mode: AddressingMode,
    operand: Operand,
    registers: &Registers,
    memory: &M,
) -> Option<u8> {
    match (mode, operand) {
        (AddressingMode::Immediate, Operand::Byte(value)) => Some(value),
        _ => effective_address(mode, operand, registers, memory).map(|addr| memory.read(addr)),
    }
}
