//! # Instruction Decoding
//!
//! Splits a byte stream into opcode and operand using the opcode table, and
//! renders decoded instructions in standard 6502 assembly syntax for trace
//! output.

use std::fmt;

use crate::{AddressingMode, Error, OpcodeMetadata, Operand, Result, OPCODE_TABLE};

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Address the opcode byte was read from
    pub address: u16,

    /// Opcode byte
    pub opcode: u8,

    /// Operand bytes, sized by the addressing mode
    pub operand: Operand,
}

impl Instruction {
    /// Decodes the instruction at the start of `bytes`.
    ///
    /// Undocumented opcodes decode as one-byte instructions; whether an
    /// opcode can be executed is the dispatcher's decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{Instruction, Operand};
    ///
    /// let instr = Instruction::decode(&[0x8D, 0x00, 0x80], 0x0600).unwrap();
    /// assert_eq!(instr.opcode, 0x8D);
    /// assert_eq!(instr.operand, Operand::Word(0x8000));
    /// assert_eq!(instr.to_string(), "STA $8000");
    /// ```
    pub fn decode(bytes: &[u8], address: u16) -> Result<Self> {
        let (&opcode, rest) = bytes.split_first().ok_or(Error::EmptyInstruction)?;
        let metadata = &OPCODE_TABLE[opcode as usize];
        let needed = metadata.size_bytes as usize;

        if bytes.len() < needed {
            return Err(Error::TruncatedInstruction {
                opcode,
                needed,
                available: bytes.len(),
            });
        }

        Ok(Self {
            address,
            opcode,
            operand: Operand::from_bytes(&rest[..needed - 1]),
        })
    }

    /// Returns the opcode table entry for this instruction.
    pub fn metadata(&self) -> &'static OpcodeMetadata {
        &OPCODE_TABLE[self.opcode as usize]
    }

    /// Total size in bytes, opcode included.
    pub fn size(&self) -> u16 {
        self.metadata().size_bytes as u16
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;

        let metadata = self.metadata();
        if !metadata.is_documented() {
            return write!(f, ".byte ${:02X}", self.opcode);
        }

        f.write_str(metadata.mnemonic)?;
        match (metadata.addressing_mode, self.operand) {
            (Implicit, _) => Ok(()),
            (Accumulator, _) => f.write_str(" A"),
            (Immediate, Operand::Byte(value)) => write!(f, " #${value:02X}"),
            (ZeroPage, Operand::Byte(zp)) => write!(f, " ${zp:02X}"),
            (ZeroPageX, Operand::Byte(zp)) => write!(f, " ${zp:02X},X"),
            (ZeroPageY, Operand::Byte(zp)) => write!(f, " ${zp:02X},Y"),
            (Relative, Operand::Byte(offset)) => {
                // Target is relative to the next instruction
                let target = self.address.wrapping_add(2).wrapping_add(offset as i8 as u16);
                write!(f, " ${target:04X}")
            }
            (Absolute, Operand::Word(addr)) => write!(f, " ${addr:04X}"),
            (AbsoluteX, Operand::Word(addr)) => write!(f, " ${addr:04X},X"),
            (AbsoluteY, Operand::Word(addr)) => write!(f, " ${addr:04X},Y"),
            (Indirect, Operand::Word(addr)) => write!(f, " (${addr:04X})"),
            (IndirectX, Operand::Byte(zp)) => write!(f, " (${zp:02X},X)"),
            (IndirectY, Operand::Byte(zp)) => write!(f, " (${zp:02X}),Y"),
            (_, operand) => write!(f, " {operand}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(bytes: &[u8]) -> String {
        Instruction::decode(bytes, 0x8000).unwrap().to_string()
    }

    #[test]
    fn test_format_load_store_modes() {
        assert_eq!(format(&[0xA9, 0x42]), "LDA #$42");
        assert_eq!(format(&[0xB5, 0x0B]), "LDA $0B,X");
        assert_eq!(format(&[0xB6, 0x10]), "LDX $10,Y");
        assert_eq!(format(&[0xBD, 0x34, 0x12]), "LDA $1234,X");
        assert_eq!(format(&[0x99, 0x00, 0x02]), "STA $0200,Y");
        assert_eq!(format(&[0x81, 0x20]), "STA ($20,X)");
        assert_eq!(format(&[0xB1, 0x20]), "LDA ($20),Y");
        assert_eq!(format(&[0x9A]), "TXS");
    }

    #[test]
    fn test_format_other_modes() {
        assert_eq!(format(&[0x0A]), "ASL A");
        assert_eq!(format(&[0x6C, 0xFC, 0xFF]), "JMP ($FFFC)");
        // 0x8000 + 2 - 4
        assert_eq!(format(&[0xD0, 0xFC]), "BNE $7FFE");
    }

    #[test]
    fn test_format_illegal_opcode() {
        assert_eq!(format(&[0xFF]), ".byte $FF");
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let instr = Instruction::decode(&[0xA5, 0x10, 0xEA, 0xEA], 0x0000).unwrap();
        assert_eq!(instr.operand, Operand::Byte(0x10));
        assert_eq!(instr.size(), 2);
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            Instruction::decode(&[0xAD, 0x00], 0x0000),
            Err(Error::TruncatedInstruction {
                opcode: 0xAD,
                needed: 3,
                available: 2,
            })
        );
        assert_eq!(
            Instruction::decode(&[], 0x0000),
            Err(Error::EmptyInstruction)
        );
    }
}
