//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! # Flag Behavior
//!
//! - Loads: Z set if the loaded value is 0, N set if bit 7 is set
//! - Stores: No flags affected

use crate::addressing::{absolute_indexed, indexed_indirect, indirect_indexed, zero_page_indexed};
use crate::{MemoryBus, Register, Registers, CPU};

/// Writes `value` into `target` and evaluates N and Z from it.
pub(crate) fn load(registers: &mut Registers, target: Register, value: u8) {
    let value = registers.set(target, value);
    registers.check_negative(value);
    registers.check_zero(value);
}

/// Writes `source` to memory at `addr`. Flags are untouched.
pub(crate) fn store<M: MemoryBus>(registers: &Registers, memory: &mut M, source: Register, addr: u16) {
    memory.write(addr, registers.get(source));
}

impl<M: MemoryBus> CPU<M> {
    fn load_from(&mut self, target: Register, addr: u16) {
        let value = self.memory.read(addr);
        load(&mut self.registers, target, value);
    }

    fn store_to(&mut self, source: Register, addr: u16) {
        store(&self.registers, &mut self.memory, source, addr);
    }

    // ========== LDA ==========

    /// `LDA #nn` (0xA9)
    pub fn lda_immediate(&mut self, value: u8) {
        load(&mut self.registers, Register::A, value);
    }

    /// `LDA $nn` (0xA5)
    pub fn lda_zero_page(&mut self, zp: u8) {
        self.load_from(Register::A, zp as u16);
    }

    /// `LDA $nn,X` (0xB5)
    pub fn lda_zero_page_x(&mut self, zp: u8) {
        self.load_from(Register::A, zero_page_indexed(zp, self.registers.x));
    }

    /// `LDA $nnnn` (0xAD)
    pub fn lda_absolute(&mut self, addr: u16) {
        self.load_from(Register::A, addr);
    }

    /// `LDA $nnnn,X` (0xBD)
    pub fn lda_absolute_x(&mut self, base: u16) {
        self.load_from(Register::A, absolute_indexed(base, self.registers.x));
    }

    /// `LDA $nnnn,Y` (0xB9)
    pub fn lda_absolute_y(&mut self, base: u16) {
        self.load_from(Register::A, absolute_indexed(base, self.registers.y));
    }

    /// `LDA ($nn,X)` (0xA1)
    pub fn lda_indirect_x(&mut self, zp: u8) {
        let addr = indexed_indirect(&self.memory, zp, self.registers.x);
        self.load_from(Register::A, addr);
    }

    /// `LDA ($nn),Y` (0xB1)
    pub fn lda_indirect_y(&mut self, zp: u8) {
        let addr = indirect_indexed(&self.memory, zp, self.registers.y);
        self.load_from(Register::A, addr);
    }

    // ========== LDX ==========

    /// `LDX #nn` (0xA2)
    pub fn ldx_immediate(&mut self, value: u8) {
        load(&mut self.registers, Register::X, value);
    }

    /// `LDX $nn` (0xA6)
    pub fn ldx_zero_page(&mut self, zp: u8) {
        self.load_from(Register::X, zp as u16);
    }

    /// `LDX $nn,Y` (0xB6)
    pub fn ldx_zero_page_y(&mut self, zp: u8) {
        self.load_from(Register::X, zero_page_indexed(zp, self.registers.y));
    }

    /// `LDX $nnnn` (0xAE)
    pub fn ldx_absolute(&mut self, addr: u16) {
        self.load_from(Register::X, addr);
    }

    /// `LDX $nnnn,Y` (0xBE)
    pub fn ldx_absolute_y(&mut self, base: u16) {
        self.load_from(Register::X, absolute_indexed(base, self.registers.y));
    }

    // ========== LDY ==========

    /// `LDY #nn` (0xA0)
    pub fn ldy_immediate(&mut self, value: u8) {
        load(&mut self.registers, Register::Y, value);
    }

    /// `LDY $nn` (0xA4)
    pub fn ldy_zero_page(&mut self, zp: u8) {
        self.load_from(Register::Y, zp as u16);
    }

    /// `LDY $nn,X` (0xB4)
    pub fn ldy_zero_page_x(&mut self, zp: u8) {
        self.load_from(Register::Y, zero_page_indexed(zp, self.registers.x));
    }

    /// `LDY $nnnn` (0xAC)
    pub fn ldy_absolute(&mut self, addr: u16) {
        self.load_from(Register::Y, addr);
    }

    /// `LDY $nnnn,X` (0xBC)
    pub fn ldy_absolute_x(&mut self, base: u16) {
        self.load_from(Register::Y, absolute_indexed(base, self.registers.x));
    }

    // ========== STA ==========

    /// `STA $nn` (0x85)
    pub fn sta_zero_page(&mut self, zp: u8) {
        self.store_to(Register::A, zp as u16);
    }

    /// `STA $nn,X` (0x95)
    pub fn sta_zero_page_x(&mut self, zp: u8) {
        self.store_to(Register::A, zero_page_indexed(zp, self.registers.x));
    }

    /// `STA $nnnn` (0x8D)
    pub fn sta_absolute(&mut self, addr: u16) {
        self.store_to(Register::A, addr);
    }

    /// `STA $nnnn,X` (0x9D)
    pub fn sta_absolute_x(&mut self, base: u16) {
        self.store_to(Register::A, absolute_indexed(base, self.registers.x));
    }

    /// `STA $nnnn,Y` (0x99)
    pub fn sta_absolute_y(&mut self, base: u16) {
        self.store_to(Register::A, absolute_indexed(base, self.registers.y));
    }

    /// `STA ($nn,X)` (0x81)
    pub fn sta_indirect_x(&mut self, zp: u8) {
        let addr = indexed_indirect(&self.memory, zp, self.registers.x);
        self.store_to(Register::A, addr);
    }

    /// `STA ($nn),Y` (0x91)
    ///
    /// Same Y-indexed indirect address as `LDA ($nn),Y`.
    pub fn sta_indirect_y(&mut self, zp: u8) {
        let addr = indirect_indexed(&self.memory, zp, self.registers.y);
        self.store_to(Register::A, addr);
    }

    // ========== STX ==========

    /// `STX $nn` (0x86)
    pub fn stx_zero_page(&mut self, zp: u8) {
        self.store_to(Register::X, zp as u16);
    }

    /// `STX $nn,Y` (0x96)
    pub fn stx_zero_page_y(&mut self, zp: u8) {
        self.store_to(Register::X, zero_page_indexed(zp, self.registers.y));
    }

    /// `STX $nnnn` (0x8E)
    pub fn stx_absolute(&mut self, addr: u16) {
        self.store_to(Register::X, addr);
    }

    // ========== STY ==========

    /// `STY $nn` (0x84)
    pub fn sty_zero_page(&mut self, zp: u8) {
        self.store_to(Register::Y, zp as u16);
    }

    /// `STY $nn,X` (0x94)
    pub fn sty_zero_page_x(&mut self, zp: u8) {
        self.store_to(Register::Y, zero_page_indexed(zp, self.registers.x));
    }

    /// `STY $nnnn` (0x8C)
    pub fn sty_absolute(&mut self, addr: u16) {
        self.store_to(Register::Y, addr);
    }
}
