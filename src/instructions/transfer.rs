//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer updates Z and N from the copied value except TXS, which
//! affects no flags.

use crate::{MemoryBus, Register, Registers, CPU};

/// Copies `from` into `to`.
pub(crate) fn transfer(registers: &mut Registers, from: Register, to: Register) {
    let value = registers.set(to, registers.get(from));

    // The stack pointer is not a result register
    if to != Register::SP {
        registers.check_negative(value);
        registers.check_zero(value);
    }
}

impl<M: MemoryBus> CPU<M> {
    /// `TAX` (0xAA): X = A, updates Z and N.
    pub fn tax(&mut self) {
        transfer(&mut self.registers, Register::A, Register::X);
    }

    /// `TAY` (0xA8): Y = A, updates Z and N.
    pub fn tay(&mut self) {
        transfer(&mut self.registers, Register::A, Register::Y);
    }

    /// `TXA` (0x8A): A = X, updates Z and N.
    pub fn txa(&mut self) {
        transfer(&mut self.registers, Register::X, Register::A);
    }

    /// `TYA` (0x98): A = Y, updates Z and N.
    pub fn tya(&mut self) {
        transfer(&mut self.registers, Register::Y, Register::A);
    }

    /// `TSX` (0xBA): X = SP, updates Z and N.
    pub fn tsx(&mut self) {
        transfer(&mut self.registers, Register::SP, Register::X);
    }

    /// `TXS` (0x9A): SP = X. No flags affected.
    pub fn txs(&mut self) {
        transfer(&mut self.registers, Register::X, Register::SP);
    }
}
