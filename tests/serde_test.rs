//! Snapshot round trips through the optional `serde` feature.
//!
//! Run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use mos6502_core::{Operand, Operation, Register, Registers, OPCODE_TABLE};

#[test]
fn test_registers_round_trip() {
    let mut registers = Registers::power_on();
    registers.set_a(0x42);
    registers.set_x(0x80);
    registers.set_y(0x01);
    registers.set_sp(0xF0);
    registers.set_pc(0xC123);
    registers.set_flag_c(true);
    registers.set_flag_n(true);

    let json = serde_json::to_string(&registers).unwrap();
    let restored: Registers = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, registers);
    assert_eq!(restored.status(), registers.status());
}

#[test]
fn test_operation_round_trip() {
    let operations = [
        Operation::Load(Register::A),
        Operation::Store(Register::X),
        Operation::Transfer {
            from: Register::X,
            to: Register::SP,
        },
    ];

    for operation in operations {
        let json = serde_json::to_string(&operation).unwrap();
        let restored: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, operation, "{json}");
    }
}

#[test]
fn test_operand_round_trip() {
    for operand in [Operand::None, Operand::Byte(0xFF), Operand::Word(0x1234)] {
        let json = serde_json::to_string(&operand).unwrap();
        let restored: Operand = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, operand, "{json}");
    }
}

#[test]
fn test_opcode_metadata_serializes() {
    let value = serde_json::to_value(OPCODE_TABLE[0x91]).unwrap();

    assert_eq!(value["mnemonic"], "STA");
    assert_eq!(value["addressing_mode"], "IndirectY");
    assert_eq!(value["size_bytes"], 2);
    assert_eq!(value["operation"]["Store"], "A");
}
