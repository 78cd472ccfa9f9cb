//! The static instruction descriptor table: opcode byte -> mnemonic,
//! addressing mode, and encoded length.
//!
//! This mirrors the 6502's full opcode map one-for-one, including the
//! ~105 encodings no legal instruction occupies (`Mnemonic::Unknown`,
//! `AddressingMode::Unknown`, size 0). Illegal/undocumented opcodes are
//! out of scope; they all resolve to `Unknown` here rather than to their
//! informally documented behavior.

/// 6502 instruction mnemonics, plus `Unknown` for unassigned opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Unknown,
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// The eleven addressing modes plus `Implied`/`Accumulator`/`Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Unknown,
    Implied,
    Accumulator,
    Immediate,
    Zeropage,
    ZeropageX,
    ZeropageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

/// An immutable, process-wide record: one per possible opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Encoded length in bytes: 1 (implied/accumulator), 2, or 3. `0` for
    /// `Unknown`.
    pub size: u8,
}

const fn d(mnemonic: Mnemonic, mode: AddressingMode, size: u8) -> InstructionDescriptor {
    InstructionDescriptor { mnemonic, mode, size }
}

const UNKNOWN: InstructionDescriptor = d(Mnemonic::Unknown, AddressingMode::Unknown, 0);

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, Indirect, IndirectX,
    IndirectY, Relative, Zeropage, ZeropageX, ZeropageY,
};
use Mnemonic::*;

/// Static 256-entry opcode -> descriptor table, laid out in opcode order.
pub static INSTRUCTION_TABLE: [InstructionDescriptor; 256] = [
    // 0x00
    d(Brk, Implied, 1),
    d(Ora, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Ora, Zeropage, 2),
    d(Asl, Zeropage, 2),
    UNKNOWN,
    d(Php, Implied, 1),
    d(Ora, Immediate, 2),
    d(Asl, Accumulator, 1),
    UNKNOWN,
    UNKNOWN,
    d(Ora, Absolute, 3),
    d(Asl, Absolute, 3),
    UNKNOWN,
    // 0x10
    d(Bpl, Relative, 2),
    d(Ora, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Ora, ZeropageX, 2),
    d(Asl, ZeropageX, 2),
    UNKNOWN,
    d(Clc, Implied, 1),
    d(Ora, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Ora, AbsoluteX, 3),
    d(Asl, AbsoluteX, 3),
    UNKNOWN,
    // 0x20
    d(Jsr, Absolute, 3),
    d(And, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    d(Bit, Zeropage, 2),
    d(And, Zeropage, 2),
    d(Rol, Zeropage, 2),
    UNKNOWN,
    d(Plp, Implied, 1),
    d(And, Immediate, 2),
    d(Rol, Accumulator, 1),
    UNKNOWN,
    d(Bit, Absolute, 3),
    d(And, Absolute, 3),
    d(Rol, Absolute, 3),
    UNKNOWN,
    // 0x30
    d(Bmi, Relative, 2),
    d(And, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(And, ZeropageX, 2),
    d(Rol, ZeropageX, 2),
    UNKNOWN,
    d(Sec, Implied, 1),
    d(And, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(And, AbsoluteX, 3),
    d(Rol, AbsoluteX, 3),
    UNKNOWN,
    // 0x40
    d(Rti, Implied, 1),
    d(Eor, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Eor, Zeropage, 2),
    d(Lsr, Zeropage, 2),
    UNKNOWN,
    d(Pha, Implied, 1),
    d(Eor, Immediate, 2),
    d(Lsr, Accumulator, 1),
    UNKNOWN,
    d(Jmp, Absolute, 3),
    d(Eor, Absolute, 3),
    d(Lsr, Absolute, 3),
    UNKNOWN,
    // 0x50
    d(Bvc, Relative, 2),
    d(Eor, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Eor, ZeropageX, 2),
    d(Lsr, ZeropageX, 2),
    UNKNOWN,
    d(Cli, Implied, 1),
    d(Eor, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Eor, AbsoluteX, 3),
    d(Lsr, AbsoluteX, 3),
    UNKNOWN,
    // 0x60
    d(Rts, Implied, 1),
    d(Adc, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Adc, Zeropage, 2),
    d(Ror, Zeropage, 2),
    UNKNOWN,
    d(Pla, Implied, 1),
    d(Adc, Immediate, 2),
    d(Ror, Accumulator, 1),
    UNKNOWN,
    d(Jmp, Indirect, 3),
    d(Adc, Absolute, 3),
    d(Ror, Absolute, 3),
    UNKNOWN,
    // 0x70
    d(Bvs, Relative, 2),
    d(Adc, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Adc, ZeropageX, 2),
    d(Ror, ZeropageX, 2),
    UNKNOWN,
    d(Sei, Implied, 1),
    d(Adc, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Adc, AbsoluteX, 3),
    d(Ror, AbsoluteX, 3),
    UNKNOWN,
    // 0x80
    UNKNOWN,
    d(Sta, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    d(Sty, Zeropage, 2),
    d(Sta, Zeropage, 2),
    d(Stx, Zeropage, 2),
    UNKNOWN,
    d(Dey, Implied, 1),
    UNKNOWN,
    d(Txa, Implied, 1),
    UNKNOWN,
    d(Sty, Absolute, 3),
    d(Sta, Absolute, 3),
    d(Stx, Absolute, 3),
    UNKNOWN,
    // 0x90
    d(Bcc, Relative, 2),
    d(Sta, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    d(Sty, ZeropageX, 2),
    d(Sta, ZeropageX, 2),
    d(Stx, ZeropageY, 2),
    UNKNOWN,
    d(Tya, Implied, 1),
    d(Sta, AbsoluteY, 3),
    d(Txs, Implied, 1),
    UNKNOWN,
    UNKNOWN,
    d(Sta, AbsoluteX, 3),
    UNKNOWN,
    UNKNOWN,
    // 0xA0
    d(Ldy, Immediate, 2),
    d(Lda, IndirectX, 2),
    d(Ldx, Immediate, 2),
    UNKNOWN,
    d(Ldy, Zeropage, 2),
    d(Lda, Zeropage, 2),
    d(Ldx, Zeropage, 2),
    UNKNOWN,
    d(Tay, Implied, 1),
    d(Lda, Immediate, 2),
    d(Tax, Implied, 1),
    UNKNOWN,
    d(Ldy, Absolute, 3),
    d(Lda, Absolute, 3),
    d(Ldx, Absolute, 3),
    UNKNOWN,
    // 0xB0
    d(Bcs, Relative, 2),
    d(Lda, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    d(Ldy, ZeropageX, 2),
    d(Lda, ZeropageX, 2),
    d(Ldx, ZeropageY, 2),
    UNKNOWN,
    d(Clv, Implied, 1),
    d(Lda, AbsoluteY, 3),
    d(Tsx, Implied, 1),
    UNKNOWN,
    d(Ldy, AbsoluteX, 3),
    d(Lda, AbsoluteX, 3),
    d(Ldx, AbsoluteY, 3),
    UNKNOWN,
    // 0xC0
    d(Cpy, Immediate, 2),
    d(Cmp, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    d(Cpy, Zeropage, 2),
    d(Cmp, Zeropage, 2),
    d(Dec, Zeropage, 2),
    UNKNOWN,
    d(Iny, Implied, 1),
    d(Cmp, Immediate, 2),
    d(Dex, Implied, 1),
    UNKNOWN,
    d(Cpy, Absolute, 3),
    d(Cmp, Absolute, 3),
    d(Dec, Absolute, 3),
    UNKNOWN,
    // 0xD0
    d(Bne, Relative, 2),
    d(Cmp, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Cmp, ZeropageX, 2),
    d(Dec, ZeropageX, 2),
    UNKNOWN,
    d(Cld, Implied, 1),
    d(Cmp, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Cmp, AbsoluteX, 3),
    d(Dec, AbsoluteX, 3),
    UNKNOWN,
    // 0xE0
    d(Cpx, Immediate, 2),
    d(Sbc, IndirectX, 2),
    UNKNOWN,
    UNKNOWN,
    d(Cpx, Zeropage, 2),
    d(Sbc, Zeropage, 2),
    d(Inc, Zeropage, 2),
    UNKNOWN,
    d(Inx, Implied, 1),
    d(Sbc, Immediate, 2),
    d(Nop, Implied, 1),
    UNKNOWN,
    d(Cpx, Absolute, 3),
    d(Sbc, Absolute, 3),
    d(Inc, Absolute, 3),
    UNKNOWN,
    // 0xF0
    d(Beq, Relative, 2),
    d(Sbc, IndirectY, 2),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Sbc, ZeropageX, 2),
    d(Inc, ZeropageX, 2),
    UNKNOWN,
    d(Sed, Implied, 1),
    d(Sbc, AbsoluteY, 3),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    d(Sbc, AbsoluteX, 3),
    d(Inc, AbsoluteX, 3),
    UNKNOWN,
];

/// Look up the descriptor for `opcode`.
#[inline]
pub fn describe(opcode: u8) -> InstructionDescriptor {
    INSTRUCTION_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_256_entries() {
        assert_eq!(INSTRUCTION_TABLE.len(), 256);
    }

    #[test]
    fn known_opcodes_decode_correctly() {
        assert_eq!(describe(0xA9), d(Lda, Immediate, 2));
        assert_eq!(describe(0x00), d(Brk, Implied, 1));
        assert_eq!(describe(0x6C), d(Jmp, Indirect, 3));
        assert_eq!(describe(0x0A), d(Asl, Accumulator, 1));
        assert_eq!(describe(0x91), d(Sta, IndirectY, 2));
    }

    #[test]
    fn unassigned_opcodes_are_unknown() {
        assert_eq!(describe(0x02), UNKNOWN);
        assert_eq!(describe(0xFF), UNKNOWN);
    }

    #[test]
    fn exactly_56_legal_opcodes_are_assigned() {
        let assigned = INSTRUCTION_TABLE.iter().filter(|e| e.mnemonic != Unknown).count();
        let unique_mnemonics: std::collections::HashSet<_> = INSTRUCTION_TABLE
            .iter()
            .filter(|e| e.mnemonic != Unknown)
            .map(|e| std::mem::discriminant(&e.mnemonic))
            .collect();
        assert_eq!(unique_mnemonics.len(), 56);
        assert!(assigned >= 56);
    }
}
