//! Conditional branch family: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! Each tests a single status flag and delegates to
//! [`crate::cpu::execute::branch_to`] for the shared taken/page-cross
//! cycle accounting. `operand` is already the resolved target address
//! ([`crate::cpu::resolve`] applies the relative displacement against
//! the post-instruction PC before dispatch ever sees it).

use crate::bus::Bus;
use crate::cpu::execute::branch_to;
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    _bus: &mut Bus,
) -> Option<u32> {
    let Operand::Address(target) = operand else {
        return None;
    };
    use Mnemonic::*;
    let take = match mnemonic {
        Bcc => !cpu.is_flag_set(CARRY),
        Bcs => cpu.is_flag_set(CARRY),
        Beq => cpu.is_flag_set(ZERO),
        Bne => !cpu.is_flag_set(ZERO),
        Bmi => cpu.is_flag_set(NEGATIVE),
        Bpl => !cpu.is_flag_set(NEGATIVE),
        Bvc => !cpu.is_flag_set(OVERFLOW),
        Bvs => cpu.is_flag_set(OVERFLOW),
        _ => return None,
    };
    Some(branch_to(cpu, target, take))
}
