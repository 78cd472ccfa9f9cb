//! Dispatch: routes a decoded-and-resolved instruction to the family
//! handler that implements its semantics.
//!
//! Each family module mirrors a natural grouping of the instruction set
//! (loads/stores, arithmetic, logical/shifts, compares, RMW memory,
//! branches, control flow, misc) rather than one 56-arm match — easier to
//! audit against the instruction set's own grouping, and easier to find
//! the handler for a given mnemonic.

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod load_store;
mod logical;
mod misc;
mod rmw;

use crate::bus::Bus;
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;

/// Read the value a read-type instruction operates on: an immediate
/// value directly, or a byte fetched from a resolved address. Panics if
/// called with `Operand::None`, which would mean a family handler
/// misclassified an implied/accumulator-only mnemonic as read-type.
fn read_operand(bus: &mut Bus, operand: Operand) -> u8 {
    match operand {
        Operand::Value(v) => v,
        Operand::Address(addr) => bus.read(addr),
        Operand::None => unreachable!("read-type instruction resolved to no operand"),
    }
}

/// Dispatch `mnemonic` with its resolved `operand`. Returns the extra
/// cycles beyond the opcode's base count (page-cross or branch-taken
/// penalties), or `None` if no family recognizes the mnemonic — which
/// only happens for `Mnemonic::Unknown`, which callers should have
/// already filtered out.
pub(crate) fn dispatch<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    page_crossed: bool,
    cpu: &mut C,
    bus: &mut Bus,
) -> Option<u32> {
    load_store::handle(mnemonic, operand, page_crossed, cpu, bus)
        .or_else(|| arithmetic::handle(mnemonic, operand, page_crossed, cpu, bus))
        .or_else(|| logical::handle(mnemonic, operand, page_crossed, cpu, bus))
        .or_else(|| compare::handle(mnemonic, operand, page_crossed, cpu, bus))
        .or_else(|| rmw::handle(mnemonic, operand, cpu, bus))
        .or_else(|| branches::handle(mnemonic, operand, cpu, bus))
        .or_else(|| control_flow::handle(mnemonic, operand, cpu, bus))
        .or_else(|| misc::handle(mnemonic, cpu, bus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::test_support::Ram;

    fn bus() -> Bus {
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10000)), 0x0000, 0xFFFF).unwrap();
        b
    }

    #[test]
    fn dispatch_routes_across_families() {
        let mut cpu = CpuState::new();
        let mut b = bus();
        assert_eq!(dispatch(Mnemonic::Lda, Operand::Value(5), false, &mut cpu, &mut b), Some(0));
        assert_eq!(cpu.a(), 5);
        assert_eq!(dispatch(Mnemonic::Sec, Operand::None, false, &mut cpu, &mut b), Some(0));
        assert_eq!(dispatch(Mnemonic::Jmp, Operand::Address(0x1234), false, &mut cpu, &mut b), Some(0));
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn unknown_mnemonic_is_not_dispatched() {
        let mut cpu = CpuState::new();
        let mut b = bus();
        assert_eq!(dispatch(Mnemonic::Unknown, Operand::None, false, &mut cpu, &mut b), None);
    }
}
