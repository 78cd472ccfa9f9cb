//! Logical family: AND, ORA, EOR, BIT, plus the accumulator and memory
//! shift/rotate instructions (ASL, LSR, ROL, ROR — accumulator form only;
//! the memory form lives in [`super::rmw`]).

use crate::bus::Bus;
use crate::cpu::execute::{and, asl_acc, bit, eor, lsr_acc, ora, rol_acc, ror_acc};
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;

use super::read_operand;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    page_crossed: bool,
    cpu: &mut C,
    bus: &mut Bus,
) -> Option<u32> {
    use Mnemonic::*;
    match mnemonic {
        And => {
            let v = read_operand(bus, operand);
            and(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Ora => {
            let v = read_operand(bus, operand);
            ora(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Eor => {
            let v = read_operand(bus, operand);
            eor(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Bit => {
            let v = read_operand(bus, operand);
            bit(cpu, v);
            Some(0)
        }
        Asl if operand == Operand::None => {
            asl_acc(cpu);
            Some(0)
        }
        Lsr if operand == Operand::None => {
            lsr_acc(cpu);
            Some(0)
        }
        Rol if operand == Operand::None => {
            rol_acc(cpu);
            Some(0)
        }
        Ror if operand == Operand::None => {
            ror_acc(cpu);
            Some(0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::test_support::Ram;

    #[test]
    fn and_clears_bits() {
        let mut cpu = CpuState::new();
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10)), 0x0000, 0x000F).unwrap();
        cpu.set_a(0xFF);
        handle(Mnemonic::And, Operand::Value(0x0F), false, &mut cpu, &mut b);
        assert_eq!(cpu.a(), 0x0F);
    }

    #[test]
    fn asl_accumulator_form_matched_by_none_operand() {
        let mut cpu = CpuState::new();
        let mut b = Bus::new();
        cpu.set_a(0x81);
        let r = handle(Mnemonic::Asl, Operand::None, false, &mut cpu, &mut b);
        assert_eq!(r, Some(0));
        assert_eq!(cpu.a(), 0x02);
    }
}
