//! Compare family: CMP, CPX, CPY. All three share the same semantics
//! against a different register, never touching flags beyond C/Z/N.

use crate::bus::Bus;
use crate::cpu::execute::cmp_generic;
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
        Cmp => {
            let v = read_operand(bus, operand);
            let a = cpu.a();
            cmp_generic(cpu, a, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Cpx => {
            let v = read_operand(bus, operand);
            let x = cpu.x();
            cmp_generic(cpu, x, v);
            Some(0)
        }
        Cpy => {
            let v = read_operand(bus, operand);
            let y = cpu.y();
            cmp_generic(cpu, y, v);
            Some(0)
        }
        _ => None,
    }
}
