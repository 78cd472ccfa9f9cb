//! Arithmetic family: ADC, SBC, and the register increment/decrement pair
//! that doesn't touch memory (INX/INY/DEX/DEY; memory INC/DEC live in
//! [`super::rmw`]).

use crate::bus::Bus;
use crate::cpu::execute::{adc, dex, dey, inx, iny, sbc};
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
        Adc => {
            let v = read_operand(bus, operand);
            adc(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Sbc => {
            let v = read_operand(bus, operand);
            sbc(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Inx => {
            inx(cpu);
            Some(0)
        }
        Iny => {
            iny(cpu);
            Some(0)
        }
        Dex => {
            dex(cpu);
            Some(0)
        }
        Dey => {
            dey(cpu);
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
    fn adc_adds_with_carry_in() {
        let mut cpu = CpuState::new();
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10)), 0x0000, 0x000F).unwrap();
        cpu.set_a(1);
        handle(Mnemonic::Adc, Operand::Value(1), false, &mut cpu, &mut b);
        assert_eq!(cpu.a(), 2);
    }
}
