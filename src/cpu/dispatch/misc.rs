//! Miscellaneous family: flag sets/clears, the explicit stack
//! instructions (PHA/PHP/PLA/PLP), and NOP.

use crate::bus::Bus;
use crate::cpu::execute::{pha, php, pla, plp};
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

pub(super) fn handle<C: CpuRegs>(mnemonic: Mnemonic, cpu: &mut C, bus: &mut Bus) -> Option<u32> {
    use Mnemonic::*;
    match mnemonic {
        Clc => {
            cpu.assign_flag(CARRY, false);
            Some(0)
        }
        Sec => {
            cpu.assign_flag(CARRY, true);
            Some(0)
        }
        Cld => {
            cpu.assign_flag(DECIMAL, false);
            Some(0)
        }
        Sed => {
            cpu.assign_flag(DECIMAL, true);
            Some(0)
        }
        Cli => {
            cpu.assign_flag(IRQ_DISABLE, false);
            Some(0)
        }
        Sei => {
            cpu.assign_flag(IRQ_DISABLE, true);
            Some(0)
        }
        Clv => {
            cpu.assign_flag(OVERFLOW, false);
            Some(0)
        }
        Pha => {
            pha(cpu, bus);
            Some(0)
        }
        Php => {
            php(cpu, bus);
            Some(0)
        }
        Pla => {
            pla(cpu, bus);
            Some(0)
        }
        Plp => {
            plp(cpu, bus);
            Some(0)
        }
        Nop => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::test_support::Ram;

    #[test]
    fn sec_then_clc() {
        let mut cpu = CpuState::new();
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10000)), 0x0000, 0xFFFF).unwrap();
        handle(Mnemonic::Sec, &mut cpu, &mut b);
        assert!(cpu.is_flag_set(CARRY));
        handle(Mnemonic::Clc, &mut cpu, &mut b);
        assert!(!cpu.is_flag_set(CARRY));
    }

    #[test]
    fn pha_then_pla_round_trips_accumulator() {
        let mut cpu = CpuState::new();
        cpu.set_sp(0xFF);
        cpu.set_a(0x77);
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10000)), 0x0000, 0xFFFF).unwrap();
        handle(Mnemonic::Pha, &mut cpu, &mut b);
        cpu.set_a(0x00);
        handle(Mnemonic::Pla, &mut cpu, &mut b);
        assert_eq!(cpu.a(), 0x77);
    }
}
