//! Read-modify-write memory family: the memory forms of ASL/LSR/ROL/ROR
//! and the memory INC/DEC. The accumulator shift/rotate forms are
//! dispatched from [`super::logical`] instead, since they share no
//! bus access with this family.

use crate::bus::Bus;
use crate::cpu::execute::{asl_mem, dec_mem, inc_mem, lsr_mem, rol_mem, ror_mem};
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
) -> Option<u32> {
    let Operand::Address(addr) = operand else {
        return None;
    };
    use Mnemonic::*;
    match mnemonic {
        Asl => {
            asl_mem(cpu, bus, addr);
            Some(0)
        }
        Lsr => {
            lsr_mem(cpu, bus, addr);
            Some(0)
        }
        Rol => {
            rol_mem(cpu, bus, addr);
            Some(0)
        }
        Ror => {
            ror_mem(cpu, bus, addr);
            Some(0)
        }
        Inc => {
            inc_mem(cpu, bus, addr);
            Some(0)
        }
        Dec => {
            dec_mem(cpu, bus, addr);
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
    fn inc_mem_wraps_to_zero() {
        let mut cpu = CpuState::new();
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10)), 0x0000, 0x000F).unwrap();
        b.write(0x0005, 0xFF);
        handle(Mnemonic::Inc, Operand::Address(0x0005), &mut cpu, &mut b);
        assert_eq!(b.read(0x0005), 0x00);
    }
}
