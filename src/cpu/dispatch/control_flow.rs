//! Control-flow family: JMP, JSR, RTS, RTI, BRK.
//!
//! JSR/RTS follow the 6502 convention of pushing/pulling the target
//! address minus one: JSR pushes the address of its own last byte, RTS
//! adds one back after popping. BRK pushes a return address two bytes
//! past the opcode (the conventional skipped-padding-byte behavior),
//! sets BREAK in the pushed status, and loads the vector at `$FFFE`.

use crate::bus::Bus;
use crate::cpu::execute::{plp, push_status_with_break, push_word, pop_word};
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;
use crate::cpu::state::IRQ_DISABLE;

/// BRK/IRQ vector.
const IRQ_BRK_VECTOR: u16 = 0xFFFE;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
) -> Option<u32> {
    use Mnemonic::*;
    match mnemonic {
        Jmp => {
            if let Operand::Address(target) = operand {
                cpu.set_pc(target);
            }
            Some(0)
        }
        Jsr => {
            if let Operand::Address(target) = operand {
                let return_to = cpu.pc().wrapping_sub(1);
                push_word(cpu, bus, return_to);
                cpu.set_pc(target);
            }
            Some(0)
        }
        Rts => {
            let addr = pop_word(cpu, bus);
            cpu.set_pc(addr.wrapping_add(1));
            Some(0)
        }
        Rti => {
            plp(cpu, bus);
            let addr = pop_word(cpu, bus);
            cpu.set_pc(addr);
            Some(0)
        }
        Brk => {
            let return_to = cpu.pc().wrapping_add(1);
            push_word(cpu, bus, return_to);
            push_status_with_break(cpu, bus, true);
            cpu.assign_flag(IRQ_DISABLE, true);
            let vector = bus.read_word(IRQ_BRK_VECTOR);
            cpu.set_pc(vector);
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

    fn bus() -> Bus {
        let mut b = Bus::new();
        b.attach(Box::new(Ram::new(0x10000)), 0x0000, 0xFFFF).unwrap();
        b
    }

    #[test]
    fn jsr_then_rts_round_trips_pc() {
        let mut cpu = CpuState::new();
        cpu.set_sp(0xFF);
        cpu.set_pc(0x8003); // PC already advanced past the 3-byte JSR
        let mut b = bus();
        handle(Mnemonic::Jsr, Operand::Address(0x9000), &mut cpu, &mut b);
        assert_eq!(cpu.pc(), 0x9000);
        handle(Mnemonic::Rts, Operand::None, &mut cpu, &mut b);
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn jmp_sets_pc_directly() {
        let mut cpu = CpuState::new();
        let mut b = bus();
        handle(Mnemonic::Jmp, Operand::Address(0xC000), &mut cpu, &mut b);
        assert_eq!(cpu.pc(), 0xC000);
    }

    #[test]
    fn brk_loads_vector_and_sets_interrupt_disable() {
        let mut cpu = CpuState::new();
        cpu.set_sp(0xFF);
        cpu.set_pc(0x8001);
        let mut b = bus();
        b.write(0xFFFE, 0x00);
        b.write(0xFFFF, 0x90);
        handle(Mnemonic::Brk, Operand::None, &mut cpu, &mut b);
        assert_eq!(cpu.pc(), 0x9000);
        assert!(cpu.is_flag_set(IRQ_DISABLE));
    }
}
