//! Load / store / transfer family: LDA, LDX, LDY, STA, STX, STY plus the
//! six register-to-register transfers.

use crate::bus::Bus;
use crate::cpu::execute::{ldx, ldy, lda, tax, tay, tsx, txa, txs, tya};
use crate::cpu::instruction::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::resolve::Operand;

use super::read_operand;

/// Handle one load/store/transfer mnemonic. Returns `true` if recognized,
/// plus whether this load incurred a page-cross read penalty (loads only;
/// stores never do, even when their effective address crossed a page).
pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    page_crossed: bool,
    cpu: &mut C,
    bus: &mut Bus,
) -> Option<u32> {
    use Mnemonic::*;
    match mnemonic {
        Lda => {
            let v = read_operand(bus, operand);
            lda(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Ldx => {
            let v = read_operand(bus, operand);
            ldx(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Ldy => {
            let v = read_operand(bus, operand);
            ldy(cpu, v);
            Some(if page_crossed { 1 } else { 0 })
        }
        Sta => {
            if let Operand::Address(addr) = operand {
                bus.write(addr, cpu.a());
            }
            Some(0)
        }
        Stx => {
            if let Operand::Address(addr) = operand {
                bus.write(addr, cpu.x());
            }
            Some(0)
        }
        Sty => {
            if let Operand::Address(addr) = operand {
                bus.write(addr, cpu.y());
            }
            Some(0)
        }
        Tax => {
            tax(cpu);
            Some(0)
        }
        Tay => {
            tay(cpu);
            Some(0)
        }
        Tsx => {
            tsx(cpu);
            Some(0)
        }
        Txa => {
            txa(cpu);
            Some(0)
        }
        Txs => {
            txs(cpu);
            Some(0)
        }
        Tya => {
            tya(cpu);
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
    fn lda_immediate_sets_flags() {
        let mut cpu = CpuState::new();
        let mut b = bus();
        let extra = handle(Mnemonic::Lda, Operand::Value(0x00), false, &mut cpu, &mut b);
        assert_eq!(extra, Some(0));
        assert_eq!(cpu.a(), 0x00);
    }

    #[test]
    fn sta_ignores_page_cross_penalty() {
        let mut cpu = CpuState::new();
        cpu.set_a(0x42);
        let mut b = bus();
        let extra = handle(Mnemonic::Sta, Operand::Address(0x1234), true, &mut cpu, &mut b);
        assert_eq!(extra, Some(0));
        assert_eq!(b.read(0x1234), 0x42);
    }
}
