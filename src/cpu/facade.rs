//! `Cpu`: the public façade wrapping [`CpuState`] with decode, execute,
//! stack, and full-instruction stepping.
//!
//! `decode` and `execute` are split deliberately, mirroring the
//! engine's own separation: `decode` is pure and side-effect free,
//! `execute` is the only place that touches the bus and register file
//! together. Callers that want cycle-by-cycle control can call them
//! separately; [`Cpu::step`] is the batteries-included convenience that
//! fetches, decodes, and executes one instruction.

use crate::bus::Bus;
use crate::cpu::decode::{decode, DecodedInstruction};
use crate::cpu::cycles::base_cycles;
use crate::cpu::dispatch::dispatch;
use crate::cpu::instruction::Mnemonic;
use crate::cpu::resolve::{resolve, Resolved};
use crate::cpu::state::CpuState;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Zero-initialize every register. The caller chooses the initial
    /// PC (via [`Cpu::set_pc`]) or calls [`Cpu::reset`] for the
    /// conventional reset-vector fetch.
    pub fn new() -> Self {
        Self { state: CpuState::new() }
    }

    /// Conventional 6502 power-up: `SP = 0xFD`, interrupts disabled,
    /// `PC` loaded from `$FFFC/$FFFD`.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.state.reset(bus);
    }

    /// Snapshot the full architectural state.
    pub fn get_state(&self) -> CpuState {
        self.state
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    // -----------------------------------------------------------------
    // Register accessors / mutators
    // -----------------------------------------------------------------

    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }
    pub fn cycles(&self) -> u64 {
        self.state.cycles()
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.set_a(v);
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.set_x(v);
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.set_y(v);
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.set_sp(v);
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }

    // -----------------------------------------------------------------
    // Stack
    // -----------------------------------------------------------------

    pub fn push(&mut self, bus: &mut Bus, value: u8) {
        self.state.push_u8(bus, value);
    }

    pub fn pop(&mut self, bus: &mut Bus) -> u8 {
        self.state.pop_u8(bus)
    }

    // -----------------------------------------------------------------
    // Decode / execute
    // -----------------------------------------------------------------

    /// Pure decode of an already-fetched 32-bit chunk. Does not touch
    /// the bus or mutate any register.
    pub fn decode(&self, chunk: u32) -> DecodedInstruction {
        decode(chunk)
    }

    /// Resolve addressing, dispatch semantics, and account cycles for an
    /// already-decoded instruction. `PC` must point at the instruction's
    /// opcode byte when this is called; `execute` advances it past the
    /// encoding before resolving (so relative branches compute from the
    /// correct post-instruction address) and further still if control
    /// flow redirects it. Returns the total cycles this instruction
    /// consumed.
    pub fn execute(&mut self, bus: &mut Bus, decoded: DecodedInstruction) -> u32 {
        let advance = if decoded.descriptor.size == 0 { 1 } else { decoded.descriptor.size as u16 };
        self.state.advance_pc(advance);

        if decoded.descriptor.mnemonic == Mnemonic::Unknown {
            log::warn!(
                "unknown opcode {:#04x} at {:#06x}, treated as a zero-cycle no-op",
                decoded.opcode,
                self.state.pc().wrapping_sub(advance)
            );
            return 0;
        }

        let Resolved { operand, page_crossed } =
            resolve(&self.state, bus, decoded.descriptor.mode, decoded.operand);

        let extra = dispatch(decoded.descriptor.mnemonic, operand, page_crossed, &mut self.state, bus)
            .unwrap_or(0);

        let total = base_cycles(decoded.opcode) + extra;
        self.state.add_cycles(total);

        #[cfg(feature = "trace")]
        log::trace!(
            "{:#04x} {:?} {:?} -> {:?} ({} cycles, pc now {:#06x})",
            decoded.opcode,
            decoded.descriptor.mnemonic,
            decoded.descriptor.mode,
            operand,
            total,
            self.state.pc(),
        );

        total
    }

    /// Fetch the next instruction's bytes from `bus` at the current PC,
    /// decode, and execute it. Returns the cycles consumed.
    ///
    /// Always fetches up to 3 operand bytes speculatively (harmless for
    /// shorter encodings, since `decode` only consumes as many as the
    /// descriptor's size calls for), so peripherals with read side
    /// effects placed immediately after short instructions could
    /// observe a speculative read. Real hardware never does this; it's
    /// an acceptable simplification for a decode step driven by a single
    /// packed word, matching this engine's decode contract.
    pub fn step(&mut self, bus: &mut Bus) -> u32 {
        let pc = self.state.pc();
        let b0 = bus.read(pc) as u32;
        let b1 = bus.read(pc.wrapping_add(1)) as u32;
        let b2 = bus.read(pc.wrapping_add(2)) as u32;
        let chunk = (b0 << 24) | (b1 << 16) | (b2 << 8);
        let decoded = decode(chunk);
        self.execute(bus, decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Ram;

    fn setup(prg: &[u8]) -> (Cpu, Bus) {
        let mut bus = Bus::new();
        bus.attach(Box::new(Ram::new(0x10000)), 0x0000, 0xFFFF).unwrap();
        for (i, b) in prg.iter().enumerate() {
            bus.write(0x8000 + i as u16, *b);
        }
        bus.write(0xFFFC, 0x00);
        bus.write(0xFFFD, 0x80);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        (cpu, bus)
    }

    #[test]
    fn reset_loads_vector() {
        let (cpu, _bus) = setup(&[0xEA]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn step_executes_immediate_load() {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x42, 0x00]); // LDA #$42; BRK
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn step_handles_absolute_store_then_load() {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x55, 0x8D, 0x00, 0x02, 0xAD, 0x00, 0x02]);
        cpu.step(&mut bus); // LDA #$55
        cpu.step(&mut bus); // STA $0200
        assert_eq!(bus.read(0x0200), 0x55);
        cpu.step(&mut bus); // LDA $0200
        assert_eq!(cpu.a(), 0x55);
    }

    #[test]
    fn jsr_rts_round_trip_through_step() {
        // JSR $8006 ; BRK ; (pad) ; target: LDX #$09 ; RTS
        let (mut cpu, mut bus) = setup(&[0x20, 0x06, 0x80, 0x00, 0x00, 0x00, 0xA2, 0x09, 0x60]);
        cpu.step(&mut bus); // JSR $8006
        assert_eq!(cpu.pc(), 0x8006);
        cpu.step(&mut bus); // LDX #$09
        assert_eq!(cpu.x(), 0x09);
        cpu.step(&mut bus); // RTS
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn unknown_opcode_does_not_panic_and_advances_pc() {
        let (mut cpu, mut bus) = setup(&[0x02, 0xEA]);
        let pc_before = cpu.pc();
        cpu.step(&mut bus);
        assert_eq!(cpu.pc(), pc_before + 1);
    }

    #[test]
    fn cycle_counter_accumulates_across_steps() {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0xA9, 0x02]);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(cpu.cycles(), 4);
    }
}
