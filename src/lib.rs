#![doc = r#"
mos6502-core: a MOS 6502 instruction engine and memory-mapped peripheral bus.

This crate embeds as a library: callers build a `Bus`, attach peripherals
that answer byte-granular loads and stores over disjoint address ranges,
then drive a `Cpu` one instruction at a time via `decode`/`execute`.

Modules:
- error: library error types (bus attach failures)
- bus: interval map, peripheral trait, and the Bus dispatch façade
- cpu: register file, instruction table, decoder, address resolver,
  per-mnemonic executor, and the CPU façade

Peripherals (RAM, ROM, I/O devices), host shells, file loading, and
disassembly are intentionally outside this crate's scope; see the
`Peripheral` trait in `bus::peripheral` for the seam callers use to
supply them.
"#]

pub mod bus;
pub mod cpu;
pub mod error;

pub use bus::{Bus, Peripheral};
pub use cpu::Cpu;
pub use error::AttachError;

#[cfg(test)]
pub(crate) mod test_support;
