#![doc = r#"
cpu - The 6502 instruction engine.

Layered, leaves first:

```text
    state.rs        - Register file, status flags, stack push/pop.
    regs.rs         - `CpuRegs` trait: the register/flag API shared by every
                       pure helper below, independent of bus access.
    instruction.rs  - `Mnemonic`, `AddressingMode`, and the static 256-entry
                       instruction descriptor table.
    decode.rs       - Pure decode of a packed 32-bit fetch chunk into a
                       `DecodedInstruction`.
    resolve.rs       - Address resolver: addressing mode + operand -> effective
                       address and extra page-cross cycles.
    cycles.rs       - Canonical per-opcode base cycle counts.
    execute.rs      - Per-mnemonic semantic helpers (ALU, stack, RMW, branch).
    dispatch/       - Per-family executor entry points grouping the helpers
                       above by instruction family (loads/stores, arithmetic,
                       branches, compares, control flow, RMW shifts, misc).
    facade.rs       - `Cpu`: register file + decode/execute/push/pop/state.
```
"#]

pub mod cycles;
pub mod decode;
pub mod dispatch;
pub mod execute;
pub mod facade;
pub mod instruction;
pub mod regs;
pub mod resolve;
pub mod state;

pub use decode::{decode, DecodedInstruction};
pub use facade::Cpu;
pub use instruction::{AddressingMode, InstructionDescriptor, Mnemonic};
pub use regs::CpuRegs;
pub use state::CpuState;
