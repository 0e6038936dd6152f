/*!

A CHIP-8 virtual machine as specified at https://en.wikipedia.org/wiki/CHIP-8.

# Crossterm Frontend

If you want to try the machine on some programs, there is a ready-to-use implementation
you can run by using `cargo run --release --bin crossterm_frontend -- <program>`.
You can then use the keys 0-9 and a-f to give input, but which ones to use depend on the CHIP-8 program.

# Library

The main way of running a program is to load it as bytes, then alternate between
stepping the CPU and ticking the timers. `step` and `tick` are paced independently
by the caller; timers are expected to run at 60 Hz no matter how fast the CPU runs.

```rust
use chip8_vm::machine::Machine;

let mut machine = Machine::new();

// Load a program at address 0x200.
let clear_display = [0x00, 0xE0];
machine.load(&clear_display).unwrap();
machine.step().unwrap(); // Will now clear the display
machine.tick(); // Count the timers down
```

Alternatively, you can experiment by executing instructions manually.

```rust
use chip8_vm::machine::Machine;
use chip8_vm::machine::instruction::{Instruction, Reg, Const, Addr};

let mut machine = Machine::new();

// Execute instructions manually
machine.execute_single(Instruction::ClearScreen).unwrap();

// Or many sequentially
machine.execute_many(&[
    Instruction::Goto(Addr(0x250)),
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA))
]).unwrap();
```

## Custom input and output

The framebuffer and the keypad are part of the machine state. A frontend reads
the framebuffer with `frame` when it is dirty and calls `clear_dirty` once it
has been presented, and reports key transitions with `press_key` and
`release_key`. Take a look at `src/bin/crossterm_frontend` to see how to hook
up a real terminal to both ends.

Malformed programs surface as [`machine::MachineError`] from `load` and `step`;
the machine has no way to recover from these, so the loop should stop.
*/

pub mod machine;
pub mod util;
