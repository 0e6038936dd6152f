//! The CHIP-8 machine: state, instruction decoding, and the
//! fetch-decode-execute cycle, as described at
//! https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description.

pub mod error;
pub mod instruction;
pub mod machine;

pub use error::MachineError;
pub use machine::{FrameBuffer, Machine, DISPLAY_HEIGHT, DISPLAY_WIDTH};
