use thiserror::Error;

/// Faults that halt the machine.
///
/// The architecture has no trap mechanism, so none of these can be recovered
/// from within the machine itself: retrying would replay the same instruction
/// against unchanged state and fault again. Arithmetic overflow and underflow
/// are not faults; they are defined wraparound and flag behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("program image is {size} bytes, but only {max} bytes fit above the reserved area")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("unknown opcode {opcode:#06X} at {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("memory access out of bounds at {address:#05X}")]
    MemoryOutOfBounds { address: u16 },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with an empty call stack")]
    StackUnderflow,
}
