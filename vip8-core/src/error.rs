use std::io;

use thiserror::Error;

/// Errors the machine reports to its host.
///
/// Unknown opcodes are deliberately absent: they decode to
/// `Execution::Ignored` and never fail the machine.
#[derive(Debug, Error)]
pub enum VmError {
    /// The ROM source could not be read.
    #[error("failed to read ROM")]
    RomRead(#[from] io::Error),

    /// The ROM does not fit between the program entry and the top of RAM.
    #[error("ROM is {size} bytes, exceeding the 3584 bytes of program space")]
    RomTooLarge { size: usize },

    /// `00EE` executed with no return address on the stack.
    #[error("return with an empty call stack at {pc:#06X}")]
    StackUnderflow { pc: u16 },
}
