/*
 * Input/Output System
 *
 * The `Print` sink trait every formatter writes to, the register access
 * layer drivers are built on, and the in-memory sinks.
 */

pub mod buffer;
pub mod pio;
pub mod print;

pub use buffer::FmtSink;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use pio::Pio;
pub use pio::{Io, ReadOnly};
pub use print::{print_integer, Integer, Print, Radix, DEFAULT_FLOAT_DIGITS, LINE_ENDING};
