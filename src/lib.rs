/*
 * streaming
 *
 * Chained `<<` insertion formatting for byte-oriented output sinks:
 *
 *     let _ = stream(&mut serial) << "temp=" << float(celsius, 1) << " raw=" << hex_padded(raw, 4) << endl;
 *
 * - `io`: the `Print` sink trait, register I/O and in-memory sinks
 * - `drivers`: the 16550 UART as a `Print` sink
 * - `stream`: `Stream`, the `<<` operator and the formatting requests
 * - `utils`: `stream!`/`streamln!` and a `log` backend
 *
 * The crate is `no_std`; the host test build links std.
 */

#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod io;
pub mod stream;
pub mod utils;

pub use io::{Integer, Print, Radix};
pub use stream::{
    based, bin, byte, dec, endl, fill, float, hex, hex_padded, int_array, oct, stream, time, Stream,
    Streamable,
};

/// Release of the streaming interface.
pub const STREAMING_LIBRARY_VERSION: u32 = 5;
