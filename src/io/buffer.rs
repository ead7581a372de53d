/*
 * In-Memory Sinks
 *
 * Fixed-capacity byte buffers and `core::fmt::Write` targets as `Print` sinks.
 * Neither reports failures: a full buffer or a failing writer drops the byte
 * and counts it as not written.
 */

use core::fmt;

use heapless::Vec;

use super::print::Print;

impl<const N: usize> Print for Vec<u8, N> {
    fn write(&mut self, byte: u8) -> usize {
        match self.push(byte) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }
}

/// Adapts any `core::fmt::Write` into a `Print` sink.
///
/// Raw bytes are mapped to the Latin-1 character of the same value, while
/// strings and characters pass through unchanged.
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub const fn new(inner: W) -> Self {
        FmtSink { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Print for FmtSink<W> {
    fn write(&mut self, byte: u8) -> usize {
        match self.inner.write_char(byte as char) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }

    fn print_str(&mut self, s: &str) -> usize {
        match self.inner.write_str(s) {
            Ok(()) => s.len(),
            Err(_) => 0,
        }
    }

    fn print_char(&mut self, ch: char) -> usize {
        match self.inner.write_char(ch) {
            Ok(()) => ch.len_utf8(),
            Err(_) => 0,
        }
    }
}
