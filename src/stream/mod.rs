/*
 * Stream Insertion
 *
 * `Stream` wraps a `Print` sink so output can be written as one chained
 * expression:
 *
 *     let _ = stream(&mut serial) << "t=" << time(9, 5, 30) << ' ' << hex(0xBEEF) << endl;
 *
 * Each right-hand operand is a `Streamable` value. Plain values (strings,
 * chars, integers, floats, `format_args!`) print the way the sink natively
 * prints them; the request types in `requests` cover radix, raw bytes, float
 * precision, fills, times, arrays and zero-padded hex. Every insertion hands
 * back the same stream, so the next one writes to the same sink.
 *
 * A chain written as a bare statement is an unused `<<` result and trips the
 * `unused_must_use` lint; bind it with `let _ =`, or use `stream!`/`streamln!`
 * or the `put` methods, which are not linted.
 */

use core::fmt;
use core::ops::Shl;

use crate::io::{print_integer, Integer, Print, Radix, DEFAULT_FLOAT_DIGITS};

pub mod requests;

pub use requests::{
    based, bin, byte, dec, endl, fill, float, hex, hex_padded, int_array, oct, time, Based, Byte,
    Endl, Fill, Float, HexPadded, IntArray, Time, MAX_HEX_PADDING,
};

/// A value that knows how to write itself to a `Print` sink.
pub trait Streamable {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P);
}

impl<T: Streamable + ?Sized> Streamable for &T {
    #[inline]
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        (**self).stream_to(sink)
    }
}

impl Streamable for str {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_str(self);
    }
}

impl Streamable for char {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_char(*self);
    }
}

/// Prints as `1` or `0`.
impl Streamable for bool {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_unsigned(*self as u128, Radix::Dec);
    }
}

impl Streamable for f64 {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_float(*self, DEFAULT_FLOAT_DIGITS);
    }
}

impl Streamable for f32 {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_float(*self as f64, DEFAULT_FLOAT_DIGITS);
    }
}

macro_rules! impl_streamable_integer {
    ($($t:ty),*) => {$(
        impl Streamable for $t {
            fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
                print_integer(sink, *self, Radix::Dec);
            }
        }
    )*};
}

impl_streamable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Bridges `core::fmt` output onto a `Print` sink.
struct FmtBridge<'p, P: ?Sized> {
    sink: &'p mut P,
}

impl<P: Print + ?Sized> fmt::Write for FmtBridge<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.print_str(s);
        Ok(())
    }
}

impl Streamable for fmt::Arguments<'_> {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        // the bridge never fails, only a Display impl can
        let _ = fmt::write(&mut FmtBridge { sink }, *self);
    }
}

/// A `Print` sink being written to by chained insertions.
pub struct Stream<'a, P: Print + ?Sized> {
    sink: &'a mut P,
}

/// Starts a chain of insertions on `sink`.
pub fn stream<P: Print + ?Sized>(sink: &mut P) -> Stream<'_, P> {
    Stream::new(sink)
}

impl<'a, P: Print + ?Sized> Stream<'a, P> {
    pub fn new(sink: &'a mut P) -> Self {
        Stream { sink }
    }

    /// Ends the chain, handing back the sink it wrote to.
    pub fn into_inner(self) -> &'a mut P {
        self.sink
    }

    pub fn sink(&mut self) -> &mut P {
        self.sink
    }

    /// Inserts `item`; the method form of `<<`.
    pub fn put<T: Streamable>(&mut self, item: T) -> &mut Self {
        item.stream_to(self.sink);
        self
    }

    pub fn radix<T: Integer>(&mut self, val: T, radix: Radix) -> &mut Self {
        self.put(based(val, radix))
    }

    pub fn hex<T: Integer>(&mut self, val: T) -> &mut Self {
        self.put(hex(val))
    }

    pub fn dec<T: Integer>(&mut self, val: T) -> &mut Self {
        self.put(dec(val))
    }

    pub fn oct<T: Integer>(&mut self, val: T) -> &mut Self {
        self.put(oct(val))
    }

    pub fn bin<T: Integer>(&mut self, val: T) -> &mut Self {
        self.put(bin(val))
    }

    pub fn byte(&mut self, val: u8) -> &mut Self {
        self.put(byte(val))
    }

    pub fn float(&mut self, val: f64, digits: u8) -> &mut Self {
        self.put(float(val, digits))
    }

    pub fn endl(&mut self) -> &mut Self {
        self.put(endl)
    }

    pub fn fill(&mut self, ch: char, len: usize) -> &mut Self {
        self.put(fill(ch, len))
    }

    pub fn time(&mut self, hour: u8, minute: u8, second: u8) -> &mut Self {
        self.put(time(hour, minute, second))
    }

    pub fn int_array<T: Integer>(&mut self, items: &[T], sep: char) -> &mut Self {
        self.put(int_array(items, sep))
    }

    pub fn hex_padded<T: Integer>(&mut self, val: T, width: u8) -> &mut Self {
        self.put(hex_padded(val, width))
    }
}

impl<'a, P: Print + ?Sized, T: Streamable> Shl<T> for Stream<'a, P> {
    type Output = Stream<'a, P>;

    #[inline]
    fn shl(self, item: T) -> Stream<'a, P> {
        item.stream_to(self.sink);
        self
    }
}

impl<'s, 'a, P: Print + ?Sized, T: Streamable> Shl<T> for &'s mut Stream<'a, P> {
    type Output = &'s mut Stream<'a, P>;

    #[inline]
    fn shl(self, item: T) -> &'s mut Stream<'a, P> {
        item.stream_to(self.sink);
        self
    }
}
