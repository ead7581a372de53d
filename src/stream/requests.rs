/*
 * Formatting Requests
 *
 * One small value per formatting need. Each is built at the call site, handed
 * to `<<` and consumed by its `Streamable` impl in a single pass.
 */

use crate::io::{print_integer, Integer, Print, Radix};

use super::Streamable;

/// Most leading zeros `HexPadded` will emit.
pub const MAX_HEX_PADDING: usize = 7;

/// An integer printed in a given radix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Based<T> {
    pub val: T,
    pub radix: Radix,
}

impl<T: Integer> Streamable for Based<T> {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        print_integer(sink, self.val, self.radix);
    }
}

/// A single raw byte, written as-is rather than as decimal text.
///
/// The byte reaches the sink through one `Print::write` call. Byte sinks such
/// as the UART or a `heapless::Vec` receive exactly that octet. A `FmtSink`
/// can only hold text, so it maps the byte to the Latin-1 character of the
/// same value: `byte(0xC3)` lands there as `Ã`, two UTF-8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Byte {
    pub val: u8,
}

impl Streamable for Byte {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.write(self.val);
    }
}

/// A float printed with a fixed number of decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub val: f64,
    pub digits: u8,
}

impl Streamable for Float {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.print_float(self.val, self.digits);
    }
}

/// End of line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endl;

/// Inserting `endl` emits the sink's line terminator.
#[allow(non_upper_case_globals)]
pub const endl: Endl = Endl;

impl Streamable for Endl {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        sink.println();
    }
}

/// A character repeated `len` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fill {
    pub ch: char,
    pub len: usize,
}

impl Streamable for Fill {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        for _ in 0..self.len {
            sink.print_char(self.ch);
        }
    }
}

/// A time of day printed as `HH:MM:SS`.
///
/// Fields are not range checked; values of 100 or more print at their
/// natural width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Streamable for Time {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        if self.hour < 10 {
            sink.write(b'0');
        }
        print_integer(sink, self.hour, Radix::Dec);
        sink.print_str(if self.minute < 10 { ":0" } else { ":" });
        print_integer(sink, self.minute, Radix::Dec);
        sink.print_str(if self.second < 10 { ":0" } else { ":" });
        print_integer(sink, self.second, Radix::Dec);
    }
}

/// Integers printed in decimal, each followed by `sep`.
///
/// The separator also follows the last element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntArray<'a, T> {
    pub items: &'a [T],
    pub sep: char,
}

impl<'a, T: Integer> IntArray<'a, T> {
    pub const fn new(items: &'a [T], sep: char) -> Self {
        IntArray { items, sep }
    }

    /// Takes the first `len` items, clamped to the slice length.
    pub fn with_len(items: &'a [T], len: usize, sep: char) -> Self {
        IntArray {
            items: &items[..len.min(items.len())],
            sep,
        }
    }
}

impl<T: Integer> Streamable for IntArray<'_, T> {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        for &item in self.items {
            print_integer(sink, item, Radix::Dec);
            sink.print_char(self.sep);
        }
    }
}

/// Hex with leading zeros.
///
/// The zero count grows with the magnitude of `val` (one per power of 16
/// below it, at most `MAX_HEX_PADDING`). `width` is carried for callers but
/// does not drive the padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexPadded<T> {
    pub val: T,
    pub width: u8,
}

impl<T: Integer> HexPadded<T> {
    /// Number of `'0'` bytes written ahead of the digits.
    pub fn leading_zeros(&self) -> usize {
        let val = self.val.to_i128();
        let mut place: i128 = 1;
        let mut zeros = 0;
        while place < val && zeros < MAX_HEX_PADDING {
            zeros += 1;
            place *= 16;
        }
        zeros
    }
}

impl<T: Integer> Streamable for HexPadded<T> {
    fn stream_to<P: Print + ?Sized>(&self, sink: &mut P) {
        for _ in 0..self.leading_zeros() {
            sink.write(b'0');
        }
        print_integer(sink, self.val, Radix::Hex);
    }
}

pub const fn based<T: Integer>(val: T, radix: Radix) -> Based<T> {
    Based { val, radix }
}

pub const fn hex<T: Integer>(val: T) -> Based<T> {
    based(val, Radix::Hex)
}

pub const fn dec<T: Integer>(val: T) -> Based<T> {
    based(val, Radix::Dec)
}

pub const fn oct<T: Integer>(val: T) -> Based<T> {
    based(val, Radix::Oct)
}

pub const fn bin<T: Integer>(val: T) -> Based<T> {
    based(val, Radix::Bin)
}

pub const fn byte(val: u8) -> Byte {
    Byte { val }
}

pub const fn float(val: f64, digits: u8) -> Float {
    Float { val, digits }
}

pub const fn fill(ch: char, len: usize) -> Fill {
    Fill { ch, len }
}

pub const fn time(hour: u8, minute: u8, second: u8) -> Time {
    Time {
        hour,
        minute,
        second,
    }
}

pub const fn int_array<T: Integer>(items: &[T], sep: char) -> IntArray<'_, T> {
    IntArray::new(items, sep)
}

pub const fn hex_padded<T: Integer>(val: T, width: u8) -> HexPadded<T> {
    HexPadded { val, width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn render<R: Streamable>(request: R) -> std::string::String {
        let mut buf: Vec<u8, 128> = Vec::new();
        request.stream_to(&mut buf);
        std::string::String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn test_fill() {
        assert_eq!(render(fill('*', 5)), "*****");
        assert_eq!(render(fill('x', 0)), "");
        assert_eq!(render(fill('─', 2)), "──");
    }

    #[test]
    fn test_time_padding() {
        assert_eq!(render(time(9, 5, 30)), "09:05:30");
        assert_eq!(render(time(23, 59, 0)), "23:59:00");
        assert_eq!(render(time(0, 0, 0)), "00:00:00");
        assert_eq!(render(time(10, 10, 10)), "10:10:10");
    }

    #[test]
    fn test_time_is_not_range_checked() {
        assert_eq!(render(time(125, 60, 255)), "125:60:255");
    }

    #[test]
    fn test_int_array_keeps_trailing_separator() {
        assert_eq!(render(int_array(&[1, 2, 3], ',')), "1,2,3,");
        assert_eq!(render(int_array(&[-4i16, 0], ' ')), "-4 0 ");
        assert_eq!(render(int_array::<i32>(&[], ',')), "");
    }

    #[test]
    fn test_int_array_with_len_clamps() {
        let data = [7u8, 8, 9];
        assert_eq!(render(IntArray::with_len(&data, 2, ';')), "7;8;");
        assert_eq!(render(IntArray::with_len(&data, 10, ';')), "7;8;9;");
        assert_eq!(render(IntArray::with_len(&data, 0, ';')), "");
    }

    #[test]
    fn test_radix_requests() {
        assert_eq!(render(hex(255)), "FF");
        assert_eq!(render(bin(8)), "1000");
        assert_eq!(render(oct(64)), "100");
        assert_eq!(render(dec(-42)), "-42");
        assert_eq!(render(hex(-1i8)), "FF");
    }

    #[test]
    fn test_byte_is_raw() {
        let mut buf: Vec<u8, 4> = Vec::new();
        byte(65).stream_to(&mut buf);
        assert_eq!(buf.as_slice(), &[65]);
        assert_eq!(render(dec(65)), "65");
        assert_eq!(render(byte(0x0A)), "\n");
    }

    #[test]
    fn test_float_request() {
        assert_eq!(render(float(3.14159, 3)), "3.142");
        assert_eq!(render(float(-1.5, 0)), "-2");
        assert_eq!(render(float(f64::NAN, 2)), "nan");
    }

    #[test]
    fn test_endl() {
        assert_eq!(render(endl), "\r\n");
    }

    #[test]
    fn test_hex_padded_follows_magnitude() {
        assert_eq!(render(hex_padded(1, 8)), "1");
        assert_eq!(render(hex_padded(2, 8)), "02");
        assert_eq!(render(hex_padded(16, 8)), "010");
        assert_eq!(render(hex_padded(255, 8)), "00FF");
        assert_eq!(render(hex_padded(0, 4)), "0");
    }

    #[test]
    fn test_hex_padded_is_bounded() {
        assert_eq!(hex_padded(i64::MAX, 2).leading_zeros(), MAX_HEX_PADDING);
        assert_eq!(hex_padded(u128::MAX, 2).leading_zeros(), MAX_HEX_PADDING);
        assert_eq!(render(hex_padded(0x1234_5678_9ABCu64, 0)), "0000000123456789ABC");
        assert_eq!(hex_padded(-5i32, 8).leading_zeros(), 0);
    }

    #[test]
    fn test_hex_padded_ignores_width() {
        assert_eq!(render(hex_padded(0xAB, 0)), render(hex_padded(0xAB, 200)));
    }
}
