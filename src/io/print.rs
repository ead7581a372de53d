/*
 * Print Sink Interface
 *
 * `Print` is the byte-oriented output sink every insertion handler writes to.
 * Implementors only provide `write(byte)`; textual rendering of strings,
 * integers in a radix, fixed-precision floats and line endings is layered on
 * top of it. Every method reports how many bytes it wrote and never fails.
 */

/// Line terminator emitted by `Print::println`.
pub const LINE_ENDING: &str = "\r\n";

/// Digits printed after the decimal point when a float has no explicit precision.
pub const DEFAULT_FLOAT_DIGITS: u8 = 2;

/// Floats above this magnitude print as `ovf`; the integer part must fit in 32 bits.
const FLOAT_OVERFLOW: f64 = 4294967040.0;

/// Numeric bases understood by `Print::print_unsigned`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Bin = 2,
    Oct = 8,
    Dec = 10,
    Hex = 16,
}

impl Radix {
    /// The numeric base.
    pub const fn base(self) -> u32 {
        self as u32
    }

    /// Converts a raw base into a `Radix`, if supported.
    pub const fn from_base(base: u32) -> Option<Radix> {
        match base {
            2 => Some(Radix::Bin),
            8 => Some(Radix::Oct),
            10 => Some(Radix::Dec),
            16 => Some(Radix::Hex),
            _ => None,
        }
    }
}

/// Primitive integers that can be rendered in a `Radix`.
pub trait Integer: Copy {
    /// Splits the value into a sign flag and the digits to render.
    ///
    /// Decimal keeps the sign and yields the magnitude. Other radices yield the
    /// two's-complement bit pattern at the type's own width.
    fn radix_parts(self, radix: Radix) -> (bool, u128);

    /// The value widened for comparisons, saturating at `i128::MAX`.
    fn to_i128(self) -> i128;
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl Integer for $t {
            #[inline]
            fn radix_parts(self, radix: Radix) -> (bool, u128) {
                match radix {
                    Radix::Dec if self < 0 => (true, self.unsigned_abs() as u128),
                    _ => (false, self as $u as u128),
                }
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            #[inline]
            fn radix_parts(self, _radix: Radix) -> (bool, u128) {
                (false, self as u128)
            }

            #[inline]
            fn to_i128(self) -> i128 {
                i128::try_from(self).unwrap_or(i128::MAX)
            }
        }
    )*};
}

impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// An output sink.
pub trait Print {
    /// Writes one raw byte, returning the number of bytes accepted.
    fn write(&mut self, byte: u8) -> usize;

    /// Writes a run of raw bytes in order.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().map(|&b| self.write(b)).sum()
    }

    /// Prints a string verbatim.
    fn print_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// Prints a character as its UTF-8 encoding.
    fn print_char(&mut self, ch: char) -> usize {
        let mut buf = [0u8; 4];
        self.print_str(ch.encode_utf8(&mut buf))
    }

    /// Prints `n` in `radix` with no padding. Digits above 9 are uppercase.
    fn print_unsigned(&mut self, n: u128, radix: Radix) -> usize {
        // u128 in binary is the longest rendering
        let mut buf = [0u8; 128];
        let mut pos = buf.len();
        let base = radix.base() as u128;
        let mut n = n;

        loop {
            pos -= 1;
            let digit = (n % base) as u8;
            buf[pos] = if digit < 10 {
                b'0' + digit
            } else {
                b'A' + digit - 10
            };
            n /= base;
            if n == 0 {
                break;
            }
        }

        self.write_bytes(&buf[pos..])
    }

    /// Prints `val` with exactly `digits` decimals, rounding half up.
    ///
    /// NaN prints `nan`, infinities print `inf`, and magnitudes whose integer
    /// part does not fit in 32 bits print `ovf`.
    fn print_float(&mut self, val: f64, digits: u8) -> usize {
        if val.is_nan() {
            return self.print_str("nan");
        }
        if val.is_infinite() {
            return self.print_str("inf");
        }
        if val > FLOAT_OVERFLOW || val < -FLOAT_OVERFLOW {
            return self.print_str("ovf");
        }

        let mut n = 0;
        let mut number = val;
        if number < 0.0 {
            n += self.write(b'-');
            number = -number;
        }

        let mut rounding = 0.5;
        for _ in 0..digits {
            rounding /= 10.0;
        }
        number += rounding;

        let int_part = number as u32;
        let mut remainder = number - int_part as f64;
        n += self.print_unsigned(int_part as u128, Radix::Dec);

        if digits > 0 {
            n += self.write(b'.');
        }
        for _ in 0..digits {
            remainder *= 10.0;
            let digit = remainder as u32;
            n += self.print_unsigned(digit as u128, Radix::Dec);
            remainder -= digit as f64;
        }

        n
    }

    /// Emits the line terminator.
    fn println(&mut self) -> usize {
        self.print_str(LINE_ENDING)
    }
}

impl<P: Print + ?Sized> Print for &mut P {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        (**self).write(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).write_bytes(bytes)
    }

    fn print_str(&mut self, s: &str) -> usize {
        (**self).print_str(s)
    }

    fn print_char(&mut self, ch: char) -> usize {
        (**self).print_char(ch)
    }

    fn print_unsigned(&mut self, n: u128, radix: Radix) -> usize {
        (**self).print_unsigned(n, radix)
    }

    fn print_float(&mut self, val: f64, digits: u8) -> usize {
        (**self).print_float(val, digits)
    }

    fn println(&mut self) -> usize {
        (**self).println()
    }
}

/// Prints any primitive integer in `radix`, with a leading `-` for negative decimals.
///
/// # Arguments
///
/// * `sink` - The sink to print to.
/// * `val` - The integer to print.
/// * `radix` - The base to print it in.
///
/// # Returns
///
/// The number of bytes written, sign included.
pub fn print_integer<P: Print + ?Sized, T: Integer>(sink: &mut P, val: T, radix: Radix) -> usize {
    let (negative, digits) = val.radix_parts(radix);
    let mut n = 0;
    if negative {
        n += sink.write(b'-');
    }
    n + sink.print_unsigned(digits, radix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn rendered(f: impl FnOnce(&mut Vec<u8, 256>) -> usize) -> (std::string::String, usize) {
        let mut buf: Vec<u8, 256> = Vec::new();
        let n = f(&mut buf);
        (std::string::String::from_utf8(buf.to_vec()).unwrap(), n)
    }

    #[test]
    fn test_radix_from_base() {
        assert_eq!(Radix::from_base(16), Some(Radix::Hex));
        assert_eq!(Radix::from_base(2), Some(Radix::Bin));
        assert_eq!(Radix::from_base(7), None);
        assert_eq!(Radix::Oct.base(), 8);
    }

    #[test]
    fn test_unsigned_in_each_radix() {
        assert_eq!(rendered(|b| b.print_unsigned(255, Radix::Hex)).0, "FF");
        assert_eq!(rendered(|b| b.print_unsigned(8, Radix::Bin)).0, "1000");
        assert_eq!(rendered(|b| b.print_unsigned(8, Radix::Oct)).0, "10");
        assert_eq!(rendered(|b| b.print_unsigned(0, Radix::Dec)).0, "0");
        assert_eq!(
            rendered(|b| b.print_unsigned(u128::MAX, Radix::Bin)).1,
            128
        );
    }

    #[test]
    fn test_negative_integers() {
        assert_eq!(rendered(|b| print_integer(b, -42i32, Radix::Dec)), ("-42".into(), 3));
        assert_eq!(rendered(|b| print_integer(b, -1i8, Radix::Hex)).0, "FF");
        assert_eq!(rendered(|b| print_integer(b, -1i32, Radix::Hex)).0, "FFFFFFFF");
        assert_eq!(rendered(|b| print_integer(b, i64::MIN, Radix::Dec)).0, "-9223372036854775808");
    }

    #[test]
    fn test_float_rounding() {
        assert_eq!(rendered(|b| b.print_float(3.14159, 3)).0, "3.142");
        assert_eq!(rendered(|b| b.print_float(-1.5, 0)).0, "-2");
        assert_eq!(rendered(|b| b.print_float(2.5, 2)).0, "2.50");
        assert_eq!(rendered(|b| b.print_float(0.0, 1)).0, "0.0");
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(rendered(|b| b.print_float(f64::NAN, 2)).0, "nan");
        assert_eq!(rendered(|b| b.print_float(f64::NEG_INFINITY, 2)).0, "inf");
        assert_eq!(rendered(|b| b.print_float(1e10, 2)).0, "ovf");
        assert_eq!(rendered(|b| b.print_float(-1e10, 2)).0, "ovf");
    }

    #[test]
    fn test_println_and_char() {
        assert_eq!(rendered(|b| b.println()), ("\r\n".into(), 2));
        assert_eq!(rendered(|b| b.print_char('é')), ("é".into(), 2));
    }

    #[test]
    fn test_forwarding_through_reference() {
        fn emit<P: Print>(mut sink: P) -> usize {
            sink.print_str("ok") + sink.print_unsigned(7, Radix::Dec)
        }

        let mut buf: Vec<u8, 16> = Vec::new();
        assert_eq!(emit(&mut buf), 3);
        assert_eq!(buf.as_slice(), b"ok7");
    }
}
