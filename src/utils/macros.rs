/*
 * Streaming Macros
 *
 * Shorthand for a whole insertion chain on one sink:
 *
 * - stream!: insert each argument in order
 * - streamln!: the same, followed by `endl`
 */

/// Inserts each argument into `sink`, left to right.
///
/// `stream!(sink, a, b, c)` writes the same bytes as
/// `stream(&mut sink) << a << b << c` and evaluates to the resulting `Stream`.
/// Each argument goes through `Stream::put`, so the macro can stand alone as a
/// statement without `let _ =`.
///
/// # Arguments
///
/// * `sink` - A place holding a `Print` sink; it is borrowed mutably.
/// * items - Any number of `Streamable` values, inserted in order.
///
/// # Examples
///
/// ```rust
/// use streaming::{hex, stream};
///
/// let mut buf: heapless::Vec<u8, 16> = heapless::Vec::new();
/// stream!(buf, "id=", hex(0xBEEFu16));
/// assert_eq!(buf.as_slice(), b"id=BEEF");
/// ```
#[macro_export]
macro_rules! stream {
    ($sink:expr $(, $item:expr)* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut __stream = $crate::stream::Stream::new(&mut $sink);
            $( __stream.put($item); )*
            __stream
        }
    };
}

/// Inserts each argument into `sink`, then ends the line.
///
/// # Examples
///
/// ```rust
/// use streaming::{streamln, time};
///
/// let mut buf: heapless::Vec<u8, 16> = heapless::Vec::new();
/// streamln!(buf, time(9, 5, 30));
/// assert_eq!(buf.as_slice(), b"09:05:30\r\n");
/// ```
#[macro_export]
macro_rules! streamln {
    ($sink:expr) => {
        $crate::stream!($sink, $crate::stream::endl)
    };
    ($sink:expr, $($item:expr),+ $(,)?) => {
        $crate::stream!($sink, $($item),+, $crate::stream::endl)
    };
}
