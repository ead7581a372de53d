/*
 * Register I/O
 *
 * `Io` abstracts a single device register so drivers such as the 16550 UART
 * can be written once and run over x86 port I/O, memory-mapped registers or a
 * test double. `Pio<u8>` is the x86 port I/O implementation.
 */

use core::ops::{BitAnd, BitOr, Not};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::{arch::asm, marker::PhantomData};

/// I/O interface trait
pub trait Io {
    /// The value type used for I/O operations.
    type Value: Copy + PartialEq + BitAnd<Output = Self::Value> + BitOr<Output = Self::Value> + Not<Output = Self::Value>;

    /// Reads the value from the I/O interface.
    fn read(&self) -> Self::Value;

    /// Writes the value to the I/O interface.
    fn write(&mut self, value: Self::Value);

    /// Reads the value from the I/O interface and checks if the specified flags are set.
    #[inline(always)]
    fn readf(&self, flags: Self::Value) -> bool {
        (self.read() & flags) == flags
    }
}

/// Wrapper for an I/O interface providing read-only access.
pub struct ReadOnly<I> {
    inner: I,
}

impl<I> ReadOnly<I> {
    /// Creates a new `ReadOnly` wrapper instance.
    pub const fn new(inner: I) -> ReadOnly<I> {
        ReadOnly { inner }
    }
}

impl<I: Io> ReadOnly<I> {
    /// Reads the value from the I/O interface.
    #[inline(always)]
    pub fn read(&self) -> I::Value {
        self.inner.read()
    }

    /// Reads the value and checks if the specified flags are set.
    #[inline(always)]
    pub fn readf(&self, flags: I::Value) -> bool {
        self.inner.readf(flags)
    }
}

/// Byte-wide x86 I/O port.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Copy, Clone)]
pub struct Pio<T> {
    port: u16,
    value: PhantomData<T>,
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl<T> Pio<T> {
    /// Create a new PIO instance with the specified port.
    ///
    /// # Arguments
    ///
    /// * `port` - The port number.
    ///
    /// # Returns
    ///
    /// A new `Pio` instance.
    pub const fn new(port: u16) -> Self {
        Pio::<T> {
            port,
            value: PhantomData,
        }
    }

    /// The port number.
    pub const fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Io for Pio<u8> {
    type Value = u8;

    #[inline(always)]
    fn read(&self) -> u8 {
        let value: u8;
        unsafe {
            asm!("in al, dx", in("dx") self.port, out("al") value, options(nostack, nomem, preserves_flags));
        }
        value
    }

    #[inline(always)]
    fn write(&mut self, value: u8) {
        unsafe {
            asm!("out dx, al", in("dx") self.port, in("al") value, options(nostack, nomem, preserves_flags));
        }
    }
}
