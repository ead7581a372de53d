/*
 * Serial Communication Drivers
 *
 * This module contains drivers for serial communication interfaces,
 * primarily UART-based devices used for debugging and communication.
 */

use core::convert::TryInto;

use spin::Mutex;

use crate::io::Io;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::io::Pio;

pub mod uart_16550;

pub use uart_16550::SerialPort;

/// I/O base of the first PC serial port.
pub const COM1_BASE: u16 = 0x3F8;

/// I/O base of the second PC serial port.
pub const COM2_BASE: u16 = 0x2F8;

/// Mutex-protected static instance of COM1 serial port.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub static COM1: Mutex<SerialPort<Pio<u8>>> = Mutex::new(SerialPort::<Pio<u8>>::new(COM1_BASE));

/// Mutex-protected static instance of COM2 serial port.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub static COM2: Mutex<SerialPort<Pio<u8>>> = Mutex::new(SerialPort::<Pio<u8>>::new(COM2_BASE));

/// Initializes a shared serial port.
///
/// This function should be called once, before anything streams to the port.
pub fn init_port<T: Io>(port: &Mutex<SerialPort<T>>)
where
    T::Value: From<u8> + TryInto<u8>,
{
    port.lock().init();
    log::debug!("serial port initialized");
}
