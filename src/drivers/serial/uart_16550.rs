/*
 * 16550 UART Driver
 *
 * Drives a 16550-compatible UART through any `Io` register implementation
 * and exposes it as a `Print` sink.
 *
 * Key points:
 * - Registers are generic: x86 port I/O (`Pio<u8>`) in firmware, plain
 *   structs in host tests
 * - `init` programs 8N1, FIFO on, at `115200 / divisor` baud
 * - `send` busy-waits on the line status `OUTPUT_EMPTY` flag
 * - `Print::write` sends bytes untranslated; `endl` decides line endings
 */

use core::convert::TryInto;

use bitflags::bitflags;

use crate::io::{Io, Print, ReadOnly};
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::io::Pio;

bitflags! {
    /// Interrupt enable flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IntEnFlags: u8 {
        const RECEIVED = 1;
        const SENT = 1 << 1;
        const ERRORED = 1 << 2;
        const STATUS_CHANGE = 1 << 3;
        // 4 to 7 are unused
    }
}

bitflags! {
    /// Line control flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LineCtrlFlags: u8 {
        const DATA_8 = 0b11;
        // 2 to 6: stop bits, parity, break
        const DLAB = 1 << 7;
    }
}

bitflags! {
    /// Line status flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LineStsFlags: u8 {
        const INPUT_FULL = 1;
        // 1 to 4 unknown
        const OUTPUT_EMPTY = 1 << 5;
        // 6 and 7 unknown
    }
}

/// Divisor of the 115200 baud base clock; 1 runs the line at 115200.
pub const DEFAULT_DIVISOR: u16 = 1;

/// FIFO enabled, both FIFOs cleared, 14-byte trigger level.
const FIFO_ENABLE_CLEAR_14: u8 = 0xC7;

/// DTR, RTS and OUT2 asserted.
const MODEM_DTR_RTS_OUT2: u8 = 0x0B;

/// Serial port representation.
pub struct SerialPort<T: Io> {
    data: T,            // Data register, read to receive, write to send
    int_en: T,          // Interrupt enable
    fifo_ctrl: T,       // FIFO control
    line_ctrl: T,       // Line control
    modem_ctrl: T,      // Modem control
    line_sts: ReadOnly<T>,  // Line status
    #[allow(dead_code)]
    modem_sts: ReadOnly<T>, // Modem status, not used right now
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl SerialPort<Pio<u8>> {
    /// Creates a serial port on the x86 I/O ports starting at `base`.
    pub const fn new(base: u16) -> SerialPort<Pio<u8>> {
        SerialPort {
            data: Pio::new(base),
            int_en: Pio::new(base + 1),
            fifo_ctrl: Pio::new(base + 2),
            line_ctrl: Pio::new(base + 3),
            modem_ctrl: Pio::new(base + 4),
            line_sts: ReadOnly::new(Pio::new(base + 5)),
            modem_sts: ReadOnly::new(Pio::new(base + 6)),
        }
    }
}

impl<T: Io> SerialPort<T> {
    /// Creates a serial port from caller-provided registers.
    ///
    /// # Arguments
    ///
    /// * `base` - Address of the data register.
    /// * `register` - Builds the register at each address from `base` to `base + 6`.
    ///
    /// # Returns
    ///
    /// Returns an uninitialized `SerialPort`; call `init` before sending.
    pub fn with_io(base: u16, register: impl Fn(u16) -> T) -> SerialPort<T> {
        SerialPort {
            data: register(base),
            int_en: register(base + 1),
            fifo_ctrl: register(base + 2),
            line_ctrl: register(base + 3),
            modem_ctrl: register(base + 4),
            line_sts: ReadOnly::new(register(base + 5)),
            modem_sts: ReadOnly::new(register(base + 6)),
        }
    }
}

impl<T: Io> SerialPort<T>
where
    T::Value: From<u8> + TryInto<u8>,
{
    /// Initializes the serial port at 115200 baud, 8N1, FIFO enabled.
    pub fn init(&mut self) {
        self.init_with_divisor(DEFAULT_DIVISOR);
    }

    /// Initializes the serial port, 8N1 with FIFO.
    ///
    /// # Arguments
    ///
    /// * `divisor` - Baud divisor; the line runs at `115200 / divisor` baud.
    pub fn init_with_divisor(&mut self, divisor: u16) {
        let [lo, hi] = divisor.to_le_bytes();

        self.int_en.write(IntEnFlags::empty().bits().into());
        self.line_ctrl.write(LineCtrlFlags::DLAB.bits().into());
        self.data.write(lo.into());
        self.int_en.write(hi.into());
        self.line_ctrl.write(LineCtrlFlags::DATA_8.bits().into());
        self.fifo_ctrl.write(FIFO_ENABLE_CLEAR_14.into());
        self.modem_ctrl.write(MODEM_DTR_RTS_OUT2.into());
        self.int_en.write(IntEnFlags::RECEIVED.bits().into());
    }

    /// Retrieves the line status flags.
    fn line_sts(&self) -> LineStsFlags {
        LineStsFlags::from_bits_truncate(
            (self.line_sts.read() & 0xFF.into())
                .try_into()
                .unwrap_or(0),
        )
    }

    /// Whether the transmit holding register can take another byte.
    pub fn is_transmit_empty(&self) -> bool {
        self.line_sts().contains(LineStsFlags::OUTPUT_EMPTY)
    }

    /// Sends a byte of data through the serial port.
    ///
    /// # Arguments
    ///
    /// * `data` - The data byte to send.
    pub fn send(&mut self, data: u8) {
        while !self.is_transmit_empty() {}
        self.data.write(data.into())
    }
}

impl<T: Io> Print for SerialPort<T>
where
    T::Value: From<u8> + TryInto<u8>,
{
    /// Sends the byte as-is; line endings are not translated.
    fn write(&mut self, byte: u8) -> usize {
        self.send(byte);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{endl, hex, stream};
    use core::cell::{Cell, RefCell};
    use std::vec::Vec;

    const LSR: u16 = 5;

    #[derive(Default)]
    struct Bus {
        writes: RefCell<Vec<(u16, u8)>>,
        busy_polls: Cell<u32>,
    }

    impl Bus {
        fn sent(&self) -> Vec<u8> {
            self.writes
                .borrow()
                .iter()
                .filter(|(addr, _)| *addr == 0)
                .map(|(_, v)| *v)
                .collect()
        }
    }

    struct Register<'a> {
        bus: &'a Bus,
        addr: u16,
    }

    impl Io for Register<'_> {
        type Value = u8;

        fn read(&self) -> u8 {
            if self.addr != LSR {
                return 0;
            }
            match self.bus.busy_polls.get() {
                0 => LineStsFlags::OUTPUT_EMPTY.bits(),
                n => {
                    self.bus.busy_polls.set(n - 1);
                    0
                }
            }
        }

        fn write(&mut self, value: u8) {
            self.bus.writes.borrow_mut().push((self.addr, value));
        }
    }

    fn port(bus: &Bus) -> SerialPort<Register<'_>> {
        SerialPort::with_io(0, |addr| Register { bus, addr })
    }

    #[test]
    fn test_init_programs_registers_in_order() {
        let bus = Bus::default();
        port(&bus).init();
        assert_eq!(
            *bus.writes.borrow(),
            [(1, 0x00), (3, 0x80), (0, 0x01), (1, 0x00), (3, 0x03), (2, 0xC7), (4, 0x0B), (1, 0x01)]
        );
    }

    #[test]
    fn test_init_with_divisor_splits_bytes() {
        let bus = Bus::default();
        port(&bus).init_with_divisor(0x0180);
        let writes = bus.writes.borrow();
        assert_eq!(writes[2], (0, 0x80));
        assert_eq!(writes[3], (1, 0x01));
    }

    #[test]
    fn test_send_waits_for_output_empty() {
        let bus = Bus::default();
        bus.busy_polls.set(3);
        let mut serial = port(&bus);
        assert!(!serial.is_transmit_empty());
        serial.send(b'A');
        assert_eq!(bus.busy_polls.get(), 0);
        assert_eq!(bus.sent(), b"A");
    }

    #[test]
    fn test_print_sends_raw_bytes() {
        let bus = Bus::default();
        let mut serial = port(&bus);
        let _ = stream(&mut serial) << "x\n" << hex(171) << endl;
        assert_eq!(bus.sent(), b"x\nAB\r\n");
    }
}
