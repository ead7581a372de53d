/*
 * Stream Logging Backend
 *
 * A `log::Log` implementation that writes each record as one
 * `[LEVEL] message` line to a `Print` sink, through the same insertion
 * handlers application code uses. The sink sits behind a spin lock so
 * records from different contexts do not interleave.
 */

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use spin::Mutex;

use crate::io::Print;
use crate::stream::{endl, stream};

/// Logger that renders records onto a locked `Print` sink.
pub struct StreamLogger<P> {
    sink: Mutex<P>,
    filter: LevelFilter,
}

impl<P> StreamLogger<P> {
    /// Creates a logger writing records up to `filter` to `sink`.
    ///
    /// # Arguments
    ///
    /// * `sink` - Where rendered records go; it is locked per record.
    /// * `filter` - The most verbose level that is written.
    pub const fn new(sink: P, filter: LevelFilter) -> Self {
        StreamLogger {
            sink: Mutex::new(sink),
            filter,
        }
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// Runs `f` with the sink locked.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut *self.sink.lock())
    }
}

impl<P: Print + Send> log::Log for StreamLogger<P> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut sink = self.sink.lock();
            let _ = stream(&mut *sink) << '[' << record.level().as_str() << "] " << record.args() << endl;
        }
    }

    fn flush(&self) {}
}

/// Registers `logger` as the global logger and applies its level filter.
///
/// # Errors
///
/// Fails if a global logger has already been set.
pub fn init<P: Print + Send + 'static>(logger: &'static StreamLogger<P>) -> Result<(), SetLoggerError> {
    log::set_logger(logger).map(|()| log::set_max_level(logger.filter))?;
    log::debug!("stream logger registered");
    Ok(())
}
