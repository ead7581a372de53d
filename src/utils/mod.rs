/*
 * Utilities
 *
 * Streaming macros and the `log` backend built on the insertion handlers.
 */

#[macro_use]
pub mod macros;
pub mod logger;

pub use self::logger::StreamLogger;
