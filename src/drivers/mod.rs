/*
 * Device Drivers
 *
 * Hardware sinks that implement `Print`.
 */

pub mod serial;
