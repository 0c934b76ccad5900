//! Real-time driver for the Almanac calendar engine.
//!
//! [`ClockDriver`] advances a shared [`almanac_core::CalendarEngine`] by a
//! fixed number of in-world seconds on every wall-clock period while it is
//! running. It is the only part of Almanac that touches an async runtime.

/// Configuration for the clock driver.
pub mod config;
/// The clock driver and its shared-engine handle.
pub mod driver;

/// Re-export of [`config::DriverConfig`].
pub use config::DriverConfig;
/// Re-exports of [`driver::ClockDriver`], [`driver::SharedEngine`], and [`driver::shared`].
pub use driver::{ClockDriver, SharedEngine, shared};
