//! Sensor sources feeding the weather station.
//!
//! The subject never talks to hardware directly; it reads from a
//! [`ReadingSource`] injected at construction. This keeps the station
//! testable without real sensors.
//!
//! Sources report a version number that is bumped each time their values
//! change, which lets the subject skip notifications when nothing moved.

pub mod live_sensors;
pub mod stub_sensors;

pub use live_sensors::LiveSensors;
pub use stub_sensors::StubSensors;

use crate::error::Result;
use crate::weather::Reading;

/// Trait for anything that can produce the current reading set.
pub trait ReadingSource: Send + Sync {
    /// Read the current values.
    fn read(&self) -> Result<Reading>;

    /// Get the current version number.
    ///
    /// This should be incremented each time the values change. Sources whose
    /// values never change keep the default of 0.
    fn version(&self) -> u32 {
        0
    }
}

impl<F> ReadingSource for F
where
    F: Fn() -> Result<Reading> + Send + Sync,
{
    fn read(&self) -> Result<Reading> {
        self()
    }
}
