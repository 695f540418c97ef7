//! The reading set delivered to observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default stub temperature (°C).
pub const STUB_TEMPERATURE: i32 = 25;
/// Default stub relative humidity (%).
pub const STUB_HUMIDITY: i32 = 80;
/// Default stub pressure.
pub const STUB_PRESSURE: i32 = 1;

/// One snapshot of the station's sensors.
///
/// Passed by value to every observer of a notification, so all observers of
/// the same notification see identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: i32,
    pub humidity: i32,
    pub pressure: i32,
}

impl Reading {
    pub fn new(temperature: i32, humidity: i32, pressure: i32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self::new(STUB_TEMPERATURE, STUB_HUMIDITY, STUB_PRESSURE)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={} humidity={} pressure={}",
            self.temperature, self.humidity, self.pressure
        )
    }
}
