//! Live sensor state for the weather station.
//!
//! Provides thread-safe shared state that can be updated from any input
//! (simulation, a polling task, tests) and read by the subject when it
//! notifies.

use super::ReadingSource;
use crate::error::Result;
use crate::weather::Reading;
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

/// Thread-safe sensor values with change tracking.
///
/// The version is incremented each time a value actually changes, so the
/// subject can tell whether a notification is due.
///
/// # Example
/// ```ignore
/// let sensors = Arc::new(LiveSensors::new(Reading::default()));
/// let station = WeatherData::with_source(sensors.clone());
///
/// sensors.set_temperature(27);
/// station.measurements_changed()?;
/// ```
pub struct LiveSensors {
    temperature: AtomicI32,
    humidity: AtomicI32,
    pressure: AtomicI32,
    version: AtomicU32,
}

impl LiveSensors {
    /// Create live sensors holding the given initial reading.
    pub fn new(initial: Reading) -> Self {
        Self {
            temperature: AtomicI32::new(initial.temperature),
            humidity: AtomicI32::new(initial.humidity),
            pressure: AtomicI32::new(initial.pressure),
            version: AtomicU32::new(0),
        }
    }

    /// Get the current reading.
    pub fn get(&self) -> Reading {
        Reading::new(
            self.temperature.load(Ordering::SeqCst),
            self.humidity.load(Ordering::SeqCst),
            self.pressure.load(Ordering::SeqCst),
        )
    }

    /// Replace all three values. Increments version once if anything changed.
    pub fn set(&self, reading: Reading) {
        let changed = Self::store(&self.temperature, reading.temperature)
            | Self::store(&self.humidity, reading.humidity)
            | Self::store(&self.pressure, reading.pressure);
        if changed {
            self.version.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn set_temperature(&self, value: i32) {
        self.set_one(&self.temperature, value);
    }

    pub fn set_humidity(&self, value: i32) {
        self.set_one(&self.humidity, value);
    }

    pub fn set_pressure(&self, value: i32) {
        self.set_one(&self.pressure, value);
    }

    fn set_one(&self, slot: &AtomicI32, value: i32) {
        if Self::store(slot, value) {
            self.version.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn store(slot: &AtomicI32, value: i32) -> bool {
        slot.swap(value, Ordering::SeqCst) != value
    }
}

impl Default for LiveSensors {
    fn default() -> Self {
        Self::new(Reading::default())
    }
}

impl ReadingSource for LiveSensors {
    fn read(&self) -> Result<Reading> {
        Ok(self.get())
    }

    fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }
}
