//! Fixed-value sensors.

use super::ReadingSource;
use crate::error::Result;
use crate::weather::Reading;

/// Sensors that always report the same reading.
///
/// Defaults to the stub values (25 / 80 / 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSensors {
    reading: Reading,
}

impl StubSensors {
    pub fn new(reading: Reading) -> Self {
        Self { reading }
    }
}

impl ReadingSource for StubSensors {
    fn read(&self) -> Result<Reading> {
        Ok(self.reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reports_stub_values() {
        let sensors = StubSensors::default();
        assert_eq!(sensors.read().unwrap(), Reading::new(25, 80, 1));
        assert_eq!(sensors.version(), 0);
    }

    #[test]
    fn test_custom_reading() {
        let sensors = StubSensors::new(Reading::new(18, 60, 1009));
        assert_eq!(sensors.read().unwrap(), Reading::new(18, 60, 1009));
    }
}
