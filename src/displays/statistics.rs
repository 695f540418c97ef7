//! Running temperature statistics.

use super::{DisplaySink, stdout_sink};
use crate::error::Result;
use crate::weather::{Observer, Reading};
use parking_lot::Mutex;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
struct TemperatureStats {
    count: u64,
    sum: i64,
    min: i32,
    max: i32,
}

impl TemperatureStats {
    fn record(&mut self, temperature: i32) {
        if self.count == 0 {
            self.min = temperature;
            self.max = temperature;
        } else {
            self.min = self.min.min(temperature);
            self.max = self.max.max(temperature);
        }
        self.count += 1;
        self.sum += i64::from(temperature);
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// Aggregates temperature across every reading it has received.
pub struct StatisticDisplay {
    stats: Mutex<TemperatureStats>,
    out: Mutex<DisplaySink>,
}

impl StatisticDisplay {
    pub fn new() -> Self {
        Self::with_sink(stdout_sink())
    }

    pub fn with_sink(sink: DisplaySink) -> Self {
        Self {
            stats: Mutex::new(TemperatureStats::default()),
            out: Mutex::new(sink),
        }
    }

    /// Number of readings aggregated so far.
    pub fn count(&self) -> u64 {
        self.stats.lock().count
    }

    /// Average temperature, or `None` before the first reading.
    pub fn average(&self) -> Option<f64> {
        let stats = self.stats.lock();
        (stats.count > 0).then(|| stats.average())
    }
}

impl Default for StatisticDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for StatisticDisplay {
    fn update(&self, reading: Reading) -> Result<()> {
        let stats = {
            let mut stats = self.stats.lock();
            stats.record(reading.temperature);
            *stats
        };

        let mut out = self.out.lock();
        writeln!(
            out,
            "Statistics display: temperature avg={:.1} min={} max={} over {} reading(s)",
            stats.average(),
            stats.min,
            stats.max,
            stats.count
        )?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "statistics"
    }
}
