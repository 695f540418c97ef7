//! General conditions display.

use super::{DisplaySink, stdout_sink};
use crate::error::Result;
use crate::weather::{Observer, Reading};
use log::debug;
use parking_lot::Mutex;
use std::io::Write;

/// Shows the latest reading as-is.
pub struct GeneralDisplay {
    out: Mutex<DisplaySink>,
}

impl GeneralDisplay {
    pub fn new() -> Self {
        Self::with_sink(stdout_sink())
    }

    pub fn with_sink(sink: DisplaySink) -> Self {
        Self {
            out: Mutex::new(sink),
        }
    }
}

impl Default for GeneralDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for GeneralDisplay {
    fn update(&self, reading: Reading) -> Result<()> {
        debug!("General display updating");
        let mut out = self.out.lock();
        writeln!(out, "General display: {}", reading)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displays::test_sink::{BrokenPipe, SharedBuffer};
    use crate::error::StationError;

    #[test]
    fn test_prints_reading() {
        let buffer = SharedBuffer::default();
        let display = GeneralDisplay::with_sink(Box::new(buffer.clone()));

        display.update(Reading::default()).unwrap();

        assert_eq!(
            buffer.lines(),
            ["General display: temperature=25 humidity=80 pressure=1"]
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let display = GeneralDisplay::with_sink(Box::new(BrokenPipe));
        let err = display.update(Reading::default()).unwrap_err();
        assert!(matches!(err, StationError::IoError(_)));
    }
}
