//! Machine-readable display: one JSON object per reading.

use super::{DisplaySink, stdout_sink};
use crate::error::Result;
use crate::weather::{Observer, Reading};
use parking_lot::Mutex;
use std::io::Write;

pub struct JsonDisplay {
    out: Mutex<DisplaySink>,
}

impl JsonDisplay {
    pub fn new() -> Self {
        Self::with_sink(stdout_sink())
    }

    pub fn with_sink(sink: DisplaySink) -> Self {
        Self {
            out: Mutex::new(sink),
        }
    }
}

impl Default for JsonDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for JsonDisplay {
    fn update(&self, reading: Reading) -> Result<()> {
        let line = serde_json::to_string(&reading)?;
        let mut out = self.out.lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displays::test_sink::SharedBuffer;

    #[test]
    fn test_emits_one_object_per_line() {
        let buffer = SharedBuffer::default();
        let display = JsonDisplay::with_sink(Box::new(buffer.clone()));

        display.update(Reading::new(25, 80, 1)).unwrap();
        display.update(Reading::new(-4, 91, 2)).unwrap();

        let parsed: Vec<Reading> = buffer
            .lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, [Reading::new(25, 80, 1), Reading::new(-4, 91, 2)]);
        assert_eq!(
            buffer.lines()[0],
            r#"{"temperature":25,"humidity":80,"pressure":1}"#
        );
    }
}
