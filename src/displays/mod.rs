//! Display observers.
//!
//! Each display writes one plain text line per reading to its sink
//! (stdout unless told otherwise). Write failures are returned to the
//! subject, which handles them according to its notify policy.

pub mod general;
pub mod json;
pub mod statistics;

pub use general::GeneralDisplay;
pub use json::JsonDisplay;
pub use statistics::StatisticDisplay;

use crate::weather::ObserverRef;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};

/// Output sink shared by the displays.
pub type DisplaySink = Box<dyn Write + Send>;

fn stdout_sink() -> DisplaySink {
    Box::new(std::io::stdout())
}

/// Displays that can be selected from configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    General,
    Statistics,
    Json,
}

/// Build a display of the given kind writing to stdout.
pub fn build_display(kind: DisplayKind) -> ObserverRef {
    match kind {
        DisplayKind::General => Arc::new(GeneralDisplay::new()),
        DisplayKind::Statistics => Arc::new(StatisticDisplay::new()),
        DisplayKind::Json => Arc::new(JsonDisplay::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{Subject, WeatherData};
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_parses_case_insensitive() {
        assert_eq!("general".parse::<DisplayKind>().unwrap(), DisplayKind::General);
        assert_eq!("STATISTICS".parse::<DisplayKind>().unwrap(), DisplayKind::Statistics);
        assert!("radar".parse::<DisplayKind>().is_err());
    }

    #[test]
    fn test_every_kind_builds_an_observer() {
        let station = WeatherData::new();
        for kind in DisplayKind::iter() {
            station.register_observer(build_display(kind));
        }
        assert_eq!(station.observer_count(), 3);
    }
}
