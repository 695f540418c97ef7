use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StationError {
    #[error("Observer '{observer}' failed: {source}")]
    ObserverFailed {
        observer: String,
        #[source]
        source: Box<StationError>,
    },

    #[error("Notification incomplete: {delivered} delivered, {} failed", .failures.len())]
    NotificationIncomplete {
        delivered: usize,
        failures: Vec<StationError>,
    },

    #[error("Sensor reading unavailable: {0}")]
    ReadingUnavailable(String),

    /// An observer refused a reading it cannot show.
    #[error("Display rejected reading: {0}")]
    DisplayRejected(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StationError>;
