//! Observer capability for weather notifications.
//!
//! Anything that wants to react to new readings (render them, aggregate them,
//! forward them) implements [`Observer`] and registers with a
//! [`Subject`](super::Subject).

use super::Reading;
use crate::error::Result;
use std::sync::Arc;

/// Receives readings pushed by a subject.
///
/// `update` is called synchronously on the notifying thread, so it must not
/// block indefinitely.
///
/// # Example
/// ```ignore
/// struct Logger;
///
/// impl Observer for Logger {
///     fn update(&self, reading: Reading) -> Result<()> {
///         log::info!("new reading: {}", reading);
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send + Sync {
    /// React to a newly delivered reading.
    fn update(&self, reading: Reading) -> Result<()>;

    /// Name used in logs and failure reports.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared observer reference as held by a subject.
pub type ObserverRef = Arc<dyn Observer>;

type Callback = Box<dyn Fn(Reading) -> Result<()> + Send + Sync>;

/// Observer backed by a closure.
pub struct CallbackObserver {
    name: String,
    callback: Callback,
}

impl CallbackObserver {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(Reading) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            callback: Box::new(callback),
        }
    }

    /// Wrap into a shared reference ready for registration.
    pub fn into_ref(self) -> ObserverRef {
        Arc::new(self)
    }
}

impl Observer for CallbackObserver {
    fn update(&self, reading: Reading) -> Result<()> {
        (self.callback)(reading)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
