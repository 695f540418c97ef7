//! The weather subject: observer registry plus notification.
//!
//! `WeatherData` keeps an ordered list of observers and pushes the current
//! reading to each of them, in registration order, when notified.
//!
//! Notification works on a snapshot of the list taken before the first
//! observer runs. Observers may therefore register or remove observers
//! (including themselves) from inside `update`; the change applies to the
//! next notification.

use super::observer::ObserverRef;
use crate::error::{Result, StationError};
use crate::sensors::{ReadingSource, StubSensors};
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use strum::{Display, EnumString};

/// What to do when an observer fails during notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum NotifyPolicy {
    /// Stop at the first failing observer and report it.
    #[default]
    FailFast,
    /// Notify every observer, then report all failures together.
    BestEffort,
}

/// Registry and notification operations of a subject.
pub trait Subject {
    /// Append an observer. Duplicates are allowed and notified once per entry.
    fn register_observer(&self, observer: ObserverRef);

    /// Remove the first entry that is the same observer (pointer identity).
    ///
    /// Returns `false` when the observer was not registered.
    fn remove_observer(&self, observer: &ObserverRef) -> bool;

    /// Push the current reading to every registered observer.
    ///
    /// Returns the number of observers that accepted the reading.
    fn notify_observers(&self) -> Result<usize>;
}

/// Weather station subject.
pub struct WeatherData {
    source: Arc<dyn ReadingSource>,
    observers: RwLock<Vec<ObserverRef>>,
    policy: NotifyPolicy,
    /// Source version delivered by the last successful notification.
    last_version: AtomicU32,
}

impl WeatherData {
    /// Create a subject reading from the stub sensors.
    pub fn new() -> Self {
        Self::with_source(Arc::new(StubSensors::default()))
    }

    /// Create a subject reading from the given source.
    pub fn with_source(source: Arc<dyn ReadingSource>) -> Self {
        let last_version = source.version();
        Self {
            source,
            observers: RwLock::new(Vec::new()),
            policy: NotifyPolicy::default(),
            last_version: AtomicU32::new(last_version),
        }
    }

    /// Set the failure policy used by notifications.
    pub fn with_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Number of registered entries, duplicates included.
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Notify only if the source changed since the last notification.
    ///
    /// Returns `Ok(None)` when the source version is unchanged.
    ///
    /// A version only counts as seen once a notification reached every
    /// observer without error. After a failed notification, or one made with
    /// no observers registered (`Ok(Some(0))`), the next call notifies again.
    pub fn measurements_changed(&self) -> Result<Option<usize>> {
        let current = self.source.version();
        if current == self.last_version.load(Ordering::SeqCst) {
            debug!("Source version {} unchanged, skipping notification", current);
            return Ok(None);
        }
        self.notify_observers().map(Some)
    }

    fn snapshot(&self) -> Vec<ObserverRef> {
        self.observers.read().clone()
    }
}

impl Default for WeatherData {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for WeatherData {
    fn register_observer(&self, observer: ObserverRef) {
        debug!("Registering observer {}", observer.name());
        self.observers.write().push(observer);
    }

    fn remove_observer(&self, observer: &ObserverRef) -> bool {
        let mut observers = self.observers.write();
        match observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                debug!("Removed observer {}", observer.name());
                true
            }
            None => {
                debug!("Observer {} not registered, nothing removed", observer.name());
                false
            }
        }
    }

    fn notify_observers(&self) -> Result<usize> {
        // Call observers without holding the lock
        let observers = self.snapshot();
        if observers.is_empty() {
            debug!("No observers registered");
            return Ok(0);
        }

        // Read the version before the values so a concurrent change is
        // picked up by the next measurements_changed()
        let version = self.source.version();
        let reading = self.source.read()?;
        info!("Notifying {} observer(s): {}", observers.len(), reading);

        let mut delivered = 0;
        let mut failures = Vec::new();
        for observer in &observers {
            match observer.update(reading) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    let failure = StationError::ObserverFailed {
                        observer: observer.name().to_string(),
                        source: Box::new(e),
                    };
                    match self.policy {
                        NotifyPolicy::FailFast => return Err(failure),
                        NotifyPolicy::BestEffort => {
                            warn!("{}", failure);
                            failures.push(failure);
                        }
                    }
                }
            }
        }

        if failures.is_empty() {
            // Only a complete delivery marks the version as seen
            self.last_version.store(version, Ordering::SeqCst);
            Ok(delivered)
        } else {
            Err(StationError::NotificationIncomplete {
                delivered,
                failures,
            })
        }
    }
}
