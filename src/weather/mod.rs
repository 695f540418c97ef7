//! Subject/observer core of the weather station.
//!
//! A [`Subject`] holds an ordered list of [`Observer`]s and pushes the
//! current [`Reading`] to each of them when notified.

pub mod observer;
pub mod reading;
pub mod subject;

pub use observer::{CallbackObserver, Observer, ObserverRef};
pub use reading::Reading;
pub use subject::{NotifyPolicy, Subject, WeatherData};
