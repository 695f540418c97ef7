//! Weather station library.
//!
//! A [`WeatherData`](weather::WeatherData) subject reads the station's
//! sensors and pushes every reading to its registered observers, such as
//! the displays in [`displays`].

pub mod config;
pub mod displays;
pub mod error;
pub mod sensors;
pub mod weather;
