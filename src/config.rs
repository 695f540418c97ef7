use crate::displays::DisplayKind;
use crate::weather::{NotifyPolicy, Reading};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Load environment variables from a .env file in the working directory.
/// Variables already present in the environment win.
pub fn load_dotenv() {
    let env_path = Path::new(".env");
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read .env: {}", e);
            return;
        }
    };

    for (key, value) in content.lines().filter_map(parse_dotenv_line) {
        if std::env::var(key).is_err() {
            // SAFETY: called from main before anything else reads the environment
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Split a `.env` line into key and value.
///
/// Blank lines and `#` comments yield `None`. Values may be wrapped in
/// single or double quotes; anything else is taken verbatim, spaces included.
fn parse_dotenv_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let mut value = value.trim();
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value = &value[1..value.len() - 1];
    }
    Some((key, value))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub station: StationConfig,
    pub notify: NotifyConfig,
    pub displays: Vec<DisplayKind>,
}

/// Values reported by the stub sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub temperature: i32,
    pub humidity: i32,
    pub pressure: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub policy: NotifyPolicy,
}

impl StationConfig {
    pub fn reading(&self) -> Reading {
        Reading::new(self.temperature, self.humidity, self.pressure)
    }
}

impl Default for Config {
    fn default() -> Self {
        let reading = Reading::default();
        Self {
            station: StationConfig {
                temperature: reading.temperature,
                humidity: reading.humidity,
                pressure: reading.pressure,
            },
            notify: NotifyConfig {
                policy: NotifyPolicy::default(),
            },
            displays: vec![DisplayKind::General, DisplayKind::Statistics],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values are logged and ignored, keeping the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(t) = parse_var(&lookup, "WEATHER_TEMPERATURE") {
            config.station.temperature = t;
        }
        if let Some(h) = parse_var(&lookup, "WEATHER_HUMIDITY") {
            config.station.humidity = h;
        }
        if let Some(p) = parse_var(&lookup, "WEATHER_PRESSURE") {
            config.station.pressure = p;
        }
        if let Some(policy) = parse_var(&lookup, "WEATHER_NOTIFY_POLICY") {
            config.notify.policy = policy;
        }

        if let Some(list) = lookup("WEATHER_DISPLAYS") {
            let mut displays = Vec::new();
            for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                match name.parse() {
                    Ok(kind) => displays.push(kind),
                    Err(_) => warn!("Ignoring unknown display '{}' in WEATHER_DISPLAYS", name),
                }
            }
            config.displays = displays;
        }

        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value '{}' for {}", raw, key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.station.reading(), Reading::new(25, 80, 1));
        assert_eq!(config.notify.policy, NotifyPolicy::FailFast);
        assert_eq!(
            config.displays,
            [DisplayKind::General, DisplayKind::Statistics]
        );
    }

    #[test]
    fn test_overrides_from_env() {
        let config = config_from(&[
            ("WEATHER_TEMPERATURE", "-7"),
            ("WEATHER_HUMIDITY", " 64 "),
            ("WEATHER_PRESSURE", "1013"),
            ("WEATHER_NOTIFY_POLICY", "best-effort"),
            ("WEATHER_DISPLAYS", "json, general"),
        ]);

        assert_eq!(config.station.reading(), Reading::new(-7, 64, 1013));
        assert_eq!(config.notify.policy, NotifyPolicy::BestEffort);
        assert_eq!(config.displays, [DisplayKind::Json, DisplayKind::General]);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("WEATHER_TEMPERATURE", "warm"),
            ("WEATHER_NOTIFY_POLICY", "whenever"),
            ("WEATHER_DISPLAYS", "radar,statistics"),
        ]);

        assert_eq!(config.station.temperature, 25);
        assert_eq!(config.notify.policy, NotifyPolicy::FailFast);
        assert_eq!(config.displays, [DisplayKind::Statistics]);
    }

    #[test]
    fn test_parse_dotenv_line() {
        assert_eq!(parse_dotenv_line("# comment"), None);
        assert_eq!(parse_dotenv_line("   "), None);
        assert_eq!(parse_dotenv_line("no_equals"), None);
        assert_eq!(
            parse_dotenv_line("WEATHER_DISPLAYS = general,json"),
            Some(("WEATHER_DISPLAYS", "general,json"))
        );
        assert_eq!(
            parse_dotenv_line("NAME=\"Roof station\""),
            Some(("NAME", "Roof station"))
        );
        assert_eq!(parse_dotenv_line("NAME='x'"), Some(("NAME", "x")));
        assert_eq!(parse_dotenv_line("EMPTY="), Some(("EMPTY", "")));
    }
}
