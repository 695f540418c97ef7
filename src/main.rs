//! Weather station entry point.
//!
//! Usage:
//!   cargo run
//!   cargo run -- --temperature 18 --display json --display statistics
//!   cargo run -- --policy best-effort --rounds 3

use clap::Parser;
use log::{error, info};
use std::sync::Arc;
use weather_station::config::{self, Config};
use weather_station::displays::{self, DisplayKind};
use weather_station::sensors::StubSensors;
use weather_station::weather::{NotifyPolicy, Subject, WeatherData};

#[derive(Parser)]
#[command(name = "weather-station")]
#[command(about = "Push weather readings to the configured displays")]
struct Cli {
    /// Override the reported temperature
    #[arg(long, allow_hyphen_values = true)]
    temperature: Option<i32>,

    /// Override the reported humidity
    #[arg(long)]
    humidity: Option<i32>,

    /// Override the reported pressure
    #[arg(long)]
    pressure: Option<i32>,

    /// Failure policy: fail-fast or best-effort
    #[arg(long, value_parser = parse_policy)]
    policy: Option<NotifyPolicy>,

    /// Display to register (repeatable): general, statistics, json
    #[arg(long = "display", value_parser = parse_display)]
    displays: Vec<DisplayKind>,

    /// Number of notifications to send
    #[arg(long, env = "WEATHER_ROUNDS", default_value_t = 1)]
    rounds: u32,
}

fn parse_policy(s: &str) -> Result<NotifyPolicy, String> {
    s.parse()
        .map_err(|_| format!("unknown policy '{s}' (expected fail-fast or best-effort)"))
}

fn parse_display(s: &str) -> Result<DisplayKind, String> {
    s.parse()
        .map_err(|_| format!("unknown display '{s}' (expected general, statistics or json)"))
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(t) = self.temperature {
            config.station.temperature = t;
        }
        if let Some(h) = self.humidity {
            config.station.humidity = h;
        }
        if let Some(p) = self.pressure {
            config.station.pressure = p;
        }
        if let Some(policy) = self.policy {
            config.notify.policy = policy;
        }
        if !self.displays.is_empty() {
            config.displays = self.displays;
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    // Load .env file before anything else
    config::load_dotenv();
    init_logger();

    let cli = Cli::parse();
    let rounds = cli.rounds;
    let mut config = Config::from_env();
    cli.apply(&mut config);

    info!("Starting weather station");
    info!("  Reading: {}", config.station.reading());
    info!("  Policy: {}", config.notify.policy);
    info!(
        "  Displays: {}",
        config
            .displays
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let sensors = Arc::new(StubSensors::new(config.station.reading()));
    let weather_data = WeatherData::with_source(sensors).with_policy(config.notify.policy);

    for kind in &config.displays {
        weather_data.register_observer(displays::build_display(*kind));
    }

    for round in 1..=rounds {
        match weather_data.notify_observers() {
            Ok(delivered) => info!("Round {}: {} display(s) updated", round, delivered),
            Err(e) => {
                error!("Round {}: notification failed: {}", round, e);
                std::process::exit(1);
            }
        }
    }

    info!("Weather station stopped");
}
