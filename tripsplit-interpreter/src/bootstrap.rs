use chrono::{Local, NaiveDate};
use std::{borrow::Cow, env, path::PathBuf};
use tracing_subscriber::EnvFilter;
use tripsplit_domain::TripId;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings resolved from the command line, the environment and `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub ledger_path: PathBuf,
    pub trip: Option<TripId>,
    pub today: NaiveDate,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_parts(
            env::args().skip(1),
            env::var("TRIPSPLIT_LEDGER").ok(),
            env::var("TRIPSPLIT_TODAY").ok(),
        )
    }

    fn from_parts(
        mut args: impl Iterator<Item = String>,
        ledger_var: Option<String>,
        today_var: Option<String>,
    ) -> Result<Self, Cow<'static, str>> {
        let ledger_path = args
            .next()
            .or(ledger_var)
            .map(PathBuf::from)
            .ok_or("Usage: tripsplit <ledger-file> [trip-id] (or set TRIPSPLIT_LEDGER)")?;

        let trip = args
            .next()
            .map(|raw| {
                raw.parse::<u64>()
                    .map(TripId)
                    .map_err(|_| format!("Trip id must be a number, got '{raw}'"))
            })
            .transpose()?;

        let today = match today_var {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|err| format!("TRIPSPLIT_TODAY='{raw}' is not a date: {err}"))?,
            None => Local::now().date_naive(),
        };

        Ok(Self {
            ledger_path,
            trip,
            today,
        })
    }
}

/// Installs the stderr subscriber, filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
