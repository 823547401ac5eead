use chrono::{DateTime, Utc};

const DEFAULT_FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Fixed evaluation instant; the wall clock is used when absent
    pub now: Option<DateTime<Utc>>,
    pub forecast_days: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            now: None,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RUST_LOG") {
            config.log_level = val;
        }
        if let Ok(val) = std::env::var("SRS_NOW") {
            config.now = parse_instant(&val);
            if config.now.is_none() {
                eprintln!("ignoring SRS_NOW={val}: expected an RFC 3339 timestamp");
            }
        }
        if let Ok(val) = std::env::var("SRS_FORECAST_DAYS") {
            config.forecast_days = val.parse().unwrap_or(DEFAULT_FORECAST_DAYS);
        }

        config
    }

    /// Instant the report is evaluated at.
    pub fn resolve_now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
