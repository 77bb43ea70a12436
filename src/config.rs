use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REPORT_PATH: &str = "analysis_report.json";
pub const DEFAULT_QUERY: &str = "Austin, TX";

/// Runtime settings for the command-line run, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// JSON file of listings; the built-in samples are used when absent
    pub listings_path: Option<PathBuf>,
    pub report_path: PathBuf,
    pub query: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            listings_path: None,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            log_level: get("RENTAL_SCOUT_LOG").unwrap_or(defaults.log_level),
            listings_path: get("RENTAL_SCOUT_LISTINGS").map(PathBuf::from),
            report_path: get("RENTAL_SCOUT_REPORT")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_path),
            query: get("RENTAL_SCOUT_QUERY").unwrap_or(defaults.query),
        }
    }
}
