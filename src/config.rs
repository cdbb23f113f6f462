use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CSV file the store is seeded from at startup.
    pub reviews_csv: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let reviews_csv = lookup("REVIEWS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/reviews.csv"));

        Ok(Config {
            host,
            port,
            reviews_csv,
        })
    }
}
