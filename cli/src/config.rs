use anyhow::{Context, Result};
use hr::ops::{DEFAULT_CHUNK_SIZE, DEFAULT_TOTAL_RECORDS};

/// Generation knobs, environment-driven with defaults.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub total_records: u64,
    pub chunk_size: usize,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let total_records = env_parsed("ROSTER_TOTAL_RECORDS", DEFAULT_TOTAL_RECORDS)?;
        let chunk_size = env_parsed("ROSTER_CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?;
        let seed = match std::env::var("ROSTER_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("ROSTER_SEED '{raw}' is not a valid u64"))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            total_records,
            chunk_size,
            seed,
        })
    }
}

fn env_parsed<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} '{raw}' is not a valid value")),
        Err(_) => Ok(default),
    }
}
