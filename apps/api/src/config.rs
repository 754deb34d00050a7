use anyhow::{bail, Context, Result};

use crate::matching::weights::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            skills: weight(&lookup, "MATCH_WEIGHT_SKILLS", defaults.skills)?,
            experience: weight(&lookup, "MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
            location: weight(&lookup, "MATCH_WEIGHT_LOCATION", defaults.location)?,
            salary: weight(&lookup, "MATCH_WEIGHT_SALARY", defaults.salary)?,
        };
        if !weights.is_valid() {
            bail!(
                "MATCH_WEIGHT_* must be non-negative and total 100 (got {})",
                weights.total()
            );
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            weights,
        })
    }
}

fn weight(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> Result<f64> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("'{key}' must be a number, got '{raw}'")),
        None => Ok(default),
    }
}
