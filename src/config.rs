use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::common::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_EVIDENCE_BUCKET: &str = "payment-screenshots";
const DEFAULT_FESTIVAL_STARTS_AT: &str = "2026-03-10T00:00:00+05:30";
const DEFAULT_SESSION_CACHE_TTL_SECS: u64 = 60;
const DEFAULT_AMBIENT_STAR_COUNT: usize = 80;
const DEFAULT_MAX_EVIDENCE_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_WIZARD_DRAFTS: usize = 1000;
const DEFAULT_WIZARD_EVIDENCE_BUDGET: usize = 256 * 1024 * 1024;
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub evidence_bucket: String,
    pub festival_starts_at: DateTime<FixedOffset>,
    pub session_cache_ttl: Duration,
    pub ambient_star_count: usize,
    pub max_evidence_bytes: usize,
    /// Registration drafts held in memory at once.
    pub max_wizard_drafts: usize,
    /// Evidence bytes held across all drafts at once.
    pub wizard_evidence_budget: usize,
    pub static_dir: PathBuf,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required =
            |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let number = |key: &'static str, default: usize| {
            parse_or(get(key), key, default)
        };

        let festival_starts_at = get("FESTIVAL_STARTS_AT")
            .unwrap_or_else(|| DEFAULT_FESTIVAL_STARTS_AT.to_string());
        let festival_starts_at =
            DateTime::parse_from_rfc3339(&festival_starts_at).map_err(|e| {
                ConfigError::Invalid {
                    key: "FESTIVAL_STARTS_AT",
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            bind_addr: get("BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            supabase_url: required("SUPABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            evidence_bucket: get("EVIDENCE_BUCKET")
                .unwrap_or_else(|| DEFAULT_EVIDENCE_BUCKET.to_string()),
            festival_starts_at,
            session_cache_ttl: Duration::from_secs(parse_or(
                get("SESSION_CACHE_TTL_SECS"),
                "SESSION_CACHE_TTL_SECS",
                DEFAULT_SESSION_CACHE_TTL_SECS,
            )?),
            ambient_star_count: number(
                "AMBIENT_STAR_COUNT",
                DEFAULT_AMBIENT_STAR_COUNT,
            )?,
            max_evidence_bytes: number(
                "MAX_EVIDENCE_BYTES",
                DEFAULT_MAX_EVIDENCE_BYTES,
            )?,
            max_wizard_drafts: number(
                "MAX_WIZARD_DRAFTS",
                DEFAULT_MAX_WIZARD_DRAFTS,
            )?,
            wizard_evidence_budget: number(
                "WIZARD_EVIDENCE_BUDGET_BYTES",
                DEFAULT_WIZARD_EVIDENCE_BUDGET,
            )?,
            static_dir: PathBuf::from(
                get("STATIC_DIR")
                    .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
        })
    }
}

fn parse_or<T>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{}: {}", raw, e),
        }),
    }
}
