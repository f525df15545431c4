//! Engine configuration.
//!
//! The configuration is built once at startup and handed to the services that
//! need it. Nothing in the crate reads it from global state.

use chrono::{FixedOffset, Offset, Utc};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the target timezone offset.
pub const TIMEZONE_VAR: &str = "TASKSMITH_TIMEZONE";
/// Environment variable toggling language inference.
pub const INFERENCE_ENABLED_VAR: &str = "TASKSMITH_INFERENCE_ENABLED";
/// Environment variable holding the inference timeout in milliseconds.
pub const INFERENCE_TIMEOUT_VAR: &str = "TASKSMITH_INFERENCE_TIMEOUT_MS";
/// Environment variable overriding the completion endpoint.
pub const COMPLETION_ENDPOINT_VAR: &str = "TASKSMITH_COMPLETION_ENDPOINT";
/// Environment variable overriding the completion model.
pub const COMPLETION_MODEL_VAR: &str = "TASKSMITH_COMPLETION_MODEL";
/// Environment variable holding the completion API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Offset of Indian Standard Time from UTC, in seconds.
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The timezone value is not a `+HH:MM` offset or `UTC`.
    #[error("invalid timezone offset '{0}', expected +HH:MM, -HH:MM or UTC")]
    InvalidTimezone(String),

    /// A boolean flag could not be parsed.
    #[error("invalid boolean for {name}: '{value}'")]
    InvalidFlag {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The inference timeout is not a positive integer.
    #[error("invalid inference timeout '{0}', expected milliseconds > 0")]
    InvalidTimeout(String),
}

/// Settings for the language inference step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Whether inference runs at all. When disabled every ingestion uses the
    /// fallback path.
    pub enabled: bool,
    /// Upper bound for one completion round trip.
    pub timeout: Duration,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Bearer token for the completion service.
    pub api_key: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: DEFAULT_TIMEOUT,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
        }
    }
}

impl InferenceConfig {
    /// Creates a configuration with inference switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Replaces the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Top-level configuration shared by the ingestion and query services.
///
/// # Examples
///
/// ```
/// use tasksmith::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.timezone.local_minus_utc(), 19_800);
/// assert!(config.inference.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target timezone for due dates and bucket boundaries.
    pub timezone: FixedOffset,
    /// Inference settings.
    pub inference: InferenceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: ist_offset(),
            inference: InferenceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given timezone and default inference
    /// settings.
    #[must_use]
    pub fn with_timezone(timezone: FixedOffset) -> Self {
        Self {
            timezone,
            ..Self::default()
        }
    }

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Missing or blank values keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(raw) = read(TIMEZONE_VAR) {
            config.timezone = parse_offset(&raw)?;
        }
        if let Some(raw) = read(INFERENCE_ENABLED_VAR) {
            config.inference.enabled = parse_flag(INFERENCE_ENABLED_VAR, &raw)?;
        }
        if let Some(raw) = read(INFERENCE_TIMEOUT_VAR) {
            config.inference.timeout = parse_timeout(&raw)?;
        }
        if let Some(endpoint) = read(COMPLETION_ENDPOINT_VAR) {
            config.inference.endpoint = endpoint;
        }
        if let Some(model) = read(COMPLETION_MODEL_VAR) {
            config.inference.model = model;
        }
        config.inference.api_key = read(API_KEY_VAR);
        Ok(config)
    }
}

/// Returns the UTC+05:30 offset used when nothing else is configured.
#[must_use]
pub fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(utc_offset)
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM`, `UTC` or `Z` into an offset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTimezone`] for any other shape.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidTimezone(raw.to_owned());
    let value = raw.trim();
    if value.eq_ignore_ascii_case("utc") || value.eq_ignore_ascii_case("z") {
        return Ok(utc_offset());
    }

    let mut chars = value.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(invalid()),
    };
    let digits: String = chars.filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hour_digits, minute_digits) = digits.split_at(2);
    let hours: i32 = hour_digits.parse().map_err(|_| invalid())?;
    let minutes: i32 = minute_digits.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_owned(),
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
