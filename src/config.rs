use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "Pretriage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_VERSION: &str = "v1";

pub const ENV_MAX_SYMPTOMS: &str = "PRETRIAGE_MAX_SYMPTOMS";
pub const ENV_VOICE_LANGUAGE: &str = "PRETRIAGE_VOICE_LANGUAGE";
pub const ENV_VOICE_RATE: &str = "PRETRIAGE_VOICE_RATE";

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "pretriage_lib=info"
}

/// Tunables for the triage service and the voice layer in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageSettings {
    /// Maximum number of symptoms accepted per consultation.
    pub max_symptoms: usize,
    pub min_severity: i32,
    pub max_severity: i32,
    /// Language of spoken output.
    pub voice_language: String,
    /// Speech rate in words per minute.
    pub voice_rate: u32,
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            max_symptoms: 10,
            min_severity: crate::validation::MIN_SEVERITY,
            max_severity: crate::validation::MAX_SEVERITY,
            voice_language: "es".into(),
            voice_rate: 150,
        }
    }
}

impl TriageSettings {
    /// Defaults overridden by `PRETRIAGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Unparsable values
    /// are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_MAX_SYMPTOMS) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => settings.max_symptoms = n,
                _ => tracing::warn!(key = ENV_MAX_SYMPTOMS, value = %raw, "Ignoring invalid setting"),
            }
        }
        if let Some(raw) = lookup(ENV_VOICE_LANGUAGE) {
            let lang = raw.trim();
            if lang.is_empty() {
                tracing::warn!(key = ENV_VOICE_LANGUAGE, "Ignoring empty setting");
            } else {
                settings.voice_language = lang.to_string();
            }
        }
        if let Some(raw) = lookup(ENV_VOICE_RATE) {
            match raw.trim().parse::<u32>() {
                Ok(rate) => settings.voice_rate = rate,
                Err(_) => tracing::warn!(key = ENV_VOICE_RATE, value = %raw, "Ignoring invalid setting"),
            }
        }

        settings
    }
}
