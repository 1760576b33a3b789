//! Vendor and LLM credentials loaded from the environment.
//!
//! Credentials are required at startup: a missing or empty variable is a
//! [`ConfigError`] so the server fails fast instead of erroring per request.
//! Secrets are wrapped in [`SecretString`] and never logged.

use secrecy::SecretString;

use coachlink_types::error::ConfigError;

pub const STREAM_API_KEY: &str = "STREAM_API_KEY";
pub const STREAM_API_SECRET: &str = "STREAM_API_SECRET";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Chat vendor credentials.
///
/// The API key identifies the vendor app and is also given to clients, so it
/// is a plain string. The secret signs every token.
#[derive(Clone)]
pub struct StreamCredentials {
    pub api_key: String,
    pub api_secret: SecretString,
}

/// All credentials the server needs.
#[derive(Clone)]
pub struct Credentials {
    pub stream: StreamCredentials,
    pub openai_api_key: SecretString,
}

impl StreamCredentials {
    /// Read `STREAM_API_KEY` and `STREAM_API_SECRET` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read the vendor credentials through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required(&lookup, STREAM_API_KEY)?,
            api_secret: SecretString::from(required(&lookup, STREAM_API_SECRET)?),
        })
    }
}

impl Credentials {
    /// Read every credential from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read every credential through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            stream: StreamCredentials::from_lookup(&lookup)?,
            openai_api_key: SecretString::from(required(&lookup, OPENAI_API_KEY)?),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    match lookup(key) {
        None => Err(ConfigError::MissingEnv(key.to_string())),
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyEnv(key.to_string())),
        Some(v) => Ok(v.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_all_credentials() {
        let vars = env(&[
            (STREAM_API_KEY, "key123"),
            (STREAM_API_SECRET, " secret456 "),
            (OPENAI_API_KEY, "sk-test"),
        ]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.stream.api_key, "key123");
        assert_eq!(creds.stream.api_secret.expose_secret(), "secret456");
        assert_eq!(creds.openai_api_key.expose_secret(), "sk-test");
    }

    #[test]
    fn missing_secret_fails_fast() {
        let vars = env(&[(STREAM_API_KEY, "key123"), (OPENAI_API_KEY, "sk-test")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned())
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::MissingEnv(ref k) if k == STREAM_API_SECRET));
    }

    #[test]
    fn empty_value_is_rejected() {
        let vars = env(&[(STREAM_API_KEY, "  "), (STREAM_API_SECRET, "s")]);
        let err = StreamCredentials::from_lookup(|k| vars.get(k).cloned())
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::EmptyEnv(ref k) if k == STREAM_API_KEY));
    }

    #[test]
    fn stream_credentials_do_not_need_llm_key() {
        let vars = env(&[(STREAM_API_KEY, "k"), (STREAM_API_SECRET, "s")]);
        assert!(StreamCredentials::from_lookup(|k| vars.get(k).cloned()).is_ok());
    }
}
