//! Client configuration: where the API lives and which user it serves.

use crate::error::ConfigError;
use crate::types::UserId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "TODO_API_URL";
pub const USER_ID_ENV: &str = "TODO_USER_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` means the app has not been told whose list to show.
    pub user_id: Option<UserId>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, user_id: Option<UserId>) -> Self {
        Self {
            base_url: base_url.to_string(),
            user_id,
        }
    }

    /// Reads `TODO_API_URL` and `TODO_USER_ID` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_id = read(USER_ID_ENV).map(|raw| parse_user_id(&raw)).transpose()?;
        let config = Self { base_url, user_id };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ConfigError> {
    match raw.parse::<UserId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ConfigError::InvalidUserId {
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_url_and_user() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://api.example.com"),
            (USER_ID_ENV, " 1234 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.user_id, Some(1234));
    }

    #[test]
    fn blank_user_is_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(USER_ID_ENV, "   ")])).unwrap();
        assert_eq!(config.user_id, None);
    }

    #[test]
    fn rejects_malformed_user() {
        for raw in ["abc", "0", "-3"] {
            let err = ClientConfig::from_lookup(lookup(&[(USER_ID_ENV, raw)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidUserId {
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_empty_url() {
        let config = ClientConfig::new(" ", Some(1));
        assert_eq!(config.validate(), Err(ConfigError::EmptyBaseUrl));
    }
}
