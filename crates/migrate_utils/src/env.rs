use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvError {
    #[error("expect env {0}")]
    Missing(String),
    #[error("env {key} has invalid value {value:?}")]
    Invalid { key: String, value: String },
}

pub fn get_env(key: &str, default_value: Option<String>) -> String {
    match default_value {
        Some(value) => std::env::var(key).unwrap_or(value),
        None => std::env::var(key).unwrap_or_else(|_| panic!("expect env {}", key)),
    }
}

/// Like [`get_env`] but reports a missing or blank variable instead of panicking.
pub fn try_get_env(key: &str) -> Result<String, EnvError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(EnvError::Missing(key.to_string())),
    }
}

/// Optional variable; blank values count as unset.
pub fn get_optional_env(key: &str) -> Option<String> {
    try_get_env(key).ok()
}

/// Reads `key` and parses it, falling back to `default_value` when unset.
pub fn parse_env_or<T: FromStr>(key: &str, default_value: T) -> Result<T, EnvError> {
    match get_optional_env(key) {
        Some(value) => value.parse().map_err(|_| EnvError::Invalid {
            key: key.to_string(),
            value,
        }),
        None => Ok(default_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_is_reported() {
        let key = "MIGRATE_UTILS_TEST_MISSING";
        std::env::remove_var(key);
        assert_eq!(try_get_env(key), Err(EnvError::Missing(key.to_string())));
        assert_eq!(get_optional_env(key), None);
    }

    #[test]
    fn blank_env_counts_as_unset() {
        let key = "MIGRATE_UTILS_TEST_BLANK";
        std::env::set_var(key, "   ");
        assert!(try_get_env(key).is_err());
        assert_eq!(parse_env_or(key, 7u32), Ok(7));
    }

    #[test]
    fn parse_env_rejects_garbage() {
        let key = "MIGRATE_UTILS_TEST_GARBAGE";
        std::env::set_var(key, "three");
        assert_eq!(
            parse_env_or(key, 3u32),
            Err(EnvError::Invalid {
                key: key.to_string(),
                value: "three".to_string()
            })
        );
        std::env::set_var(key, " 5 ");
        assert_eq!(parse_env_or(key, 3u32), Ok(5));
    }
}
