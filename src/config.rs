use dotenvy::dotenv;
use std::env;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://api.valyu.ai/v1";

pub struct Config {
    pub api_key: String,
    pub api_base: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Error: {0} environment variable not set")]
    MissingRequired(&'static str),
}

impl Config {
    /// Load through a variable lookup; the binary passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get_env(&lookup, "VALYU_API_KEY")?;
        let api_base = get_env_or_default(&lookup, "VALYU_API_BASE", DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Ok(Config { api_key, api_base })
    }
}

/// Load `.env` from the working directory if present. Variables already set
/// in the process environment win.
pub fn load_dotenv() {
    dotenv().ok();
}

/// Tracing filter for the binary. Off unless `VALYU_LOG` names a level, so
/// stderr carries only the failure envelope by default.
pub fn log_level() -> LevelFilter {
    parse_log_level(env::var("VALYU_LOG").ok().as_deref())
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|v| v.parse().ok()).unwrap_or(LevelFilter::OFF)
}

fn get_env<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingRequired(key))
}

fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_public_api_base() {
        let config = Config::from_lookup(lookup_from(&[("VALYU_API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_api_base_override_drops_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("VALYU_API_KEY", "k"),
            ("VALYU_API_BASE", "http://127.0.0.1:9000/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn test_logging_is_off_unless_requested() {
        assert_eq!(parse_log_level(None), LevelFilter::OFF);
        assert_eq!(parse_log_level(Some("nonsense")), LevelFilter::OFF);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::DEBUG);
    }

    #[test]
    fn test_missing_or_empty_key_is_an_error() {
        for vars in [vec![], vec![("VALYU_API_KEY", "")]] {
            let err = Config::from_lookup(lookup_from(&vars)).err().unwrap();
            assert!(matches!(err, ConfigError::MissingRequired("VALYU_API_KEY")));
        }
    }
}
