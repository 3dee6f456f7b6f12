use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub model: String,
    pub agent_debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, applying defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT").unwrap_or_else(|| "8000".to_string());
        let agent_debug = lookup("AGENT_DEBUG").unwrap_or_else(|| "true".to_string());

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid number, got '{}'", port))?,
            log_level: lookup("RUST_LOG")
                .unwrap_or_else(|| "report_agent_svc=info,tower_http=debug".to_string()),
            model: lookup("AGENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            agent_debug: parse_flag(&agent_debug)
                .with_context(|| format!("AGENT_DEBUG must be a boolean, got '{}'", agent_debug))?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.model, "deepseek/deepseek-chat");
        assert!(config.agent_debug);
        assert_eq!(config.log_level, "report_agent_svc=info,tower_http=debug");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("AGENT_MODEL", "openai/gpt-4o-mini"),
            ("AGENT_DEBUG", "false"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert!(!config.agent_debug);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "abc")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid number"));
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_invalid_agent_debug_is_error() {
        let err = Config::from_lookup(lookup_from(&[("AGENT_DEBUG", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("AGENT_DEBUG must be a boolean"));
    }

    fn config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            model: DEFAULT_MODEL.to_string(),
            agent_debug: true,
        }
    }

    #[test]
    fn test_addresses() {
        let config = config();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.server_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
