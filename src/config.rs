use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

fn default_verify_delay_ms() -> u64 {
    1500
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_notice_ttl_ms() -> u64 {
    5000
}

/// Wizard settings. Every field has a default, and a missing configuration
/// file means all defaults.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Simulated latency of the entry-time eligibility check.
    #[serde(default = "default_verify_delay_ms")]
    pub verify_delay_ms: u64,
    /// Simulated latency of the final submission.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long a notice stays on screen before auto-clearing.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            verify_delay_ms: default_verify_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path).wrap_err("cannot read configuration file")?;
        toml::from_str(&raw).wrap_err("cannot parse configuration file")
    }

    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulated_backend() {
        let config = Config::default();
        assert_eq!(config.verify_delay(), Duration::from_millis(1500));
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.notice_ttl(), Duration::from_millis(5000));
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: Config = toml::from_str("notice_ttl_ms = 2500").unwrap();
        assert_eq!(config.notice_ttl_ms, 2500);
        assert_eq!(config.verify_delay_ms, 1500);
        assert_eq!(config.submit_delay_ms, 2000);
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.notice_ttl_ms, 5000);
    }
}
