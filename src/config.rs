use alloy_primitives::Address;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::fs;
use std::str::FromStr;
use std::time::Duration;

/// Env var holding the signing key. Never read from the config file.
pub const PRIVATE_KEY_ENV: &str = "LOTTERY_PRIVATE_KEY";
const ADDRESS_ENV: &str = "LOTTERY_CONTRACT_ADDRESS";
const RPC_URL_ENV: &str = "LOTTERY_RPC_URL";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contract: ContractSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub general: General,
}

#[derive(Debug, Deserialize)]
pub struct ContractSection {
    /// Lottery contract address (e.g., "0x1234...")
    pub address: String,
    /// JSON-RPC endpoint
    pub rpc_url: String,
}

#[derive(Debug, Deserialize)]
pub struct DisplaySection {
    /// Currency label printed after every amount
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct General {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seconds between snapshot refreshes
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Upper bound on a single purchase, from submit to receipt
    #[serde(default = "default_purchase_timeout_secs")]
    pub purchase_timeout_secs: u64,
}

fn default_currency() -> String {
    "MATIC".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_refresh_secs() -> u64 {
    5
}

fn default_purchase_timeout_secs() -> u64 {
    120
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            refresh_secs: default_refresh_secs(),
            purchase_timeout_secs: default_purchase_timeout_secs(),
        }
    }
}

impl Config {
    /// Load from a TOML file, then apply env overrides.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
        let mut config = Self::parse(&contents)?;
        config.apply_env();
        Ok(config)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Replace address / rpc url with whatever `get` returns for their env keys.
    fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(address) = get(ADDRESS_ENV) {
            self.contract.address = address;
        }
        if let Some(url) = get(RPC_URL_ENV) {
            self.contract.rpc_url = url;
        }
    }

    pub fn contract_address(&self) -> anyhow::Result<Address> {
        Address::from_str(self.contract.address.trim())
            .map_err(|e| anyhow!("invalid contract address {:?}: {}", self.contract.address, e))
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.general.refresh_secs.max(1))
    }

    pub fn purchase_timeout(&self) -> Duration {
        Duration::from_secs(self.general.purchase_timeout_secs)
    }
}

/// Signing key from the environment, if one is configured.
pub fn private_key() -> Option<String> {
    std::env::var(PRIVATE_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            rpc_url = "http://localhost:8545"

            [display]
            currency = "ETH"

            [general]
            log_level = "debug"
            refresh_secs = 10
            purchase_timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.display.currency, "ETH");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.refresh_interval(), Duration::from_secs(10));
        assert_eq!(config.purchase_timeout(), Duration::from_secs(30));
        assert!(config.contract_address().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            rpc_url = "http://localhost:8545"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.currency, "MATIC");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.refresh_secs, 5);
        assert_eq!(config.general.purchase_timeout_secs, 120);
    }

    #[test]
    fn test_refresh_never_zero() {
        let config = Config::parse(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            rpc_url = "http://localhost:8545"

            [general]
            refresh_secs = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_bad_address() {
        let config = Config::parse(
            r#"
            [contract]
            address = "not-an-address"
            rpc_url = "http://localhost:8545"
            "#,
        )
        .unwrap();

        assert!(config.contract_address().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::parse(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            rpc_url = "http://localhost:8545"
            "#,
        )
        .unwrap();

        config.apply_overrides(|key| match key {
            "LOTTERY_CONTRACT_ADDRESS" => {
                Some("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_string())
            }
            "LOTTERY_RPC_URL" => Some("https://rpc.example.org".to_string()),
            _ => None,
        });

        assert_eq!(config.contract.address, "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512");
        assert_eq!(config.contract.rpc_url, "https://rpc.example.org");
        assert!(config.contract_address().is_ok());
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let mut config = Config::parse(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            rpc_url = "http://localhost:8545"
            "#,
        )
        .unwrap();

        config.apply_overrides(|_| None);
        assert_eq!(config.contract.address, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
        assert_eq!(config.contract.rpc_url, "http://localhost:8545");
    }

    #[test]
    fn test_missing_contract_section() {
        assert!(Config::parse("[general]\nlog_level = \"info\"").is_err());
    }
}
