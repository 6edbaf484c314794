//! Gateway configuration: one TOML file plus startup overrides.

use crate::foundation::{
    GatewayError, Result, DEFAULT_LEDGER_CALL_TIMEOUT_MS, DEFAULT_QUERY_ATTEMPTS, DEFAULT_QUERY_RETRY_DELAY_MS,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub signers: SignerPoolConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Filter expression for the logger (e.g. `"info"`, `"pharmanet_core=debug"`, `"root=info"`).
    #[serde(default = "default_log_filters")]
    pub log_filters: String,
    /// Optional directory for log files. Console-only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub endpoint_url: String,
    /// Bound on every remote call (simulate, submit, query).
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
    /// Attempts for side-effect-free queries. Submissions are never retried.
    #[serde(default = "default_query_attempts")]
    pub query_attempts: usize,
    #[serde(default = "default_query_retry_delay_ms")]
    pub query_retry_delay_ms: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignerPoolConfig {
    /// Enumerated signer identities available to the operator.
    #[serde(default)]
    pub accounts: Vec<String>,
    /// Index of the designated writer for all mutating calls.
    #[serde(default)]
    pub writer_index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_rate_limit_rps")]
    pub rps: u32,
    #[serde(default = "default_rate_limit_burst")]
    pub burst: u32,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_filters() -> String {
    "info".to_string()
}

const fn default_call_timeout_ms() -> u64 {
    DEFAULT_LEDGER_CALL_TIMEOUT_MS
}

const fn default_query_attempts() -> usize {
    DEFAULT_QUERY_ATTEMPTS
}

const fn default_query_retry_delay_ms() -> u64 {
    DEFAULT_QUERY_RETRY_DELAY_MS
}

const fn default_rate_limit_rps() -> u32 {
    50
}

const fn default_rate_limit_burst() -> u32 {
    20
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            ledger: LedgerConfig::default(),
            signers: SignerPoolConfig::default(),
            rate_limit: RateLimitConfig::default(),
            log_filters: default_log_filters(),
            log_dir: None,
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            call_timeout_ms: default_call_timeout_ms(),
            query_attempts: default_query_attempts(),
            query_retry_delay_ms: default_query_retry_delay_ms(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { rps: default_rate_limit_rps(), burst: default_rate_limit_burst() }
    }
}

impl GatewayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| GatewayError::Config(format!("cannot read {}: {}", path.display(), err)))?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addr
            .parse::<SocketAddr>()
            .map_err(|err| GatewayError::Config(format!("invalid listen_addr {}: {}", self.listen_addr, err)))?;
        if self.ledger.endpoint_url.trim().is_empty() {
            return Err(GatewayError::Config("ledger.endpoint_url is required".to_string()));
        }
        if !self.ledger.endpoint_url.starts_with("http://") && !self.ledger.endpoint_url.starts_with("https://") {
            return Err(GatewayError::Config(format!("ledger.endpoint_url must be http(s): {}", self.ledger.endpoint_url)));
        }
        if self.ledger.call_timeout_ms == 0 {
            return Err(GatewayError::Config("ledger.call_timeout_ms must be positive".to_string()));
        }
        if self.ledger.query_attempts == 0 {
            return Err(GatewayError::Config("ledger.query_attempts must be at least 1".to_string()));
        }
        if self.signers.accounts.is_empty() {
            return Err(GatewayError::Config("signers.accounts must list at least one identity".to_string()));
        }
        if self.signers.writer_index >= self.signers.accounts.len() {
            return Err(GatewayError::Config(format!(
                "signers.writer_index {} out of range for {} accounts",
                self.signers.writer_index,
                self.signers.accounts.len()
            )));
        }
        Ok(())
    }
}
