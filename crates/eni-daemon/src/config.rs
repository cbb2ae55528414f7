//! Daemon configuration file.
//!
//! Loads and validates the daemon configuration from TOML.
//! Default location: /etc/eni/enid.toml

use crate::error::{DaemonError, Result};
use eni_pool::{PoolConfig, RateLimit};
use eni_types::{IpStack, Limits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/eni/enid.toml";

/// How pods get their network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DaemonMode {
    /// Pods share interfaces, each pod gets secondary addresses.
    #[default]
    EniMultiIp,
    /// Each pod gets a whole interface.
    EniOnly,
}

impl DaemonMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DaemonMode::EniMultiIp => "eni-multi-ip",
            DaemonMode::EniOnly => "eni-only",
        }
    }
}

impl fmt::Display for DaemonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DaemonMode {
    type Err = DaemonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eni-multi-ip" => Ok(DaemonMode::EniMultiIp),
            "eni-only" => Ok(DaemonMode::EniOnly),
            _ => Err(DaemonError::config(format!(
                "unknown daemon mode {s} (expected eni-multi-ip or eni-only)"
            ))),
        }
    }
}

/// Cloud API rate limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Interface create/delete calls per second
    #[serde(default = "default_eni_per_sec")]
    pub eni_per_sec: f64,

    /// Interface create/delete burst
    #[serde(default = "default_eni_burst")]
    pub eni_burst: usize,

    /// Address assign/unassign calls per second, per family
    #[serde(default = "default_ip_per_sec")]
    pub ip_per_sec: f64,

    /// Address assign/unassign burst, per family
    #[serde(default = "default_ip_burst")]
    pub ip_burst: usize,
}

/// Complete daemon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address families handed to pods
    #[serde(default)]
    pub ip_stack: IpStack,

    /// Networking mode
    #[serde(default)]
    pub mode: DaemonMode,

    /// Attach pods through a shared trunk interface
    #[serde(default)]
    pub enable_eni_trunking: bool,

    /// Use high-performance fabric interfaces
    #[serde(default)]
    pub enable_erdma: bool,

    /// Wait for an externally created trunk instead of creating one
    #[serde(default)]
    pub wait_trunk_eni: bool,

    /// Interfaces this daemon may attach to the node
    #[serde(default = "default_max_eni")]
    pub max_eni: usize,

    /// Addresses one interface may hold
    #[serde(default = "default_max_ip_per_eni")]
    pub max_ip_per_eni: usize,

    /// Addresses requested from the cloud in one call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Period of the pool replenishment pass in seconds
    #[serde(default = "default_sync_period")]
    pub sync_period_secs: u64,

    /// Cloud API rate limits
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

// Default functions
fn default_eni_per_sec() -> f64 {
    1.0
}

fn default_eni_burst() -> usize {
    2
}

fn default_ip_per_sec() -> f64 {
    5.0
}

fn default_ip_burst() -> usize {
    10
}

fn default_max_eni() -> usize {
    3
}

fn default_max_ip_per_eni() -> usize {
    10
}

fn default_batch_size() -> usize {
    10
}

fn default_sync_period() -> u64 {
    30
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            eni_per_sec: default_eni_per_sec(),
            eni_burst: default_eni_burst(),
            ip_per_sec: default_ip_per_sec(),
            ip_burst: default_ip_burst(),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            ip_stack: IpStack::default(),
            mode: DaemonMode::default(),
            enable_eni_trunking: false,
            enable_erdma: false,
            wait_trunk_eni: false,
            max_eni: default_max_eni(),
            max_ip_per_eni: default_max_ip_per_eni(),
            batch_size: default_batch_size(),
            sync_period_secs: default_sync_period(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).map_err(|e| {
                DaemonError::config(format!("failed to parse {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(DaemonError::Io(e)),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DaemonError::config(e.to_string()))
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DaemonError::config(format!("failed to serialize config: {e}")))
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn sync_period(&self) -> Duration {
        Duration::from_secs(self.sync_period_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DaemonError::config("batch_size must be > 0"));
        }
        if self.max_ip_per_eni == 0 {
            return Err(DaemonError::config("max_ip_per_eni must be > 0"));
        }
        if self.sync_period_secs == 0 {
            return Err(DaemonError::config("sync_period_secs must be > 0"));
        }
        let limits = &self.rate_limit;
        if limits.eni_per_sec <= 0.0 || limits.ip_per_sec <= 0.0 {
            return Err(DaemonError::config("rate limits must be > 0"));
        }
        if limits.eni_burst == 0 || limits.ip_burst == 0 {
            return Err(DaemonError::config("rate limit bursts must be > 0"));
        }
        Ok(())
    }

    /// Pool settings for the given supported families.
    pub fn to_pool_config(&self, enable_ipv4: bool, enable_ipv6: bool) -> PoolConfig {
        PoolConfig {
            batch_size: self.batch_size,
            max_ip_per_eni: self.max_ip_per_eni,
            max_eni: self.max_eni,
            enable_ipv4,
            enable_ipv6,
            enable_erdma: self.enable_erdma,
            trunk_eni_id: String::new(),
            eni_rate_limit: RateLimit::new(self.rate_limit.eni_per_sec, self.rate_limit.eni_burst),
            ip_rate_limit: RateLimit::new(self.rate_limit.ip_per_sec, self.rate_limit.ip_burst),
            sync_period: self.sync_period(),
        }
    }
}

/// Load instance limits from a TOML file
pub fn load_limits(path: impl AsRef<Path>) -> Result<Limits> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DaemonError::config(format!("failed to parse {}: {}", path.display(), e)))
}
