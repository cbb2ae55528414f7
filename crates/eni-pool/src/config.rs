//! Pool sizing and rate-limit settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token-bucket setting for one class of cloud calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Tokens added per second.
    pub rate: f64,
    /// Bucket size.
    pub burst: usize,
}

impl RateLimit {
    pub const fn new(rate: f64, burst: usize) -> Self {
        Self { rate, burst }
    }
}

/// Settings shared by every pool on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Most addresses requested from the cloud in one call.
    pub batch_size: usize,
    /// Addresses (both families) one interface may hold.
    pub max_ip_per_eni: usize,
    /// Interfaces that may be attached to the node.
    pub max_eni: usize,
    pub enable_ipv4: bool,
    pub enable_ipv6: bool,
    /// Whether fabric (ERDMA) interfaces get pools of their own.
    pub enable_erdma: bool,
    /// Resolved trunk interface id; empty when trunking is off.
    pub trunk_eni_id: String,
    /// Interface creation and deletion.
    pub eni_rate_limit: RateLimit,
    /// Address assignment and unassignment, one bucket per family.
    pub ip_rate_limit: RateLimit,
    /// Period of the background replenishment pass.
    pub sync_period: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            max_ip_per_eni: 10,
            max_eni: 3,
            enable_ipv4: true,
            enable_ipv6: false,
            enable_erdma: false,
            trunk_eni_id: String::new(),
            eni_rate_limit: RateLimit::new(1.0, 2),
            ip_rate_limit: RateLimit::new(5.0, 10),
            sync_period: Duration::from_secs(30),
        }
    }
}
