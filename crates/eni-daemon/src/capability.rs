//! Instance capability detection.

use crate::config::{DaemonConfig, DaemonMode};
use eni_types::Limits;
use serde::Serialize;
use tracing::info;

/// Address families the node can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub ipv4: bool,
    pub ipv6: bool,
    pub trunking: bool,
    pub erdma: bool,
}

/// Narrows `config` to what the instance type supports.
///
/// Returns whether IPv4 and IPv6 can be served. Feature flags in `config`
/// are only ever switched off, never on.
pub fn check_instance(limits: &Limits, mode: DaemonMode, config: &mut DaemonConfig) -> (bool, bool) {
    let ipv4 = config.ip_stack.includes_ipv4();
    let mut ipv6 = config.ip_stack.includes_ipv6();

    if ipv6 && !limits.support_ipv6() {
        info!(%mode, "instance does not support ipv6");
        ipv6 = false;
    }

    if config.enable_eni_trunking && !limits.support_trunking() {
        info!(%mode, "instance does not support trunking, disabling");
        config.enable_eni_trunking = false;
    }

    if config.enable_erdma && !limits.support_erdma() {
        info!(%mode, "instance does not support erdma, disabling");
        config.enable_erdma = false;
    }

    (ipv4, ipv6)
}

/// Runs [`check_instance`] and collects the outcome.
pub fn detect(limits: &Limits, mode: DaemonMode, config: &mut DaemonConfig) -> Capabilities {
    let (ipv4, ipv6) = check_instance(limits, mode, config);
    Capabilities {
        ipv4,
        ipv6,
        trunking: config.enable_eni_trunking,
        erdma: config.enable_erdma,
    }
}
