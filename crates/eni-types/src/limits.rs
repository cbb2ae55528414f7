//! Instance-type adapter and address ceilings.

use serde::{Deserialize, Serialize};

/// Network limits of the instance type this daemon runs on.
///
/// All fields default to zero, which describes an instance that supports
/// nothing beyond its primary interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Interfaces attachable to the instance, primary excluded.
    pub adapters: usize,
    /// Interfaces including the primary one.
    pub total_adapters: usize,
    pub ipv4_per_adapter: usize,
    pub ipv6_per_adapter: usize,
    /// Member (pod) interfaces attachable through a trunk.
    pub member_adapter_limit: usize,
    pub max_member_adapter_limit: usize,
    /// Dedicated high-performance fabric interfaces.
    pub erdma_adapters: usize,
}

impl Limits {
    pub fn support_ipv6(&self) -> bool {
        self.ipv6_per_adapter > 0
    }

    pub fn support_trunking(&self) -> bool {
        self.member_adapter_limit > 0
    }

    pub fn support_erdma(&self) -> bool {
        self.erdma_adapters > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_limits_support_nothing() {
        let limits = Limits::default();
        assert!(!limits.support_ipv6());
        assert!(!limits.support_trunking());
        assert!(!limits.support_erdma());
    }

    #[test]
    fn test_supported_instance() {
        let limits = Limits {
            adapters: 10,
            total_adapters: 15,
            ipv4_per_adapter: 10,
            ipv6_per_adapter: 10,
            member_adapter_limit: 10,
            max_member_adapter_limit: 10,
            erdma_adapters: 2,
        };
        assert!(limits.support_ipv6());
        assert!(limits.support_trunking());
        assert!(limits.support_erdma());
    }

    #[test]
    fn test_partial_deserialize() {
        let limits: Limits = serde_json::from_str(r#"{"adapters": 3, "ipv4_per_adapter": 6}"#).unwrap();
        assert_eq!(limits.adapters, 3);
        assert_eq!(limits.ipv6_per_adapter, 0);
    }
}
