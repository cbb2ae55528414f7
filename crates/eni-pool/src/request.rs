//! Allocation requests and the resources handed back for them.

use eni_types::{Eni, IpFamily, IpSet, IpStack};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of resource a consumer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Addresses on a secondary or trunk interface of this node.
    LocalIp,
    /// Addresses on a high-performance fabric interface.
    LocalErdma,
    /// Addresses managed by a remote controller; never served locally.
    RemoteIp,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::LocalIp => f.write_str("LocalIP"),
            RequestKind::LocalErdma => f.write_str("LocalERDMA"),
            RequestKind::RemoteIp => f.write_str("RemoteIP"),
        }
    }
}

/// Constraints of a local address request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIpRequest {
    /// Interface the addresses must come from; empty accepts any.
    #[serde(default)]
    pub network_interface_id: String,
    /// Families wanted; `None` takes whatever the pool enables.
    #[serde(default)]
    pub stack: Option<IpStack>,
}

impl LocalIpRequest {
    /// Resolves the wanted families against what a pool enables.
    ///
    /// Returns `(ipv4, ipv6)`.
    pub fn families(&self, enable_ipv4: bool, enable_ipv6: bool) -> (bool, bool) {
        match self.stack {
            Some(stack) => (
                stack.includes_ipv4() && enable_ipv4,
                stack.includes_ipv6() && enable_ipv6,
            ),
            None => (enable_ipv4, enable_ipv6),
        }
    }
}

/// A request for addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub kind: RequestKind,
    #[serde(default)]
    pub local: LocalIpRequest,
}

impl ResourceRequest {
    pub fn local_ip(local: LocalIpRequest) -> Self {
        Self {
            kind: RequestKind::LocalIp,
            local,
        }
    }

    pub fn local_erdma(local: LocalIpRequest) -> Self {
        Self {
            kind: RequestKind::LocalErdma,
            local,
        }
    }

    pub fn remote_ip() -> Self {
        Self {
            kind: RequestKind::RemoteIp,
            local: LocalIpRequest::default(),
        }
    }
}

/// Addresses allocated from one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIpResource {
    pub eni: Eni,
    pub ip: IpSet,
}

impl LocalIpResource {
    /// Returns the addresses present, ipv4 first.
    pub fn addresses(&self) -> impl Iterator<Item = std::net::IpAddr> + '_ {
        [IpFamily::V4, IpFamily::V6]
            .into_iter()
            .filter_map(|family| self.ip.get(family))
    }
}
