//! Reasons a pool declines a request.
//!
//! Classification is a pure function of a pool's inventory and the request.
//! The caller (a pool selector) decides whether to try another pool, ask for
//! a new interface or give up; nothing here retries.

use crate::local::PoolStatus;
use crate::request::{RequestKind, ResourceRequest};
use eni_types::EniRole;
use serde::Serialize;
use std::fmt;

/// Why a pool cannot serve a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    /// No idle supply and no room to grow, or the pool is being torn down.
    Full,
    /// The pool serves a different kind of resource or address family.
    ResourceTypeMismatch,
    /// The request is pinned to a different interface.
    NetworkInterfaceMismatch,
    /// The subnet has no addresses left.
    #[allow(clippy::upper_case_acronyms)]
    InsufficientVSwitchIP,
}

impl Condition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Condition::Full => "Full",
            Condition::ResourceTypeMismatch => "ResourceTypeMismatch",
            Condition::NetworkInterfaceMismatch => "NetworkInterfaceMismatch",
            Condition::InsufficientVSwitchIP => "InsufficientVSwitchIP",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition together with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub condition: Condition,
    pub reason: String,
}

impl Trace {
    pub fn new(condition: Condition, reason: impl Into<String>) -> Self {
        Self {
            condition,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.condition, self.reason)
    }
}

/// What a pool holds, as seen by the classifier.
#[derive(Debug, Clone, Default)]
pub struct Inventory<'a> {
    pub role: EniRole,
    pub eni_id: Option<&'a str>,
    pub status: PoolStatus,
    pub enable_ipv4: bool,
    pub enable_ipv6: bool,
    /// Allocatable ipv4 records.
    pub available_ipv4: usize,
    /// Allocatable ipv6 records.
    pub available_ipv6: usize,
    /// Records of both families.
    pub total: usize,
    pub capacity: usize,
    pub vswitch_exhausted: bool,
}

impl Inventory<'_> {
    fn serves(&self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::LocalIp => matches!(self.role, EniRole::Secondary | EniRole::Trunk),
            RequestKind::LocalErdma => self.role == EniRole::Erdma,
            RequestKind::RemoteIp => false,
        }
    }
}

/// Returns the first reason, in priority order, the pool cannot serve the
/// request, or `None` if it can (possibly after replenishment).
pub fn classify(inventory: &Inventory<'_>, request: &ResourceRequest) -> Option<Condition> {
    let (want_v4, want_v6) = request
        .local
        .families(inventory.enable_ipv4, inventory.enable_ipv6);
    if !inventory.serves(request.kind) || !(want_v4 || want_v6) {
        return Some(Condition::ResourceTypeMismatch);
    }

    let pinned = request.local.network_interface_id.as_str();
    if !pinned.is_empty() && inventory.eni_id != Some(pinned) {
        return Some(Condition::NetworkInterfaceMismatch);
    }

    if inventory.status == PoolStatus::Deleting {
        return Some(Condition::Full);
    }

    let has_supply =
        (!want_v4 || inventory.available_ipv4 > 0) && (!want_v6 || inventory.available_ipv6 > 0);
    if has_supply {
        return None;
    }
    if inventory.total >= inventory.capacity {
        return Some(Condition::Full);
    }
    if inventory.vswitch_exhausted {
        return Some(Condition::InsufficientVSwitchIP);
    }
    None
}
