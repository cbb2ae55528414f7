//! Address records and the per-family address set.
//!
//! An [`AddressSet`] never creates entries implicitly: lookups return
//! `Option` and records enter the set only through [`AddressSet::add`].

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;

/// Usability of an address in the pool's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IpStatus {
    #[default]
    Valid,
    /// Known unusable: remote deallocation failed or is in flight.
    Invalid,
}

impl fmt::Display for IpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpStatus::Valid => f.write_str("Valid"),
            IpStatus::Invalid => f.write_str("Invalid"),
        }
    }
}

/// Allocation state of one address.
///
/// A record with an owner is always [`IpStatus::Valid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    ip: IpAddr,
    primary: bool,
    status: IpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
}

impl AddressRecord {
    /// Creates an idle, valid record.
    pub fn new(ip: IpAddr, primary: bool) -> Self {
        Self {
            ip,
            primary,
            status: IpStatus::Valid,
            owner: None,
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn status(&self) -> IpStatus {
        self.status
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns true if nobody owns this address.
    pub fn is_idle(&self) -> bool {
        self.owner.is_none()
    }

    /// Returns true if the record can be handed to a new consumer.
    pub fn is_available(&self) -> bool {
        self.owner.is_none() && self.status == IpStatus::Valid
    }

    /// Hands the address to `owner`.
    ///
    /// Returns false and leaves the record untouched if it is not available.
    pub fn allocate(&mut self, owner: &str) -> bool {
        if !self.is_available() {
            return false;
        }
        self.owner = Some(owner.to_string());
        true
    }

    /// Makes the address idle and valid again, returning the previous owner.
    pub fn release(&mut self) -> Option<String> {
        self.status = IpStatus::Valid;
        self.owner.take()
    }

    /// Marks an idle record unusable. Owned records are never invalidated.
    pub fn invalidate(&mut self) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.status = IpStatus::Invalid;
        true
    }
}

/// Addresses of one family held by a pool.
#[derive(Debug, Clone, Default)]
pub struct AddressSet {
    inner: HashMap<IpAddr, AddressRecord>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record for the same address.
    pub fn add(&mut self, record: AddressRecord) -> Option<AddressRecord> {
        self.inner.insert(record.ip, record)
    }

    pub fn get(&self, ip: &IpAddr) -> Option<&AddressRecord> {
        self.inner.get(ip)
    }

    pub fn get_mut(&mut self, ip: &IpAddr) -> Option<&mut AddressRecord> {
        self.inner.get_mut(ip)
    }

    pub fn remove(&mut self, ip: &IpAddr) -> Option<AddressRecord> {
        self.inner.remove(ip)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddressRecord> {
        self.inner.values()
    }

    /// Number of records without an owner.
    pub fn idle(&self) -> usize {
        self.inner.values().filter(|r| r.is_idle()).count()
    }

    /// Number of records with an owner.
    pub fn in_use(&self) -> usize {
        self.inner.values().filter(|r| !r.is_idle()).count()
    }

    /// Number of records that could be allocated right now.
    pub fn available(&self) -> usize {
        self.inner.values().filter(|r| r.is_available()).count()
    }

    /// Lowest available address, so allocation order is deterministic.
    pub fn first_available(&self) -> Option<IpAddr> {
        self.inner
            .values()
            .filter(|r| r.is_available())
            .map(|r| r.ip)
            .min()
    }

    /// Idle non-primary addresses in ascending order, at most `limit`.
    ///
    /// Invalid records are included so a failed unassign can be retried.
    pub fn disposable(&self, limit: usize) -> Vec<IpAddr> {
        let mut ips: Vec<IpAddr> = self
            .inner
            .values()
            .filter(|r| r.is_idle() && !r.primary)
            .map(|r| r.ip)
            .collect();
        ips.sort_unstable();
        ips.truncate(limit);
        ips
    }

    /// Returns the primary record, if the set holds one.
    pub fn primary(&self) -> Option<&AddressRecord> {
        self.inner.values().find(|r| r.primary)
    }
}

impl FromIterator<AddressRecord> for AddressSet {
    fn from_iter<T: IntoIterator<Item = AddressRecord>>(iter: T) -> Self {
        let mut set = AddressSet::new();
        for record in iter {
            set.add(record);
        }
        set
    }
}
