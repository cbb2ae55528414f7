//! Cloud compute/network API boundary.

use crate::error::FactoryResult;
use async_trait::async_trait;
use eni_types::{Eni, EniRole, MacAddress};
use std::net::IpAddr;

/// A freshly created interface together with the addresses assigned to it.
pub type CreatedInterface = (Eni, Vec<IpAddr>, Vec<IpAddr>);

/// Creates, discovers and mutates network interfaces through the cloud API.
///
/// Implementations hold already-authenticated API clients. The pool calls
/// every mutating method only after acquiring the matching rate limiter, so
/// implementations need no throttling of their own.
#[async_trait]
pub trait Factory: Send + Sync {
    /// Creates and attaches a new interface with `ipv4` / `ipv6` addresses.
    ///
    /// The returned address lists include the interface primary address.
    async fn create_network_interface(
        &self,
        ipv4: usize,
        ipv6: usize,
        role: EniRole,
    ) -> FactoryResult<CreatedInterface>;

    /// Lists interfaces attached to this instance.
    ///
    /// `prefer_trunk_id` is the trunk id already known to the node, empty if
    /// none; implementations flag that interface as `trunk`.
    async fn get_attached_network_interface(&self, prefer_trunk_id: &str)
        -> FactoryResult<Vec<Eni>>;

    /// Assigns `count` new IPv4 addresses to an interface.
    async fn assign_ipv4(
        &self,
        eni_id: &str,
        count: usize,
        mac: Option<MacAddress>,
    ) -> FactoryResult<Vec<IpAddr>>;

    /// Assigns `count` new IPv6 addresses to an interface.
    async fn assign_ipv6(
        &self,
        eni_id: &str,
        count: usize,
        mac: Option<MacAddress>,
    ) -> FactoryResult<Vec<IpAddr>>;

    /// Removes IPv4 addresses from an interface.
    async fn unassign_ipv4(
        &self,
        eni_id: &str,
        addrs: &[IpAddr],
        mac: Option<MacAddress>,
    ) -> FactoryResult<()>;

    /// Removes IPv6 addresses from an interface.
    async fn unassign_ipv6(
        &self,
        eni_id: &str,
        addrs: &[IpAddr],
        mac: Option<MacAddress>,
    ) -> FactoryResult<()>;

    /// Detaches and deletes an interface.
    async fn delete_network_interface(&self, eni_id: &str) -> FactoryResult<()>;

    /// Reads the addresses currently assigned to an attached interface.
    async fn load_network_interface(
        &self,
        mac: Option<MacAddress>,
    ) -> FactoryResult<(Vec<IpAddr>, Vec<IpAddr>)>;
}
