//! Hand-written collaborator doubles shared by the daemon tests.

use crate::error::NodeError;
use crate::node::NodeClient;
use async_trait::async_trait;
use eni_pool::{Factory, FactoryError, FactoryResult};
use eni_types::{Eni, EniRole, MacAddress};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::IpAddr;

/// Node client returning canned trunk ids.
#[derive(Default)]
pub struct MockNodeClient {
    pub trunk_id: String,
    pub ready: Option<Result<String, NodeError>>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockNodeClient {
    pub fn with_trunk_id(trunk_id: &str) -> Self {
        Self {
            trunk_id: trunk_id.to_string(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl NodeClient for MockNodeClient {
    async fn get_trunk_id(&self) -> String {
        self.calls.lock().push("get_trunk_id");
        self.trunk_id.clone()
    }

    async fn wait_trunk_ready(&self) -> Result<String, NodeError> {
        self.calls.lock().push("wait_trunk_ready");
        self.ready
            .clone()
            .unwrap_or_else(|| Err(NodeError::Api("unexpected wait_trunk_ready".to_string())))
    }
}

/// Cloud double with a fixed set of attached interfaces.
#[derive(Default)]
pub struct MockFactory {
    pub attached: Vec<Eni>,
    pub attached_error: Option<FactoryError>,
    /// Interface returned by `create_network_interface`.
    pub created: Option<Eni>,
    /// Addresses returned by `load_network_interface`, keyed by MAC.
    pub loaded: HashMap<MacAddress, (Vec<IpAddr>, Vec<IpAddr>)>,
    pub calls: Mutex<Vec<String>>,
}

impl MockFactory {
    pub fn with_attached(attached: Vec<Eni>) -> Self {
        Self {
            attached,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl Factory for MockFactory {
    async fn create_network_interface(
        &self,
        ipv4: usize,
        ipv6: usize,
        role: EniRole,
    ) -> FactoryResult<(Eni, Vec<IpAddr>, Vec<IpAddr>)> {
        self.record(format!("create_network_interface {ipv4} {ipv6} {role}"));
        self.created
            .clone()
            .map(|eni| (eni, Vec::new(), Vec::new()))
            .ok_or_else(|| FactoryError::api("CreateNetworkInterface", "unexpected call"))
    }

    async fn get_attached_network_interface(
        &self,
        prefer_trunk_id: &str,
    ) -> FactoryResult<Vec<Eni>> {
        self.record(format!("get_attached_network_interface {prefer_trunk_id:?}"));
        match &self.attached_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.attached.clone()),
        }
    }

    async fn assign_ipv4(&self, _: &str, _: usize, _: Option<MacAddress>) -> FactoryResult<Vec<IpAddr>> {
        Err(FactoryError::api("AssignPrivateIpAddresses", "unexpected call"))
    }

    async fn assign_ipv6(&self, _: &str, _: usize, _: Option<MacAddress>) -> FactoryResult<Vec<IpAddr>> {
        Err(FactoryError::api("AssignIpv6Addresses", "unexpected call"))
    }

    async fn unassign_ipv4(&self, _: &str, _: &[IpAddr], _: Option<MacAddress>) -> FactoryResult<()> {
        Err(FactoryError::api("UnassignPrivateIpAddresses", "unexpected call"))
    }

    async fn unassign_ipv6(&self, _: &str, _: &[IpAddr], _: Option<MacAddress>) -> FactoryResult<()> {
        Err(FactoryError::api("UnassignIpv6Addresses", "unexpected call"))
    }

    async fn delete_network_interface(&self, eni_id: &str) -> FactoryResult<()> {
        self.record(format!("delete_network_interface {eni_id}"));
        Ok(())
    }

    async fn load_network_interface(
        &self,
        mac: Option<MacAddress>,
    ) -> FactoryResult<(Vec<IpAddr>, Vec<IpAddr>)> {
        let mac = mac.ok_or_else(|| FactoryError::not_found("interface without MAC"))?;
        self.record(format!("load_network_interface {mac}"));
        self.loaded
            .get(&mac)
            .cloned()
            .ok_or_else(|| FactoryError::not_found(mac.to_string()))
    }
}
