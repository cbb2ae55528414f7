//! Trunk interface resolution at startup.

use crate::config::DaemonConfig;
use crate::error::Result;
use crate::node::NodeClient;
use eni_pool::{Factory, PoolConfig};
use eni_types::EniRole;
use tracing::{info, instrument, warn};

/// Finds, waits for or creates the node's trunk interface.
///
/// The first matching rule wins:
/// 1. `wait_trunk_eni`: the id recorded on the node, or whatever the node
///    reports once an external controller made the trunk ready;
/// 2. the id recorded on the node;
/// 3. an attached interface already flagged as trunk;
/// 4. a new trunk interface, if fewer than `max_eni` interfaces are attached;
/// 5. otherwise trunking is switched off and the id is empty.
///
/// The resolved id is stored in `pool_config.trunk_eni_id`.
#[instrument(skip_all)]
pub async fn init_trunk(
    config: &mut DaemonConfig,
    pool_config: &mut PoolConfig,
    node: &dyn NodeClient,
    factory: &dyn Factory,
) -> Result<String> {
    let trunk_id = resolve(config, pool_config, node, factory).await?;
    pool_config.trunk_eni_id = trunk_id.clone();
    Ok(trunk_id)
}

async fn resolve(
    config: &mut DaemonConfig,
    pool_config: &PoolConfig,
    node: &dyn NodeClient,
    factory: &dyn Factory,
) -> Result<String> {
    let recorded = node.get_trunk_id().await;

    if config.wait_trunk_eni {
        if !recorded.is_empty() {
            info!(trunk_eni_id = %recorded, "using trunk recorded on node");
            return Ok(recorded);
        }
        info!("waiting for trunk interface to become ready");
        let trunk_id = node.wait_trunk_ready().await?;
        info!(trunk_eni_id = %trunk_id, "trunk interface ready");
        return Ok(trunk_id);
    }

    if !recorded.is_empty() {
        info!(trunk_eni_id = %recorded, "using trunk recorded on node");
        return Ok(recorded);
    }

    let attached = factory.get_attached_network_interface("").await?;
    if let Some(trunk) = attached.iter().find(|eni| eni.trunk) {
        info!(trunk_eni_id = %trunk.id, "reusing attached trunk interface");
        return Ok(trunk.id.clone());
    }

    if attached.len() < pool_config.max_eni {
        let (eni, _, _) = factory.create_network_interface(1, 0, EniRole::Trunk).await?;
        info!(trunk_eni_id = %eni.id, "created trunk interface");
        return Ok(eni.id);
    }

    warn!(
        attached = attached.len(),
        max_eni = pool_config.max_eni,
        "no room for a trunk interface, disabling trunking"
    );
    config.enable_eni_trunking = false;
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DaemonError, NodeError};
    use crate::testing::{MockFactory, MockNodeClient};
    use eni_pool::FactoryError;
    use eni_types::{Eni, IpStack};
    use pretty_assertions::assert_eq;

    fn daemon_config(wait_trunk_eni: bool) -> DaemonConfig {
        DaemonConfig {
            ip_stack: IpStack::Dual,
            enable_eni_trunking: true,
            enable_erdma: true,
            wait_trunk_eni,
            ..Default::default()
        }
    }

    fn pool_config() -> PoolConfig {
        PoolConfig {
            max_eni: 2,
            ..Default::default()
        }
    }

    fn trunk(id: &str) -> Eni {
        Eni {
            trunk: true,
            ..Eni::with_id(id)
        }
    }

    #[tokio::test]
    async fn test_create_trunk_when_none_recorded() {
        let mut config = daemon_config(false);
        let mut pool_config = pool_config();
        let node = MockNodeClient::default();
        let factory = MockFactory {
            created: Some(trunk("eni-1")),
            ..MockFactory::with_attached(vec![Eni::with_id("eni-1")])
        };

        let id = init_trunk(&mut config, &mut pool_config, &node, &factory)
            .await
            .unwrap();

        assert_eq!(id, "eni-1");
        assert_eq!(pool_config.trunk_eni_id, "eni-1");
        assert!(config.enable_eni_trunking);
        assert_eq!(
            factory.calls(),
            vec![
                "get_attached_network_interface \"\"",
                "create_network_interface 1 0 trunk",
            ]
        );
    }

    #[tokio::test]
    async fn test_create_trunk_nothing_attached() {
        let mut config = daemon_config(false);
        let mut pool_config = pool_config();
        let factory = MockFactory {
            created: Some(trunk("eni-9")),
            ..Default::default()
        };

        let id = init_trunk(&mut config, &mut pool_config, &MockNodeClient::default(), &factory)
            .await
            .unwrap();
        assert_eq!(id, "eni-9");
    }

    #[tokio::test]
    async fn test_reuse_attached_trunk() {
        let mut config = daemon_config(false);
        let mut pool_config = pool_config();
        let factory = MockFactory::with_attached(vec![trunk("eni-1")]);

        let id = init_trunk(&mut config, &mut pool_config, &MockNodeClient::default(), &factory)
            .await
            .unwrap();

        assert_eq!(id, "eni-1");
        assert_eq!(factory.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_disable_trunk_when_full() {
        let mut config = daemon_config(false);
        let mut pool_config = pool_config();
        let factory =
            MockFactory::with_attached(vec![Eni::with_id("eni-1"), Eni::with_id("eni-2")]);

        let id = init_trunk(&mut config, &mut pool_config, &MockNodeClient::default(), &factory)
            .await
            .unwrap();

        assert_eq!(id, "");
        assert!(!config.enable_eni_trunking);
        assert!(pool_config.trunk_eni_id.is_empty());
        assert_eq!(factory.calls(), vec!["get_attached_network_interface \"\""]);
    }

    #[tokio::test]
    async fn test_wait_trunk_uses_recorded_id() {
        let mut config = daemon_config(true);
        let mut pool_config = pool_config();
        let node = MockNodeClient::with_trunk_id("eni-1");
        let factory = MockFactory::default();

        let id = init_trunk(&mut config, &mut pool_config, &node, &factory)
            .await
            .unwrap();

        assert_eq!(id, "eni-1");
        assert_eq!(node.calls(), vec!["get_trunk_id"]);
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wait_trunk_ready() {
        let mut config = daemon_config(true);
        let mut pool_config = pool_config();
        let node = MockNodeClient {
            ready: Some(Ok("eni-1".to_string())),
            ..Default::default()
        };
        let factory = MockFactory::default();

        let id = init_trunk(&mut config, &mut pool_config, &node, &factory)
            .await
            .unwrap();

        assert_eq!(id, "eni-1");
        assert_eq!(node.calls(), vec!["get_trunk_id", "wait_trunk_ready"]);
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_recorded_id_without_wait() {
        let mut config = daemon_config(false);
        let mut pool_config = pool_config();
        let node = MockNodeClient::with_trunk_id("eni-7");
        let factory = MockFactory::default();

        let id = init_trunk(&mut config, &mut pool_config, &node, &factory)
            .await
            .unwrap();
        assert_eq!(id, "eni-7");
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let mut config = daemon_config(true);
        let mut pool_config = pool_config();
        let node = MockNodeClient {
            ready: Some(Err(NodeError::TrunkTimeout)),
            ..Default::default()
        };
        let err = init_trunk(&mut config, &mut pool_config, &node, &MockFactory::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DaemonError::Node(NodeError::TrunkTimeout)));

        let mut config = daemon_config(false);
        let factory = MockFactory {
            attached_error: Some(FactoryError::api("DescribeNetworkInterfaces", "denied")),
            ..Default::default()
        };
        let err = init_trunk(&mut config, &mut pool_config, &MockNodeClient::default(), &factory)
            .await
            .unwrap_err();
        assert!(matches!(err, DaemonError::Factory(_)));
        assert!(config.enable_eni_trunking);
    }
}
