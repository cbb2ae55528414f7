//! Daemon startup: capability narrowing, trunk setup and pool discovery.

use crate::capability::check_instance;
use crate::config::{DaemonConfig, DaemonMode};
use crate::error::Result;
use crate::node::NodeClient;
use crate::trunk::init_trunk;
use eni_pool::{Factory, LocalPool, PoolConfig};
use eni_types::{EniRole, Limits};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Outcome of the startup sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub ipv4: bool,
    pub ipv6: bool,
    /// Empty when trunking is off.
    pub trunk_eni_id: String,
    pub pool_config: PoolConfig,
}

/// Narrows `config` to the instance, derives the pool settings and, if
/// trunking survived, resolves the trunk interface.
#[instrument(skip_all, fields(mode = %mode))]
pub async fn bootstrap(
    config: &mut DaemonConfig,
    limits: &Limits,
    mode: DaemonMode,
    node: &dyn NodeClient,
    factory: &dyn Factory,
) -> Result<Bootstrap> {
    config.validate()?;
    let (ipv4, ipv6) = check_instance(limits, mode, config);
    let mut pool_config = config.to_pool_config(ipv4, ipv6);

    let trunk_eni_id = if config.enable_eni_trunking {
        init_trunk(config, &mut pool_config, node, factory).await?
    } else {
        String::new()
    };

    info!(ipv4, ipv6, trunk_eni_id = %trunk_eni_id, "daemon bootstrapped");
    Ok(Bootstrap {
        ipv4,
        ipv6,
        trunk_eni_id,
        pool_config,
    })
}

/// Builds and loads one pool per interface attached to the node.
///
/// The interface named by `pool_config.trunk_eni_id` is treated as the
/// trunk even if the cloud does not flag it. Fabric interfaces are skipped
/// unless `pool_config.enable_erdma` is set.
#[instrument(skip_all)]
pub async fn discover_pools(
    factory: Arc<dyn Factory>,
    pool_config: &PoolConfig,
) -> Result<Vec<Arc<LocalPool>>> {
    let attached = factory
        .get_attached_network_interface(&pool_config.trunk_eni_id)
        .await?;

    let mut pools = Vec::with_capacity(attached.len());
    for mut eni in attached {
        if !pool_config.trunk_eni_id.is_empty() && eni.id == pool_config.trunk_eni_id {
            eni.trunk = true;
        }
        let role = eni.role();
        if role == EniRole::Erdma && !pool_config.enable_erdma {
            debug!(eni_id = %eni.id, "erdma disabled, skipping fabric interface");
            continue;
        }
        let pool = Arc::new(LocalPool::attached(eni, pool_config, Arc::clone(&factory)));
        let loaded = pool.load().await?;
        info!(pool = %pool.name(), %role, addresses = loaded, "discovered interface");
        pools.push(pool);
    }

    let has_trunk = pools.iter().any(|pool| pool.role() == EniRole::Trunk);
    if !pool_config.trunk_eni_id.is_empty() && !has_trunk {
        info!(trunk_eni_id = %pool_config.trunk_eni_id, "trunk interface not attached yet");
    }
    Ok(pools)
}
