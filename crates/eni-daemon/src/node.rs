//! Orchestrator node client boundary.

use crate::error::NodeError;
use async_trait::async_trait;

/// Reads trunk state recorded on this node's orchestrator object.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Trunk interface id recorded for the node, empty if none.
    async fn get_trunk_id(&self) -> String;

    /// Blocks until an external controller reports the node's trunk
    /// interface and returns its id.
    async fn wait_trunk_ready(&self) -> Result<String, NodeError>;
}
