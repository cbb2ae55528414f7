//! Node-local ENI daemon.
//!
//! Startup logic that sits on top of the [`eni_pool`] engine:
//!
//! - [`config`]: TOML daemon configuration
//! - [`capability`]: narrowing configured features to the instance type
//! - [`trunk`]: finding, waiting for or creating the trunk interface
//! - [`bootstrap`]: the startup sequence and discovery of attached pools
//! - [`mapping`]: pod-to-address consistency report
//! - [`NodeClient`]: boundary to the orchestrator's node object

pub mod bootstrap;
pub mod capability;
pub mod config;
pub mod error;
pub mod mapping;
pub mod node;
pub mod trunk;

#[cfg(test)]
mod testing;

pub use bootstrap::{bootstrap, discover_pools, Bootstrap};
pub use capability::{check_instance, Capabilities};
pub use config::{DaemonConfig, DaemonMode};
pub use error::{DaemonError, NodeError, Result};
pub use mapping::{build_pod_mappings, sort_pod_mappings, PodBinding, PodMapping};
pub use node::NodeClient;
pub use trunk::init_trunk;
