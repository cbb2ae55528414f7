//! ENI address pool engine.
//!
//! This crate tracks the addresses of the network interfaces attached to a
//! node and hands them out to pods:
//!
//! - [`AddressSet`]: per-family address inventory with allocation state
//! - [`LocalPool`]: blocking, rate-limited allocator for one interface
//! - [`classify`]: pure check telling why a pool cannot serve a request
//! - [`Factory`]: boundary to the cloud API creating interfaces and addresses
//! - [`RateLimiter`]: token bucket gating every outbound cloud call

mod address;
mod condition;
mod config;
mod error;
mod factory;
mod local;
mod rate_limit;
mod request;

pub use address::{AddressRecord, AddressSet, IpStatus};
pub use condition::{classify, Condition, Inventory, Trace};
pub use config::{PoolConfig, RateLimit};
pub use error::{FactoryError, FactoryResult};
pub use factory::{CreatedInterface, Factory};
pub use local::{LocalPool, PoolSnapshot, PoolStatus, Usage};
pub use rate_limit::{replenished_tokens, RateLimiter};
pub use request::{LocalIpRequest, LocalIpResource, RequestKind, ResourceRequest};
