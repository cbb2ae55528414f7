//! Common types for the ENI daemon.
//!
//! This crate provides the value types shared by the pool engine and the
//! daemon:
//!
//! - [`Eni`]: descriptor of an attached elastic network interface
//! - [`EniRole`]: what an interface is used for (secondary, trunk, fabric)
//! - [`IpSet`] / [`IpNetSet`]: per-family address and subnet pairs
//! - [`IpStack`]: configured address-family selection
//! - [`Limits`]: per-instance-type adapter and address ceilings
//! - [`MacAddress`]: 48-bit interface hardware address

mod eni;
mod ip;
mod limits;
mod mac;

pub use eni::{Eni, EniRole};
pub use ip::{IpFamily, IpNet, IpNetSet, IpSet, IpStack};
pub use limits::Limits;
pub use mac::MacAddress;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid IP network format: {0}")]
    InvalidIpNet(String),

    #[error("invalid IP stack: {0} (expected ipv4, ipv6 or dual)")]
    InvalidIpStack(String),

    #[error("invalid ENI role: {0}")]
    InvalidEniRole(String),
}
