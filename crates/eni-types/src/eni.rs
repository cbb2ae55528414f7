//! Elastic network interface descriptor.

use crate::{IpNetSet, IpSet, MacAddress, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an interface is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EniRole {
    /// Ordinary secondary interface carrying pod addresses.
    #[default]
    Secondary,
    /// Shared interface that pod sub-interfaces attach to.
    Trunk,
    /// High-performance fabric (eRDMA) interface.
    Erdma,
}

impl EniRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EniRole::Secondary => "secondary",
            EniRole::Trunk => "trunk",
            EniRole::Erdma => "erdma",
        }
    }
}

impl fmt::Display for EniRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EniRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secondary" => Ok(EniRole::Secondary),
            "trunk" => Ok(EniRole::Trunk),
            "erdma" => Ok(EniRole::Erdma),
            _ => Err(ParseError::InvalidEniRole(s.to_string())),
        }
    }
}

/// An interface attached to this instance.
///
/// Immutable once attached; `trunk` and `erdma` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Eni {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacAddress>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
    #[serde(default)]
    pub trunk: bool,
    #[serde(default)]
    pub erdma: bool,
    #[serde(default)]
    pub primary_ip: IpSet,
    #[serde(default)]
    pub gateway_ip: IpSet,
    #[serde(default)]
    pub vswitch_cidr: IpNetSet,
    #[serde(default)]
    pub vswitch_id: String,
}

impl Eni {
    /// Creates a descriptor carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Returns the role this interface plays on the node.
    pub fn role(&self) -> EniRole {
        if self.trunk {
            EniRole::Trunk
        } else if self.erdma {
            EniRole::Erdma
        } else {
            EniRole::Secondary
        }
    }
}

impl fmt::Display for Eni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mac {
            Some(mac) => write!(f, "{} ({})", self.id, mac),
            None => f.write_str(&self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role() {
        assert_eq!(Eni::with_id("eni-1").role(), EniRole::Secondary);

        let trunk = Eni {
            trunk: true,
            ..Eni::with_id("eni-2")
        };
        assert_eq!(trunk.role(), EniRole::Trunk);

        let erdma = Eni {
            erdma: true,
            ..Eni::with_id("eni-3")
        };
        assert_eq!(erdma.role(), EniRole::Erdma);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("trunk".parse::<EniRole>().unwrap(), EniRole::Trunk);
        assert_eq!(EniRole::Erdma.to_string(), "erdma");
        assert!("primary".parse::<EniRole>().is_err());
    }

    #[test]
    fn test_deserialize_minimal() {
        let eni: Eni = serde_json::from_str(r#"{"id":"eni-1","mac":"00:16:3e:00:00:01"}"#).unwrap();
        assert_eq!(eni.id, "eni-1");
        assert_eq!(eni.to_string(), "eni-1 (00:16:3e:00:00:01)");
        assert!(eni.primary_ip.is_empty());
    }
}
