//! Pod-to-address consistency report.
//!
//! Correlates a pool snapshot with the addresses the cloud reports for the
//! interface and with the pod bindings known to the node, producing one
//! [`PodMapping`] per address seen on either side.

use eni_pool::PoolSnapshot;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;

/// A pod and the address it was bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodBinding {
    pub pod_id: String,
    pub name: String,
    pub namespace: String,
    /// Address recorded in the pod's binding.
    pub res_id: String,
}

/// One line of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodMapping {
    pub name: String,
    pub namespace: String,
    pub pod_bind_res_id: String,
    pub local_res_id: String,
    pub remote_res_id: String,
    pub valid: bool,
}

impl PodMapping {
    fn is_bound(&self) -> bool {
        !self.pod_bind_res_id.is_empty()
    }
}

/// Bound pods first, then by remote resource id.
fn compare(a: &PodMapping, b: &PodMapping) -> Ordering {
    b.is_bound()
        .cmp(&a.is_bound())
        .then_with(|| a.remote_res_id.cmp(&b.remote_res_id))
}

pub fn sort_pod_mappings(mappings: &mut [PodMapping]) {
    mappings.sort_by(compare);
}

/// Builds the sorted report for one pool.
pub fn build_pod_mappings(
    snapshot: &PoolSnapshot,
    remote: &[IpAddr],
    bindings: &[PodBinding],
) -> Vec<PodMapping> {
    let by_pod: HashMap<&str, &PodBinding> =
        bindings.iter().map(|b| (b.pod_id.as_str(), b)).collect();
    let remote: BTreeSet<IpAddr> = remote.iter().copied().collect();

    let local = snapshot.records().map(|r| r.ip());
    let all: BTreeSet<IpAddr> = local.chain(remote.iter().copied()).collect();

    let mut mappings: Vec<PodMapping> = all
        .into_iter()
        .map(|ip| {
            let record = snapshot.ipv4.get(&ip).or_else(|| snapshot.ipv6.get(&ip));
            let mut mapping = PodMapping {
                local_res_id: record.map(|_| ip.to_string()).unwrap_or_default(),
                remote_res_id: if remote.contains(&ip) {
                    ip.to_string()
                } else {
                    String::new()
                },
                ..Default::default()
            };
            let agreed = !mapping.local_res_id.is_empty()
                && mapping.local_res_id == mapping.remote_res_id;

            match record.and_then(|r| r.owner()) {
                Some(owner) => {
                    if let Some(binding) = by_pod.get(owner) {
                        mapping.name = binding.name.clone();
                        mapping.namespace = binding.namespace.clone();
                        mapping.pod_bind_res_id = binding.res_id.clone();
                    }
                    mapping.valid = agreed && mapping.pod_bind_res_id == mapping.local_res_id;
                }
                None => mapping.valid = agreed,
            }
            mapping
        })
        .collect();

    sort_pod_mappings(&mut mappings);
    mappings
}

#[cfg(test)]
mod tests {
    use super::*;
    use eni_pool::{AddressRecord, PoolStatus};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    fn mapping(namespace: &str, bind: &str, res: &str, valid: bool) -> PodMapping {
        PodMapping {
            name: if bind.is_empty() { "" } else { "default" }.to_string(),
            namespace: namespace.to_string(),
            pod_bind_res_id: bind.to_string(),
            local_res_id: res.to_string(),
            remote_res_id: res.to_string(),
            valid,
        }
    }

    #[test]
    fn test_sort_pod_mappings() {
        let mut mappings = vec![
            mapping("", "", "dd", true),
            mapping("a", "aa", "aa", false),
            mapping("", "", "cc", true),
            mapping("b", "bb", "bb", false),
        ];
        sort_pod_mappings(&mut mappings);

        let order: Vec<&str> = mappings.iter().map(|m| m.remote_res_id.as_str()).collect();
        assert_eq!(order, vec!["aa", "bb", "cc", "dd"]);
    }

    fn snapshot(records: Vec<AddressRecord>) -> PoolSnapshot {
        PoolSnapshot {
            eni_id: Some("eni-1".to_string()),
            status: PoolStatus::InUse,
            ipv4: records.into_iter().map(|r| (r.ip(), r)).collect::<BTreeMap<_, _>>(),
            ipv6: BTreeMap::new(),
        }
    }

    #[test]
    fn test_build_pod_mappings() {
        let mut owned = AddressRecord::new(ip("192.0.2.2"), false);
        owned.allocate("pod-1");
        let mut stale = AddressRecord::new(ip("192.0.2.3"), false);
        stale.allocate("pod-2");
        let snapshot = snapshot(vec![
            AddressRecord::new(ip("192.0.2.1"), true),
            owned,
            stale,
        ]);
        let remote = [ip("192.0.2.1"), ip("192.0.2.2"), ip("192.0.2.9")];
        let bindings = [
            PodBinding {
                pod_id: "pod-1".to_string(),
                name: "web".to_string(),
                namespace: "default".to_string(),
                res_id: "192.0.2.2".to_string(),
            },
            PodBinding {
                pod_id: "pod-2".to_string(),
                name: "db".to_string(),
                namespace: "default".to_string(),
                res_id: "192.0.2.3".to_string(),
            },
        ];

        let mappings = build_pod_mappings(&snapshot, &remote, &bindings);
        assert_eq!(mappings.len(), 4);

        // Bound pods first.
        assert_eq!(mappings[0].name, "db");
        assert_eq!(mappings[0].remote_res_id, "");
        assert!(!mappings[0].valid);

        assert_eq!(mappings[1].name, "web");
        assert!(mappings[1].valid);

        // Idle primary, present on both sides.
        assert_eq!(mappings[2].local_res_id, "192.0.2.1");
        assert!(mappings[2].valid);

        // Known remotely only.
        assert_eq!(mappings[3].local_res_id, "");
        assert_eq!(mappings[3].remote_res_id, "192.0.2.9");
        assert!(!mappings[3].valid);
    }
}
