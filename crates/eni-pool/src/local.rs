//! Address pool of a single network interface.
//!
//! A [`LocalPool`] owns the address inventory of one interface. Allocation
//! requests wait on the pool's notifier until an idle address of every
//! requested family exists and then claim them atomically. New addresses are
//! only ever added by [`LocalPool::replenish`], which the background task
//! started with [`LocalPool::run`] calls whenever a waiter is starved and on
//! every sync period. Every cloud call goes through the pool's rate limiters
//! and none is made while the pool lock is held.

use crate::address::{AddressRecord, AddressSet};
use crate::condition::{classify, Condition, Inventory, Trace};
use crate::config::PoolConfig;
use crate::error::{FactoryError, FactoryResult};
use crate::factory::Factory;
use crate::rate_limit::RateLimiter;
use crate::request::{LocalIpResource, ResourceRequest};
use eni_types::{Eni, EniRole, IpFamily, IpSet, MacAddress};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Notify};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PoolStatus {
    /// No interface yet.
    #[default]
    Init,
    /// Interface creation in flight.
    Creating,
    InUse,
    /// Terminal: no new allocations, interface deleted once drained.
    Deleting,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoolStatus::Init => "Init",
            PoolStatus::Creating => "Creating",
            PoolStatus::InUse => "InUse",
            PoolStatus::Deleting => "Deleting",
        };
        f.write_str(s)
    }
}

/// Idle and allocated address counts, both families together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Usage {
    pub idle: usize,
    pub in_use: usize,
}

/// Read-only copy of a pool's inventory, ordered by address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSnapshot {
    pub eni_id: Option<String>,
    pub status: PoolStatus,
    pub ipv4: BTreeMap<IpAddr, AddressRecord>,
    pub ipv6: BTreeMap<IpAddr, AddressRecord>,
}

impl PoolSnapshot {
    /// Iterates over the records of both families, ipv4 first.
    pub fn records(&self) -> impl Iterator<Item = &AddressRecord> {
        self.ipv4.values().chain(self.ipv6.values())
    }
}

#[derive(Debug, Default)]
struct PoolState {
    eni: Option<Eni>,
    status: PoolStatus,
    ipv4: AddressSet,
    ipv6: AddressSet,
    pending_ipv4: usize,
    pending_ipv6: usize,
    vswitch_exhausted: bool,
    /// Addresses with an unassign call in flight.
    unassigning: HashSet<IpAddr>,
}

impl PoolState {
    fn set(&self, family: IpFamily) -> &AddressSet {
        match family {
            IpFamily::V4 => &self.ipv4,
            IpFamily::V6 => &self.ipv6,
        }
    }

    fn set_mut(&mut self, family: IpFamily) -> &mut AddressSet {
        match family {
            IpFamily::V4 => &mut self.ipv4,
            IpFamily::V6 => &mut self.ipv6,
        }
    }

    fn total(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    fn in_use(&self) -> usize {
        self.ipv4.in_use() + self.ipv6.in_use()
    }

    fn pending(&self, family: IpFamily) -> usize {
        match family {
            IpFamily::V4 => self.pending_ipv4,
            IpFamily::V6 => self.pending_ipv6,
        }
    }

    fn add_addresses(&mut self, addrs: &[IpAddr]) -> usize {
        let mut added = 0;
        for ip in addrs {
            let primary = self.eni.as_ref().is_some_and(|eni| eni.primary_ip.contains(ip));
            let set = self.set_mut(IpFamily::of(ip));
            if set.get(ip).is_none() {
                set.add(AddressRecord::new(*ip, primary));
                added += 1;
            }
        }
        added
    }

    /// Claims one available address of each wanted family, or nothing.
    fn try_claim(&mut self, pod_id: &str, ipv4: bool, ipv6: bool) -> Option<LocalIpResource> {
        if self.status == PoolStatus::Deleting {
            return None;
        }
        self.eni.as_ref()?;

        let v4 = if ipv4 { Some(self.ipv4.first_available()?) } else { None };
        let v6 = if ipv6 { Some(self.ipv6.first_available()?) } else { None };

        let mut ip = IpSet::default();
        for addr in v4.into_iter().chain(v6) {
            if let Some(record) = self.set_mut(IpFamily::of(&addr)).get_mut(&addr) {
                record.allocate(pod_id);
            }
            ip.set(addr);
        }
        Some(LocalIpResource {
            eni: self.eni.clone()?,
            ip,
        })
    }

    fn snapshot(&self) -> PoolSnapshot {
        let copy = |set: &AddressSet| set.iter().map(|r| (r.ip(), r.clone())).collect();
        PoolSnapshot {
            eni_id: self.eni.as_ref().map(|eni| eni.id.clone()),
            status: self.status,
            ipv4: copy(&self.ipv4),
            ipv6: copy(&self.ipv6),
        }
    }
}

/// Counts a waiter as pending demand for as long as it lives.
struct PendingGuard<'a> {
    pool: &'a LocalPool,
    ipv4: bool,
    ipv6: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(pool: &'a LocalPool, ipv4: bool, ipv6: bool) -> Self {
        let mut state = pool.state.lock();
        state.pending_ipv4 += usize::from(ipv4);
        state.pending_ipv6 += usize::from(ipv6);
        Self { pool, ipv4, ipv6 }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.pool.state.lock();
        state.pending_ipv4 -= usize::from(self.ipv4);
        state.pending_ipv6 -= usize::from(self.ipv6);
    }
}

/// Keeps addresses out of other dispose calls until their unassign returns.
struct UnassignGuard<'a> {
    pool: &'a LocalPool,
    addrs: Vec<IpAddr>,
}

impl Drop for UnassignGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.pool.state.lock();
        for ip in &self.addrs {
            state.unassigning.remove(ip);
        }
    }
}

enum Plan {
    Nothing,
    Delete { eni_id: String },
    Create { ipv4: usize, ipv6: usize },
    Assign {
        eni_id: String,
        mac: Option<MacAddress>,
        ipv4: usize,
        ipv6: usize,
    },
}

/// Address pool of one network interface.
pub struct LocalPool {
    role: EniRole,
    batch_size: usize,
    capacity: usize,
    enable_ipv4: bool,
    enable_ipv6: bool,
    sync_period: Duration,
    factory: Arc<dyn Factory>,

    state: Mutex<PoolState>,
    /// Woken on every change that may let a waiter claim (or give up).
    cond: Notify,
    /// Woken when a waiter finds no supply.
    starved: Notify,

    eni_limiter: RateLimiter,
    ipv4_limiter: RateLimiter,
    ipv6_limiter: RateLimiter,
}

impl fmt::Debug for LocalPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalPool")
            .field("role", &self.role)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl LocalPool {
    /// Creates a pool whose interface does not exist yet.
    ///
    /// The interface is created by [`replenish`](Self::replenish) once an
    /// allocation waits on the pool.
    pub fn new(role: EniRole, config: &PoolConfig, factory: Arc<dyn Factory>) -> Self {
        Self::build(None, role, config, factory)
    }

    /// Creates a pool for an interface already attached to the node.
    ///
    /// The pool stays in [`PoolStatus::Init`] until [`load`](Self::load)
    /// reads the interface's addresses.
    pub fn attached(eni: Eni, config: &PoolConfig, factory: Arc<dyn Factory>) -> Self {
        let role = eni.role();
        Self::build(Some(eni), role, config, factory)
    }

    fn build(
        eni: Option<Eni>,
        role: EniRole,
        config: &PoolConfig,
        factory: Arc<dyn Factory>,
    ) -> Self {
        Self {
            role,
            batch_size: config.batch_size.max(1),
            capacity: config.max_ip_per_eni,
            enable_ipv4: config.enable_ipv4,
            enable_ipv6: config.enable_ipv6,
            sync_period: config.sync_period,
            factory,
            state: Mutex::new(PoolState {
                eni,
                ..Default::default()
            }),
            cond: Notify::new(),
            starved: Notify::new(),
            eni_limiter: RateLimiter::new(config.eni_rate_limit.rate, config.eni_rate_limit.burst),
            ipv4_limiter: RateLimiter::new(config.ip_rate_limit.rate, config.ip_rate_limit.burst),
            ipv6_limiter: RateLimiter::new(config.ip_rate_limit.rate, config.ip_rate_limit.burst),
        }
    }

    pub fn role(&self) -> EniRole {
        self.role
    }

    pub fn status(&self) -> PoolStatus {
        self.state.lock().status
    }

    pub fn eni(&self) -> Option<Eni> {
        self.state.lock().eni.clone()
    }

    /// Interface id, or `-` while the pool has none.
    pub fn name(&self) -> String {
        self.state
            .lock()
            .eni
            .as_ref()
            .map_or_else(|| "-".to_string(), |eni| eni.id.clone())
    }

    pub fn usage(&self) -> Usage {
        let state = self.state.lock();
        Usage {
            idle: state.ipv4.idle() + state.ipv6.idle(),
            in_use: state.in_use(),
        }
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        self.state.lock().snapshot()
    }

    fn limiter(&self, family: IpFamily) -> &RateLimiter {
        match family {
            IpFamily::V4 => &self.ipv4_limiter,
            IpFamily::V6 => &self.ipv6_limiter,
        }
    }

    /// Reads the addresses of an attached interface into the pool.
    ///
    /// Records already known are kept as they are.
    #[instrument(skip(self), fields(pool = %self.name()))]
    pub async fn load(&self) -> FactoryResult<usize> {
        let mac = match self.state.lock().eni.as_ref() {
            Some(eni) => eni.mac,
            None => return Ok(0),
        };
        let (ipv4, ipv6) = self.factory.load_network_interface(mac).await?;

        let added = {
            let mut state = self.state.lock();
            let added = state.add_addresses(&ipv4) + state.add_addresses(&ipv6);
            if state.status == PoolStatus::Init {
                state.status = PoolStatus::InUse;
            }
            added
        };
        self.cond.notify_waiters();
        info!(count = added, "loaded interface addresses");
        Ok(added)
    }

    /// Tells why this pool cannot serve `request`, if it cannot.
    pub fn evaluate(&self, request: &ResourceRequest) -> Option<Trace> {
        let state = self.state.lock();
        let eni_id = state.eni.as_ref().map(|eni| eni.id.as_str());
        let inventory = Inventory {
            role: self.role,
            eni_id,
            status: state.status,
            enable_ipv4: self.enable_ipv4,
            enable_ipv6: self.enable_ipv6,
            available_ipv4: state.ipv4.available(),
            available_ipv6: state.ipv6.available(),
            total: state.total(),
            capacity: self.capacity,
            vswitch_exhausted: state.vswitch_exhausted,
        };
        let condition = classify(&inventory, request)?;
        let name = eni_id.unwrap_or("-");
        let reason = match condition {
            Condition::ResourceTypeMismatch => format!(
                "pool {name} ({}) cannot serve {} request",
                self.role, request.kind
            ),
            Condition::NetworkInterfaceMismatch => format!(
                "request pinned to {}, pool is {name}",
                request.local.network_interface_id
            ),
            Condition::Full if state.status == PoolStatus::Deleting => {
                format!("pool {name} is being deleted")
            }
            Condition::Full => format!(
                "pool {name} holds {} of {} addresses and none is idle",
                inventory.total, self.capacity
            ),
            Condition::InsufficientVSwitchIP => format!("subnet of pool {name} is exhausted"),
        };
        Some(Trace::new(condition, reason))
    }

    /// Starts an allocation for `pod_id`.
    ///
    /// Returns the reason if the pool cannot serve the request. Otherwise a
    /// worker waits for supply and the receiver yields the allocated
    /// addresses; it closes without a value if `cancel` fires first or the
    /// pool starts deleting.
    pub fn allocate(
        self: &Arc<Self>,
        cancel: CancellationToken,
        pod_id: &str,
        request: &ResourceRequest,
    ) -> Result<oneshot::Receiver<LocalIpResource>, Trace> {
        if let Some(trace) = self.evaluate(request) {
            debug!(pool = %self.name(), pod_id, %trace, "allocation declined");
            return Err(trace);
        }
        let (ipv4, ipv6) = request.local.families(self.enable_ipv4, self.enable_ipv6);

        let (tx, rx) = oneshot::channel();
        let pool = Arc::clone(self);
        let pod_id = pod_id.to_string();
        tokio::spawn(async move {
            let Some(resource) = pool.allocate_wait(&cancel, &pod_id, ipv4, ipv6).await else {
                return;
            };
            if let Err(resource) = tx.send(resource) {
                debug!(pod_id = %pod_id, "allocation receiver dropped, returning addresses");
                pool.release(&pod_id, &resource);
            }
        });
        Ok(rx)
    }

    /// Waits until one idle address of each wanted family exists and claims
    /// them for `pod_id`.
    ///
    /// Returns `None` on cancellation or once the pool is deleting; nothing
    /// is claimed in that case.
    #[instrument(skip(self, cancel), fields(pool = %self.name()))]
    pub async fn allocate_wait(
        &self,
        cancel: &CancellationToken,
        pod_id: &str,
        ipv4: bool,
        ipv6: bool,
    ) -> Option<LocalIpResource> {
        if !ipv4 && !ipv6 {
            return None;
        }
        let _pending = PendingGuard::new(self, ipv4, ipv6);

        loop {
            let notified = self.cond.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if cancel.is_cancelled() {
                debug!("allocation cancelled");
                return None;
            }
            {
                let mut state = self.state.lock();
                if state.status == PoolStatus::Deleting {
                    debug!("pool is deleting, giving up");
                    return None;
                }
                if let Some(resource) = state.try_claim(pod_id, ipv4, ipv6) {
                    info!(ip = %resource.ip, "allocated");
                    return Some(resource);
                }
            }
            self.starved.notify_one();

            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("allocation cancelled");
                    return None;
                }
                _ = &mut notified => {}
            }
        }
    }

    /// Returns the addresses of `resource` to the idle set.
    ///
    /// Returns false without touching anything if the resource belongs to
    /// another interface or the pool has none. Any owned record matching an
    /// address is released, whoever owns it.
    pub fn release(&self, pod_id: &str, resource: &LocalIpResource) -> bool {
        let mut released = false;
        {
            let mut state = self.state.lock();
            match &state.eni {
                Some(eni) if eni.id == resource.eni.id => {}
                _ => return false,
            }

            for ip in resource.addresses() {
                let Some(record) = state.set_mut(IpFamily::of(&ip)).get_mut(&ip) else {
                    continue;
                };
                if record.is_idle() {
                    continue;
                }
                let owner = record.release();
                if owner.as_deref() != Some(pod_id) {
                    debug!(%ip, ?owner, pod_id, "released address owned by another pod");
                }
                released = true;
            }
        }
        if released {
            info!(eni_id = %resource.eni.id, pod_id, ip = %resource.ip, "released");
            self.cond.notify_waiters();
        }
        true
    }

    fn mark_deleting(&self, state: &mut PoolState) {
        state.status = PoolStatus::Deleting;
        self.cond.notify_waiters();
        self.starved.notify_one();
    }

    /// Gives back up to `max` idle addresses to the cloud.
    ///
    /// Addresses left invalid by an earlier failed unassign are retried.
    /// Returns how many addresses were disposed. An interface whose
    /// addresses are all idle, or whose only disposable address left is the
    /// idle primary, is marked for deletion instead and counts as one.
    /// Trunk interfaces are never marked.
    #[instrument(skip(self), fields(pool = %self.name()))]
    pub async fn dispose(&self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }

        let (eni_id, mac, ipv4, ipv6) = {
            let mut state = self.state.lock();
            let Some((eni_id, mac)) = state.eni.as_ref().map(|eni| (eni.id.clone(), eni.mac))
            else {
                return 0;
            };
            if state.status != PoolStatus::InUse {
                return 0;
            }
            let teardown = self.role != EniRole::Trunk;

            if teardown && state.in_use() == 0 {
                info!("interface idle, marking for deletion");
                self.mark_deleting(&mut state);
                return 1;
            }

            let pick = |set: &AddressSet, limit: usize| -> Vec<IpAddr> {
                set.disposable(usize::MAX)
                    .into_iter()
                    .filter(|ip| !state.unassigning.contains(ip))
                    .take(limit)
                    .collect()
            };
            let ipv4 = pick(&state.ipv4, max);
            let ipv6 = pick(&state.ipv6, max - ipv4.len());
            if ipv4.is_empty() && ipv6.is_empty() {
                let primary_idle = [&state.ipv4, &state.ipv6]
                    .iter()
                    .filter_map(|set| set.primary())
                    .any(|record| record.is_available());
                if teardown && primary_idle && state.unassigning.is_empty() {
                    info!("only the primary address is idle, marking for deletion");
                    self.mark_deleting(&mut state);
                    return 1;
                }
                return 0;
            }

            for ip in ipv4.iter().chain(&ipv6) {
                if let Some(record) = state.set_mut(IpFamily::of(ip)).get_mut(ip) {
                    record.invalidate();
                }
                state.unassigning.insert(*ip);
            }
            (eni_id, mac, ipv4, ipv6)
        };

        let batches = [(IpFamily::V4, ipv4), (IpFamily::V6, ipv6)]
            .map(|(family, addrs)| (family, UnassignGuard { pool: self, addrs }));

        let mut disposed = 0;
        for (family, guard) in batches {
            if guard.addrs.is_empty() {
                continue;
            }
            self.limiter(family).acquire().await;
            let result = match family {
                IpFamily::V4 => self.factory.unassign_ipv4(&eni_id, &guard.addrs, mac).await,
                IpFamily::V6 => self.factory.unassign_ipv6(&eni_id, &guard.addrs, mac).await,
            };
            match result {
                Ok(()) => {
                    let count = guard.addrs.len();
                    {
                        let mut state = self.state.lock();
                        for ip in &guard.addrs {
                            state.set_mut(family).remove(ip);
                        }
                    }
                    disposed += count;
                    info!(%family, count, "unassigned idle addresses");
                }
                Err(e) => {
                    warn!(%family, count = guard.addrs.len(), error = %e, "failed to unassign addresses");
                }
            }
        }
        disposed
    }

    fn plan(&self) -> Plan {
        let mut state = self.state.lock();
        let status = state.status;
        match status {
            PoolStatus::Deleting => match &state.eni {
                Some(eni) if state.in_use() == 0 => Plan::Delete {
                    eni_id: eni.id.clone(),
                },
                _ => Plan::Nothing,
            },
            PoolStatus::Init if state.eni.is_none() => {
                if state.pending_ipv4 + state.pending_ipv6 == 0 {
                    return Plan::Nothing;
                }
                let families = usize::from(self.enable_ipv4) + usize::from(self.enable_ipv6);
                let share = self.batch_size.min(self.capacity / families.max(1)).max(1);
                state.status = PoolStatus::Creating;
                Plan::Create {
                    ipv4: if self.enable_ipv4 { share } else { 0 },
                    ipv6: if self.enable_ipv6 { share } else { 0 },
                }
            }
            PoolStatus::InUse => {
                let Some(eni) = &state.eni else {
                    return Plan::Nothing;
                };
                let mut headroom = self.capacity.saturating_sub(state.total());
                let mut want = |enabled: bool, family: IpFamily| -> usize {
                    if !enabled {
                        return 0;
                    }
                    let need = state
                        .pending(family)
                        .saturating_sub(state.set(family).available());
                    let count = need.min(self.batch_size).min(headroom);
                    headroom -= count;
                    count
                };
                let ipv4 = want(self.enable_ipv4, IpFamily::V4);
                let ipv6 = want(self.enable_ipv6, IpFamily::V6);
                if ipv4 + ipv6 == 0 {
                    return Plan::Nothing;
                }
                Plan::Assign {
                    eni_id: eni.id.clone(),
                    mac: eni.mac,
                    ipv4,
                    ipv6,
                }
            }
            _ => Plan::Nothing,
        }
    }

    fn note_error(&self, err: &FactoryError) {
        if err.is_insufficient_ip() {
            self.state.lock().vswitch_exhausted = true;
        }
    }

    /// Brings the pool closer to what its waiters need.
    ///
    /// Deletes the interface of a drained deleting pool, creates the
    /// interface of a pool that has none, or assigns at most `batch_size`
    /// addresses per family to cover pending demand without exceeding the
    /// interface capacity. Returns the number of addresses added.
    #[instrument(skip(self), fields(pool = %self.name()))]
    pub async fn replenish(&self) -> FactoryResult<usize> {
        match self.plan() {
            Plan::Nothing => Ok(0),
            Plan::Delete { eni_id } => {
                self.eni_limiter.acquire().await;
                self.factory.delete_network_interface(&eni_id).await?;
                let mut state = self.state.lock();
                state.eni = None;
                state.ipv4.clear();
                state.ipv6.clear();
                info!(%eni_id, "deleted interface");
                Ok(0)
            }
            Plan::Create { ipv4, ipv6 } => {
                self.eni_limiter.acquire().await;
                let created = self
                    .factory
                    .create_network_interface(ipv4, ipv6, self.role)
                    .await;
                let (eni, v4, v6) = match created {
                    Ok(created) => created,
                    Err(e) => {
                        self.note_error(&e);
                        self.state.lock().status = PoolStatus::Init;
                        return Err(e);
                    }
                };
                let added = {
                    let mut state = self.state.lock();
                    info!(eni = %eni, "created interface");
                    state.eni = Some(eni);
                    state.status = PoolStatus::InUse;
                    state.vswitch_exhausted = false;
                    state.add_addresses(&v4) + state.add_addresses(&v6)
                };
                self.cond.notify_waiters();
                Ok(added)
            }
            Plan::Assign {
                eni_id,
                mac,
                ipv4,
                ipv6,
            } => {
                let mut added = 0;
                for (family, count) in [(IpFamily::V4, ipv4), (IpFamily::V6, ipv6)] {
                    if count == 0 {
                        continue;
                    }
                    self.limiter(family).acquire().await;
                    let result = match family {
                        IpFamily::V4 => self.factory.assign_ipv4(&eni_id, count, mac).await,
                        IpFamily::V6 => self.factory.assign_ipv6(&eni_id, count, mac).await,
                    };
                    let addrs = result.inspect_err(|e| self.note_error(e))?;
                    {
                        let mut state = self.state.lock();
                        if state.status != PoolStatus::InUse {
                            // Deletion started while the call was in flight;
                            // the interface goes away with its addresses.
                            break;
                        }
                        state.vswitch_exhausted = false;
                        added += state.add_addresses(&addrs);
                    }
                    info!(%family, count = addrs.len(), "assigned addresses");
                    self.cond.notify_waiters();
                }
                Ok(added)
            }
        }
    }

    /// Replenishes the pool whenever a waiter is starved and every sync
    /// period, until `cancel` fires or the pool's interface is deleted.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.sync_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.starved.notified() => {}
                _ = ticker.tick() => {}
            }

            if let Err(e) = self.replenish().await {
                warn!(pool = %self.name(), error = %e, "replenish failed");
            }

            let deleted = {
                let state = self.state.lock();
                state.status == PoolStatus::Deleting && state.eni.is_none()
            };
            if deleted {
                break;
            }
        }
        debug!(pool = %self.name(), "pool task stopped");
    }
}
