//! Managed resources of the test application.
//!
//! The harness does not own any cluster plumbing; it sees the application as
//! an ordered, heterogeneous set of managed resources. The concrete resource
//! layer (real cluster or simulated) implements the traits here.

use std::fmt;

use async_trait::async_trait;

use crate::error::{ActionError, ReplaceError};

/// Runtime kind of a managed resource. Lookups match on exact kind equality,
/// never on any compatibility relation between kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    StatefulWorkload,
    Service,
    Deployment,
    ConfigMap,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::StatefulWorkload => "stateful-workload",
            ResourceKind::Service => "service",
            ResourceKind::Deployment => "deployment",
            ResourceKind::ConfigMap => "config-map",
        };
        f.write_str(s)
    }
}

/// Minimal contract shared by every managed resource.
pub trait ClusterObject: Send {
    fn name(&self) -> &str;
}

/// The primary service's replicated, stateful deployment unit.
///
/// `replace` atomically swaps the live deployed definition for the current
/// one and blocks until the cluster accepts it. Rollout-readiness waiting is
/// the resource layer's own business; by the time `replace` returns `Ok`, the
/// new definition has been durably requested of the cluster.
#[async_trait]
pub trait StatefulWorkload: ClusterObject {
    /// The image/build tag the definition currently carries, if any.
    fn tag(&self) -> Option<&str>;

    fn set_tag(&mut self, tag: Option<String>);

    async fn replace(&mut self) -> Result<(), ReplaceError>;
}

/// A managed resource, tagged by kind so that lookups stay exact.
pub enum ManagedResource {
    StatefulWorkload(Box<dyn StatefulWorkload>),
    Service(Box<dyn ClusterObject>),
    Deployment(Box<dyn ClusterObject>),
    ConfigMap(Box<dyn ClusterObject>),
}

impl ManagedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ManagedResource::StatefulWorkload(_) => {
                ResourceKind::StatefulWorkload
            }
            ManagedResource::Service(_) => ResourceKind::Service,
            ManagedResource::Deployment(_) => ResourceKind::Deployment,
            ManagedResource::ConfigMap(_) => ResourceKind::ConfigMap,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ManagedResource::StatefulWorkload(r) => r.name(),
            ManagedResource::Service(r)
            | ManagedResource::Deployment(r)
            | ManagedResource::ConfigMap(r) => r.name(),
        }
    }
}

/// The live collection of managed resources composing the test application.
///
/// Owned by the application handle; upgrade steps only read and filter it,
/// mutating individual members in place.
#[derive(Default)]
pub struct ResourceSet {
    items: Vec<ManagedResource>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: ManagedResource) {
        self.items.push(resource);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManagedResource> {
        self.items.iter()
    }

    /// Returns the single resource of the given kind.
    ///
    /// Zero or multiple matches means the test application was assembled
    /// wrong; the step is aborted with the observed count and nothing is
    /// mutated. Not retried.
    pub fn find_exactly_one(
        &mut self,
        kind: ResourceKind,
    ) -> Result<&mut ManagedResource, ActionError> {
        let matching: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind() == kind)
            .map(|(i, _)| i)
            .collect();
        match matching.as_slice() {
            [i] => Ok(&mut self.items[*i]),
            other => Err(ActionError::ResourceCardinality {
                kind,
                count: other.len(),
            }),
        }
    }

    /// Variant-preserving lookup for the one stateful workload, with the same
    /// cardinality contract as [`ResourceSet::find_exactly_one`].
    pub fn sole_stateful_workload(
        &mut self,
    ) -> Result<&mut dyn StatefulWorkload, ActionError> {
        let mut found: Vec<&mut Box<dyn StatefulWorkload>> = self
            .items
            .iter_mut()
            .filter_map(|r| match r {
                ManagedResource::StatefulWorkload(w) => Some(w),
                _ => None,
            })
            .collect();
        match found.len() {
            1 => Ok(found.remove(0).as_mut()),
            count => Err(ActionError::ResourceCardinality {
                kind: ResourceKind::StatefulWorkload,
                count,
            }),
        }
    }
}

impl From<Vec<ManagedResource>> for ResourceSet {
    fn from(items: Vec<ManagedResource>) -> Self {
        Self { items }
    }
}

impl Extend<ManagedResource> for ResourceSet {
    fn extend<T: IntoIterator<Item = ManagedResource>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}
