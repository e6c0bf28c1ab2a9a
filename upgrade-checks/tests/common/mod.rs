#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use upgrade_checks::error::ReplaceError;
use upgrade_checks::executor::ClusterApplication;
use upgrade_checks::resource::{
    ClusterObject, ManagedResource, ResourceSet, StatefulWorkload,
};

#[derive(Default)]
struct WorkloadState {
    tag: Option<String>,
    replace_calls: usize,
    fail_replace: bool,
}

/// Observation handle for a fake workload after it has been boxed into the
/// resource set.
#[derive(Clone, Default)]
pub struct WorkloadProbe(Arc<Mutex<WorkloadState>>);

impl WorkloadProbe {
    pub fn tag(&self) -> Option<String> {
        self.0.lock().unwrap().tag.clone()
    }

    pub fn replace_calls(&self) -> usize {
        self.0.lock().unwrap().replace_calls
    }
}

pub struct FakeStatefulWorkload {
    name: String,
    tag: Option<String>,
    state: Arc<Mutex<WorkloadState>>,
}

impl FakeStatefulWorkload {
    pub fn new(name: &str) -> (Self, WorkloadProbe) {
        Self::build(name, false)
    }

    /// A workload whose replace operation is rejected by the cluster.
    pub fn failing(name: &str) -> (Self, WorkloadProbe) {
        Self::build(name, true)
    }

    fn build(name: &str, fail_replace: bool) -> (Self, WorkloadProbe) {
        let probe = WorkloadProbe(Arc::new(Mutex::new(WorkloadState {
            fail_replace,
            ..WorkloadState::default()
        })));
        let workload = Self {
            name: name.to_string(),
            tag: None,
            state: probe.0.clone(),
        };
        (workload, probe)
    }

    pub fn into_resource(self) -> ManagedResource {
        ManagedResource::StatefulWorkload(Box::new(self))
    }
}

impl ClusterObject for FakeStatefulWorkload {
    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl StatefulWorkload for FakeStatefulWorkload {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag.clone();
        self.state.lock().unwrap().tag = tag;
    }

    async fn replace(&mut self) -> Result<(), ReplaceError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_replace {
            return Err(anyhow!("definition rejected by cluster").into());
        }
        state.replace_calls += 1;
        Ok(())
    }
}

struct FakeObject(String);

impl ClusterObject for FakeObject {
    fn name(&self) -> &str {
        &self.0
    }
}

pub fn service(name: &str) -> ManagedResource {
    ManagedResource::Service(Box::new(FakeObject(name.to_string())))
}

pub fn config_map(name: &str) -> ManagedResource {
    ManagedResource::ConfigMap(Box::new(FakeObject(name.to_string())))
}

/// Counts how often actions reached for the resource set.
#[derive(Clone, Default)]
pub struct AppProbe(Arc<AtomicUsize>);

impl AppProbe {
    pub fn resource_accesses(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct FakeApplication {
    resources: ResourceSet,
    accesses: Arc<AtomicUsize>,
}

impl FakeApplication {
    pub fn with(resources: Vec<ManagedResource>) -> (Box<Self>, AppProbe) {
        let probe = AppProbe::default();
        let app = Box::new(Self {
            resources: ResourceSet::from(resources),
            accesses: probe.0.clone(),
        });
        (app, probe)
    }
}

impl ClusterApplication for FakeApplication {
    fn resources(&mut self) -> &mut ResourceSet {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        &mut self.resources
    }
}
