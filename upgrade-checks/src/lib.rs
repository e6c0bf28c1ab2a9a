//! Action-execution core of the online-upgrade test harness.
//!
//! Upgrade scenarios are ordered sequences of [`action::Action`] steps driven
//! against a live test cluster. Each step borrows the per-scenario
//! [`executor::Executor`] and goes through the two-phase `execute`/`join`
//! contract, so blocking and background steps can be interleaved by the same
//! runner. The concrete resource layer (stateful sets, services, ...) is
//! supplied by the embedding harness through the traits in [`resource`].

pub mod action;
pub mod config;
pub mod error;
pub mod executor;
pub mod resource;
pub mod version;

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

pub fn init_tracing(default_env: &str) {
    let filter = EnvFilter::builder()
        .with_env_var("RUST_LOG")
        .from_env_lossy()
        .add_directive(
            default_env
                .parse()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        );

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}
