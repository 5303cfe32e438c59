//! Key management for post-quantum and hybrid keys
//!
//! This crate holds the algorithm-agnostic part of pqkm:
//!
//! - [`registry`]: algorithm name and key class to sizes, keygen and curve
//! - [`key`]: the [`Key`] object and its lifecycle
//! - [`gen`]: the [`GenContext`] key-generation workflow
//! - [`params`]: the named-parameter bridge onto a [`Key`]
//! - [`dispatch`]: the adapter table and the [`KeyManagement`] entry points
//!
//! Every entry point emits a `tracing` event. Nothing is printed unless the
//! application installs a subscriber.

pub mod context;
pub mod dispatch;
pub mod gen;
pub mod key;
pub mod params;
pub mod registry;

pub use context::ProviderContext;
pub use dispatch::{KeyManagement, KeyMgmtDescriptor};
pub use gen::GenContext;
pub use key::Key;
pub use registry::{lookup, AlgorithmInfo};
