//! Kubernetes client for unused-pvcs
//!
//! This crate provides the cluster access used by the detector: kubeconfig
//! resolution, client construction, and the two namespaced list queries.

mod client;
mod error;
mod kubeconfig;

pub use client::{ClusterApi, KubeClient};
pub use error::KubeError;
pub use kubeconfig::{default_kubeconfig_path, resolve_kubeconfig_path};

// Re-export types that are used in our public API
pub use unused_pvcs_types::{ClaimInfo, PodInfo};
