//! Kubernetes client for unused-pvcs

use std::future::Future;
use std::path::Path;

use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Pod};
use kube::Api;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::{debug, info};

use crate::KubeError;
use unused_pvcs_types::{ClaimInfo, PodInfo};

/// Namespaced read access to the cluster
///
/// Each call is a single unfiltered list request. Large namespaces are not
/// paged through; whatever the API server returns for one request is used.
pub trait ClusterApi {
    /// List every pod in `namespace`
    fn list_pods(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<PodInfo>, KubeError>> + Send;

    /// List every PersistentVolumeClaim in `namespace`
    fn list_persistent_volume_claims(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<ClaimInfo>, KubeError>> + Send;
}

/// Kubernetes client wrapper
pub struct KubeClient {
    client: kube::Client,
}

impl KubeClient {
    /// Create a client from the kubeconfig at `path`
    ///
    /// `context` selects a kubeconfig context; when `None` the file's
    /// current-context is used.
    pub async fn from_kubeconfig(path: &Path, context: Option<&str>) -> Result<Self, KubeError> {
        let kubeconfig = Kubeconfig::read_from(path).map_err(|source| KubeError::ReadKubeconfig {
            path: path.to_path_buf(),
            source,
        })?;

        let options = KubeConfigOptions {
            context: context.map(str::to_string),
            ..Default::default()
        };
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|source| KubeError::BuildConfig {
                context: options.context.clone(),
                source,
            })?;

        info!(cluster_url = %config.cluster_url, "connecting to cluster");
        let client =
            kube::Client::try_from(config).map_err(|source| KubeError::ClientInit { source })?;

        Ok(Self::with_client(client))
    }

    /// Wrap an already constructed `kube::Client`
    pub fn with_client(client: kube::Client) -> Self {
        Self { client }
    }
}

impl ClusterApi for KubeClient {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodInfo>, KubeError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = pods
            .list(&ListParams::default())
            .await
            .map_err(|source| KubeError::ListPods {
                namespace: namespace.to_string(),
                source,
            })?;

        debug!(namespace, count = list.items.len(), "listed pods");
        Ok(list
            .items
            .into_iter()
            .map(|pod| pod_to_info(pod, namespace))
            .collect())
    }

    async fn list_persistent_volume_claims(
        &self,
        namespace: &str,
    ) -> Result<Vec<ClaimInfo>, KubeError> {
        let claims: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), namespace);
        let list = claims
            .list(&ListParams::default())
            .await
            .map_err(|source| KubeError::ListClaims {
                namespace: namespace.to_string(),
                source,
            })?;

        debug!(namespace, count = list.items.len(), "listed persistentVolumeClaims");
        Ok(list
            .items
            .into_iter()
            .map(|pvc| claim_to_info(pvc, namespace))
            .collect())
    }
}

/// Convert a k8s Pod to PodInfo, keeping only its claim references
fn pod_to_info(pod: Pod, namespace: &str) -> PodInfo {
    let name = pod.metadata.name.unwrap_or_default();
    let namespace = pod
        .metadata
        .namespace
        .unwrap_or_else(|| namespace.to_string());
    let mut info = PodInfo::new(name, namespace);

    let volumes = pod.spec.and_then(|spec| spec.volumes).unwrap_or_default();
    for volume in volumes {
        if let Some(source) = volume.persistent_volume_claim {
            info.claim_names.push(source.claim_name);
        }
    }

    info
}

/// Convert a k8s PersistentVolumeClaim to ClaimInfo
fn claim_to_info(pvc: PersistentVolumeClaim, namespace: &str) -> ClaimInfo {
    let name = pvc.metadata.name.unwrap_or_default();
    let namespace = pvc
        .metadata
        .namespace
        .unwrap_or_else(|| namespace.to_string());
    let mut info = ClaimInfo::new(name, namespace);

    if let Some(spec) = pvc.spec {
        info.volume_name = spec.volume_name;
        info.storage_class = spec.storage_class_name;
        info.capacity = spec
            .resources
            .and_then(|r| r.requests)
            .and_then(|mut requests| requests.remove("storage"))
            .map(|quantity| quantity.0);
    }

    if let Some(status) = pvc.status {
        info.phase = status.phase;
    }

    info
}
