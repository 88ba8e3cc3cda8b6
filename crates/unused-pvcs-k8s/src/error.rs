use std::path::PathBuf;

use kube::config::KubeconfigError;

/// Errors raised while locating the cluster or querying it
#[derive(Debug, thiserror::Error)]
pub enum KubeError {
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    #[error("failed to read kubeconfig {}", .path.display())]
    ReadKubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("failed to build cluster configuration{}", context_suffix(.context))]
    BuildConfig {
        context: Option<String>,
        #[source]
        source: KubeconfigError,
    },

    #[error("failed to create Kubernetes client")]
    ClientInit {
        #[source]
        source: kube::Error,
    },

    #[error("failed to list pods in namespace {namespace}")]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to list persistentVolumeClaims in namespace {namespace}")]
    ListClaims {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|name| format!(" for context {name}"))
        .unwrap_or_default()
}
