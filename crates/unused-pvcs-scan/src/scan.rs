//! The detection pipeline: pods, then claims, then the report

use std::io::{self, Write};

use tracing::debug;
use unused_pvcs_k8s::{ClusterApi, KubeError};

use crate::{Reporter, collect_used_claim_names, find_unused};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Cluster(#[from] KubeError),

    #[error("failed to write report")]
    Write(#[from] io::Error),
}

/// What a single scan saw
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub pods: usize,
    pub claims: usize,
    /// Distinct claim names referenced by pods
    pub used: usize,
    /// Unused claim names, in listing order
    pub unused: Vec<String>,
}

/// Scan `namespace` once and report its unused claims
///
/// Pods and claims are fetched one after the other, so a claim mounted
/// between the two requests can show up as unused. Nothing is reported
/// unless both requests succeed.
pub async fn scan<C, W>(
    client: &C,
    namespace: &str,
    reporter: &mut Reporter<W>,
) -> Result<ScanSummary, ScanError>
where
    C: ClusterApi,
    W: Write,
{
    reporter.listing_pods()?;
    let pods = client.list_pods(namespace).await?;
    let claims = client.list_persistent_volume_claims(namespace).await?;

    for pod in &pods {
        debug!(
            pod = %pod.name,
            namespace = %pod.namespace,
            claims = ?pod.claim_names,
            "pod claim references"
        );
    }

    let used = collect_used_claim_names(&pods);
    let unused = find_unused(&claims, &used);
    for claim in &unused {
        debug!(
            claim = %claim.name,
            namespace = %claim.namespace,
            phase = claim.phase.as_deref().unwrap_or("Unknown"),
            capacity = claim.capacity.as_deref().unwrap_or("-"),
            storage_class = claim.storage_class.as_deref().unwrap_or("-"),
            volume = claim.volume_name.as_deref().unwrap_or("-"),
            "unused claim"
        );
    }
    debug!(
        namespace,
        pods = pods.len(),
        claims = claims.len(),
        used = used.len(),
        unused = unused.len(),
        "scan complete"
    );

    reporter.report(&unused)?;

    Ok(ScanSummary {
        pods: pods.len(),
        claims: claims.len(),
        used: used.len(),
        unused: unused.iter().map(|claim| claim.name.clone()).collect(),
    })
}
