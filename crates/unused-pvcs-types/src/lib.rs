//! Shared types for unused-pvcs
//!
//! This crate contains the data structures passed between the cluster client,
//! the detector, and the reporter.

use std::collections::HashSet;

// ============================================================================
// Kubernetes Resource Types
// ============================================================================

/// Pod information, reduced to the volumes that reference a claim
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PodInfo {
    pub name: String,
    pub namespace: String,
    /// `claimName` of every volume backed by a PersistentVolumeClaim, in volume order
    pub claim_names: Vec<String>,
}

impl PodInfo {
    pub fn new(name: String, namespace: String) -> Self {
        Self {
            name,
            namespace,
            claim_names: Vec::new(),
        }
    }

    /// Add a claim reference
    pub fn with_claim(mut self, claim_name: impl Into<String>) -> Self {
        self.claim_names.push(claim_name.into());
        self
    }
}

/// PersistentVolumeClaim information
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimInfo {
    pub name: String,
    pub namespace: String,
    pub phase: Option<String>,
    pub volume_name: Option<String>,
    pub storage_class: Option<String>,
    /// Requested storage, e.g. "10Gi"
    pub capacity: Option<String>,
}

impl ClaimInfo {
    pub fn new(name: String, namespace: String) -> Self {
        Self {
            name,
            namespace,
            ..Default::default()
        }
    }
}

// ============================================================================
// Detection Types
// ============================================================================

/// Names of every claim referenced by at least one pod volume
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedClaimNames(HashSet<String>);

impl UsedClaimNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UsedClaimNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_claim_names_dedupe() {
        let used: UsedClaimNames = ["data", "data", "logs"].into_iter().collect();
        assert_eq!(used.len(), 2);
        assert!(used.contains("data"));
        assert!(used.contains("logs"));
        assert!(!used.contains("cache"));
    }

    #[test]
    fn test_insert_reports_new_names() {
        let mut used = UsedClaimNames::new();
        assert!(used.is_empty());
        assert!(used.insert("data"));
        assert!(!used.insert("data".to_string()));
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn test_pod_with_claims() {
        let pod = PodInfo::new("web-0".to_string(), "default".to_string())
            .with_claim("data")
            .with_claim("logs");
        assert_eq!(pod.claim_names, vec!["data", "logs"]);
    }
}
