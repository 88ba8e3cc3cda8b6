use unused_pvcs_types::{PodInfo, UsedClaimNames};

/// Collect every claim name referenced by any pod volume
pub fn collect_used_claim_names(pods: &[PodInfo]) -> UsedClaimNames {
    pods.iter()
        .flat_map(|pod| pod.claim_names.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(name: &str, claims: &[&str]) -> PodInfo {
        claims
            .iter()
            .fold(PodInfo::new(name.to_string(), "default".to_string()), |pod, claim| {
                pod.with_claim(*claim)
            })
    }

    #[test]
    fn test_empty_pods() {
        assert!(collect_used_claim_names(&[]).is_empty());
    }

    #[test]
    fn test_pods_without_claims_contribute_nothing() {
        let used = collect_used_claim_names(&[pod("a", &[]), pod("b", &["x"])]);
        assert_eq!(used.len(), 1);
        assert!(used.contains("x"));
    }

    #[test]
    fn test_repeated_references_collapse() {
        let pods = [pod("a", &["x", "x"]), pod("b", &["x", "y"])];
        let used = collect_used_claim_names(&pods);
        assert_eq!(used.len(), 2);
        assert!(used.contains("x"));
        assert!(used.contains("y"));
    }
}
