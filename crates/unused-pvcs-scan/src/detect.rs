use unused_pvcs_types::{ClaimInfo, UsedClaimNames};

/// Claims whose name no pod references, in the order they were listed
pub fn find_unused<'a>(claims: &'a [ClaimInfo], used: &UsedClaimNames) -> Vec<&'a ClaimInfo> {
    claims
        .iter()
        .filter(|claim| !used.contains(&claim.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(names: &[&str]) -> Vec<ClaimInfo> {
        names
            .iter()
            .map(|name| ClaimInfo::new(name.to_string(), "default".to_string()))
            .collect()
    }

    fn names<'a>(claims: &[&'a ClaimInfo]) -> Vec<&'a str> {
        claims.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_no_claims() {
        let used: UsedClaimNames = ["x"].into_iter().collect();
        assert!(find_unused(&[], &used).is_empty());
    }

    #[test]
    fn test_nothing_used() {
        let all = claims(&["x", "y"]);
        assert_eq!(names(&find_unused(&all, &UsedClaimNames::new())), vec!["x", "y"]);
    }

    #[test]
    fn test_preserves_listing_order() {
        let all = claims(&["zeta", "alpha", "mid", "beta"]);
        let used: UsedClaimNames = ["mid"].into_iter().collect();
        assert_eq!(
            names(&find_unused(&all, &used)),
            vec!["zeta", "alpha", "beta"]
        );
    }

    #[test]
    fn test_used_names_without_claims_are_ignored() {
        let all = claims(&["x"]);
        let used: UsedClaimNames = ["x", "gone"].into_iter().collect();
        assert!(find_unused(&all, &used).is_empty());
    }
}
