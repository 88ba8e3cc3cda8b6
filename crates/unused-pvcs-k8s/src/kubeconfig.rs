//! Kubeconfig path resolution

use std::path::PathBuf;

use crate::KubeError;

/// `<home>/.kube/config`
pub fn default_kubeconfig_path() -> Result<PathBuf, KubeError> {
    let home = dirs::home_dir().ok_or(KubeError::HomeDirUnavailable)?;
    Ok(home.join(".kube").join("config"))
}

/// Use the explicitly requested kubeconfig, falling back to the per-user default
pub fn resolve_kubeconfig_path(explicit: Option<PathBuf>) -> Result<PathBuf, KubeError> {
    match explicit {
        Some(path) => Ok(path),
        None => default_kubeconfig_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/cluster.yaml");
        let resolved = resolve_kubeconfig_path(Some(path.clone())).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_default_path_under_home() {
        match dirs::home_dir() {
            Some(home) => {
                let resolved = resolve_kubeconfig_path(None).unwrap();
                assert_eq!(resolved, home.join(".kube").join("config"));
            }
            None => {
                assert!(matches!(
                    resolve_kubeconfig_path(None),
                    Err(KubeError::HomeDirUnavailable)
                ));
            }
        }
    }
}
