// Mirror resolution: choosing the host prefix for a relative installer path

use crate::catalog::MirrorList;
use crate::config::Hosts;

/// Exact membership of `path` in the mirror list.
pub fn is_mirrored(path: &str, mirrors: &MirrorList) -> bool {
    mirrors.contains(path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPrefixes {
    pub canonical: String,
    pub mirror: String,
}

impl HostPrefixes {
    pub fn new(canonical: &str, mirror: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            mirror: mirror.to_string(),
        }
    }

    /// Full download URL: the mirror prefix when the path is mirrored, else the canonical one.
    pub fn resolve(&self, path: &str, mirrors: &MirrorList) -> String {
        let prefix = if is_mirrored(path, mirrors) {
            &self.mirror
        } else {
            &self.canonical
        };
        format!("{}{}", prefix, path)
    }
}

impl From<&Hosts> for HostPrefixes {
    fn from(hosts: &Hosts) -> Self {
        Self::new(&hosts.canonical, &hosts.mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> HostPrefixes {
        HostPrefixes::new("https://primary.example/", "https://mirror.example/")
    }

    #[test]
    fn test_mirrored_path_uses_mirror_host() {
        let mirrors = MirrorList::new(vec!["patched-installer/a.exe".to_string()]);
        assert_eq!(
            hosts().resolve("patched-installer/a.exe", &mirrors),
            "https://mirror.example/patched-installer/a.exe"
        );
    }

    #[test]
    fn test_unmirrored_path_uses_canonical_host() {
        let mirrors = MirrorList::new(vec!["patched-installer/a.exe".to_string()]);
        assert_eq!(
            hosts().resolve("msn-installer/a.exe", &mirrors),
            "https://primary.example/msn-installer/a.exe"
        );
        assert_eq!(
            hosts().resolve("patched-installer/b.exe", &MirrorList::default()),
            "https://primary.example/patched-installer/b.exe"
        );
    }

    #[test]
    fn test_from_config_hosts() {
        let prefixes = HostPrefixes::from(&Hosts::default());
        assert_eq!(prefixes.mirror, "http://storage.log1p.xyz/");
    }
}
