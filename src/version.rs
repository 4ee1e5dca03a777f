// Version ordering and display labels

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::constants;
use crate::error::PageError;

fn numeric_value(version: &str) -> Option<f64> {
    version
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Descending numeric order ("85" before "10" before "9").
///
/// Versions that are not numbers sort after all numeric ones. Numerically equal
/// versions ("09" and "9") fall back to descending string order.
pub fn compare_descending(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => y
            .partial_cmp(&x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.cmp(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

pub fn sort_descending<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by(|a, b| compare_descending(a.as_ref(), b.as_ref()));
}

/// Lookup table from version code to its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLabels {
    labels: BTreeMap<String, String>,
}

impl VersionLabels {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn label(&self, version: &str) -> Result<&str, PageError> {
        self.labels
            .get(version)
            .map(String::as_str)
            .ok_or_else(|| PageError::UnknownVersionLabel {
                version: version.to_string(),
            })
    }

    /// Display name for a version, or the literal `"undefined"` when the table has none.
    pub fn version_to_string(&self, version: &str) -> String {
        self.label(version)
            .unwrap_or(constants::UNKNOWN_LABEL)
            .to_string()
    }
}

impl Default for VersionLabels {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_LABELS
                .iter()
                .map(|(version, label)| (version.to_string(), label.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let mut versions = vec!["9", "85", "10"];
        sort_descending(&mut versions);
        assert_eq!(versions, vec!["85", "10", "9"]);
    }

    #[test]
    fn test_sort_known_versions() {
        let mut versions = vec!["10", "22", "81", "85", "36", "5"];
        sort_descending(&mut versions);
        assert_eq!(versions, vec!["85", "81", "36", "22", "10", "5"]);
    }

    #[test]
    fn test_non_numeric_versions_sort_last() {
        let mut versions = vec!["beta", "10", "alpha", "85"];
        sort_descending(&mut versions);
        assert_eq!(versions, vec!["85", "10", "beta", "alpha"]);
    }

    #[test]
    fn test_equal_numeric_values_are_deterministic() {
        let mut a = vec!["9", "09"];
        let mut b = vec!["09", "9"];
        sort_descending(&mut a);
        sort_descending(&mut b);
        assert_eq!(a, b);
        assert_eq!(compare_descending("9", "9"), Ordering::Equal);
    }

    #[test]
    fn test_known_labels() {
        let labels = VersionLabels::default();
        assert_eq!(labels.version_to_string("85"), "WLM 8.5");
        assert_eq!(labels.version_to_string("09"), "WLM 09");
    }

    #[test]
    fn test_unknown_label_renders_undefined() {
        let labels = VersionLabels::default();
        assert_eq!(labels.version_to_string("99"), "undefined");
        // "9" and "09" are different table keys
        assert_eq!(labels.version_to_string("9"), "undefined");
        assert_eq!(
            labels.label("81"),
            Err(PageError::UnknownVersionLabel {
                version: "81".to_string()
            })
        );
    }
}
