// Doctor module for catalog health checking

use crate::ui;
use dlpage::catalog::{self, Catalogs, DownloadsCatalog, InstallerKind, MirrorList};
use dlpage::config::SiteConfig;
use dlpage::constants;
use dlpage::version::{self, VersionLabels};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Serialize)]
struct Issue {
    severity: String,
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

#[derive(Debug, Serialize)]
struct CatalogInfo {
    source: String,
    downloads_present: bool,
    mirrors_present: bool,
    languages: Vec<String>,
    mirrored_paths: usize,
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    language: String,
    versions: usize,
    recommended: Option<String>,
}

#[derive(Debug, Serialize)]
struct DoctorOutput {
    schema_version: u32,
    status: String,
    exit_code: i32,
    catalog: CatalogInfo,
    languages: Vec<LanguageInfo>,
    issues: Vec<Issue>,
}

impl Issue {
    fn new(severity: &str, code: &str, message: String, language: Option<&str>) -> Self {
        Self {
            severity: severity.to_string(),
            code: code.to_string(),
            message,
            language: language.map(String::from),
        }
    }
}

pub async fn check_health(json: bool) -> anyhow::Result<i32> {
    let config = SiteConfig::load()?;
    let location = config.catalog_location();
    let source = catalog::source_for(&location);

    let pb = ui::spinner(&format!("Loading catalogs from {}...", source.describe()));
    let catalogs = Catalogs::load(source.as_ref()).await;
    ui::clear_spinner(&pb);

    let output = diagnose(&config, &catalogs, location);

    if json {
        ui::line(&serde_json::to_string_pretty(&output)?);
    } else {
        output_human_readable(&output);
    }

    Ok(output.exit_code)
}

fn diagnose(config: &SiteConfig, catalogs: &Catalogs, source: String) -> DoctorOutput {
    let mut issues = Vec::new();
    let mut languages = Vec::new();

    if catalogs.downloads.is_none() {
        issues.push(Issue::new(
            "error",
            "CATALOG_UNAVAILABLE",
            format!("Document '{}' could not be loaded", constants::DOWNLOADS_DOCUMENT),
            None,
        ));
    }
    if catalogs.mirrors.is_none() {
        issues.push(Issue::new(
            "warning",
            "MIRRORS_UNAVAILABLE",
            format!(
                "Document '{}' could not be loaded; all links use the canonical host",
                constants::MIRRORS_DOCUMENT
            ),
            None,
        ));
    }

    if let Some(ref downloads) = catalogs.downloads {
        let labels = VersionLabels::new(config.labels.clone());
        let (info, language_issues) = check_languages(downloads, &config.page.known_versions, &labels);
        languages = info;
        issues.extend(language_issues);

        if let Some(ref mirrors) = catalogs.mirrors {
            issues.extend(check_mirrors(downloads, mirrors));
        }
    }

    // Sort issues deterministically by code, then message
    issues.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.message.cmp(&b.message)));

    let has_errors = issues.iter().any(|i| i.severity == "error");
    let has_warnings = issues.iter().any(|i| i.severity == "warning");

    let (status, exit_code) = if has_errors {
        ("error".to_string(), 2)
    } else if has_warnings {
        ("warning".to_string(), 1)
    } else {
        ("ok".to_string(), 0)
    };

    DoctorOutput {
        schema_version: constants::SCHEMA_VERSION,
        status,
        exit_code,
        catalog: CatalogInfo {
            source,
            downloads_present: catalogs.downloads.is_some(),
            mirrors_present: catalogs.mirrors.is_some(),
            languages: catalogs
                .downloads
                .as_ref()
                .map(|d| d.languages().map(String::from).collect())
                .unwrap_or_default(),
            mirrored_paths: catalogs.mirrors.as_ref().map_or(0, |m| m.paths().len()),
        },
        languages,
        issues,
    }
}

fn check_languages(
    downloads: &DownloadsCatalog,
    known_versions: &[String],
    labels: &VersionLabels,
) -> (Vec<LanguageInfo>, Vec<Issue>) {
    let mut info = Vec::new();
    let mut issues = Vec::new();
    let known: HashSet<&str> = known_versions.iter().map(String::as_str).collect();

    for language in downloads.languages() {
        let entries = match downloads.language(language) {
            Some(entries) => entries,
            None => continue,
        };

        let mut versions: Vec<&String> = entries.keys().collect();
        version::sort_descending(&mut versions);

        for ver in versions.iter().filter(|v| !known.contains(v.as_str())) {
            issues.push(Issue::new(
                "warning",
                "UNKNOWN_VERSION",
                format!("Version '{}' has no link elements and is never shown", ver),
                Some(language),
            ));
        }

        let recommended = versions
            .iter()
            .filter(|v| known.contains(v.as_str()))
            .find(|v| entries[**v].file(InstallerKind::Patched).is_some())
            .map(|v| v.to_string());

        match recommended {
            None => issues.push(Issue::new(
                "warning",
                "NO_PATCHED_INSTALLER",
                "No version offers a patched installer; the recommended link is hidden".to_string(),
                Some(language),
            )),
            Some(ref ver) => {
                if labels.label(ver).is_err() {
                    issues.push(Issue::new(
                        "info",
                        "MISSING_LABEL",
                        format!(
                            "Recommended version '{}' has no label and renders as '{}'",
                            ver,
                            constants::UNKNOWN_LABEL
                        ),
                        Some(language),
                    ));
                }
            }
        }

        info.push(LanguageInfo {
            language: language.to_string(),
            versions: versions.len(),
            recommended,
        });
    }

    (info, issues)
}

fn check_mirrors(downloads: &DownloadsCatalog, mirrors: &MirrorList) -> Vec<Issue> {
    let referenced: BTreeSet<String> = downloads.relative_paths().collect();
    mirrors
        .paths()
        .iter()
        .filter(|path| !referenced.contains(*path))
        .map(|path| {
            Issue::new(
                "info",
                "UNUSED_MIRROR",
                format!("Mirrored path '{}' is not referenced by the catalog", path),
                None,
            )
        })
        .collect()
}

fn output_human_readable(output: &DoctorOutput) {
    // 1. Catalog section
    ui::header(&format!("Catalog ({})", output.catalog.source));
    if output.catalog.downloads_present {
        ui::success(&format!(
            "Downloads: {} language(s)",
            output.catalog.languages.len()
        ));
    } else {
        ui::error("Downloads: not available");
    }
    if output.catalog.mirrors_present {
        ui::success(&format!(
            "Mirror list: {} path(s)",
            output.catalog.mirrored_paths
        ));
    } else {
        ui::warning("Mirror list: not available");
    }

    // 2. Per-language section
    if !output.languages.is_empty() {
        ui::line("");
        ui::header("Languages");
        for language in &output.languages {
            let recommended = language.recommended.as_deref().unwrap_or("none");
            ui::line(&format!(
                "  {}: {} version(s), recommended {}",
                language.language, language.versions, recommended
            ));
        }
    }

    // 3. Issues
    ui::line("");
    ui::header("Summary");
    for issue in &output.issues {
        let scope = issue
            .language
            .as_deref()
            .map(|l| format!("[{}] ", l))
            .unwrap_or_default();
        let message = format!("{}{}: {}", scope, issue.code, issue.message);
        match issue.severity.as_str() {
            "error" => ui::error(&message),
            "warning" => ui::warning(&message),
            _ => ui::dim(&format!("  {}", message)),
        }
    }
    if output.issues.is_empty() {
        ui::success("No issues");
    }

    let status_label = match output.status.as_str() {
        "error" => "errors",
        "warning" => "warnings",
        _ => "healthy",
    };
    ui::line(&format!("\nStatus: {}", status_label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlpage::catalog::InstallerPair;

    fn catalogs() -> Catalogs {
        let mut downloads = DownloadsCatalog::default();
        downloads.insert("en", "85", InstallerPair::new(Some("wlm85.exe"), None));
        downloads.insert("en", "99", InstallerPair::new(None, Some("msn99.exe")));
        downloads.insert("de", "81", InstallerPair::new(Some("wlm81.exe"), None));
        downloads.insert("fr", "70", InstallerPair::new(None, Some("msn70.exe")));
        let mirrors = MirrorList::new(vec![
            "patched-installer/wlm85.exe".to_string(),
            "patched-installer/gone.exe".to_string(),
        ]);
        Catalogs::new(downloads, mirrors)
    }

    fn codes(output: &DoctorOutput) -> Vec<(&str, Option<&str>)> {
        output
            .issues
            .iter()
            .map(|i| (i.code.as_str(), i.language.as_deref()))
            .collect()
    }

    #[test]
    fn test_reports_catalog_issues() {
        let output = diagnose(&SiteConfig::default(), &catalogs(), "site".to_string());
        let codes = codes(&output);

        assert!(codes.contains(&("UNKNOWN_VERSION", Some("en"))));
        assert!(codes.contains(&("NO_PATCHED_INSTALLER", Some("fr"))));
        assert!(codes.contains(&("MISSING_LABEL", Some("de"))));
        assert!(codes.contains(&("UNUSED_MIRROR", None)));
        assert!(!codes.contains(&("MISSING_LABEL", Some("en"))));

        assert_eq!(output.status, "warning");
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_recommended_per_language() {
        let output = diagnose(&SiteConfig::default(), &catalogs(), "site".to_string());
        let en = output.languages.iter().find(|l| l.language == "en").unwrap();
        assert_eq!(en.recommended.as_deref(), Some("85"));
        assert_eq!(en.versions, 2);
    }

    #[test]
    fn test_recommended_skips_unknown_versions() {
        let mut downloads = DownloadsCatalog::default();
        downloads.insert("en", "99", InstallerPair::new(Some("wlm99.exe"), None));
        downloads.insert("en", "85", InstallerPair::new(Some("wlm85.exe"), None));
        let output = diagnose(
            &SiteConfig::default(),
            &Catalogs::new(downloads, MirrorList::default()),
            "site".to_string(),
        );
        let en = output.languages.iter().find(|l| l.language == "en").unwrap();
        assert_eq!(en.recommended.as_deref(), Some("85"));
        assert!(codes(&output).contains(&("UNKNOWN_VERSION", Some("en"))));
    }

    #[test]
    fn test_missing_catalog_is_error() {
        let output = diagnose(&SiteConfig::default(), &Catalogs::default(), "site".to_string());
        assert_eq!(output.exit_code, 2);
        assert_eq!(
            codes(&output),
            vec![("CATALOG_UNAVAILABLE", None), ("MIRRORS_UNAVAILABLE", None)]
        );
    }

    #[test]
    fn test_healthy_catalog() {
        let mut downloads = DownloadsCatalog::default();
        downloads.insert("en", "85", InstallerPair::new(Some("wlm85.exe"), Some("msn85.exe")));
        let mirrors = MirrorList::new(vec!["msn-installer/msn85.exe".to_string()]);
        let output = diagnose(
            &SiteConfig::default(),
            &Catalogs::new(downloads, mirrors),
            "site".to_string(),
        );
        assert!(output.issues.is_empty());
        assert_eq!(output.status, "ok");
        assert_eq!(output.exit_code, 0);
    }
}
