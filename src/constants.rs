// Constants module for shared string constants

pub const SITE_FILE: &str = "site.toml";

/// Logical names of the two static documents, fetched as `/static/<name>.json`.
pub const DOWNLOADS_DOCUMENT: &str = "json/downloads";
pub const MIRRORS_DOCUMENT: &str = "json/mirrored";

pub const DEFAULT_CANONICAL_HOST: &str = "http://storage.googleapis.com/escargot-storage-1/public/";
pub const DEFAULT_MIRROR_HOST: &str = "http://storage.log1p.xyz/";

/// Display order of the versions the page has link elements for.
pub const DEFAULT_KNOWN_VERSIONS: &[&str] = &[
    "85", "81", "75", "70", "62", "50", "47", "46", "45", "36", "22", "10",
];

pub const DEFAULT_LABELS: &[(&str, &str)] = &[("09", "WLM 09"), ("85", "WLM 8.5")];

/// Rendered for versions with no entry in the label table.
pub const UNKNOWN_LABEL: &str = "undefined";

/// Href of a link that has not been resolved.
pub const PLACEHOLDER_HREF: &str = "#";

pub const PATCHED_INSTALLER_DIR: &str = "patched-installer/";
pub const UNPATCHED_INSTALLER_DIR: &str = "msn-installer/";

pub const DOWNLOADS_PATH: &str = "/downloads";
pub const SCROLL_SNAP_INTERVAL_MS: u64 = 500;
pub const SCROLL_SNAP_THRESHOLD: f64 = 10.0;

/// Schema version for the doctor --json output format.
/// Increment only on breaking changes to ensure future integrations can safely evolve.
pub const SCHEMA_VERSION: u32 = 1;
