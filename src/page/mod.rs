// Page module: the DOM contract the controller writes into

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::InstallerKind;
use crate::constants;
use crate::error::PageError;

pub mod panel;
pub mod router;

pub use panel::{PanelEvent, PanelState};
pub use router::{PageKind, PageSession, Viewport};

pub const RECOMMENDED_ID: &str = "recommended";
pub const RECOMMENDED_LABEL_ID: &str = "reco-ver";

pub fn link_id(kind: InstallerKind, version: &str) -> String {
    match kind {
        InstallerKind::Patched => format!("pp-{}", version),
        InstallerKind::Unpatched => format!("up-{}", version),
    }
}

pub fn panel_id(version: &str) -> String {
    format!("patch{}", version)
}

/// CSS `display` values the controller sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// No inline style; the stylesheet decides.
    #[default]
    Unset,
    None,
    InlineBlock,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub href: String,
    pub display: Display,
    pub text: String,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            href: constants::PLACEHOLDER_HREF.to_string(),
            display: Display::Unset,
            text: String::new(),
        }
    }
}

impl Element {
    pub fn hidden() -> Self {
        Self {
            display: Display::None,
            ..Self::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.href != constants::PLACEHOLDER_HREF
    }

    pub fn is_visible(&self) -> bool {
        self.display != Display::None
    }
}

/// Element lookup by id. A browser binding or the in-memory page implements this.
pub trait Dom {
    fn element(&self, id: &str) -> Option<&Element>;
    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, PageError> {
        self.element_mut(id).ok_or_else(|| PageError::MissingElement { id: id.to_string() })
    }
}

/// In-memory page holding elements by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDom {
    elements: BTreeMap<String, Element>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// The downloads page: two links per known version, one panel per panel version
    /// (created hidden), the recommended block and its label.
    pub fn downloads_page<S: AsRef<str>>(known_versions: &[S], panels: &[S]) -> Self {
        let mut dom = Self::new();
        for version in known_versions {
            for kind in InstallerKind::ALL {
                dom.insert(&link_id(kind, version.as_ref()), Element::default());
            }
        }
        for version in panels {
            dom.insert(&panel_id(version.as_ref()), Element::hidden());
        }
        dom.insert(RECOMMENDED_ID, Element::default());
        dom.insert(RECOMMENDED_LABEL_ID, Element::default());
        dom
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }
}

impl Dom for MemoryDom {
    fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }
}

/// Element ids that exist for one version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionHandles {
    pub patched: Option<String>,
    pub unpatched: Option<String>,
    pub panel: Option<String>,
}

impl VersionHandles {
    pub fn link(&self, kind: InstallerKind) -> Option<&str> {
        match kind {
            InstallerKind::Patched => self.patched.as_deref(),
            InstallerKind::Unpatched => self.unpatched.as_deref(),
        }
    }
}

/// Version → element handles, resolved once against the page.
#[derive(Debug, Clone, Default)]
pub struct HandleMap {
    versions: BTreeMap<String, VersionHandles>,
}

impl HandleMap {
    pub fn build<D: Dom, S: AsRef<str>>(dom: &D, known_versions: &[S], panels: &[S]) -> Self {
        let existing = |id: String| dom.element(&id).is_some().then_some(id);
        let mut versions: BTreeMap<String, VersionHandles> = BTreeMap::new();

        for version in known_versions {
            let version = version.as_ref();
            let handles = versions.entry(version.to_string()).or_default();
            handles.patched = existing(link_id(InstallerKind::Patched, version));
            handles.unpatched = existing(link_id(InstallerKind::Unpatched, version));
        }
        for version in panels {
            let version = version.as_ref();
            versions.entry(version.to_string()).or_default().panel = existing(panel_id(version));
        }

        Self { versions }
    }

    pub fn link(&self, version: &str, kind: InstallerKind) -> Result<&str, PageError> {
        self.versions
            .get(version)
            .and_then(|handles| handles.link(kind))
            .ok_or_else(|| PageError::MissingElement {
                id: link_id(kind, version),
            })
    }

    pub fn panel(&self, version: &str) -> Result<&str, PageError> {
        self.versions
            .get(version)
            .and_then(|handles| handles.panel.as_deref())
            .ok_or_else(|| PageError::MissingElement {
                id: panel_id(version),
            })
    }

    /// All link ids that exist, in no particular order.
    pub fn link_ids(&self) -> impl Iterator<Item = &str> {
        self.versions.values().flat_map(|handles| {
            InstallerKind::ALL
                .into_iter()
                .filter_map(move |kind| handles.link(kind))
        })
    }
}
