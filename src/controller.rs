// Download page controller: link population and instructions panels

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::catalog::{Catalogs, DocumentSource, InstallerKind, MirrorList};
use crate::config::SiteConfig;
use crate::constants;
use crate::error::PageError;
use crate::mirror::HostPrefixes;
use crate::page::{
    self, Display, Dom, HandleMap, PanelEvent, PanelState, RECOMMENDED_ID, RECOMMENDED_LABEL_ID,
};
use crate::version::{self, VersionLabels};

/// Final state of one link element after population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkState {
    pub version: String,
    pub kind: InstallerKind,
    pub href: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommended {
    pub version: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub language: String,
    pub recommended: Option<Recommended>,
    pub links: Vec<LinkState>,
}

pub struct DownloadPageController<D: Dom> {
    dom: D,
    handles: HandleMap,
    hosts: HostPrefixes,
    labels: VersionLabels,
    known_versions: Vec<String>,
    catalogs: Catalogs,
    panel: PanelState,
}

impl<D: Dom> DownloadPageController<D> {
    pub fn new(config: &SiteConfig, dom: D, catalogs: Catalogs) -> Self {
        let handles = HandleMap::build(&dom, &config.page.known_versions, config.panel_versions());
        Self {
            dom,
            handles,
            hosts: HostPrefixes::from(&config.hosts),
            labels: VersionLabels::new(config.labels.clone()),
            known_versions: config.page.known_versions.clone(),
            catalogs,
            panel: PanelState::default(),
        }
    }

    /// Load both catalogs from `source`, then build the controller.
    pub async fn initialize(config: &SiteConfig, dom: D, source: &dyn DocumentSource) -> Self {
        let catalogs = Catalogs::load(source).await;
        Self::new(config, dom, catalogs)
    }

    /// Re-fetch both catalogs; the page keeps showing the old links until the next population.
    pub async fn reload(&mut self, source: &dyn DocumentSource) {
        self.catalogs = Catalogs::load(source).await;
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn shown_panel(&self) -> Option<&str> {
        self.panel.shown()
    }

    /// Point every download link at the best host for `language` and show only resolved links.
    ///
    /// The recommended version is the highest one with a patched installer and a `pp-` link on
    /// the page; catalog versions without elements are skipped (`doctor` reports them as
    /// `UNKNOWN_VERSION`). Without a downloads catalog all links stay at the placeholder and are
    /// hidden, and `CatalogUnavailable` is returned.
    pub fn populate_links(&mut self, language: &str) -> Result<LinkReport, PageError> {
        self.reset_links();

        let Some(catalog) = self.catalogs.downloads.as_ref() else {
            self.sweep_visibility();
            self.set_display(RECOMMENDED_ID, Display::None);
            return Err(PageError::CatalogUnavailable {
                name: constants::DOWNLOADS_DOCUMENT.to_string(),
            });
        };

        let empty_mirrors = MirrorList::default();
        let mirrors = self.catalogs.mirrors.as_ref().unwrap_or(&empty_mirrors);

        let entries = catalog.language(language);
        if entries.is_none() {
            debug!("Language '{}' not in catalog", language);
        }
        let mut versions: Vec<&String> = entries.map(|e| e.keys().collect()).unwrap_or_default();
        version::sort_descending(&mut versions);

        // Resolved URLs per kind, kept for versions the page has no element for too.
        let mut resolved: BTreeMap<(InstallerKind, String), String> = BTreeMap::new();
        let mut recommended: Option<String> = None;

        for kind in InstallerKind::ALL {
            for ver in &versions {
                let Some(file) = entries.and_then(|e| e[*ver].file(kind)) else {
                    continue;
                };
                let url = self.hosts.resolve(&kind.relative_path(file), mirrors);
                // Only a version the page can show may be recommended.
                if kind == InstallerKind::Patched
                    && recommended.is_none()
                    && self.handles.link(ver, kind).is_ok()
                {
                    recommended = Some(ver.to_string());
                }
                resolved.insert((kind, ver.to_string()), url);
            }
        }

        for ((kind, ver), url) in &resolved {
            match self.handles.link(ver, *kind) {
                Ok(id) => {
                    debug!("{} -> {}", id, url);
                    if let Some(element) = self.dom.element_mut(id) {
                        element.href = url.clone();
                    }
                }
                Err(e) => debug!("Skipping version {}: {}", ver, e),
            }
        }

        let recommended = match recommended {
            None => {
                self.set_display(RECOMMENDED_ID, Display::None);
                None
            }
            Some(ver) => {
                let label = self.labels.version_to_string(&ver);
                let href = resolved[&(InstallerKind::Patched, ver.clone())].clone();
                if let Some(element) = self.dom.element_mut(RECOMMENDED_LABEL_ID) {
                    element.text = label.clone();
                }
                if let Some(element) = self.dom.element_mut(RECOMMENDED_ID) {
                    element.href = href.clone();
                    element.display = Display::Unset;
                }
                Some(Recommended {
                    version: ver,
                    label,
                    href,
                })
            }
        };

        self.sweep_visibility();

        Ok(LinkReport {
            language: language.to_string(),
            recommended,
            links: self.link_states(),
        })
    }

    /// Current link states in known-version order. Versions without elements are left out.
    pub fn link_states(&self) -> Vec<LinkState> {
        let mut states = Vec::new();
        for ver in &self.known_versions {
            for kind in InstallerKind::ALL {
                let Some(element) = self
                    .handles
                    .link(ver, kind)
                    .ok()
                    .and_then(|id| self.dom.element(id))
                else {
                    continue;
                };
                states.push(LinkState {
                    version: ver.clone(),
                    kind,
                    href: element.href.clone(),
                    visible: element.is_visible(),
                });
            }
        }
        states
    }

    /// Show the instructions panel for `version`, hiding the one shown before.
    pub fn show_instructions(&mut self, version: &str) -> Vec<PanelEvent> {
        let events = self.panel.select(version);
        for event in &events {
            match event {
                PanelEvent::Hide(v) => self.hide_panel(Some(v.as_str())),
                PanelEvent::Show(v) => self.set_panel_display(v, Display::Block),
            }
        }
        events
    }

    /// Hide the shown instructions panel, if any, and return to the initial state.
    pub fn clear_instructions(&mut self) -> Vec<PanelEvent> {
        let events = self.panel.clear();
        for event in &events {
            if let PanelEvent::Hide(v) = event {
                self.hide_panel(Some(v.as_str()));
            }
        }
        events
    }

    fn hide_panel(&mut self, version: Option<&str>) {
        if let Some(v) = version {
            self.set_panel_display(v, Display::None);
        }
    }

    fn set_panel_display(&mut self, version: &str, display: Display) {
        let id = match self.handles.panel(version) {
            Ok(id) => id.to_string(),
            Err(e) => {
                debug!("Skipping panel {}: {}", version, e);
                return;
            }
        };
        self.set_display(&id, display);
    }

    fn reset_links(&mut self) {
        let ids: Vec<String> = self.handles.link_ids().map(String::from).collect();
        for id in ids {
            if let Some(element) = self.dom.element_mut(&id) {
                element.href = constants::PLACEHOLDER_HREF.to_string();
            }
        }
    }

    fn sweep_visibility(&mut self) {
        for ver in &self.known_versions {
            for kind in InstallerKind::ALL {
                let Ok(id) = self.handles.link(ver, kind) else {
                    debug!("No {} link for version {}", kind, ver);
                    continue;
                };
                if let Some(element) = self.dom.element_mut(id) {
                    element.display = if element.is_resolved() {
                        Display::InlineBlock
                    } else {
                        Display::None
                    };
                }
            }
        }
    }

    fn set_display(&mut self, id: &str, display: Display) {
        match self.dom.require_mut(id) {
            Ok(element) => element.display = display,
            Err(e) => debug!("{}", e),
        }
    }
}

/// Build a controller over the standard downloads page layout.
pub fn downloads_page(
    config: &SiteConfig,
    catalogs: Catalogs,
) -> DownloadPageController<page::MemoryDom> {
    let dom =
        page::MemoryDom::downloads_page(&config.page.known_versions, config.panel_versions());
    DownloadPageController::new(config, dom, catalogs)
}
