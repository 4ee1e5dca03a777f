// Instructions command for replaying panel selections

use crate::ui;
use dlpage::catalog::Catalogs;
use dlpage::config::SiteConfig;
use dlpage::controller;
use dlpage::page::PanelEvent;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Selection {
    version: String,
    events: Vec<PanelEvent>,
}

pub fn instructions(versions: &[String], json: bool) -> anyhow::Result<()> {
    let config = SiteConfig::load()?;
    // Panels do not depend on catalog contents.
    let mut controller = controller::downloads_page(&config, Catalogs::default());

    let selections: Vec<Selection> = versions
        .iter()
        .map(|version| Selection {
            version: version.clone(),
            events: controller.show_instructions(version),
        })
        .collect();

    if json {
        ui::line(&serde_json::to_string_pretty(&selections)?);
        return Ok(());
    }

    for selection in &selections {
        if selection.events.is_empty() {
            ui::dim(&format!("select {}: already shown", selection.version));
            continue;
        }
        let events: Vec<String> = selection
            .events
            .iter()
            .map(|event| match event {
                PanelEvent::Hide(v) => format!("hide patch{}", v),
                PanelEvent::Show(v) => format!("show patch{}", v),
            })
            .collect();
        ui::action(&format!("select {}: {}", selection.version, events.join(", ")));
    }

    match controller.shown_panel() {
        Some(version) => ui::status("Shown", &format!("patch{}", version)),
        None => ui::dim("Shown: none"),
    }
    Ok(())
}
