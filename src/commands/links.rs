// Links command for populating the download links of one language

use crate::ui;
use dlpage::catalog;
use dlpage::config::SiteConfig;
use dlpage::controller::{DownloadPageController, LinkReport};
use dlpage::page::MemoryDom;
use log::info;

pub async fn links(language: &str, json: bool) -> anyhow::Result<i32> {
    let config = SiteConfig::load()?;
    let location = config.catalog_location();
    let source = catalog::source_for(&location);

    let pb = ui::spinner(&format!("Loading catalogs from {}...", source.describe()));
    let dom = MemoryDom::downloads_page(&config.page.known_versions, config.panel_versions());
    let mut controller = DownloadPageController::initialize(&config, dom, source.as_ref()).await;
    ui::clear_spinner(&pb);

    let report = match controller.populate_links(language) {
        Ok(report) => report,
        Err(e) => {
            ui::error(&format!("{} (source: {})", e, location));
            return Ok(2);
        }
    };

    info!(
        "Populated {} visible link(s) for '{}'",
        report.links.iter().filter(|l| l.visible).count(),
        language
    );

    if json {
        ui::line(&serde_json::to_string_pretty(&report)?);
    } else {
        output_human_readable(&report);
    }
    Ok(0)
}

fn output_human_readable(report: &LinkReport) {
    ui::header(&format!("Downloads ({})", report.language));

    match &report.recommended {
        Some(recommended) => ui::status(
            "Recommended",
            &format!("{} ({}) {}", recommended.label, recommended.version, recommended.href),
        ),
        None => ui::dim("Recommended: hidden"),
    }

    for link in &report.links {
        let row = format!("{:>4}  {:<9}  {}", link.version, link.kind.to_string(), link.href);
        if link.visible {
            ui::success(&row);
        } else {
            ui::dim(&format!("  {:>4}  {:<9}  hidden", link.version, link.kind.to_string()));
        }
    }
}
