// Init command for writing a default site file

use crate::ui;
use dlpage::config::{self, SiteConfig};
use dlpage::constants;
use std::path::Path;

pub fn init() -> anyhow::Result<()> {
    // Check if a site file already exists
    if Path::new(&config::site_path()).exists() {
        ui::dim(&format!("{} detected. Skipping initialization.", constants::SITE_FILE));
        return Ok(());
    }

    SiteConfig::default().save()?;
    ui::success(&format!("Initialized {}", constants::SITE_FILE));
    Ok(())
}
