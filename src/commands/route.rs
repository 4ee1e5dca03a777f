// Route command for classifying a page path

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ui;
use dlpage::constants;
use dlpage::page::{PageKind, PageSession, Viewport};

/// Fixed-size viewport used to preview the snap.
struct PreviewViewport {
    offset: f64,
    height: f64,
}

impl Viewport for PreviewViewport {
    fn offset_y(&self) -> f64 {
        self.offset
    }

    fn scroll_height(&self) -> f64 {
        self.height
    }

    fn scroll_to(&mut self, y: f64) {
        self.offset = y;
    }
}

pub async fn route(path: &str, offset: f64, height: f64) -> anyhow::Result<()> {
    let mut session = PageSession::on_ready(path);

    if session.kind == PageKind::Other {
        ui::status("Page", &format!("{} (other, no scroll snap)", path));
        return Ok(());
    }
    ui::status("Page", &format!("{} (downloads)", path));

    let viewport = Arc::new(Mutex::new(PreviewViewport { offset, height }));
    session.start(viewport.clone());

    // Let exactly one tick fire.
    let wait = Duration::from_millis(constants::SCROLL_SNAP_INTERVAL_MS + 100);
    tokio::time::sleep(wait).await;
    drop(session);

    let snapped = viewport
        .lock()
        .map_err(|_| anyhow::anyhow!("Viewport lock poisoned"))?
        .offset;
    ui::action(&format!(
        "scroll snap every {}ms: offset {} -> {}",
        constants::SCROLL_SNAP_INTERVAL_MS,
        offset,
        snapped
    ));
    Ok(())
}
