// Page routing and the downloads page scroll snap

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Downloads,
    Other,
}

pub fn classify(path: &str) -> PageKind {
    match path {
        constants::DOWNLOADS_PATH => PageKind::Downloads,
        _ => PageKind::Other,
    }
}

/// Scroll position and height of the page body.
pub trait Viewport: Send {
    fn offset_y(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
}

/// Where one snap tick moves the viewport: the top when within the threshold, else the bottom.
pub fn snap_target(offset_y: f64, scroll_height: f64) -> f64 {
    if offset_y > constants::SCROLL_SNAP_THRESHOLD {
        scroll_height
    } else {
        0.0
    }
}

pub fn snap<V: Viewport + ?Sized>(viewport: &mut V) {
    let target = snap_target(viewport.offset_y(), viewport.scroll_height());
    viewport.scroll_to(target);
}

/// Run the snap on a fixed period until the task is aborted.
pub fn spawn_scroll_snap<V>(viewport: Arc<Mutex<V>>, period: Duration) -> JoinHandle<()>
where
    V: Viewport + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; the page waits a full period first.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let Ok(mut guard) = viewport.lock() else {
                debug!("Viewport lock poisoned, stopping scroll snap");
                break;
            };
            snap(&mut *guard);
        }
    })
}

/// State set up when the page finishes loading.
#[derive(Debug)]
pub struct PageSession {
    pub kind: PageKind,
    scroll_snap: Option<JoinHandle<()>>,
}

impl PageSession {
    pub fn on_ready(path: &str) -> Self {
        Self {
            kind: classify(path),
            scroll_snap: None,
        }
    }

    /// Install the scroll snap timer on the downloads page. No-op elsewhere.
    pub fn start<V: Viewport + 'static>(&mut self, viewport: Arc<Mutex<V>>) {
        if self.kind == PageKind::Downloads && self.scroll_snap.is_none() {
            let period = Duration::from_millis(constants::SCROLL_SNAP_INTERVAL_MS);
            self.scroll_snap = Some(spawn_scroll_snap(viewport, period));
        }
    }

    pub fn is_snapping(&self) -> bool {
        self.scroll_snap.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        if let Some(handle) = self.scroll_snap.take() {
            handle.abort();
        }
    }
}
