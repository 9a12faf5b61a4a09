use lichen_api::{csrf_token, WorldClient};
use lichen_core::PageContext;
use lichen_dom::Page;
use lichen_overlay::patch::apply_annotations;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::gate;
use crate::nav::NavigationMonitor;
use crate::watch::{StructureWatcher, WatchOutcome};

/// The whole pipeline behind one page: activation gate, structure watcher,
/// data fetch, annotation patch, plus the navigation monitor that restarts
/// the chain on in-place route changes.
pub struct Annotator {
    page: Page,
    client: WorldClient,
    watcher: StructureWatcher,
    monitor: NavigationMonitor,
}

impl Annotator {
    pub fn new(page: Page) -> Self {
        Self::with_client(page, WorldClient::new())
    }

    pub fn with_client(page: Page, client: WorldClient) -> Self {
        Self {
            page,
            client,
            watcher: StructureWatcher::default(),
            monitor: NavigationMonitor::default(),
        }
    }

    pub fn with_watcher(mut self, watcher: StructureWatcher) -> Self {
        self.watcher = watcher;
        self
    }

    pub fn with_monitor(mut self, monitor: NavigationMonitor) -> Self {
        self.monitor = monitor;
        self
    }

    /// Initial activation, then one activation per detected navigation, for
    /// the page's lifetime. Activations run one at a time off the queue; a
    /// run that was superseded mid-flight still completes, and the later
    /// run's clear-then-insert patch wins.
    pub async fn run(&self) {
        let (tx, mut rx) = mpsc::channel(16);
        let _monitor = self.monitor.spawn(self.page.clone(), tx);
        self.activate_once().await;
        while rx.recv().await.is_some() {
            self.activate_once().await;
        }
    }

    /// One gate → watch → fetch → patch pass. Every failure is local to this
    /// activation and degrades to "no annotation shown"; nothing here can
    /// take the monitor down.
    pub async fn activate_once(&self) {
        let run = Uuid::new_v4();
        let address = self.page.address();

        if !gate::is_world_page(&address) {
            debug!(%run, address = %address, "not a world view");
            return;
        }
        let Some(world_id) = gate::world_id(&address) else {
            error!(%run, address = %address, "world view address carries no id");
            return;
        };
        let ctx = PageContext { address, world_id };
        info!(%run, world = %ctx.world_id, "activation started");

        if self.watcher.wait_for_target(&self.page).await == WatchOutcome::TimedOut {
            warn!(
                %run,
                world = %ctx.world_id,
                attempts = self.watcher.max_attempts,
                "info container never appeared"
            );
            return;
        }

        let token = csrf_token(&self.page);
        let record = match self.client.fetch_world(&ctx.world_id, &token).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(%run, world = %ctx.world_id, "no such world");
                return;
            }
            Err(e) => {
                error!(%run, world = %ctx.world_id, error = %e, "world fetch failed");
                return;
            }
        };

        match apply_annotations(&self.page, &record) {
            Ok(()) => info!(%run, world = %ctx.world_id, "annotations applied"),
            Err(e) => error!(%run, world = %ctx.world_id, error = %e, "annotation patch failed"),
        }
    }
}
