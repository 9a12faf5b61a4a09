use std::time::Duration;

use lichen_dom::Page;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Watches the page's mutation stream for in-place route changes and queues
/// a fresh activation for each one. Lives for the document's lifetime; the
/// task ends only when the page handle (and with it the event stream) goes
/// away.
#[derive(Debug, Clone, Copy)]
pub struct NavigationMonitor {
    /// Grace period before reactivating, so the new view has begun rendering
    /// by the time the structure watcher starts polling.
    pub reactivation_delay: Duration,
}

impl Default for NavigationMonitor {
    fn default() -> Self {
        Self {
            reactivation_delay: Duration::from_millis(1000),
        }
    }
}

impl NavigationMonitor {
    pub fn spawn(&self, page: Page, activations: mpsc::Sender<()>) -> JoinHandle<()> {
        let delay = self.reactivation_delay;
        tokio::spawn(async move {
            let mut events = page.events();
            let mut last_seen = page.address();
            loop {
                match events.recv().await {
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Dropped event batches are fine; the address compare
                        // below runs against current state either way.
                        debug!(skipped, "mutation stream lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }

                let current = page.address();
                if current == last_seen {
                    continue;
                }
                last_seen = current.clone();
                info!(address = %current, "in-place navigation detected");

                // Schedule without blocking observation; the activation queue
                // serializes actual pipeline runs.
                let queue = activations.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = queue.send(()).await;
                });
            }
        })
    }
}
