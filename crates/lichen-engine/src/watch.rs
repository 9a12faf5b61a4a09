use std::time::Duration;

use lichen_dom::Page;
use lichen_overlay::target::{find_container, host_markers};
use tokio::time::sleep;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    Ready,
    TimedOut,
}

/// Bounded readiness poll. The host app renders client-side and exposes no
/// completion signal, so the target structure is polled a fixed number of
/// times at a fixed interval; exhaustion is terminal for the activation but
/// harmless for the page.
#[derive(Debug, Clone, Copy)]
pub struct StructureWatcher {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for StructureWatcher {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            interval: Duration::from_millis(500),
        }
    }
}

impl StructureWatcher {
    /// Resolves `Ready` on the first attempt where the info container exists
    /// and already holds at least one host marker; `TimedOut` after the last
    /// attempt. The first check runs immediately.
    pub async fn wait_for_target(&self, page: &Page) -> WatchOutcome {
        for attempt in 1..=self.max_attempts {
            if target_ready(page) {
                debug!(attempt, "info container ready");
                return WatchOutcome::Ready;
            }
            if attempt < self.max_attempts {
                sleep(self.interval).await;
            }
        }
        WatchOutcome::TimedOut
    }
}

fn target_ready(page: &Page) -> bool {
    page.with_dom(|dom| {
        find_container(dom)
            .map(|container| !host_markers(dom, container).is_empty())
            .unwrap_or(false)
    })
}
