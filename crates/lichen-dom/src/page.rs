use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::html::dom_from_html;
use crate::node::Dom;

/// One batch of structural change, as observed by subscribers. The payload is
/// deliberately empty: observers re-read whatever state they care about.
#[derive(Debug, Clone, Copy)]
pub struct PageEvent;

struct PageInner {
    dom: RwLock<Dom>,
    address: RwLock<String>,
    storage: DashMap<String, String>,
    events: broadcast::Sender<PageEvent>,
}

/// Shared handle to the live page session: element tree, current address,
/// page-local storage, and a mutation event stream. The bridge that mirrors
/// a real tab into this model calls `navigate` and `load_html`; everything
/// else in the workspace only reads, except the annotation patcher.
#[derive(Clone)]
pub struct Page {
    inner: Arc<PageInner>,
}

impl Page {
    pub fn new(address: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            inner: Arc::new(PageInner {
                dom: RwLock::new(Dom::new()),
                address: RwLock::new(address.into()),
                storage: DashMap::new(),
                events,
            }),
        }
    }

    pub fn from_html(address: impl Into<String>, html: &str) -> Self {
        let page = Self::new(address);
        *page.inner.dom.write().expect("page tree lock poisoned") = dom_from_html(html);
        page
    }

    pub fn address(&self) -> String {
        self.inner
            .address
            .read()
            .expect("page address lock poisoned")
            .clone()
    }

    /// Records an in-place route change. The content that the new view will
    /// render arrives separately through `load_html` or `mutate`.
    pub fn navigate(&self, address: impl Into<String>) {
        *self
            .inner
            .address
            .write()
            .expect("page address lock poisoned") = address.into();
        self.emit();
    }

    /// Replaces the whole tree, as a client-side re-render does.
    pub fn load_html(&self, html: &str) {
        *self.inner.dom.write().expect("page tree lock poisoned") = dom_from_html(html);
        self.emit();
    }

    pub fn with_dom<R>(&self, f: impl FnOnce(&Dom) -> R) -> R {
        f(&self.inner.dom.read().expect("page tree lock poisoned"))
    }

    /// Runs one mutation batch against the tree and notifies observers once,
    /// after the closure returns.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Dom) -> R) -> R {
        let out = f(&mut self.inner.dom.write().expect("page tree lock poisoned"));
        self.emit();
        out
    }

    pub fn events(&self) -> broadcast::Receiver<PageEvent> {
        self.inner.events.subscribe()
    }

    pub fn storage_get(&self, key: &str) -> Option<String> {
        self.inner.storage.get(key).map(|v| v.value().clone())
    }

    pub fn storage_set(&self, key: &str, value: &str) {
        self.inner.storage.insert(key.to_string(), value.to_string());
    }

    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.with_dom(|dom| {
            dom.descendants(dom.root()).into_iter().find_map(|id| {
                if dom.tag(id) == Some("meta") && dom.attr(id, "name") == Some(name) {
                    dom.attr(id, "content").map(str::to_string)
                } else {
                    None
                }
            })
        })
    }

    fn emit(&self) {
        // Nobody listening yet is fine; the monitor subscribes at startup.
        let _ = self.inner.events.send(PageEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_address_and_notifies() {
        let page = Page::new("https://space.playentry.org/world/a");
        let mut rx = page.events();
        page.navigate("https://space.playentry.org/world/b");
        assert_eq!(page.address(), "https://space.playentry.org/world/b");
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn mutate_emits_one_event_per_batch() {
        let page = Page::new("https://space.playentry.org/world/a");
        let mut rx = page.events();
        page.mutate(|dom| {
            let root = dom.root();
            let a = dom.create_element("em");
            let b = dom.create_element("em");
            dom.append_child(root, a);
            dom.append_child(root, b);
        });
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn meta_content_finds_named_tag() {
        let page = Page::from_html(
            "https://space.playentry.org/world/a",
            "<html><head><meta name=\"csrf-token\" content=\"tok-123\"></head><body></body></html>",
        );
        assert_eq!(page.meta_content("csrf-token").as_deref(), Some("tok-123"));
        assert_eq!(page.meta_content("viewport"), None);
    }

    #[test]
    fn storage_round_trip() {
        let page = Page::new("https://space.playentry.org/world/a");
        assert_eq!(page.storage_get("csrfToken"), None);
        page.storage_set("csrfToken", "stored");
        assert_eq!(page.storage_get("csrfToken").as_deref(), Some("stored"));
    }
}
