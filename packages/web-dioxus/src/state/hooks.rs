//! Query cache context and fetch plumbing.

use std::rc::Rc;

use dioxus::prelude::*;
use serde::Serialize;

use super::cache::{QueryCache, QueryKey, QueryView};

/// Handle to the app-wide query cache. Carries a version signal that
/// re-renders subscribed components whenever an entry settles.
#[derive(Clone)]
pub struct QueryCacheHandle {
    cache: Rc<QueryCache>,
    version: Signal<u64>,
}

impl QueryCacheHandle {
    /// Snapshot of the entry for `operation` with `params`. Reading
    /// subscribes the calling component to cache updates.
    pub fn query<T>(&self, operation: &'static str, params: &impl Serialize) -> QueryView<T>
    where
        T: Clone + 'static,
    {
        let _ = self.version.read();
        self.cache.view(&QueryKey::new(operation, params))
    }

    /// Start a fetch unless the key already has data or a request in
    /// flight. This is the mount and parameter-change trigger.
    pub fn fetch<T, Fut>(&self, operation: &'static str, params: &impl Serialize, future: Fut)
    where
        T: 'static,
        Fut: std::future::Future<Output = Result<T, ServerFnError>> + 'static,
    {
        let key = QueryKey::new(operation, params);
        if self.cache.contains(&key) {
            return;
        }
        self.run(key, future);
    }

    /// Start a fetch unconditionally, superseding any request already in
    /// flight for the key. This is the explicit refresh trigger.
    pub fn refetch<T, Fut>(&self, operation: &'static str, params: &impl Serialize, future: Fut)
    where
        T: 'static,
        Fut: std::future::Future<Output = Result<T, ServerFnError>> + 'static,
    {
        self.run(QueryKey::new(operation, params), future);
    }

    fn run<T, Fut>(&self, key: QueryKey, future: Fut)
    where
        T: 'static,
        Fut: std::future::Future<Output = Result<T, ServerFnError>> + 'static,
    {
        let ticket = self.cache.begin(key);
        self.bump();

        let handle = self.clone();
        spawn(async move {
            let settled = match future.await {
                Ok(value) => handle.cache.settle_ok(ticket, value),
                Err(e) => handle.cache.settle_err(ticket, e.to_string()),
            };
            if settled {
                handle.bump();
            }
        });
    }

    /// Peek avoids subscribing the caller; effects that trigger fetches
    /// must not re-run on every settle.
    fn bump(&self) {
        let next = self.version.peek().wrapping_add(1);
        let mut version = self.version;
        version.set(next);
    }
}

/// Provider component that owns the app-wide query cache
#[component]
pub fn QueryCacheProvider(children: Element) -> Element {
    // Version bumps whenever a fetch starts or settles
    let version = use_signal(|| 0u64);

    use_context_provider(|| QueryCacheHandle {
        cache: Rc::new(QueryCache::new()),
        version,
    });

    children
}

/// Hook to access the query cache
pub fn use_query_cache() -> QueryCacheHandle {
    use_context::<QueryCacheHandle>()
}
