//! Explicit query cache with request-token bookkeeping.
//!
//! One cache instance is created at application start and shared through
//! context. Entries are keyed by operation name plus the canonical JSON of
//! the request parameters, so the same operation issued with different
//! filters occupies different entries.
//!
//! Every fetch is handed a monotonically increasing token. A completion
//! whose token is no longer the entry's latest is discarded, so the newest
//! request wins regardless of response arrival order. The cache is only
//! touched from the UI task context; interior mutability is plain
//! `RefCell`/`Cell` with no locking.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;

/// Cache key: operation name plus canonicalized request parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    operation: &'static str,
    params: String,
}

impl QueryKey {
    pub fn new(operation: &'static str, params: &impl Serialize) -> Self {
        Self {
            operation,
            params: serde_json::to_string(params).unwrap_or_default(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Ticket handed to an in-flight fetch. Settling it resolves exactly one
/// `begin` call.
#[derive(Debug)]
pub struct FetchTicket {
    key: QueryKey,
    token: u64,
}

/// Snapshot of one cache entry for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryView<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QueryView<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

struct Slot {
    /// Latest token issued for this key. Completions carrying an older
    /// token have been superseded and are dropped.
    token: u64,
    loading: bool,
    data: Option<Box<dyn Any>>,
    error: Option<String>,
}

/// App-wide cache of backend query results.
pub struct QueryCache {
    slots: RefCell<HashMap<QueryKey, Slot>>,
    next_token: Cell<u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            next_token: Cell::new(0),
        }
    }

    /// Whether the key has settled data or a fetch in flight.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.slots.borrow().contains_key(key)
    }

    /// Mark the key loading and hand out a ticket for the new fetch.
    /// Previously settled data stays visible while the fetch runs; a
    /// previous error is cleared.
    pub fn begin(&self, key: QueryKey) -> FetchTicket {
        let token = self.next_token.get() + 1;
        self.next_token.set(token);

        let mut slots = self.slots.borrow_mut();
        let slot = slots.entry(key.clone()).or_insert_with(|| Slot {
            token,
            loading: false,
            data: None,
            error: None,
        });
        slot.token = token;
        slot.loading = true;
        slot.error = None;

        FetchTicket { key, token }
    }

    /// Store a successful result. Returns false when the ticket was
    /// superseded by a newer `begin` for the same key, in which case the
    /// value is dropped.
    pub fn settle_ok<T: 'static>(&self, ticket: FetchTicket, value: T) -> bool {
        let mut slots = self.slots.borrow_mut();
        let Some(slot) = slots.get_mut(&ticket.key) else {
            return false;
        };
        if slot.token != ticket.token {
            return false;
        }
        slot.loading = false;
        slot.data = Some(Box::new(value));
        slot.error = None;
        true
    }

    /// Store a failure. Previously settled data is kept for display.
    /// Returns false when the ticket was superseded.
    pub fn settle_err(&self, ticket: FetchTicket, message: String) -> bool {
        let mut slots = self.slots.borrow_mut();
        let Some(slot) = slots.get_mut(&ticket.key) else {
            return false;
        };
        if slot.token != ticket.token {
            return false;
        }
        slot.loading = false;
        slot.error = Some(message);
        true
    }

    /// Snapshot the entry for rendering. Unknown keys yield an empty view.
    pub fn view<T: Clone + 'static>(&self, key: &QueryKey) -> QueryView<T> {
        let slots = self.slots.borrow();
        let Some(slot) = slots.get(key) else {
            return QueryView::default();
        };
        QueryView {
            data: slot
                .data
                .as_ref()
                .and_then(|data| data.downcast_ref::<T>())
                .cloned(),
            is_loading: slot.loading,
            error: slot.error.clone(),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_key(limit: u32) -> QueryKey {
        QueryKey::new("list-titles", &limit)
    }

    #[test]
    fn test_settled_data_is_visible() {
        let cache = QueryCache::new();
        let ticket = cache.begin(list_key(10));

        let view = cache.view::<Vec<String>>(&list_key(10));
        assert!(view.is_loading);
        assert!(view.data.is_none());

        assert!(cache.settle_ok(ticket, vec!["one".to_string()]));
        let view = cache.view::<Vec<String>>(&list_key(10));
        assert!(!view.is_loading);
        assert_eq!(view.data.unwrap(), vec!["one".to_string()]);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let cache = QueryCache::new();
        let first = cache.begin(list_key(10));
        let second = cache.begin(list_key(10));

        // The stale completion must not land
        assert!(!cache.settle_ok(first, vec!["stale".to_string()]));
        let view = cache.view::<Vec<String>>(&list_key(10));
        assert!(view.is_loading);
        assert!(view.data.is_none());

        assert!(cache.settle_ok(second, vec!["fresh".to_string()]));
        let view = cache.view::<Vec<String>>(&list_key(10));
        assert!(!view.is_loading);
        assert_eq!(view.data.unwrap(), vec!["fresh".to_string()]);
    }

    #[test]
    fn test_stale_completion_after_settle_is_discarded() {
        let cache = QueryCache::new();
        let first = cache.begin(list_key(10));
        let second = cache.begin(list_key(10));

        assert!(cache.settle_ok(second, vec!["fresh".to_string()]));
        assert!(!cache.settle_ok(first, vec!["stale".to_string()]));

        let view = cache.view::<Vec<String>>(&list_key(10));
        assert_eq!(view.data.unwrap(), vec!["fresh".to_string()]);
    }

    #[test]
    fn test_refetch_keeps_previous_data_while_loading() {
        let cache = QueryCache::new();
        let ticket = cache.begin(list_key(10));
        assert!(cache.settle_ok(ticket, 41u32));

        let _refetch = cache.begin(list_key(10));
        let view = cache.view::<u32>(&list_key(10));
        assert!(view.is_loading);
        assert_eq!(view.data, Some(41));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let cache = QueryCache::new();
        let ticket = cache.begin(list_key(10));
        assert!(cache.settle_ok(ticket, 41u32));

        let refetch = cache.begin(list_key(10));
        assert!(cache.settle_err(refetch, "boom".to_string()));

        let view = cache.view::<u32>(&list_key(10));
        assert!(!view.is_loading);
        assert_eq!(view.data, Some(41));
        assert_eq!(view.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_new_fetch_clears_previous_error() {
        let cache = QueryCache::new();
        let ticket = cache.begin(list_key(10));
        assert!(cache.settle_err(ticket, "boom".to_string()));

        let _retry = cache.begin(list_key(10));
        let view = cache.view::<u32>(&list_key(10));
        assert!(view.error.is_none());
        assert!(view.is_loading);
    }

    #[test]
    fn test_distinct_params_are_distinct_entries() {
        let cache = QueryCache::new();
        let ten = cache.begin(list_key(10));
        let twenty = cache.begin(list_key(20));

        assert!(cache.settle_ok(ten, "ten".to_string()));
        assert!(cache.settle_ok(twenty, "twenty".to_string()));

        assert_eq!(
            cache.view::<String>(&list_key(10)).data.as_deref(),
            Some("ten")
        );
        assert_eq!(
            cache.view::<String>(&list_key(20)).data.as_deref(),
            Some("twenty")
        );
    }

    #[test]
    fn test_contains_covers_loading_and_settled() {
        let cache = QueryCache::new();
        assert!(!cache.contains(&list_key(10)));

        let ticket = cache.begin(list_key(10));
        assert!(cache.contains(&list_key(10)));

        cache.settle_ok(ticket, 1u32);
        assert!(cache.contains(&list_key(10)));
    }

    #[test]
    fn test_key_includes_parameters() {
        let jobs = QueryKey::new("list-titles", &serde_json::json!({"source_type": "jobs"}));
        let news = QueryKey::new("list-titles", &serde_json::json!({"source_type": "news"}));
        assert_ne!(jobs, news);
        assert_eq!(jobs.operation(), "list-titles");
    }
}
