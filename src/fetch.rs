//! Fetch state
//!
//! Loading/error/data contract for the asset forest, plus the plumbing that
//! lets a render loop start fetches on an executor and pick the results up
//! on a later frame.
//!
//! Every fetch is issued a [`RequestTicket`]. Only the latest ticket may
//! update the state, so a slow superseded response never overwrites a newer
//! one.

use std::future::Future;
use std::sync::{Arc, Mutex, TryLockError};

use asset_monitor_types::Asset;

use crate::error::FetchError;
use crate::source::{fetch_assets, AssetSource};
use crate::tree::duplicate_ids;

/// Sequence number of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// FETCH STATE
// =============================================================================

/// `{assets, loading, error}` as observed by the view.
#[derive(Debug, Clone)]
pub struct FetchState {
    assets: Vec<Asset>,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchState {
    /// Initial state: nothing loaded yet, loading.
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            loading: true,
            error: None,
            latest: 0,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }

    /// Start a fetch. Previously loaded assets stay visible until it completes.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest)
    }

    /// Apply a finished fetch. Returns `false` if the ticket was superseded.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Asset>, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(
                seq = ticket.0,
                latest = self.latest,
                "dropping superseded asset response"
            );
            return false;
        }

        match result {
            Ok(assets) => {
                let duplicates = duplicate_ids(&assets);
                if !duplicates.is_empty() {
                    tracing::warn!(
                        ?duplicates,
                        "asset ids are not unique; duplicates share expand/select state"
                    );
                }
                tracing::info!(roots = assets.len(), "assets loaded");
                self.assets = assets;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Asset fetch error: {}", e);
                self.assets.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }
}

// =============================================================================
// COMPLETION INBOX
// =============================================================================

/// A finished fetch waiting to be applied.
#[derive(Debug)]
pub struct Completion {
    pub ticket: RequestTicket,
    pub result: Result<Vec<Asset>, FetchError>,
}

/// Shared slot where spawned fetch tasks drop their results.
#[derive(Clone, Default)]
pub struct CompletionInbox {
    inner: Arc<Mutex<Vec<Completion>>>,
}

impl CompletionInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, ticket: RequestTicket, result: Result<Vec<Asset>, FetchError>) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.push(Completion { ticket, result });
    }

    /// Take everything that arrived, oldest first.
    pub fn drain(&self) -> Vec<Completion> {
        match self.inner.try_lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(TryLockError::Poisoned(poisoned)) => std::mem::take(&mut *poisoned.into_inner()),
            // Writer holds the lock; pick the results up next frame
            Err(TryLockError::WouldBlock) => Vec::new(),
        }
    }
}

// =============================================================================
// FETCHER
// =============================================================================

/// Owns a source, the fetch state and the inbox.
///
/// `refetch` hands back a future for the host executor to run
/// (`tokio::spawn` natively, `spawn_local` in the browser); `poll` applies
/// whatever has completed since the last call.
pub struct AssetFetcher {
    source: Arc<dyn AssetSource>,
    state: FetchState,
    inbox: CompletionInbox,
    in_flight: usize,
}

impl AssetFetcher {
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            state: FetchState::new(),
            inbox: CompletionInbox::new(),
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Whether any issued fetch has not been picked up yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn refetch(&mut self) -> impl Future<Output = ()> + 'static {
        let ticket = self.state.begin();
        self.in_flight += 1;
        tracing::debug!(seq = ticket.seq(), source = %self.source_description(), "fetching assets");

        let source = Arc::clone(&self.source);
        let inbox = self.inbox.clone();
        async move {
            let result = fetch_assets(source.as_ref()).await;
            inbox.push(ticket, result);
        }
    }

    /// Apply completed fetches. Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for completion in self.inbox.drain() {
            self.in_flight = self.in_flight.saturating_sub(1);
            changed |= self.state.complete(completion.ticket, completion.result);
        }
        changed
    }
}
