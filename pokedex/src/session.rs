//! Listing view session
//!
//! A `BrowseSession` owns everything the listing view needs for its lifetime:
//! the cached directory, the visible cards, the scroll cursor and the set of
//! in-flight enrichment batches. Batches run as tokio tasks and their results
//! are applied through `SearchState`, which orders them by ticket:
//!
//! - a Replace batch (initial page, search) starts a new generation; results
//!   from older generations are dropped
//! - within a generation, results are applied in issue order, so a later
//!   scroll page that finishes first waits for its predecessor
//!
//! Closing (or dropping) the session aborts every in-flight batch.

use crate::api::PokeApi;
use crate::config::{BatchPolicy, PokedexConfig};
use crate::cursor::{ScrollCursor, ScrollMetrics};
use crate::directory::ListingCache;
use crate::enrich::{enrich_partial, EnrichFailure, EnrichReport};
use crate::error::{Error, Result};
use crate::search::normalize_query;
use pokedex_common::{DirectoryEntry, DisplayItem};
use std::collections::BTreeMap;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// Results replace the visible listing
    Replace,
    /// Results are appended to the visible listing
    Append,
}

/// Sequencing token attached to every batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTicket {
    pub generation: u64,
    pub seq: u64,
    pub kind: BatchKind,
}

/// What happened to a completed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Applied, possibly together with parked successors
    Now,
    /// Waiting for an earlier batch of the same generation
    Parked,
    /// Superseded by a newer Replace batch and dropped
    Stale,
}

/// Result of one batch after the batch policy has been applied
pub type BatchOutcome = Result<EnrichReport>;

/// Visible listing plus the bookkeeping that orders batch results
#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    visible_items: Vec<DisplayItem>,
    last_failures: Vec<EnrichFailure>,
    generation: u64,
    next_seq: u64,
    next_apply: u64,
    parked: BTreeMap<u64, (BatchKind, BatchOutcome)>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible_items(&self) -> &[DisplayItem] {
        &self.visible_items
    }

    /// Per-entry failures of the most recently applied batch
    pub fn last_failures(&self) -> &[EnrichFailure] {
        &self.last_failures
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a ticket for a batch. Replace opens a new generation, which
    /// invalidates every ticket issued before it.
    pub fn begin(&mut self, kind: BatchKind) -> BatchTicket {
        if kind == BatchKind::Replace {
            self.generation += 1;
            self.next_seq = 0;
            self.next_apply = 0;
            self.parked.clear();
        }

        let ticket = BatchTicket {
            generation: self.generation,
            seq: self.next_seq,
            kind,
        };
        self.next_seq += 1;
        ticket
    }

    /// Record a finished batch and apply everything that is now in order
    pub fn complete(&mut self, ticket: BatchTicket, outcome: BatchOutcome) -> Applied {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale batch (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return Applied::Stale;
        }

        self.parked.insert(ticket.seq, (ticket.kind, outcome));

        let mut applied = Applied::Parked;
        while let Some((kind, outcome)) = self.parked.remove(&self.next_apply) {
            self.apply(kind, outcome);
            self.next_apply += 1;
            applied = Applied::Now;
        }
        applied
    }

    fn apply(&mut self, kind: BatchKind, outcome: BatchOutcome) {
        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                log::error!("Listing batch failed, keeping current results: {}", e);
                return;
            }
        };

        if report.items.is_empty() && !report.failures.is_empty() {
            log::error!(
                "Listing batch failed for all {} entries, keeping current results",
                report.failures.len()
            );
            self.last_failures = report.failures;
            return;
        }

        if !report.failures.is_empty() {
            log::warn!(
                "Listing batch applied with {} of {} entries missing",
                report.failures.len(),
                report.total()
            );
        }

        match kind {
            BatchKind::Replace => self.visible_items = report.items,
            BatchKind::Append => self.visible_items.extend(report.items),
        }
        self.last_failures = report.failures;
    }
}

/// Narrow a report according to the batch policy
fn apply_policy(report: EnrichReport, policy: BatchPolicy) -> BatchOutcome {
    match policy {
        BatchPolicy::Partial => Ok(report),
        BatchPolicy::Atomic => report.into_atomic().map(|items| EnrichReport {
            items,
            failures: Vec::new(),
        }),
    }
}

/// Listing view state plus its in-flight batches.
///
/// Batches are spawned onto the current tokio runtime, so `search`,
/// `on_scroll` and `show_first_page` must be called from within one.
pub struct BrowseSession {
    api: PokeApi,
    config: PokedexConfig,
    directory: ListingCache,
    state: SearchState,
    cursor: ScrollCursor,
    in_flight: JoinSet<(BatchTicket, BatchOutcome)>,
    closed: bool,
}

impl BrowseSession {
    /// Load the directory and show the first page
    pub async fn open(api: PokeApi, config: PokedexConfig) -> Result<Self> {
        let directory = ListingCache::load(&api, config.directory_limit).await?;

        let mut session = Self::with_directory(api, config, directory);
        session.show_first_page();
        session.settle().await?;
        Ok(session)
    }

    /// Start a session over an already loaded directory; nothing is shown
    /// until a page or search is issued
    pub fn with_directory(api: PokeApi, config: PokedexConfig, directory: ListingCache) -> Self {
        Self {
            api,
            config,
            directory,
            state: SearchState::default(),
            cursor: ScrollCursor::new(),
            in_flight: JoinSet::new(),
            closed: false,
        }
    }

    pub fn directory(&self) -> &ListingCache {
        &self.directory
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn visible_items(&self) -> &[DisplayItem] {
        self.state.visible_items()
    }

    pub fn last_failures(&self) -> &[EnrichFailure] {
        self.state.last_failures()
    }

    pub fn cursor(&self) -> ScrollCursor {
        self.cursor
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Replace the listing with the first directory page. Requires a tokio
    /// runtime.
    pub fn show_first_page(&mut self) {
        let page = self.directory.page(0, self.config.page_size).to_vec();
        self.issue(BatchKind::Replace, page);
    }

    /// Run a name search and issue the matches as a Replace batch.
    ///
    /// An empty query leaves the listing as it is, unless
    /// `restore_on_empty_query` is set. The scroll cursor is never reset.
    /// Requires a tokio runtime.
    pub fn search(&mut self, raw_query: &str) -> Result<()> {
        self.ensure_open()?;
        self.state.set_query(raw_query);

        let Some(query) = normalize_query(raw_query) else {
            if self.config.restore_on_empty_query {
                log::debug!("Empty query, restoring first page");
                self.show_first_page();
            } else {
                log::debug!("Empty query, listing left unchanged");
            }
            return Ok(());
        };

        let matches = self.directory.filter(&query, self.config.search_limit);
        log::info!("Search '{}': {} matches", query, matches.len());
        self.issue(BatchKind::Replace, matches);
        Ok(())
    }

    /// Handle a scroll event. Returns true when a new page was issued.
    /// Requires a tokio runtime.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Result<bool> {
        self.ensure_open()?;
        if !metrics.at_bottom() {
            return Ok(false);
        }

        let page = self
            .cursor
            .extend(self.directory.entries(), self.config.page_size)
            .to_vec();
        if page.is_empty() {
            log::debug!(
                "Directory exhausted at offset {}, nothing to reveal",
                self.cursor.offset()
            );
            return Ok(false);
        }

        log::debug!(
            "Revealing {} entries at offset {}",
            page.len(),
            self.cursor.offset()
        );
        self.issue(BatchKind::Append, page);
        Ok(true)
    }

    /// Wait for every in-flight batch and apply the results
    pub async fn settle(&mut self) -> Result<()> {
        self.ensure_open()?;

        while let Some(joined) = self.in_flight.join_next().await {
            match joined {
                Ok((ticket, outcome)) => {
                    self.state.complete(ticket, outcome);
                }
                Err(e) if e.is_cancelled() => log::debug!("Batch cancelled"),
                Err(e) => log::error!("Batch task failed: {}", e),
            }
        }
        Ok(())
    }

    /// Tear the view down: abort in-flight batches and refuse further work
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        let pending = self.in_flight.len();
        // Dropping a JoinSet aborts every task it still holds
        drop(std::mem::take(&mut self.in_flight));
        self.closed = true;
        log::info!("Listing session closed ({} batches aborted)", pending);
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn issue(&mut self, kind: BatchKind, batch: Vec<DirectoryEntry>) {
        if kind == BatchKind::Replace {
            // Everything in flight belongs to the generation being replaced
            self.in_flight.abort_all();
        }
        let ticket = self.state.begin(kind);

        let api = self.api.clone();
        let policy = self.config.batch_policy;
        self.in_flight.spawn(async move {
            let report = enrich_partial(&api, &batch).await;
            (ticket, apply_policy(report, policy))
        });
    }
}

impl Drop for BrowseSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
