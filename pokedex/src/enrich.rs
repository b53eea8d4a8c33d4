//! Turn bare directory entries into display-ready cards
//!
//! Every entry of a batch gets its own detail request; the requests run
//! concurrently and are joined once all of them have settled.

use crate::api::PokeApi;
use crate::error::{Error, Result};
use futures::future::join_all;
use pokedex_common::{DirectoryEntry, DisplayItem};

/// A single entry whose detail fetch failed
#[derive(Debug)]
pub struct EnrichFailure {
    pub entry: DirectoryEntry,
    pub error: Error,
}

/// Outcome of a batch: successful cards plus per-entry failures, both in
/// directory order
#[derive(Debug, Default)]
pub struct EnrichReport {
    pub items: Vec<DisplayItem>,
    pub failures: Vec<EnrichFailure>,
}

impl EnrichReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len() + self.failures.len()
    }

    /// All-or-nothing view of the batch: any failure discards every item
    pub fn into_atomic(self) -> Result<Vec<DisplayItem>> {
        let total = self.total();
        let failed = self.failures.len();

        match self.failures.into_iter().next() {
            None => Ok(self.items),
            Some(first) => Err(Error::BatchFailed {
                failed,
                total,
                source: Box::new(first.error),
            }),
        }
    }
}

/// Fetch one entry's detail record and build its card
pub async fn enrich_entry(api: &PokeApi, entry: &DirectoryEntry) -> Result<DisplayItem> {
    let record = api.fetch_pokemon(&entry.name).await?;
    Ok(DisplayItem::from_record(entry, &record))
}

/// Enrich a batch, keeping whatever succeeded
pub async fn enrich_partial(api: &PokeApi, entries: &[DirectoryEntry]) -> EnrichReport {
    let outcomes = join_all(entries.iter().map(|entry| async move {
        let outcome = enrich_entry(api, entry).await;
        (entry, outcome)
    }))
    .await;

    let mut report = EnrichReport::default();
    for (entry, outcome) in outcomes {
        match outcome {
            Ok(item) => report.items.push(item),
            Err(error) => {
                log::warn!("Failed to enrich '{}': {}", entry.name, error);
                report.failures.push(EnrichFailure {
                    entry: entry.clone(),
                    error,
                });
            }
        }
    }

    log::debug!(
        "Enriched {}/{} entries",
        report.items.len(),
        report.total()
    );
    report
}

/// Enrich a batch all-or-nothing: one failed entry rejects the whole batch
/// with `BatchFailed` and no items are returned
pub async fn enrich(api: &PokeApi, entries: &[DirectoryEntry]) -> Result<Vec<DisplayItem>> {
    enrich_partial(api, entries).await.into_atomic()
}

#[cfg(test)]
#[path = "enrich_tests.rs"]
mod tests;
