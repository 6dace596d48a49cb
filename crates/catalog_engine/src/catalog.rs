use engine_logging::{engine_debug, engine_info, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::aggregate::Aggregator;
use crate::fetch::PageFetcher;
use crate::{Catalog, FailureKind, FetchError, GameRecord, LoadReport, PageQuery, Strategy};

/// Page sizes and limits for [`load_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    /// Size hint for the first, hopefully complete, request.
    pub bulk_page_size: u32,
    /// Size used when the first request returns nothing.
    pub fallback_page_size: u32,
    /// Highest page number ever requested.
    pub max_pages: u32,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            bulk_page_size: 100,
            fallback_page_size: 50,
            max_pages: 20,
        }
    }
}

/// Fetch the whole catalog.
///
/// 1. One request with the bulk size hint.
/// 2. If it came back non-empty but short of the hint, page on from page 2
///    at the same size until a page is empty, shorter than that size, fails,
///    or the cap is hit.
/// 3. If it came back empty (or failed), page from 1 at the fallback size.
///
/// A failed attempt never discards records already collected. The result is
/// an error only when nothing at all was collected.
pub async fn load_catalog(
    fetcher: &dyn PageFetcher,
    plan: &FetchPlan,
    cancel: &CancellationToken,
) -> Result<Catalog, FetchError> {
    let mut run = Run::new(fetcher, cancel);

    let bulk_size = plan.bulk_page_size.max(1);
    let first = run.attempt(PageQuery::bulk(bulk_size)).await;
    let strategy = if first.is_empty() {
        run.check_cancelled()?;
        engine_info!(
            "Bulk request returned nothing; paging at size {}",
            plan.fallback_page_size
        );
        let size = plan.fallback_page_size.max(1);
        run.page_through(1, size, plan.max_pages).await;
        Strategy::Paged
    } else if first.len() < bulk_size as usize {
        engine_info!(
            "Bulk request returned {} of {} requested; fetching further pages",
            first.len(),
            bulk_size
        );
        run.aggregator.extend(first);
        run.page_through(2, bulk_size, plan.max_pages).await;
        Strategy::BulkThenPaged
    } else {
        run.aggregator.extend(first);
        Strategy::Bulk
    };
    run.check_cancelled()?;

    run.report.strategy = strategy;
    run.report.raw_records = run.aggregator.raw_len();
    let records = run.aggregator.finish();
    if records.is_empty() {
        let message = run
            .last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "every strategy returned an empty list".to_string());
        return Err(FetchError::new(FailureKind::NoData, message));
    }

    engine_info!(
        "Catalog loaded: {} games via {:?} ({} attempts, {} failed)",
        records.len(),
        run.report.strategy,
        run.report.attempts,
        run.report.failed_attempts
    );
    Ok(Catalog {
        records,
        report: run.report,
    })
}

struct Run<'a> {
    fetcher: &'a dyn PageFetcher,
    cancel: &'a CancellationToken,
    aggregator: Aggregator,
    report: LoadReport,
    last_error: Option<FetchError>,
}

impl<'a> Run<'a> {
    fn new(fetcher: &'a dyn PageFetcher, cancel: &'a CancellationToken) -> Self {
        Self {
            fetcher,
            cancel,
            aggregator: Aggregator::new(),
            report: LoadReport::default(),
            last_error: None,
        }
    }

    fn check_cancelled(&self) -> Result<(), FetchError> {
        if self.cancel.is_cancelled() {
            return Err(FetchError::new(FailureKind::Cancelled, "catalog load cancelled"));
        }
        Ok(())
    }

    /// One request. Failures are logged and turned into an empty batch.
    async fn attempt(&mut self, query: PageQuery) -> Vec<GameRecord> {
        if self.cancel.is_cancelled() {
            return Vec::new();
        }
        self.report.attempts += 1;
        engine_debug!("Fetching {:?}", query);

        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                Err(FetchError::new(FailureKind::Cancelled, "catalog load cancelled"))
            }
            result = self.fetcher.fetch_page(query) => result,
        };

        match result {
            Ok(records) => {
                engine_debug!("{:?} returned {} records", query, records.len());
                records
            }
            Err(err) => {
                engine_warn!("Attempt {:?} failed: {}", query, err);
                self.report.failed_attempts += 1;
                self.last_error = Some(err);
                Vec::new()
            }
        }
    }

    /// Sequential pages from `start`. Stops on an empty or failed page, on a
    /// page shorter than `page_size`, or after page `max_pages`.
    async fn page_through(&mut self, start: u32, page_size: u32, max_pages: u32) {
        let mut page = start;
        while page <= max_pages {
            let batch = self.attempt(PageQuery::page(page, page_size)).await;
            let len = batch.len();
            if len == 0 {
                break;
            }
            self.aggregator.extend(batch);
            if len < page_size as usize {
                break;
            }
            page += 1;
        }
        if page > max_pages {
            engine_warn!("Stopped paging at the {} page cap", max_pages);
        }
    }
}
