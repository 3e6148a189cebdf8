use std::sync::Arc;

use findash_core::{Dataset, DatasetSummary};

/// Read-only state shared by every request handler.
///
/// The dataset is loaded once and never mutated; handlers only borrow it.
/// Selection state lives entirely in the page, so nothing here is
/// per-session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    dataset: Dataset,
    summary: DatasetSummary,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let summary = DatasetSummary::compute(&dataset);
        Self {
            inner: Arc::new(Inner { dataset, summary }),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.inner.dataset
    }

    pub fn summary(&self) -> DatasetSummary {
        self.inner.summary
    }
}
