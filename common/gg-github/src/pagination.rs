//! Fetch-until-size-satisfied pagination over `page`/`per_page` endpoints

use std::future::Future;

/// Largest `per_page` the REST API accepts
pub const PAGE_SIZE_MAX: u32 = 100;

/// One bounded page of a listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Query parameters as sent to the API
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Drives a page fetch function until the requested number of items has been
/// asked for.
///
/// The remaining count is decremented by the size *requested* for each page,
/// not by the number of items returned. Unless [`Paginator::stop_on_short_page`]
/// is enabled, a collection smaller than the requested total keeps being paged
/// past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size_max: u32,
    stop_on_short_page: bool,
}

impl Paginator {
    /// `page_size_max` is clamped to `1..=PAGE_SIZE_MAX`
    pub fn new(page_size_max: u32) -> Self {
        Self {
            page_size_max: page_size_max.clamp(1, PAGE_SIZE_MAX),
            stop_on_short_page: false,
        }
    }

    pub fn stop_on_short_page(mut self, stop: bool) -> Self {
        self.stop_on_short_page = stop;
        self
    }

    pub fn page_size_max(&self) -> u32 {
        self.page_size_max
    }

    /// Request pages of at most `page_size_max` items until `total` items have
    /// been requested, concatenating results in page order.
    ///
    /// The first failing page aborts the whole fetch; items gathered from
    /// earlier pages are discarded.
    pub async fn fetch_up_to<T, E, F, Fut>(
        &self,
        total: u32,
        mut fetch_page: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        let mut items = Vec::new();
        let mut remaining = total;
        let mut page = 1;

        while remaining > 0 {
            let request = PageRequest {
                page,
                per_page: remaining.min(self.page_size_max),
            };
            tracing::debug!(
                page = request.page,
                per_page = request.per_page,
                "fetching page"
            );

            let batch = fetch_page(request).await?;
            let short = batch.len() < request.per_page as usize;
            items.extend(batch);

            remaining -= request.per_page;
            page += 1;

            if short && self.stop_on_short_page {
                tracing::debug!(page = request.page, "short page, collection exhausted");
                break;
            }
        }

        Ok(items)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE_MAX)
    }
}
