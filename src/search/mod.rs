use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::newsapi::Results;

/// Per-request search state. Owns the result set fetched for one page and
/// derives all pagination metadata from it; never shared, never persisted.
#[derive(Debug, Serialize)]
pub struct Search {
    pub search_key: String,
    pub next_page: u32,
    pub total_pages: u32,
    pub results: Results,
}

impl Search {
    pub fn new(search_key: String, next_page: u32) -> Self {
        Self {
            search_key,
            next_page,
            total_pages: 0,
            results: Results::default(),
        }
    }

    /// Install a fetched result set: derive the page count and move the
    /// next-page cursor forward unless this already is the last page.
    pub fn paginate(&mut self, results: Results, page_size: u32) {
        self.results = results;
        self.total_pages = self.results.total_results.div_ceil(page_size);

        if !self.is_last_page() {
            self.next_page += 1;
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page >= self.total_pages
    }

    /// The page currently shown. `next_page` has already been advanced past
    /// it, except on the first page where the cursor starts.
    pub fn current_page(&self) -> u32 {
        if self.next_page == 1 {
            return self.next_page;
        }

        self.next_page - 1
    }

    pub fn previous_page(&self) -> u32 {
        self.current_page() - 1
    }
}

/// `"March 5, 2021"` — full month name, unpadded day, four-digit year,
/// taken from the timestamp's own calendar date without any timezone
/// conversion.
pub fn format_published_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%B %-d, %Y").to_string()
}
