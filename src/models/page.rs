//! Search results page data structure.

/// Links and pagination state read from one search results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Absolute job URLs in first-occurrence order, without duplicates
    pub job_urls: Vec<String>,

    /// Whether the site signals a following page
    pub has_next: bool,

    /// Whether a "next page" control (enabled or not) was present
    pub next_control: bool,

    /// Last page number, when the site declares one
    pub total_pages: Option<u32>,

    /// Page number highlighted by the pagination controls
    pub current_page: Option<u32>,
}

impl PageResult {
    /// Decide whether page `page` should be followed by another one.
    ///
    /// A declared total is a hard bound. Below it, an explicit next control
    /// wins; otherwise the declared total decides.
    pub fn continues_after(&self, page: u32) -> bool {
        if self.total_pages.is_some_and(|total| page >= total) {
            return false;
        }
        if self.next_control {
            return self.has_next;
        }
        self.has_next || self.total_pages.is_some_and(|total| page < total)
    }
}
