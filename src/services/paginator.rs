// src/services/paginator.rs

//! Search results page parsing.
//!
//! Reads the job links and the pagination state of one rendered search page.
//! Missing pagination is not an error: a page without controls is the only
//! page.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{PageResult, SelectorConfig};
use crate::services::parse_selector;
use crate::utils::resolve_url;

/// Collects job links and pagination state from search pages.
pub struct SearchPaginator {
    base_url: Url,
    link_pattern: String,
    search_result: Selector,
    link: Selector,
    page_button: Selector,
    next_button: Selector,
}

impl SearchPaginator {
    /// Create a paginator resolving relative links against `base_url`.
    pub fn new(base_url: &str, config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            link_pattern: config.job_link_pattern.clone(),
            search_result: parse_selector(&config.search_result)?,
            link: parse_selector("a[href]")?,
            page_button: parse_selector(&config.pagination_button)?,
            next_button: parse_selector(&config.pagination_next)?,
        })
    }

    /// Read one search results page.
    pub fn collect_page(&self, html: &str) -> PageResult {
        let document = Html::parse_document(html);

        let job_urls = self.job_links(&document);
        let total_pages = self.total_pages(&document);
        let current_page = self.current_page(&document);

        let (next_control, has_next) = match self.next_control(&document) {
            Some(control) => (true, is_enabled(control)),
            None => match (current_page, total_pages) {
                (Some(current), Some(total)) => (false, current < total),
                _ => (false, false),
            },
        };

        log::debug!(
            "Search page: {} links, page {:?} of {:?}, next: {}",
            job_urls.len(),
            current_page,
            total_pages,
            has_next
        );

        PageResult {
            job_urls,
            has_next,
            next_control,
            total_pages,
            current_page,
        }
    }

    /// Job detail links inside the result containers, in page order.
    fn job_links(&self, document: &Html) -> Vec<String> {
        let containers: Vec<_> = document.select(&self.search_result).collect();
        if containers.is_empty() {
            log::warn!("Search result container not found on page");
            return Vec::new();
        }

        let mut seen = HashSet::new();
        containers
            .into_iter()
            .flat_map(|container| container.select(&self.link))
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| href.contains(self.link_pattern.as_str()))
            .filter_map(|href| resolve_url(&self.base_url, href))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    /// Highest page number among the numbered controls.
    fn total_pages(&self, document: &Html) -> Option<u32> {
        document
            .select(&self.page_button)
            .filter_map(page_number)
            .max()
    }

    fn current_page(&self, document: &Html) -> Option<u32> {
        document
            .select(&self.page_button)
            .filter(|el| el.value().attr("aria-current").is_some_and(|v| v != "false"))
            .find_map(page_number)
    }

    fn next_control<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.next_button).next()
    }
}

fn page_number(element: ElementRef<'_>) -> Option<u32> {
    element.value().attr("data-page")?.trim().parse().ok()
}

fn is_enabled(control: ElementRef<'_>) -> bool {
    let el = control.value();
    el.attr("disabled").is_none()
        && el.attr("aria-disabled") != Some("true")
        && !el.classes().any(|c| c == "disabled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, SEARCH_URL};

    fn paginator() -> SearchPaginator {
        SearchPaginator::new(SEARCH_URL, &SelectorConfig::default()).unwrap()
    }

    #[test]
    fn test_links_are_absolute_and_unique() {
        let html = fixtures::search_page(&[1, 2, 3, 2, 1], 1, 3);
        let result = paginator().collect_page(&html);

        assert_eq!(
            result.job_urls,
            vec![fixtures::job_url(1), fixtures::job_url(2), fixtures::job_url(3)]
        );
    }

    #[test]
    fn test_non_job_links_are_ignored() {
        let html = fixtures::search_page(&[7], 1, 1);
        let result = paginator().collect_page(&html);
        assert_eq!(result.job_urls, vec![fixtures::job_url(7)]);
    }

    #[test]
    fn test_links_outside_results_are_ignored() {
        let html = format!(
            r#"<html><body>
            <aside><a href="{}">Featured</a></aside>
            <div data-testid="search-result"><a href="{}">Listed</a></div>
            </body></html>"#,
            fixtures::job_href(99),
            fixtures::job_href(1)
        );
        let result = paginator().collect_page(&html);
        assert_eq!(result.job_urls, vec![fixtures::job_url(1)]);
    }

    #[test]
    fn test_one_container_per_card() {
        let html = format!(
            r#"<div data-testid="search-result"><a href="{}">A</a></div>
            <div data-testid="search-result"><a href="{}">B</a></div>"#,
            fixtures::job_href(1),
            fixtures::job_href(2)
        );
        let result = paginator().collect_page(&html);
        assert_eq!(result.job_urls, vec![fixtures::job_url(1), fixtures::job_url(2)]);
    }

    #[test]
    fn test_absolute_links_are_kept() {
        let html = r#"<div data-testid="search-result">
            <a href="https://www.free-work.com/fr/tech-it/x/job-mission/abc">A</a>
        </div>"#;
        let result = paginator().collect_page(html);
        assert_eq!(
            result.job_urls,
            vec!["https://www.free-work.com/fr/tech-it/x/job-mission/abc".to_string()]
        );
    }

    #[test]
    fn test_pagination_middle_page() {
        let html = fixtures::search_page(&[1], 2, 5);
        let result = paginator().collect_page(&html);

        assert!(result.has_next);
        assert!(result.next_control);
        assert_eq!(result.total_pages, Some(5));
        assert_eq!(result.current_page, Some(2));
    }

    #[test]
    fn test_pagination_last_page_disabled_next() {
        let html = fixtures::search_page(&[1], 5, 5);
        let result = paginator().collect_page(&html);

        assert!(!result.has_next);
        assert!(result.next_control);
        assert_eq!(result.total_pages, Some(5));
    }

    #[test]
    fn test_no_pagination_is_single_page() {
        let html = fixtures::search_page(&[1, 2], 1, 0);
        let result = paginator().collect_page(&html);

        assert!(!result.has_next);
        assert!(!result.next_control);
        assert_eq!(result.total_pages, None);
        assert!(!result.continues_after(1));
        assert_eq!(result.job_urls.len(), 2);
    }

    #[test]
    fn test_numbered_controls_without_next_button() {
        let html = r#"<div data-testid="search-result"></div>
            <nav><a data-page="1">1</a><a data-page="2" aria-current="page">2</a><a data-page="4">4</a></nav>"#;
        let result = paginator().collect_page(html);

        assert!(!result.next_control);
        assert!(result.has_next);
        assert_eq!(result.total_pages, Some(4));
        assert_eq!(result.current_page, Some(2));
    }

    #[test]
    fn test_aria_disabled_next() {
        let html = r#"<div data-testid="search-result"></div>
            <a rel="next" aria-disabled="true">Suivant</a>"#;
        let result = paginator().collect_page(html);
        assert!(result.next_control);
        assert!(!result.has_next);
    }

    #[test]
    fn test_missing_results_container() {
        let result = paginator().collect_page("<html><body><p>Maintenance</p></body></html>");
        assert!(result.job_urls.is_empty());
        assert!(!result.has_next);
    }

    #[test]
    fn test_non_numeric_page_buttons_ignored() {
        let html = r#"<div data-testid="search-result"></div>
            <button data-page="…">…</button><button data-page="3">3</button>"#;
        let result = paginator().collect_page(html);
        assert_eq!(result.total_pages, Some(3));
    }
}
