// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Query parameter carrying the search page number.
const PAGE_PARAM: &str = "page";

/// Build the URL of search results page `page`.
///
/// Page 1 is the search URL itself. Later pages set the `page` query
/// parameter, replacing any value already present and keeping every other
/// filter in place.
///
/// # Examples
/// ```
/// use freework::utils::url::page_url;
///
/// assert_eq!(
///     page_url("https://example.com/jobs?query=rust", 3).unwrap(),
///     "https://example.com/jobs?query=rust&page=3"
/// );
/// ```
pub fn page_url(search_url: &str, page: u32) -> Result<String> {
    let mut url = Url::parse(search_url)?;
    if page <= 1 {
        return Ok(url.to_string());
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(PAGE_PARAM, &page.to_string());
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_one_is_search_url() {
        assert_eq!(
            page_url("https://example.com/jobs?query=rust", 1).unwrap(),
            "https://example.com/jobs?query=rust"
        );
    }

    #[test]
    fn test_page_replaces_existing_param() {
        assert_eq!(
            page_url("https://example.com/jobs?page=4&contracts=contractor", 2).unwrap(),
            "https://example.com/jobs?contracts=contractor&page=2"
        );
    }

    #[test]
    fn test_page_without_query() {
        assert_eq!(
            page_url("https://example.com/jobs", 5).unwrap(),
            "https://example.com/jobs?page=5"
        );
    }

    #[test]
    fn test_invalid_search_url() {
        assert!(page_url("not a url", 2).is_err());
    }
}
