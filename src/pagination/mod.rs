//! Page-number pagination over in-memory collections.
//!
//! [`Paginator`] turns a collection and the raw query parameters of a request into a
//! single page of items. Client input is never trusted: page sizes are defaulted and
//! clamped, and page numbers that do not resolve to a page come back as
//! [`PageOutcome::Invalid`] rather than as an error, so the caller decides how to
//! present them.

use std::collections::HashMap;
use std::num::IntErrorKind;

use log::debug;
use thiserror::Error;

use crate::constants::{
    DEFAULT_PAGE_SIZE, LAST_PAGE_TOKENS, MAX_PAGE_SIZE, PAGE_QUERY_PARAM, PAGE_SIZE_QUERY_PARAM,
};

/// Immutable pagination settings, fixed when the [`Paginator`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the request does not carry a usable one.
    /// `None` disables pagination altogether.
    pub default_page_size: Option<usize>,
    /// Upper bound applied to every resolved page size.
    pub max_page_size: usize,
    /// Query parameter carrying the requested page number.
    pub page_query_param: String,
    /// Query parameter carrying the requested page size. `None` means clients
    /// cannot choose the page size.
    pub page_size_query_param: Option<String>,
    /// Page tokens that resolve to the final page.
    pub last_page_tokens: Vec<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: Some(DEFAULT_PAGE_SIZE),
            max_page_size: MAX_PAGE_SIZE,
            page_query_param: PAGE_QUERY_PARAM.to_string(),
            page_size_query_param: Some(PAGE_SIZE_QUERY_PARAM.to_string()),
            last_page_tokens: LAST_PAGE_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A contiguous slice of a collection, identified by its 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub number: usize,
    /// Effective page size used to cut this page.
    pub page_size: usize,
    /// Length of the whole collection.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero for an empty collection.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Why a requested page number did not resolve to a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPage {
    #[error("page number {0:?} is not an integer")]
    NotAnInteger(String),

    #[error("page {number} is out of range (total pages: {total_pages})")]
    OutOfRange { number: i64, total_pages: usize },
}

/// Result of paginating one collection for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    /// Pagination is disabled or the resolved page size is zero.
    NotApplicable,
    /// A valid page. Only page 1 of an empty collection has no items.
    Page(Page<T>),
    /// The requested page number does not name a page of this collection.
    Invalid(InvalidPage),
}

/// Stateless page-number paginator. Safe to share between concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Cut the page named by `params` out of `items`.
    pub fn paginate<T>(&self, items: Vec<T>, params: &HashMap<String, String>) -> PageOutcome<T> {
        let Some(page_size) = self.page_size(params) else {
            debug!("Pagination not applicable for this request");
            return PageOutcome::NotApplicable;
        };

        let total_items = items.len();
        let total_pages = total_items.div_ceil(page_size);

        let number = match self.page_number(params, total_pages) {
            Ok(number) => number,
            Err(invalid) => {
                debug!("Invalid page requested: {}", invalid);
                return PageOutcome::Invalid(invalid);
            }
        };

        // number <= max(total_pages, 1), so the window start never passes the end.
        let start = (number - 1) * page_size;
        let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

        debug!(
            "Resolved page {}/{} (size {}, {} items)",
            number,
            total_pages,
            page_size,
            items.len()
        );

        PageOutcome::Page(Page {
            items,
            number,
            page_size,
            total_items,
            total_pages,
        })
    }

    /// Effective page size for a request, or `None` when pagination does not apply.
    ///
    /// A missing, non-numeric, zero or negative size falls back to the default;
    /// the result is clamped to `max_page_size`.
    pub fn page_size(&self, params: &HashMap<String, String>) -> Option<usize> {
        let default = self.config.default_page_size.filter(|size| *size > 0)?;

        let requested = self
            .config
            .page_size_query_param
            .as_deref()
            .and_then(|name| params.get(name))
            .and_then(|raw| parse_integer(raw))
            .filter(|size| *size > 0)
            .map(|size| usize::try_from(size).unwrap_or(usize::MAX));

        let size = requested.unwrap_or(default).min(self.config.max_page_size);
        (size > 0).then_some(size)
    }

    fn page_number(
        &self,
        params: &HashMap<String, String>,
        total_pages: usize,
    ) -> Result<usize, InvalidPage> {
        let token = params
            .get(&self.config.page_query_param)
            .map(String::as_str)
            .unwrap_or("1");

        if self.config.last_page_tokens.iter().any(|t| t == token) {
            return Ok(total_pages.max(1));
        }

        let number =
            parse_integer(token).ok_or_else(|| InvalidPage::NotAnInteger(token.to_string()))?;

        // Page 1 always exists, even for an empty collection.
        match usize::try_from(number) {
            Ok(n) if n >= 1 && n <= total_pages.max(1) => Ok(n),
            _ => Err(InvalidPage::OutOfRange {
                number,
                total_pages,
            }),
        }
    }
}

/// Parse a client-supplied integer, ignoring surrounding whitespace.
///
/// Values beyond the range of `i64` saturate instead of failing, so an absurdly
/// large page size still clamps and an absurdly large page number is out of range.
fn parse_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(default_page_size: usize, max_page_size: usize) -> Paginator {
        Paginator::new(PaginationConfig {
            default_page_size: Some(default_page_size),
            max_page_size,
            ..PaginationConfig::default()
        })
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn page_of(outcome: PageOutcome<u32>) -> Page<u32> {
        match outcome {
            PageOutcome::Page(page) => page,
            other => panic!("expected a page, got {:?}", other),
        }
    }

    fn items(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_seven_items_in_pages_of_three() {
        let p = paginator(3, 10);

        let first = page_of(p.paginate(items(7), &query(&[("current", "1")])));
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let second = page_of(p.paginate(items(7), &query(&[("current", "2")])));
        assert_eq!(second.items, vec![4, 5, 6]);

        let third = page_of(p.paginate(items(7), &query(&[("current", "3")])));
        assert_eq!(third.items, vec![7]);
        assert!(!third.has_next());
        assert!(third.has_previous());

        let fourth = p.paginate(items(7), &query(&[("current", "4")]));
        assert_eq!(
            fourth,
            PageOutcome::Invalid(InvalidPage::OutOfRange {
                number: 4,
                total_pages: 3
            })
        );
    }

    #[test]
    fn test_missing_page_defaults_to_first() {
        let page = page_of(paginator(3, 10).paginate(items(5), &HashMap::new()));
        assert_eq!(page.number, 1);
        assert_eq!(page.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_pages_cover_collection_exactly_once() {
        for n in 0..25u32 {
            for size in 1..=10usize {
                let p = paginator(size, 10);
                let pages = (n as usize).div_ceil(size);
                let mut seen = Vec::new();
                for number in 1..=pages {
                    let page = page_of(
                        p.paginate(items(n), &query(&[("current", number.to_string().as_str())])),
                    );
                    assert!(!page.items.is_empty());
                    assert!(page.items.len() <= size);
                    seen.extend(page.items);
                }
                assert_eq!(seen, items(n), "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_page_size_above_max_is_clamped() {
        let page = page_of(paginator(3, 10).paginate(items(50), &query(&[("pageSize", "500")])));
        assert_eq!(page.page_size, 10);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_huge_page_size_is_clamped_not_defaulted() {
        let params = query(&[("pageSize", "99999999999999999999999")]);
        assert_eq!(paginator(3, 10).page_size(&params), Some(10));
    }

    #[test]
    fn test_unusable_page_size_falls_back_to_default() {
        let p = paginator(3, 10);
        for raw in ["abc", "-4", "0", "", "2.5"] {
            assert_eq!(p.page_size(&query(&[("pageSize", raw)])), Some(3), "{:?}", raw);
        }
        assert_eq!(p.page_size(&query(&[("pageSize", " 7 ")])), Some(7));
        assert_eq!(p.page_size(&query(&[("pageSize", "+5")])), Some(5));
    }

    #[test]
    fn test_default_page_size_is_clamped_too() {
        assert_eq!(paginator(50, 10).page_size(&HashMap::new()), Some(10));
    }

    #[test]
    fn test_size_param_ignored_when_not_configured() {
        let p = Paginator::new(PaginationConfig {
            page_size_query_param: None,
            ..PaginationConfig::default()
        });
        assert_eq!(p.page_size(&query(&[("pageSize", "8")])), Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_disabled_pagination_is_not_applicable() {
        let disabled = Paginator::new(PaginationConfig {
            default_page_size: None,
            ..PaginationConfig::default()
        });
        assert_eq!(
            disabled.paginate(items(4), &query(&[("pageSize", "2")])),
            PageOutcome::NotApplicable
        );
        assert_eq!(disabled.paginate(items(4), &HashMap::new()), PageOutcome::NotApplicable);

        let zero_max = paginator(3, 0);
        assert_eq!(zero_max.paginate(items(4), &HashMap::new()), PageOutcome::NotApplicable);
    }

    #[test]
    fn test_bad_page_numbers_are_invalid_not_errors() {
        let p = paginator(3, 10);
        for raw in ["0", "-1", "abc", "1.5", "99999999999999999999999"] {
            let outcome = p.paginate(items(7), &query(&[("current", raw)]));
            assert!(matches!(outcome, PageOutcome::Invalid(_)), "{:?}", raw);
        }

        assert_eq!(
            p.paginate(items(7), &query(&[("current", "abc")])),
            PageOutcome::Invalid(InvalidPage::NotAnInteger("abc".to_string()))
        );
    }

    #[test]
    fn test_last_token_matches_explicit_final_page() {
        let p = paginator(3, 10);
        let via_token = page_of(p.paginate(items(7), &query(&[("current", "last")])));
        let explicit = page_of(p.paginate(items(7), &query(&[("current", "3")])));
        assert_eq!(via_token, explicit);
    }

    #[test]
    fn test_last_token_respects_requested_size() {
        let page = page_of(
            paginator(3, 10).paginate(items(7), &query(&[("current", "last"), ("pageSize", "5")])),
        );
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![6, 7]);
    }

    #[test]
    fn test_empty_collection_has_valid_empty_first_page() {
        let p = paginator(3, 10);

        let first = page_of(p.paginate(Vec::<u32>::new(), &HashMap::new()));
        assert!(first.items.is_empty());
        assert_eq!(first.total_pages, 0);
        assert!(!first.has_next());

        let last = page_of(p.paginate(Vec::<u32>::new(), &query(&[("current", "last")])));
        assert_eq!(last.number, 1);

        assert!(matches!(
            p.paginate(Vec::<u32>::new(), &query(&[("current", "2")])),
            PageOutcome::Invalid(InvalidPage::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_param_names_and_tokens() {
        let p = Paginator::new(PaginationConfig {
            default_page_size: Some(2),
            max_page_size: 4,
            page_query_param: "page".to_string(),
            page_size_query_param: Some("per_page".to_string()),
            last_page_tokens: vec!["end".to_string(), "final".to_string()],
        });

        let page = page_of(p.paginate(items(9), &query(&[("page", "final"), ("per_page", "4")])));
        assert_eq!(page.number, 3);
        assert_eq!(page.items, vec![9]);

        // "current" means nothing to this paginator.
        let page = page_of(p.paginate(items(9), &query(&[("current", "3")])));
        assert_eq!(page.number, 1);
    }

    #[test]
    fn test_map_keeps_page_metadata() {
        let page = page_of(paginator(3, 10).paginate(items(7), &query(&[("current", "2")])));
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["4", "5", "6"]);
        assert_eq!(mapped.number, 2);
        assert_eq!(mapped.total_items, 7);
    }
}
