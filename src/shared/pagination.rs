//! Paged retrieval of ordered collections.
//!
//! A list request travels through three stages:
//!
//! 1. [`PaginationParams`] holds what the caller typed into the query string.
//!    [`PaginationParams::resolve`] clamps it into a [`PageRequest`]. Bad
//!    values are never rejected at this stage.
//! 2. [`paginate`] runs exactly one count and one bounded fetch against a
//!    [`PageSource`].
//! 3. The resulting [`PaginatedList`] is split into a plain item array (the
//!    response body) and [`PaginationMetaData`] (the `X-Pagination` header).

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use super::errors::{DomainError, DomainResult};

/// Name of the response header carrying [`PaginationMetaData`].
pub const PAGINATION_HEADER: &str = "x-pagination";

pub const DEFAULT_PAGE_SIZE: u64 = 15;
pub const MAX_PAGE_SIZE: u64 = 50;

/// Page size bounds applied when resolving query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLimits {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Raw `pageNumber` / `pageSize` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number. Values below 1 are treated as 1. Default: 1
    #[serde(default, deserialize_with = "lenient_int")]
    pub page_number: Option<i64>,
    /// Items per page. Values below 1 become 1, values above the maximum (50)
    /// are capped. Default: 15
    #[serde(default, deserialize_with = "lenient_int")]
    pub page_size: Option<i64>,
}

/// Reads a query-string integer. Unparsable text counts as absent and
/// out-of-range numbers saturate, so paging input never fails a request.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let s = s.trim();
        s.parse::<i64>().ok().or_else(|| {
            let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else if s.starts_with('-') {
                Some(i64::MIN)
            } else {
                Some(i64::MAX)
            }
        })
    }))
}

impl PaginationParams {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Clamp the raw parameters into a valid page request.
    pub fn resolve(&self, limits: &PageLimits) -> PageRequest {
        let max_size = limits.max_page_size.max(1);
        let page_number = self.page_number.map_or(1, |n| n.max(1) as u64);
        let page_size = match self.page_size {
            Some(size) => (size.max(1) as u64).min(max_size),
            None => limits.default_page_size.clamp(1, max_size),
        };
        PageRequest {
            page_number,
            page_size,
        }
    }
}

/// A validated (page number, page size) pair. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    /// Build a request without clamping. Non-positive inputs are caller bugs
    /// and are rejected.
    pub fn new(page_number: i64, page_size: i64) -> DomainResult<Self> {
        if page_number < 1 {
            return Err(DomainError::InvalidArgument(format!(
                "page number must be at least 1, got {}",
                page_number
            )));
        }
        if page_size < 1 {
            return Err(DomainError::InvalidArgument(format!(
                "page size must be at least 1, got {}",
                page_size
            )));
        }
        Ok(Self {
            page_number: page_number as u64,
            page_size: page_size as u64,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items to skip: `page_size * (page_number - 1)`.
    ///
    /// `None` when the offset does not fit in a signed 64-bit SQL integer.
    /// No stored collection is that large, so such a page is always past the
    /// end.
    pub fn offset(&self) -> Option<u64> {
        (self.page_number - 1)
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of an ordered collection plus its position in the whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
}

impl<T> PaginatedList<T> {
    pub fn new(
        items: Vec<T>,
        page_number: u64,
        page_size: u64,
        total_count: u64,
    ) -> DomainResult<Self> {
        if page_number < 1 {
            return Err(DomainError::InvalidArgument(
                "page number must be at least 1".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(DomainError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        if items.len() as u64 > page_size {
            return Err(DomainError::InvalidArgument(format!(
                "{} items do not fit in a page of size {}",
                items.len(),
                page_size
            )));
        }

        Ok(Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn metadata(&self) -> PaginationMetaData {
        PaginationMetaData {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.page_number,
            total_pages: self.total_pages,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    /// Convert every item while keeping the page position.
    pub fn map<U, F>(self, f: F) -> PaginatedList<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<T>, PaginationMetaData) {
        let meta = self.metadata();
        (self.items, meta)
    }
}

/// Pagination state sent alongside a page, without the items.
///
/// Field order is the serialized key order, so equal metadata always
/// produces byte-identical header values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetaData {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationMetaData {
    pub fn to_header_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_header(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

/// A filtered, ordered collection that can be counted and sliced.
///
/// Implementations must return slices in a stable order: two `fetch` calls
/// with the same bounds over unchanged data yield the same items in the same
/// order.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn count(&self) -> DomainResult<u64>;

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Self::Item>>;
}

/// Run one count and one bounded fetch and package the result.
///
/// A page past the end comes back empty with the real totals.
pub async fn paginate<S>(source: &S, page: PageRequest) -> DomainResult<PaginatedList<S::Item>>
where
    S: PageSource + ?Sized,
{
    if page.page_size < 1 {
        return Err(DomainError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }
    let total_count = source.count().await?;
    let items = match page.offset() {
        Some(offset) => source.fetch(offset, page.page_size).await?,
        None => {
            debug!(
                page = page.page_number,
                size = page.page_size,
                "Page offset beyond addressable range, returning empty page"
            );
            Vec::new()
        }
    };

    debug!(
        page = page.page_number,
        size = page.page_size,
        total = total_count,
        returned = items.len(),
        "Fetched page"
    );
    metrics::counter!("pagination_pages_served_total").increment(1);

    PaginatedList::new(items, page.page_number, page.page_size, total_count)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// In-memory source over a pre-sorted vector.
    struct VecSource {
        rows: Vec<i32>,
        counts: AtomicUsize,
        fetches: AtomicUsize,
    }

    impl VecSource {
        fn new(rows: Vec<i32>) -> Self {
            Self {
                rows,
                counts: AtomicUsize::new(0),
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSource for VecSource {
        type Item = i32;

        async fn count(&self) -> DomainResult<u64> {
            self.counts.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.len() as u64)
        }

        async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<i32>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .copied()
                .collect())
        }
    }

    fn twelve() -> VecSource {
        VecSource::new((1..=12).collect())
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        let cases = [(0, 5, 0), (1, 5, 1), (5, 5, 1), (6, 5, 2), (12, 5, 3), (50, 50, 1), (51, 50, 2)];
        for (total, size, pages) in cases {
            let list = PaginatedList::<i32>::new(vec![], 1, size, total).unwrap();
            assert_eq!(list.total_pages(), pages, "total={} size={}", total, size);
        }
    }

    #[test]
    fn construction_rejects_bad_bounds() {
        assert!(matches!(
            PaginatedList::<i32>::new(vec![], 1, 0, 10),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            PaginatedList::<i32>::new(vec![], 0, 5, 10),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            PaginatedList::new(vec![1, 2, 3], 1, 2, 3),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn page_request_rejects_non_positive_values() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, -3).is_err());
        assert!(PageRequest::new(0, 10).is_err());
        let req = PageRequest::new(3, 5).unwrap();
        assert_eq!(req.offset(), Some(10));
    }

    #[test]
    fn unaddressable_offset_is_none() {
        assert_eq!(PageRequest::new(i64::MAX, i64::MAX).unwrap().offset(), None);
        assert_eq!(PageRequest::new(i64::MAX, 2).unwrap().offset(), None);
        assert_eq!(
            PageRequest::new(i64::MAX, 1).unwrap().offset(),
            Some(i64::MAX as u64 - 1)
        );
    }

    #[tokio::test]
    async fn huge_page_number_is_an_empty_page_without_fetching() {
        let source = twelve();
        for size in [2, 50] {
            let page = paginate(&source, PageRequest::new(i64::MAX, size).unwrap())
                .await
                .unwrap();
            assert!(page.items().is_empty());
            assert_eq!(page.page_number(), i64::MAX as u64);
            assert_eq!(page.total_count(), 12);
            assert!(page.has_previous());
            assert!(!page.has_next());
        }
        assert_eq!(source.counts.load(Ordering::SeqCst), 2);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn params_are_clamped_not_rejected() {
        let limits = PageLimits::default();

        let req = PaginationParams::default().resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (1, 15));

        let req = PaginationParams::new(0, 100).resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (1, 50));

        let req = PaginationParams::new(-4, 60).resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (1, 50));

        let req = PaginationParams::new(3, 0).resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (3, 1));

        let req = PaginationParams {
            page_number: Some(2),
            page_size: None,
        }
        .resolve(&PageLimits {
            default_page_size: 80,
            max_page_size: 50,
        });
        assert_eq!((req.page_number(), req.page_size()), (2, 50));
    }

    #[test]
    fn query_string_parsing_never_fails() {
        let parse = |qs: &str| -> PaginationParams {
            let value: serde_json::Value = qs
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect::<serde_json::Map<_, _>>()
                .into();
            serde_json::from_value(value).unwrap()
        };
        let limits = PageLimits::default();

        let req = parse("pageNumber=2&pageSize=abc").resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (2, 15));

        let req = parse("pageNumber=-99999999999999999999999&pageSize=99999999999999999999999").resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (1, 50));

        let req = parse("unrelated=1").resolve(&limits);
        assert_eq!((req.page_number(), req.page_size()), (1, 15));
    }

    #[tokio::test]
    async fn twelve_items_in_pages_of_five() {
        let source = twelve();

        let first = paginate(&source, PageRequest::new(1, 5).unwrap()).await.unwrap();
        assert_eq!(first.items(), &[1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages(), 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&source, PageRequest::new(3, 5).unwrap()).await.unwrap();
        assert_eq!(last.items(), &[11, 12]);
        assert!(!last.has_next());
        assert!(last.has_previous());

        let beyond = paginate(&source, PageRequest::new(4, 5).unwrap()).await.unwrap();
        assert!(beyond.items().is_empty());
        assert_eq!(beyond.total_count(), 12);
        assert_eq!(beyond.total_pages(), 3);
        assert_eq!(beyond.page_number(), 4);
        assert!(!beyond.has_next());
        assert!(beyond.has_previous());
    }

    #[tokio::test]
    async fn empty_collection_has_no_pages() {
        let source = VecSource::new(vec![]);
        for (number, size) in [(1, 1), (1, 15), (7, 50)] {
            let page = paginate(&source, PageRequest::new(number, size).unwrap())
                .await
                .unwrap();
            let meta = page.metadata();
            assert!(page.items().is_empty());
            assert_eq!(meta.total_count, 0);
            assert_eq!(meta.total_pages, 0);
            assert!(!meta.has_next);
            assert_eq!(meta.has_previous, number > 1);
        }
    }

    #[tokio::test]
    async fn one_count_and_one_fetch_per_call() {
        let source = twelve();
        paginate(&source, PageRequest::new(2, 5).unwrap()).await.unwrap();
        assert_eq!(source.counts.load(Ordering::SeqCst), 1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let source = twelve();
        let req = PageRequest::new(2, 5).unwrap();
        let a = paginate(&source, req).await.unwrap();
        let b = paginate(&source, req).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.metadata().to_header_value().unwrap(),
            b.metadata().to_header_value().unwrap()
        );
    }

    #[test]
    fn header_uses_fixed_key_order() {
        let list = PaginatedList::new(vec!['a', 'b'], 2, 2, 5).unwrap();
        assert_eq!(
            list.metadata().to_header_value().unwrap(),
            r#"{"totalCount":5,"pageSize":2,"currentPage":2,"totalPages":3,"hasPrevious":true,"hasNext":true}"#
        );
    }

    #[test]
    fn header_round_trip() {
        let meta = PaginatedList::new(vec![1], 3, 4, 9).unwrap().metadata();
        let parsed = PaginationMetaData::from_header(&meta.to_header_value().unwrap()).unwrap();
        assert_eq!(parsed, meta);
    }

    #[test]
    fn map_keeps_page_position() {
        let list = PaginatedList::new(vec![1, 2], 2, 2, 4).unwrap();
        let mapped = list.map(|n| n.to_string());
        assert_eq!(mapped.items(), &["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total_pages(), 2);
        assert_eq!(mapped.page_number(), 2);
    }
}
