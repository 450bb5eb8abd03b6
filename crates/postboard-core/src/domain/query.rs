//! List query shaping: category filter and page/limit pagination.

use crate::error::DomainError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Exact-match filter for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub category: Option<String>,
}

impl PostFilter {
    /// An empty category means no filter.
    pub fn by_category(category: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match &self.category {
            Some(expected) => category == Some(expected.as_str()),
            None => true,
        }
    }
}

/// One-based page over the store's default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// A `limit` of zero means unbounded.
    pub fn new(page: u64, limit: u64) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPagination(
                "page starts at 1".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    /// Build from raw query values, applying defaults for absent ones.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, DomainError> {
        let page = parse_number("page", page, DEFAULT_PAGE)?;
        let limit = parse_number("limit", limit, DEFAULT_LIMIT)?;
        Self::new(page, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Maximum number of records, `None` when unbounded.
    pub fn limit(&self) -> Option<u64> {
        (self.limit > 0).then_some(self.limit)
    }
}

fn parse_number(name: &str, raw: Option<&str>, default: u64) -> Result<u64, DomainError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPagination(format!("{name} must be a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Pagination::parse(None, None).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), Some(10));
    }

    #[test]
    fn test_second_page_offset() {
        let page = Pagination::parse(Some("2"), Some("10")).unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), Some(10));
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let page = Pagination::new(3, 0).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Pagination::parse(Some("0"), None).is_err());
        assert!(Pagination::parse(Some("abc"), None).is_err());
        assert!(Pagination::parse(None, Some("-1")).is_err());
        assert!(Pagination::parse(Some(""), None).is_err());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = PostFilter::by_category(Some("tech".to_string()));
        assert!(filter.matches(Some("tech")));
        assert!(!filter.matches(Some("Tech")));
        assert!(!filter.matches(Some("technology")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_empty_category_matches_everything() {
        let filter = PostFilter::by_category(Some(String::new()));
        assert_eq!(filter, PostFilter::default());
        assert!(filter.matches(None));
    }
}
