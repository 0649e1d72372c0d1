//! # Search Types
//!
//! Typed filter criteria, sort selection, and pagination for student search.
//!
//! Filters arrive in the request body, sort and pagination in the query
//! string. Everything is resolved into explicit types here before the store
//! builds its query, so malformed input fails with `InvalidParameter` instead
//! of leaking into SQL.

use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};
use crate::model::Student;

/// Default page number (1-based)
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Search filters from the request body.
///
/// `name` and `city` are case-insensitive substring filters, `roll` is an
/// exact match. Absent filters do not constrain the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub roll: Option<i64>,
    pub city: Option<String>,
}

impl SearchCriteria {
    /// Drop empty-string filters entirely; they must not constrain the result
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            roll: self.roll,
            city: self.city.filter(|s| !s.is_empty()),
        }
    }
}

/// Sortable student fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Roll,
    City,
}

impl SortField {
    /// Parse a `sortBy` value; unknown field names are rejected
    pub fn parse(value: &str) -> ServiceResult<Self> {
        match value {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "roll" => Ok(SortField::Roll),
            "city" => Ok(SortField::City),
            other => Err(ServiceError::InvalidParameter(format!(
                "unknown sort field: {other}"
            ))),
        }
    }

    /// Column name for ORDER BY; only ever one of the known columns
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Roll => "roll",
            SortField::City => "city",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` (case-insensitive) sorts descending; anything else ascending
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// SQL keyword for ORDER BY
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Resolved sort and pagination options
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number
    pub page: i64,
    pub page_size: i64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort_by: SortField::Name,
            sort_order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchOptions {
    /// Resolve raw query parameters, applying defaults and validating ranges
    pub fn resolve(
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> ServiceResult<Self> {
        let sort_by = match sort_by {
            Some(value) => SortField::parse(value)?,
            None => SortField::Name,
        };
        let sort_order = sort_order.map_or(SortOrder::Asc, SortOrder::parse);

        let page = page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(ServiceError::InvalidParameter(format!(
                "page must be >= 1, got {page}"
            )));
        }

        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size < 1 {
            return Err(ServiceError::InvalidParameter(format!(
                "pageSize must be >= 1, got {page_size}"
            )));
        }

        Ok(Self {
            sort_by,
            sort_order,
            page,
            page_size,
        })
    }

    /// Offset of the first record on this page.
    ///
    /// Saturates on overflow; an offset past the data yields an empty page,
    /// which is the defined result for any page beyond the matching set.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Search response envelope.
///
/// `total_count` is the full match count before pagination.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub results: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_empty_filters() {
        let criteria = SearchCriteria {
            name: Some(String::new()),
            roll: None,
            city: Some("pun".to_string()),
        }
        .normalize();
        assert!(criteria.name.is_none());
        assert_eq!(criteria.city.as_deref(), Some("pun"));
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(SortField::parse("roll").unwrap(), SortField::Roll);
        assert!(SortField::parse("uuid").is_err());
        assert!(SortField::parse("").is_err());
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        // Any non-"desc" value falls back to ascending
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_resolve_defaults() {
        let options = SearchOptions::resolve(None, None, None, None).unwrap();
        assert_eq!(options.sort_by, SortField::Name);
        assert_eq!(options.sort_order, SortOrder::Asc);
        assert_eq!(options.page, 1);
        assert_eq!(options.page_size, 20);
        assert_eq!(options.offset(), 0);
    }

    #[test]
    fn test_resolve_rejects_bad_pagination() {
        assert!(SearchOptions::resolve(None, None, Some(0), None).is_err());
        assert!(SearchOptions::resolve(None, None, None, Some(0)).is_err());
        assert!(SearchOptions::resolve(None, None, Some(-1), Some(10)).is_err());
    }

    #[test]
    fn test_resolve_rejects_unknown_sort_field() {
        let result = SearchOptions::resolve(Some("favourite_colour"), None, None, None);
        assert!(matches!(result, Err(ServiceError::InvalidParameter(_))));
    }

    #[test]
    fn test_offset() {
        let options = SearchOptions::resolve(None, None, Some(2), Some(10)).unwrap();
        assert_eq!(options.offset(), 10);
        let options = SearchOptions::resolve(None, None, Some(3), Some(7)).unwrap();
        assert_eq!(options.offset(), 14);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        let options = SearchOptions::resolve(None, None, Some(i64::MAX), Some(20)).unwrap();
        assert_eq!(options.offset(), i64::MAX);

        let options = SearchOptions::resolve(None, None, Some(i64::MAX), Some(1)).unwrap();
        assert_eq!(options.offset(), i64::MAX - 1);
    }
}
