//! This module defines the common functionality for paging data.

use serde::Deserialize;

/// The number of rows returned by a paged listing when the request does not
/// specify a limit.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Query parameters that select a window of rows from a listing.
///
/// `skip` rows are omitted from the front of the listing and at most `limit`
/// rows are returned. Out-of-range values are not an error; the listing
/// simply returns fewer or zero rows. The fields are `i64`, SQLite's native
/// integer type; negative values are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// The number of rows to omit from the front of the listing.
    #[serde(default)]
    pub skip: i64,
    /// The maximum number of rows to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod pagination_tests {
    use super::{DEFAULT_PAGE_SIZE, Pagination};

    #[test]
    fn missing_parameters_use_defaults() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();

        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.skip, 0);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn explicit_parameters_are_kept() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"skip": 100, "limit": 25}"#).unwrap();

        assert_eq!(
            pagination,
            Pagination {
                skip: 100,
                limit: 25
            }
        );
    }

    #[test]
    fn negative_parameters_deserialize() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"skip": -5, "limit": -1}"#).unwrap();

        assert_eq!(pagination, Pagination { skip: -5, limit: -1 });
    }
}
