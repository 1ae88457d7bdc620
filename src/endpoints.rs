//! The API endpoint URIs.

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list and create budgets.
pub const BUDGETS: &str = "/budgets/";
/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories/";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in '/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter. If no parameter is found, the
/// original path is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };
    let Some(param_end) = endpoint_path[param_start..].find('}') else {
        return endpoint_path.to_owned();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_start + param_end + 1..]
    )
}

#[cfg(test)]
mod format_endpoint_tests {
    use super::{TRANSACTION, TRANSACTIONS, format_endpoint};

    #[test]
    fn replaces_the_parameter() {
        let path = format_endpoint(TRANSACTION, "abc-123");

        assert_eq!(path, "/transactions/abc-123");
    }

    #[test]
    fn returns_paths_without_parameters_unchanged() {
        let path = format_endpoint(TRANSACTIONS, "abc-123");

        assert_eq!(path, TRANSACTIONS);
    }
}
