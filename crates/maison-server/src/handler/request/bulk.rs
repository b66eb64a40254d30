//! Selection-shaped bulk-delete payload.

use serde::Deserialize;

/// Which rows a bulk delete applies to.
///
/// Mirrors the admin table's selection modes: an explicit id set, or
/// "every row matching the current filter except these ids". The filter
/// itself travels in the query string, exactly as it does for the
/// listing the selection was made against.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "ids")]
pub enum BulkDeleteRequest {
    /// Delete exactly these rows.
    Explicit(Vec<i64>),
    /// Delete every row matching the filter except these.
    AllExcept(Vec<i64>),
}

impl BulkDeleteRequest {
    /// Returns whether the request can be satisfied without touching
    /// any row.
    pub fn is_trivially_empty(&self) -> bool {
        matches!(self, BulkDeleteRequest::Explicit(ids) if ids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_explicit_mode() {
        let request: BulkDeleteRequest =
            serde_json::from_str(r#"{"mode":"explicit","ids":[1,2,3]}"#).unwrap();
        assert_eq!(request, BulkDeleteRequest::Explicit(vec![1, 2, 3]));
        assert!(!request.is_trivially_empty());
    }

    #[test]
    fn deserializes_all_except_mode() {
        let request: BulkDeleteRequest =
            serde_json::from_str(r#"{"mode":"all_except","ids":[]}"#).unwrap();
        assert_eq!(request, BulkDeleteRequest::AllExcept(vec![]));
        assert!(!request.is_trivially_empty());
    }

    #[test]
    fn empty_explicit_is_trivial() {
        let request: BulkDeleteRequest =
            serde_json::from_str(r#"{"mode":"explicit","ids":[]}"#).unwrap();
        assert!(request.is_trivially_empty());
    }
}
