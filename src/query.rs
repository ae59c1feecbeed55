//! Canonical request descriptors for paginated list queries.
//!
//! A descriptor captures everything that identifies a logical query: page,
//! page size, active filters, and sort. Two descriptors that differ only in
//! filter key order or in omitted-vs-sentinel filter values canonicalize to
//! the same cache key, so semantically equal requests hit the same cache
//! entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::percent_encode;

/// Sentinel select value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

/// Sort direction for list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire representation (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction, for sort toggling.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// What: Canonical identity of one paginated list query.
///
/// Details:
/// - `filters` maps field name to raw value; entries holding the sentinel
///   `"all"` or an empty string are inactive and excluded from both the
///   cache key and the wire request.
/// - `BTreeMap` keeps filter iteration order deterministic, so the cache key
///   is independent of insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// 1-based page to fetch.
    pub page: u32,
    /// Page size; must be positive.
    pub limit: u32,
    /// Raw filter values keyed by field name.
    pub filters: BTreeMap<String, String>,
    /// Field the backend sorts on.
    pub sort_by: String,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for RequestDescriptor {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            filters: BTreeMap::new(),
            sort_by: "createdAt".to_string(),
            sort_order: SortOrder::Desc,
        }
    }
}

impl RequestDescriptor {
    /// Filters that actually constrain the query (sentinel and empty values
    /// dropped), in sorted key order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, v)| !v.is_empty() && *v != FILTER_ALL)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// What: Deterministic cache key for this descriptor.
    ///
    /// Output:
    /// - Canonical JSON string with sorted object keys and inactive filters
    ///   omitted. Descriptors equal under canonicalization produce identical
    ///   keys.
    pub fn cache_key(&self) -> String {
        let filters: serde_json::Map<String, serde_json::Value> = self
            .active_filters()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::json!({
            "filters": filters,
            "limit": self.limit,
            "page": self.page,
            "sortBy": self.sort_by,
            "sortOrder": self.sort_order.as_str(),
        })
        .to_string()
    }

    /// Key/value pairs for the wire request, inactive filters absent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        for (k, v) in self.active_filters() {
            pairs.push((k.to_string(), v.to_string()));
        }
        pairs.push(("sortBy".to_string(), self.sort_by.clone()));
        pairs.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        pairs
    }

    /// Percent-encoded query string (no leading `?`).
    pub fn query_string(&self) -> String {
        let parts: Vec<String> = self
            .query_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={}", percent_encode(v)))
            .collect();
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_with(filters: &[(&str, &str)]) -> RequestDescriptor {
        let mut d = RequestDescriptor::default();
        for (k, v) in filters {
            d.filters.insert((*k).to_string(), (*v).to_string());
        }
        d
    }

    #[test]
    /// What: Sentinel and omitted filters canonicalize identically.
    ///
    /// Inputs:
    /// - One descriptor with `status = "all"` and `search = ""`, one with
    ///   neither key present.
    ///
    /// Output:
    /// - Identical cache keys.
    fn cache_key_ignores_sentinel_filters() {
        let a = descriptor_with(&[("status", "all"), ("search", ""), ("job", "j42")]);
        let b = descriptor_with(&[("job", "j42")]);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    /// What: Filter insertion order does not affect the cache key.
    ///
    /// Inputs:
    /// - The same filters inserted in two different orders.
    ///
    /// Output:
    /// - Identical cache keys.
    fn cache_key_is_order_independent() {
        let a = descriptor_with(&[("status", "pending"), ("job", "j1")]);
        let b = descriptor_with(&[("job", "j1"), ("status", "pending")]);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    /// What: Different pages produce different cache keys.
    ///
    /// Inputs:
    /// - Two otherwise identical descriptors with `page` 1 and 2.
    ///
    /// Output:
    /// - Distinct cache keys.
    fn cache_key_distinguishes_pages() {
        let a = RequestDescriptor::default();
        let b = RequestDescriptor {
            page: 2,
            ..RequestDescriptor::default()
        };
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    /// What: Inactive filters are absent from the wire request.
    ///
    /// Inputs:
    /// - Descriptor with `status = "all"` and an empty `search`.
    ///
    /// Output:
    /// - Query string has page/limit/sort only; no `status=` or `search=`.
    fn query_string_omits_inactive_filters() {
        let d = descriptor_with(&[("status", "all"), ("search", "")]);
        let qs = d.query_string();
        assert!(qs.contains("page=1"));
        assert!(qs.contains("limit=20"));
        assert!(qs.contains("sortBy=createdAt"));
        assert!(qs.contains("sortOrder=desc"));
        assert!(!qs.contains("status="));
        assert!(!qs.contains("search="));
    }

    #[test]
    /// What: Free-text filter values are percent-encoded on the wire.
    ///
    /// Inputs:
    /// - Descriptor with `search = "data engineer"`.
    ///
    /// Output:
    /// - Query string carries `search=data%20engineer`.
    fn query_string_encodes_values() {
        let d = descriptor_with(&[("search", "data engineer")]);
        assert!(d.query_string().contains("search=data%20engineer"));
    }
}
