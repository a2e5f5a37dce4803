//! Merging of case-variant header names into one canonical spelling.
//!
//! HTTP header names are case-insensitive, but a map keyed by literal strings
//! treats `Accept` and `accept` as distinct entries. Normalizing before the
//! headers are sent prevents duplicate or conflicting entries on the wire.
//!
//! Normalization collects the variant names first and applies the renames
//! afterwards, so it never depends on how a mapping behaves when mutated
//! during iteration. When several variants collide, they are applied in
//! ascending byte order of their names and the last one wins:
//!
//! ```
//! use std::collections::HashMap;
//! use micro_http_client::header::normalize_header_name;
//!
//! let mut headers = HashMap::from([
//!     ("ACCEPT".to_string(), "a"),
//!     ("Accept".to_string(), "b"),
//!     ("accept".to_string(), "c"),
//! ]);
//!
//! normalize_header_name(&mut headers, "Accept");
//!
//! assert_eq!(headers, HashMap::from([("Accept".to_string(), "c")]));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::trace;

/// Header names the request builder normalizes before headers are merged and sent.
pub const DEFAULT_NORMALIZED_HEADERS: &[&str] = &["Accept", "Content-Type"];

/// A caller-owned mapping from header name to header value.
///
/// Names are stored as given, case included.
pub trait HeaderMapping {
    type Value;

    fn header_names(&self) -> impl Iterator<Item = &str>;

    fn remove_header(&mut self, name: &str) -> Option<Self::Value>;

    fn insert_header(&mut self, name: String, value: Self::Value);
}

impl<V, S: BuildHasher> HeaderMapping for HashMap<String, V, S> {
    type Value = V;

    fn header_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }

    fn remove_header(&mut self, name: &str) -> Option<V> {
        self.remove(name)
    }

    fn insert_header(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

impl<V> HeaderMapping for BTreeMap<String, V> {
    type Value = V;

    fn header_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }

    fn remove_header(&mut self, name: &str) -> Option<V> {
        self.remove(name)
    }

    fn insert_header(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

/// Moves the value of every case variant of `canonical` under exactly `canonical`.
///
/// A key equal to `canonical` is left alone unless a variant exists, in which
/// case the variant's value replaces it. Mappings without variants are not
/// touched.
pub fn normalize_header_name<M: HeaderMapping>(headers: &mut M, canonical: &str) {
    let mut variants: Vec<String> =
        headers.header_names().filter(|name| is_case_variant(name, canonical)).map(str::to_owned).collect();

    if variants.is_empty() {
        return;
    }

    variants.sort_unstable();

    for variant in variants {
        if let Some(value) = headers.remove_header(&variant) {
            trace!(variant = %variant, canonical, "merge header variant into canonical name");
            headers.insert_header(canonical.to_owned(), value);
        }
    }
}

/// Applies [`normalize_header_name`] for each name in `canonical_names`, in order.
pub fn normalize_header_names<M: HeaderMapping>(headers: &mut M, canonical_names: &[&str]) {
    for canonical in canonical_names {
        normalize_header_name(headers, canonical);
    }
}

/// Normalizes the [`DEFAULT_NORMALIZED_HEADERS`].
pub fn normalize_default_headers<M: HeaderMapping>(headers: &mut M) {
    normalize_header_names(headers, DEFAULT_NORMALIZED_HEADERS);
}

fn is_case_variant(name: &str, canonical: &str) -> bool {
    if name == canonical {
        return false;
    }

    if name.is_ascii() && canonical.is_ascii() {
        name.eq_ignore_ascii_case(canonical)
    } else {
        name.to_uppercase() == canonical.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<const N: usize>(entries: [(&str, &str); N]) -> HashMap<String, String> {
        entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn variant_overwrites_canonical() {
        let mut headers = map([("Accept", "a"), ("accept", "b")]);

        normalize_header_name(&mut headers, "Accept");

        assert_eq!(headers, map([("Accept", "b")]));
    }

    #[test]
    fn variant_is_renamed() {
        let mut headers = map([("content-type", "application/json"), ("Host", "example.com")]);

        normalize_header_name(&mut headers, "Content-Type");

        assert_eq!(headers, map([("Content-Type", "application/json"), ("Host", "example.com")]));
    }

    #[test]
    fn canonical_without_variant_is_unchanged() {
        let mut headers = map([("Content-Type", "json")]);

        normalize_header_name(&mut headers, "Content-Type");

        assert_eq!(headers, map([("Content-Type", "json")]));
    }

    #[test]
    fn empty_mapping_is_unchanged() {
        let mut headers: HashMap<String, String> = HashMap::new();

        normalize_header_name(&mut headers, "Accept");

        assert!(headers.is_empty());
    }

    #[test]
    fn unrelated_names_are_untouched() {
        let mut headers = map([("Accept-Encoding", "gzip"), ("X-Accept", "1")]);

        normalize_header_name(&mut headers, "Accept");

        assert_eq!(headers, map([("Accept-Encoding", "gzip"), ("X-Accept", "1")]));
    }

    #[test]
    fn multiple_variants_resolve_by_name_order() {
        // "ACCEPT" sorts before "accept", so the lower case variant is applied last
        let mut headers = map([("ACCEPT", "a"), ("Accept", "b"), ("accept", "c")]);

        normalize_header_name(&mut headers, "Accept");

        assert_eq!(headers, map([("Accept", "c")]));
    }

    #[test]
    fn multiple_variants_resolve_the_same_for_btree_map() {
        let mut headers: BTreeMap<String, &str> =
            [("accept", "c"), ("ACCEPT", "a"), ("aCCEPT", "d")].into_iter().map(|(k, v)| (k.to_string(), v)).collect();

        normalize_header_name(&mut headers, "Accept");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Accept"), Some(&"c"));
    }

    #[test]
    fn non_ascii_names_compare_by_uppercase() {
        let mut headers = map([("x-straße", "1")]);

        normalize_header_name(&mut headers, "X-STRASSE");

        assert_eq!(headers, map([("X-STRASSE", "1")]));
    }

    #[test]
    fn default_headers_are_normalized() {
        let mut headers = map([("accept", "*/*"), ("CONTENT-TYPE", "text/plain"), ("user-agent", "micro")]);

        normalize_default_headers(&mut headers);

        assert_eq!(headers, map([("Accept", "*/*"), ("Content-Type", "text/plain"), ("user-agent", "micro")]));
    }

    #[test]
    fn normalize_names_in_order() {
        let mut headers = map([("x-request-id", "1"), ("X-TRACE-ID", "2")]);

        normalize_header_names(&mut headers, &["X-Request-Id", "X-Trace-Id"]);

        assert_eq!(headers, map([("X-Request-Id", "1"), ("X-Trace-Id", "2")]));
    }
}
