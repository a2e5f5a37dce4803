//! Conversion of a normalized string mapping into a typed [`HeaderMap`].

use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;

use crate::error::HeaderError;

/// Maximum number of entries an [`HeaderMap`] can hold.
pub const MAX_HEADER_NUM: usize = 32 * 1024;

/// Builds a [`HeaderMap`] from `(name, value)` pairs.
///
/// Names that only differ by case end up as multiple values of one header, so
/// callers normalize the mapping first.
///
/// # Errors
///
/// Returns [`HeaderError::InvalidName`] if a name is not a valid HTTP token and
/// [`HeaderError::InvalidValue`] if a value contains bytes not allowed in a
/// header value. Returns [`HeaderError::TooManyHeaders`] once the map would
/// exceed [`MAX_HEADER_NUM`] entries.
pub fn to_header_map<I, K, V>(headers: I) -> Result<HeaderMap, HeaderError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let headers = headers.into_iter();
    let mut header_map = HeaderMap::try_with_capacity(headers.size_hint().0).map_err(|e| {
        trace!(cause = %e, "header capacity exceeds the limit");
        HeaderError::too_many_headers(MAX_HEADER_NUM)
    })?;

    for (name, value) in headers {
        let name = name.as_ref();
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| HeaderError::invalid_name(name, e))?;
        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| HeaderError::invalid_value(name, e))?;
        header_map.try_append(header_name, header_value).map_err(|e| {
            trace!(cause = %e, header_count = header_map.len(), "header map is full");
            HeaderError::too_many_headers(MAX_HEADER_NUM)
        })?;
    }

    trace!(header_count = header_map.len(), "built header map");
    Ok(header_map)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use http::header::{ACCEPT, CONTENT_TYPE};

    use super::*;
    use crate::header::normalize_default_headers;

    #[test]
    fn builds_header_map() {
        let headers = [("Accept", "*/*"), ("Content-Type", "application/json")];

        let header_map = to_header_map(headers).unwrap();

        assert_eq!(header_map.len(), 2);
        assert_eq!(header_map.get(ACCEPT), Some(&HeaderValue::from_static("*/*")));
        assert_eq!(header_map.get(CONTENT_TYPE), Some(&HeaderValue::from_static("application/json")));
    }

    #[test]
    fn case_variants_become_duplicates_without_normalization() {
        let headers = HashMap::from([("Accept".to_string(), "a".to_string()), ("accept".to_string(), "b".to_string())]);

        let header_map = to_header_map(&headers).unwrap();

        assert_eq!(header_map.get_all(ACCEPT).iter().count(), 2);
    }

    #[test]
    fn normalized_headers_are_sent_once() {
        let mut headers = HashMap::from([("Accept".to_string(), "a".to_string()), ("accept".to_string(), "b".to_string())]);
        normalize_default_headers(&mut headers);

        let header_map = to_header_map(&headers).unwrap();

        let values: Vec<_> = header_map.get_all(ACCEPT).iter().collect();
        assert_eq!(values, vec![&HeaderValue::from_static("b")]);
    }

    #[test]
    fn rejects_invalid_name() {
        let error = to_header_map([("bad header", "1")]).unwrap_err();
        assert!(matches!(error, HeaderError::InvalidName { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn rejects_too_many_headers() {
        let headers: HashMap<String, String> = (0..40_000).map(|i| (format!("x-h{i}"), i.to_string())).collect();

        let error = to_header_map(&headers).unwrap_err();

        assert!(matches!(error, HeaderError::TooManyHeaders { max_num: MAX_HEADER_NUM }));
    }

    #[test]
    fn rejects_too_many_headers_without_size_hint() {
        // `filter` reports a lower bound of zero, so the limit is hit while appending
        let headers = (0..40_000).filter(|_| true).map(|i| (format!("x-h{i}"), "1"));

        let error = to_header_map(headers).unwrap_err();

        assert!(matches!(error, HeaderError::TooManyHeaders { max_num: MAX_HEADER_NUM }));
    }

    #[test]
    fn rejects_invalid_value() {
        let error = to_header_map([("X-Custom", "line\nbreak")]).unwrap_err();
        assert!(matches!(error, HeaderError::InvalidValue { ref name, .. } if name == "X-Custom"));
    }
}
