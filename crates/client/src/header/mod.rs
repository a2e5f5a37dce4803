//! Header name normalization for outgoing requests.
//!
//! - [`normalize_header_name`]: merges case variants of one name into its canonical spelling
//! - [`normalize_header_names`] / [`normalize_default_headers`]: the same for several names
//! - [`to_header_map`]: converts the normalized mapping into an [`http::HeaderMap`]
//!
//! Normalization works on any [`HeaderMapping`], which is implemented for
//! `HashMap<String, V>` and `BTreeMap<String, V>`.

mod normalize;
pub use normalize::DEFAULT_NORMALIZED_HEADERS;
pub use normalize::HeaderMapping;
pub use normalize::normalize_default_headers;
pub use normalize::normalize_header_name;
pub use normalize::normalize_header_names;

mod header_map;
pub use header_map::MAX_HEADER_NUM;
pub use header_map::to_header_map;
