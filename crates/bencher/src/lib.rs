use std::collections::HashMap;

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    headers: TestHeaders,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, headers: TestHeaders) -> Self {
        Self { name, group, headers }
    }

    pub fn small(name: &'static str, headers: TestHeaders) -> Self {
        Self::new(name, TestGroup::Small, headers)
    }

    pub fn normal(name: &'static str, headers: TestHeaders) -> Self {
        Self::new(name, TestGroup::Normal, headers)
    }

    pub fn large(name: &'static str, headers: TestHeaders) -> Self {
        Self::new(name, TestGroup::Large, headers)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn headers(&self) -> &TestHeaders {
        &self.headers
    }
}

/// A fixed set of request headers, names spelled as a caller might send them.
#[derive(Debug, Copy, Clone)]
pub struct TestHeaders {
    entries: &'static [(&'static str, &'static str)],
}

impl TestHeaders {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn header_count(&self) -> usize {
        self.entries.len()
    }

    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.entries.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
