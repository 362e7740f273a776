use std::convert::Infallible;
use std::str::FromStr;

/// Mirrors queried when no host list is supplied.
pub const DEFAULT_HOSTS: &[&str] = &["unhash.link"];

/// Ordered set of mirror host names.
///
/// Order only affects logging and the order of collected failures; it never
/// gives one host priority over another. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostList(Vec<String>);

impl HostList {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        hosts.into_iter().collect()
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
}

impl Default for HostList {
    fn default() -> Self { Self::new(DEFAULT_HOSTS.iter().copied()) }
}

impl<S: Into<String>> FromIterator<S> for HostList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Comma-separated host names; surrounding whitespace and empty entries are dropped.
impl FromStr for HostList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split(',').map(str::trim).filter(|h| !h.is_empty()).collect())
    }
}
