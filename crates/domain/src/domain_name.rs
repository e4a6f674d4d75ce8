use std::fmt;

/// A domain name in its dot-joined textual form, e.g. `example.com`.
///
/// Stored as raw bytes: labels on the wire are not required to be UTF-8.
/// A single trailing dot is dropped on construction, so `example.com.` and
/// `example.com` are the same name and the root is the empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName(Vec<u8>);

impl DomainName {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        if bytes.last() == Some(&b'.') {
            bytes.pop();
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in wire order. The root name has none.
    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        let labels = if self.is_root() {
            None
        } else {
            Some(self.0.split(|&b| b == b'.'))
        };
        labels.into_iter().flatten()
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::from_bytes(name.as_bytes())
    }
}

impl From<String> for DomainName {
    fn from(name: String) -> Self {
        Self::from_bytes(name.into_bytes())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
