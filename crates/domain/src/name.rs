use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A fully-qualified domain name in canonical form: ASCII-lowercase with a
/// trailing label separator (`"mail.world."`). Canonicalization is what makes
/// hierarchical suffix comparison between names unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(input.to_string()));
        }

        let mut canonical = trimmed.to_ascii_lowercase();
        if !canonical.ends_with('.') {
            canonical.push('.');
        }

        if canonical != "." {
            let labels = &canonical[..canonical.len() - 1];
            if labels.split('.').any(|label| label.is_empty()) {
                return Err(DomainError::InvalidDomainName(input.to_string()));
            }
        }

        Ok(Self(canonical.into()))
    }

    /// The root name `"."`.
    pub fn root() -> Self {
        Self(".".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "."
    }

    /// The name with the leftmost label removed; `None` for the root.
    pub fn parent(&self) -> Option<DomainName> {
        if self.is_root() {
            return None;
        }
        let separator = self.0.find('.')?;
        let rest = &self.0[separator + 1..];
        if rest.is_empty() {
            Some(Self::root())
        } else {
            Some(Self(rest.into()))
        }
    }

    /// Walks the label hierarchy from the immediate parent upward, ending
    /// with the root name.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            current: self.parent(),
        }
    }
}

pub struct Ancestors {
    current: Option<DomainName>,
}

impl Iterator for Ancestors {
    type Item = DomainName;

    fn next(&mut self) -> Option<DomainName> {
        let name = self.current.take()?;
        self.current = name.parent();
        Some(name)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
