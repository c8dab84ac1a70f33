// ABOUTME: Dotted version tag parsing and successor derivation.
// ABOUTME: Only the last component must be numeric; it is the one advanced.

use nonempty::NonEmpty;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseVersionTagError {
    #[error("version tag cannot be empty")]
    Empty,

    #[error("version tag contains an empty component")]
    EmptyComponent,

    #[error("last version component is not numeric: '{0}'")]
    NonNumericComponent(String),
}

/// A dotted version tag like `1.2.7`.
///
/// Components other than the last are carried verbatim, so tags like
/// `v2.0.3` still advance. Only the last component must parse as an
/// integer, and only at `advance` time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag {
    components: NonEmpty<String>,
}

impl VersionTag {
    pub fn parse(input: &str) -> Result<Self, ParseVersionTagError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseVersionTagError::Empty);
        }

        let parts: Vec<String> = input.split('.').map(str::to_string).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ParseVersionTagError::EmptyComponent);
        }

        let components = NonEmpty::from_vec(parts).ok_or(ParseVersionTagError::Empty)?;
        Ok(Self { components })
    }

    /// Derive the successor tag by incrementing the last component.
    ///
    /// The last component is parsed as a plain integer, so leading zeros
    /// are not preserved: `1.2.007` advances to `1.2.8`.
    pub fn advance(&self) -> Result<VersionTag, ParseVersionTagError> {
        let last = self.components.last();
        let value: u64 = last
            .parse()
            .map_err(|_| ParseVersionTagError::NonNumericComponent(last.clone()))?;

        let mut next = self.components.clone();
        *next.last_mut() = (value + 1).to_string();
        Ok(Self { components: next })
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}
