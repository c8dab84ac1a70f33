// ABOUTME: Opaque reference to a built container image, captured from build logs.
// ABOUTME: Validated against the image-path character set, otherwise passed through verbatim.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseArtifactRefError {
    #[error("artifact reference cannot be empty")]
    Empty,

    #[error("invalid character in artifact reference: '{0}'")]
    InvalidChar(char),
}

/// The image path a build reported pushing, e.g. `registry/app:1.2.8_abcdef`.
///
/// Captured at most once per release and submitted to the scheduler verbatim,
/// so no structural parsing beyond a character-set check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn parse(input: &str) -> Result<Self, ParseArtifactRefError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseArtifactRefError::Empty);
        }

        for c in input.chars() {
            if !c.is_ascii_alphanumeric()
                && c != '/'
                && c != ':'
                && c != '.'
                && c != '-'
                && c != '_'
                && c != '@'
            {
                return Err(ParseArtifactRefError::InvalidChar(c));
            }
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
