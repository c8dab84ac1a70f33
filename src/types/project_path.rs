// ABOUTME: Forge project path validation, e.g. "/group/project".
// ABOUTME: Must be absolute with non-empty segments; appended to the forge origin.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectPathError {
    #[error("project path cannot be empty")]
    Empty,

    #[error("project path must start with '/'")]
    NotAbsolute,

    #[error("project path cannot end with '/'")]
    TrailingSlash,

    #[error("project path contains an empty segment")]
    EmptySegment,

    #[error("invalid character in project path: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(String);

impl ProjectPath {
    pub fn parse(input: &str) -> Result<Self, ProjectPathError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ProjectPathError::Empty);
        }

        if !input.starts_with('/') {
            return Err(ProjectPathError::NotAbsolute);
        }

        if input.ends_with('/') {
            return Err(ProjectPathError::TrailingSlash);
        }

        if input[1..].split('/').any(|segment| segment.is_empty()) {
            return Err(ProjectPathError::EmptySegment);
        }

        for c in input.chars() {
            if !c.is_ascii_alphanumeric() && c != '/' && c != '.' && c != '-' && c != '_' {
                return Err(ProjectPathError::InvalidChar(c));
            }
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
