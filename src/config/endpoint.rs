// ABOUTME: Network coordinates and credentials for one target system.
// ABOUTME: The forge and the scheduler each get an independent endpoint block.

use serde::Deserialize;
use std::fmt;

use super::env_value::EnvValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Literal value or `{ env: VAR }` indirection.
    pub password: EnvValue,
}

impl EndpointConfig {
    /// `protocol://host:port`, no trailing slash.
    pub fn origin(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}
