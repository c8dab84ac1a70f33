// ABOUTME: Authenticated forge session management.
// ABOUTME: Logs in once, captures session cookies, reuses them for every request.

use reqwest::header;
use snafu::{ResultExt, Snafu};

use crate::config::EndpointConfig;

/// Errors establishing a session, with the SNAFU pattern.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SessionError {
    #[snafu(display("authentication rejected by {host} (status {status})"))]
    Authentication { host: String, status: u16 },

    #[snafu(display("transport error talking to {host}: {source}"))]
    Transport { host: String, source: reqwest::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    /// Credentials were refused.
    AuthenticationRejected,
    /// The endpoint could not be reached at all.
    TransportFailed,
}

impl SessionError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> SessionErrorKind {
        match self {
            SessionError::Authentication { .. } => SessionErrorKind::AuthenticationRejected,
            SessionError::Transport { .. } => SessionErrorKind::TransportFailed,
        }
    }
}

/// An authenticated handle to the forge.
///
/// Constructed once per release by an explicit login step; collaborators
/// borrow it for every subsequent request. There is no implicit global
/// session, so a dropped `Session` is an invalidated one.
#[derive(Debug)]
pub struct Session {
    client: reqwest::Client,
    origin: String,
    cookies: String,
}

impl Session {
    /// Log in against the forge's sign-in endpoint and capture the session
    /// cookies from the response.
    pub async fn login(endpoint: &EndpointConfig, password: &str) -> Result<Self, SessionError> {
        let origin = endpoint.origin();
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{origin}/users/sign_in"))
            .form(&[
                ("user[login]", endpoint.username.as_str()),
                ("user[password]", password),
            ])
            .send()
            .await
            .context(TransportSnafu {
                host: endpoint.host.clone(),
            })?;

        if !response.status().is_success() {
            return AuthenticationSnafu {
                host: endpoint.host.clone(),
                status: response.status().as_u16(),
            }
            .fail();
        }

        let cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .collect::<Vec<_>>()
            .join("; ");

        tracing::debug!(host = %endpoint.host, "forge session established");

        Ok(Self {
            client,
            origin,
            cookies,
        })
    }

    /// Build a request for a path under the forge origin, session cookies
    /// attached.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.origin, path))
            .header(header::COOKIE, self.cookies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_error_kind_and_context() {
        let err = SessionError::Authentication {
            host: "git.example.com".to_string(),
            status: 401,
        };

        assert_eq!(err.kind(), SessionErrorKind::AuthenticationRejected);
        assert!(err.to_string().contains("git.example.com"));
        assert!(err.to_string().contains("401"));
    }
}
