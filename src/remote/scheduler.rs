// ABOUTME: HTTP scheduler collaborator: deployment status and image updates.
// ABOUTME: Authenticates with basic auth on every request.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::config::EndpointConfig;
use crate::remote::traits::{
    AppStatus, ImageUpdateError, ImageUpdateOps, StatusError, StatusOps,
};
use crate::types::{AppName, ArtifactRef};

/// Status document the scheduler serves for a single app.
#[derive(Debug, Deserialize)]
struct AppStatusDoc {
    status: String,
    origin: String,
}

/// Scheduler client speaking the app endpoints with basic auth.
pub struct HttpScheduler {
    client: reqwest::Client,
    origin: String,
    username: String,
    password: String,
}

impl HttpScheduler {
    pub fn new(endpoint: &EndpointConfig, password: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: endpoint.origin(),
            username: endpoint.username.clone(),
            password: password.to_string(),
        }
    }

    fn app_url(&self, app: &AppName) -> String {
        format!(
            "{}/v2/apps/{}",
            self.origin,
            urlencoding::encode(app.as_str())
        )
    }
}

#[async_trait]
impl StatusOps for HttpScheduler {
    async fn fetch_status(&self, app: &AppName) -> Result<AppStatus, StatusError> {
        let response = self
            .client
            .get(format!("{}/status", self.app_url(app)))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| StatusError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StatusError::NotVisible(app.to_string()));
        }

        let doc: AppStatusDoc = response
            .error_for_status()
            .map_err(|e| StatusError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| StatusError::MalformedStatus(e.to_string()))?;

        Ok(AppStatus {
            state: doc.status,
            origin: doc.origin,
        })
    }
}

#[async_trait]
impl ImageUpdateOps for HttpScheduler {
    async fn update_image(
        &self,
        app: &AppName,
        artifact: &ArtifactRef,
    ) -> Result<(), ImageUpdateError> {
        let body = json!({
            "container": { "docker": { "image": artifact.as_str() } }
        });

        self.client
            .put(self.app_url(app))
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageUpdateError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| ImageUpdateError::Rejected(e.to_string()))?;

        tracing::info!(app = %app, image = %artifact, "submitted image update");
        Ok(())
    }
}
