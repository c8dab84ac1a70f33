// ABOUTME: HTTP forge collaborator: tag listing/creation and build log fetch.
// ABOUTME: Resolves the pipeline trace location once and caches it for the watch.

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use serde::Deserialize;

use crate::remote::session::Session;
use crate::remote::traits::{BuildLogError, BuildLogOps, TagError, TagOps};
use crate::types::{ProjectPath, VersionTag};

/// One entry in the forge's tag listing, most recent first.
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// One entry in the forge's pipeline listing, most recent first.
#[derive(Debug, Deserialize)]
struct PipelineEntry {
    id: u64,
}

/// Forge client speaking the tag and pipeline endpoints under a project path.
pub struct HttpForge<'a> {
    session: &'a Session,
    project: ProjectPath,
    trace_path: Mutex<Option<String>>,
}

impl<'a> HttpForge<'a> {
    pub fn new(session: &'a Session, project: ProjectPath) -> Self {
        Self {
            session,
            project,
            trace_path: Mutex::new(None),
        }
    }

    /// Resolve the raw-log location of the most recent pipeline run.
    ///
    /// Resolved once and cached: the run picked on the first call is the one
    /// the watch keeps reading, even after newer runs appear in the listing.
    async fn trace_path(&self) -> Result<String, BuildLogError> {
        if let Some(path) = self.trace_path.lock().clone() {
            return Ok(path);
        }

        let entries: Vec<PipelineEntry> = self
            .session
            .request(Method::GET, &format!("{}/pipelines.json", self.project))
            .send()
            .await
            .map_err(|e| BuildLogError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| BuildLogError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| BuildLogError::MalformedListing(e.to_string()))?;

        let latest = entries.first().ok_or(BuildLogError::NoPipelines)?;
        let path = format!("{}/pipelines/{}/trace.json", self.project, latest.id);

        tracing::debug!(%path, "resolved build trace location");
        *self.trace_path.lock() = Some(path.clone());
        Ok(path)
    }
}

#[async_trait]
impl TagOps for HttpForge<'_> {
    async fn latest_tag(&self) -> Result<VersionTag, TagError> {
        let entries: Vec<TagEntry> = self
            .session
            .request(Method::GET, &format!("{}/tags.json", self.project))
            .send()
            .await
            .map_err(|e| TagError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| TagError::Rejected(e.to_string()))?
            .json()
            .await
            .map_err(|e| TagError::MalformedListing(e.to_string()))?;

        let latest = entries.first().ok_or(TagError::NoTags)?;
        VersionTag::parse(&latest.name).map_err(|e| TagError::MalformedListing(e.to_string()))
    }

    async fn create_tag(&self, tag: &VersionTag) -> Result<(), TagError> {
        self.session
            .request(Method::POST, &format!("{}/tags", self.project))
            .form(&[("tag_name", tag.to_string())])
            .send()
            .await
            .map_err(|e| TagError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| TagError::Rejected(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl BuildLogOps for HttpForge<'_> {
    async fn fetch_log(&self) -> Result<String, BuildLogError> {
        let path = self.trace_path().await?;

        self.session
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(|e| BuildLogError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| BuildLogError::Transport(e.to_string()))?
            .text()
            .await
            .map_err(|e| BuildLogError::Transport(e.to_string()))
    }
}
