// ABOUTME: Recognized terminal markers in build logs and deployment status text.
// ABOUTME: Enumerated so tests can cover every marker variant explicitly.

/// Terminal build states recognized in the tail window of a build log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMarker {
    Succeeded,
    Failed,
}

impl BuildMarker {
    /// Substrings reporting a finished, successful build.
    pub const SUCCESS_MARKERS: &'static [&'static str] = &["Build succeeded"];

    /// Substrings reporting a finished, failed build.
    pub const FAILURE_MARKERS: &'static [&'static str] = &["Build failed", "ERROR: Job failed"];

    /// Scan tail text for a terminal marker. Failure markers take
    /// precedence regardless of what else the tail contains.
    pub fn scan(tail: &str) -> Option<BuildMarker> {
        if Self::FAILURE_MARKERS.iter().any(|m| tail.contains(m)) {
            return Some(BuildMarker::Failed);
        }
        if Self::SUCCESS_MARKERS.iter().any(|m| tail.contains(m)) {
            return Some(BuildMarker::Succeeded);
        }
        None
    }

    /// The failure marker present in the tail, for outcome reason text.
    pub fn failure_reason(tail: &str) -> Option<&'static str> {
        Self::FAILURE_MARKERS
            .iter()
            .find(|m| tail.contains(*m))
            .copied()
    }
}

/// Terminal deployment states recognized in scheduler status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMarker {
    Running,
    Failed,
}

impl DeployMarker {
    /// Status text of a fully running deployment.
    pub const RUNNING_STATUS: &'static str = "Running";

    /// Status texts of a terminally failed deployment.
    pub const FAILED_STATUSES: &'static [&'static str] = &["Failed", "Error"];

    /// Match a status string against the recognized terminal states.
    /// Comparison is exact; anything unrecognized means still deploying.
    pub fn from_status(status: &str) -> Option<DeployMarker> {
        if status == Self::RUNNING_STATUS {
            return Some(DeployMarker::Running);
        }
        if Self::FAILED_STATUSES.contains(&status) {
            return Some(DeployMarker::Failed);
        }
        None
    }
}
