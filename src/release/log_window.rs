// ABOUTME: Bounded head/tail windows over raw build-log text.
// ABOUTME: Finds the pushed image path for a target version in the head window.

use crate::types::{ArtifactRef, VersionTag};
use regex::Regex;

/// Window budgets in bytes, sized to contain the artifact-push line and the
/// terminal status line respectively.
pub const DEFAULT_HEAD_BUDGET: usize = 3000;
pub const DEFAULT_TAIL_BUDGET: usize = 3000;

/// Bounded prefix and suffix of a build log.
///
/// Head and tail may overlap when the log is shorter than the combined
/// budgets; they serve different extraction purposes.
#[derive(Debug, Clone)]
pub struct LogWindow {
    head: String,
    tail: String,
}

impl LogWindow {
    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }
}

/// Cut head and tail windows out of raw log text.
///
/// Budgets are byte counts snapped to UTF-8 character boundaries, so
/// multi-byte input never splits a character and short input never panics.
pub fn extract(raw: &str, head_budget: usize, tail_budget: usize) -> LogWindow {
    let head_end = floor_char_boundary(raw, head_budget);
    let tail_start = ceil_char_boundary(raw, raw.len().saturating_sub(tail_budget));

    LogWindow {
        head: raw[..head_end].to_string(),
        tail: raw[tail_start..].to_string(),
    }
}

/// Find the image path a build reported pushing for the target version.
///
/// The log transport embeds line breaks as literal `\u003cbr\u003e` escape
/// sequences; the pattern matches that raw encoded form without unescaping,
/// since reformatting could change capture boundaries. The expected line
/// shape is `pushing <path>:<version>_<suffix>` terminated by the encoded
/// break. First capture wins.
pub fn find_artifact(window: &LogWindow, target: &VersionTag) -> Option<ArtifactRef> {
    let pattern = format!(
        r"pushing (.*?{}_.*?)\\u003cbr\\u003e",
        regex::escape(&target.to_string())
    );
    let re = Regex::new(&pattern).ok()?;
    let captured = re.captures(window.head())?.get(1)?.as_str();
    ArtifactRef::parse(captured).ok()
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
