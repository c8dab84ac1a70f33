// ABOUTME: Polling cadence configuration with the original backoffs as defaults.
// ABOUTME: Deadlines cap the otherwise unbounded watch loops.

use serde::Deserialize;
use std::time::Duration;

use crate::release::PollPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Backoff between build-log polls.
    #[serde(default = "default_build_interval", with = "humantime_serde")]
    pub build_interval: Duration,

    /// Deadline for the whole build watch.
    #[serde(default = "default_build_max_wait", with = "humantime_serde")]
    pub build_max_wait: Duration,

    /// Backoff between deployment-status polls.
    #[serde(default = "default_deploy_interval", with = "humantime_serde")]
    pub deploy_interval: Duration,

    /// Deadline for the whole deployment watch.
    #[serde(default = "default_deploy_max_wait", with = "humantime_serde")]
    pub deploy_max_wait: Duration,

    /// How long the status indicator may stay unobservable after a submit.
    #[serde(default = "default_visibility_timeout", with = "humantime_serde")]
    pub visibility_timeout: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            build_interval: default_build_interval(),
            build_max_wait: default_build_max_wait(),
            deploy_interval: default_deploy_interval(),
            deploy_max_wait: default_deploy_max_wait(),
            visibility_timeout: default_visibility_timeout(),
        }
    }
}

impl PollingConfig {
    pub fn build_policy(&self) -> PollPolicy {
        PollPolicy::new(self.build_interval).with_max_wait(self.build_max_wait)
    }

    pub fn deploy_policy(&self) -> PollPolicy {
        PollPolicy::new(self.deploy_interval).with_max_wait(self.deploy_max_wait)
    }
}

fn default_build_interval() -> Duration {
    Duration::from_secs(30)
}

fn default_build_max_wait() -> Duration {
    Duration::from_secs(3600)
}

fn default_deploy_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_deploy_max_wait() -> Duration {
    Duration::from_secs(600)
}

fn default_visibility_timeout() -> Duration {
    Duration::from_secs(5)
}
