// ABOUTME: slipway.yml template generation for new projects.
// ABOUTME: Refuses to overwrite an existing configuration unless forced.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

const TEMPLATE_YAML: &str = r#"project:
  name: my-app
  path: /group/my-app

forge:
  protocol: https
  host: git.example.com
  port: 443
  username: release-bot
  password:
    env: FORGE_PASSWORD

scheduler:
  protocol: http
  host: scheduler.example.com
  port: 8080
  username: release-bot
  password:
    env: SCHEDULER_PASSWORD

# polling:
#   build_interval: 30s
#   build_max_wait: 1h
#   deploy_interval: 5s
#   deploy_max_wait: 10m
#   visibility_timeout: 5s
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE_YAML)?;
    Ok(())
}
