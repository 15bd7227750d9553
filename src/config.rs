use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, instrument};

use crate::profile::Profile;

const AWS_CONFIG_DIR: &str = ".aws";
const AWS_CONFIG_FILE: &str = "config";

const KEY_REGION: &str = "region";
const KEY_ACCOUNT_ID: &str = "sso_account_id";
const KEY_ROLE_NAME: &str = "sso_role_name";

/// The default AWS config file location, `~/.aws/config`.
#[instrument]
pub fn default_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .context("Failed to get home directory")
        .map(|dir| dir.join(AWS_CONFIG_DIR).join(AWS_CONFIG_FILE))
}

/// Read the AWS config file and parse it into profiles.
///
/// Reading is the only fallible step; the line parser itself never fails.
#[instrument]
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read AWS config file at '{}'", path.display()))?;
    let profiles = parse_profiles(&text);
    debug!("loaded {} profiles from '{}'", profiles.len(), path.display());
    Ok(profiles)
}

/// Parse the flat section/key-value dialect of the AWS config file.
///
/// Sections open on a `[` line and close when the next section opens or the
/// input ends. Section order is preserved. Lines that match no recognized
/// shape are skipped, by design: the file routinely carries settings this
/// tool does not care about.
pub fn parse_profiles(text: &str) -> Vec<Profile> {
    let mut profiles = Vec::new();
    let mut current: Option<Profile> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            if let Some(profile) = current.take() {
                profiles.push(profile);
            }
            current = Some(Profile::new(section_name(line)));
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        // a key/value line before the first section has no profile to
        // write into and is dropped
        let Some(profile) = current.as_mut() else {
            continue;
        };

        let value = value.trim().to_string();
        match key.trim() {
            KEY_REGION => profile.region = Some(value),
            KEY_ACCOUNT_ID => profile.account_id = Some(value),
            KEY_ROLE_NAME => profile.role_name = Some(value),
            _ => {},
        }
    }

    if let Some(profile) = current.take() {
        profiles.push(profile);
    }

    profiles
}

/// Extract the profile name from a section header line.
///
/// `[default]` names the whole bracketed text, `[profile foo]` names the
/// second space-separated token. The shapes are told apart purely by token
/// count, matching how the AWS CLI writes these headers.
fn section_name(line: &str) -> &str {
    let mut tokens = line.split(' ');
    let first = tokens.next().unwrap_or(line);
    match tokens.next() {
        Some(second) => second.strip_suffix(']').unwrap_or(second),
        None => {
            let inner = first.strip_prefix('[').unwrap_or(first);
            inner.strip_suffix(']').unwrap_or(inner)
        },
    }
}
