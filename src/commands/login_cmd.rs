use anyhow::{Result, bail};
use tracing::instrument;

use crate::commands::styled_error_line;
use crate::profile::Profile;

/// Print the SSO login command for one profile, for use in scripts.
#[instrument(skip(profiles))]
pub fn login_cmd(profiles: &[Profile], name: &str) -> Result<()> {
    let Some(profile) = profiles.iter().find(|p| p.name == name) else {
        eprintln!("{}", styled_error_line(format!("Unknown profile: {name}")));
        bail!("Unknown profile: {name}");
    };

    println!("{}", profile.login_command());
    Ok(())
}
