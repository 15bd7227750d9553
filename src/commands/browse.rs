use anyhow::Result;
use tracing::instrument;

use crate::profile::Profile;
use crate::tui;

/// Hand the parsed profiles to the interactive browser.
#[instrument(skip(profiles))]
pub fn browse(profiles: Vec<Profile>) -> Result<()> {
    tui::run(profiles)
}
