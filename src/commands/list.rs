use colored::Colorize as _;
use tracing::instrument;

use crate::profile::Profile;

#[instrument(skip(profiles))]
pub fn list(short: bool, profiles: &[Profile]) {
    for profile in profiles {
        if short {
            println!("{}", profile.name);
        } else {
            println!(
                "  {}: {}",
                profile.name.bold(),
                profile.description().dimmed()
            );
        }
    }
}
