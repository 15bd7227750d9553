use anyhow::{Result, bail};
use tracing::instrument;

use crate::commands::styled_error_line;
use crate::profile::Profile;

/// Print one profile in TOML format.
#[instrument(skip(profiles))]
pub fn show(profiles: &[Profile], name: &str) -> Result<()> {
    let Some(profile) = profiles.iter().find(|p| p.name == name) else {
        eprintln!("{}", styled_error_line(format!("Unknown profile: {name}")));
        bail!("Unknown profile: {name}");
    };

    print!("{}", toml::to_string_pretty(profile)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_is_an_error() {
        let profiles = vec![Profile::new("work")];
        assert!(show(&profiles, "nope").is_err());
    }

    #[test]
    fn toml_rendering_skips_absent_fields() {
        let profile = Profile {
            name: "work".to_string(),
            region: Some("us-east-1".to_string()),
            ..Profile::default()
        };
        let toml = toml::to_string_pretty(&profile).unwrap();
        assert!(toml.contains("name = \"work\""));
        assert!(toml.contains("region = \"us-east-1\""));
        assert!(!toml.contains("account_id"));
        assert!(!toml.contains("role_name"));
    }
}
