use serde::Serialize;

const FIELD_ACCOUNT_ID: &str = "acc-id";
const FIELD_REGION: &str = "region";
const FIELD_ROLE_NAME: &str = "role";
const FIELD_DELIM: &str = ": ";

const NO_DESCRIPTION: &str = "no description.";

const LOGIN_COMMAND: &str = "aws sso login";

/// One profile section from the AWS config file.
///
/// Built once during parsing and never mutated afterwards; the listing
/// surface only reads the derived views below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Profile {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The listing title.
    pub fn title(&self) -> &str {
        &self.name
    }

    /// "label: value" for every field that is present, joined with "; ".
    pub fn description(&self) -> String {
        let fields: Vec<String> = [
            (FIELD_ACCOUNT_ID, self.account_id.as_deref()),
            (FIELD_REGION, self.region.as_deref()),
            (FIELD_ROLE_NAME, self.role_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}{FIELD_DELIM}{v}")))
        .collect();

        if fields.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            fields.join("; ")
        }
    }

    /// The haystack the fuzzy filter matches against.
    pub fn filter_value(&self) -> String {
        [
            self.name.as_str(),
            self.account_id.as_deref().unwrap_or_default(),
            self.region.as_deref().unwrap_or_default(),
            self.role_name.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }

    /// The shell command that starts an SSO login for this profile.
    pub fn login_command(&self) -> String {
        format!("{LOGIN_COMMAND} --profile {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        Profile {
            name: "work".to_string(),
            account_id: Some("111111111111".to_string()),
            region: Some("us-east-1".to_string()),
            role_name: Some("Admin".to_string()),
        }
    }

    #[test]
    fn description_joins_present_fields_in_fixed_order() {
        assert_eq!(
            "acc-id: 111111111111; region: us-east-1; role: Admin",
            full_profile().description()
        );
    }

    #[test]
    fn description_skips_absent_fields() {
        let profile = Profile {
            name: "dev".to_string(),
            region: Some("eu-west-1".to_string()),
            ..Profile::default()
        };
        assert_eq!("region: eu-west-1", profile.description());
    }

    #[test]
    fn description_placeholder_when_no_fields_present() {
        assert_eq!("no description.", Profile::new("empty").description());
    }

    #[test]
    fn filter_value_concatenates_all_fields() {
        assert_eq!(
            "work 111111111111 us-east-1 Admin",
            full_profile().filter_value()
        );
    }

    #[test]
    fn login_command_substitutes_profile_name() {
        assert_eq!(
            "aws sso login --profile work",
            full_profile().login_command()
        );
    }
}
