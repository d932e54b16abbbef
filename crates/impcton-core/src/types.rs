//! Core types for IMPCTON Rewards

use serde::{Deserialize, Serialize};

/// User record returned by the profile endpoint.
///
/// Every field is optional: a document missing `name`, `level` or `tokens`
/// still loads, and the view renders a placeholder for the absent value.
/// A field with the wrong JSON type fails the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub tokens: Option<u32>,
}

impl UserProfile {
    /// Create a fully populated profile
    pub fn new(name: impl Into<String>, level: u32, tokens: u32) -> Self {
        Self {
            name: Some(name.into()),
            level: Some(level),
            tokens: Some(tokens),
        }
    }

    /// Token balance to seed the farming counter with (0 when absent)
    pub fn seed_tokens(&self) -> u32 {
        self.tokens.unwrap_or(0)
    }

    /// Name for the greeting line
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Level for the info panel
    pub fn display_level(&self) -> String {
        self.level
            .map(|l| l.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Rendered in place of a missing profile field
pub const PLACEHOLDER: &str = "—";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_profile() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Ana","level":2,"tokens":95}"#).unwrap();
        assert_eq!(profile, UserProfile::new("Ana", 2, 95));
        assert_eq!(profile.seed_tokens(), 95);
    }

    #[test]
    fn missing_fields_are_absent() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(profile.level, None);
        assert_eq!(profile.tokens, None);
        assert_eq!(profile.seed_tokens(), 0);
        assert_eq!(profile.display_level(), PLACEHOLDER);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Bo","level":1,"tokens":3,"avatar":"x.png"}"#)
                .unwrap();
        assert_eq!(profile.display_name(), "Bo");
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = serde_json::from_str::<UserProfile>(r#"{"tokens":"lots"}"#);
        assert!(result.is_err());
    }
}
