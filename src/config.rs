//! Runtime configuration injected by the deployment environment.
//!
//! The deployment layer provides two values as environment variables:
//!
//! - `WALLETBAR_PROJECT_ID` (required) - the wallet provider's project identifier
//! - `WALLETBAR_APP_REGION` (optional) - the hosting region, shown in the footer
//!
//! A missing project identifier is fatal: [`RuntimeConfig::from_env`] returns
//! [`ConfigError::MissingProjectId`] and `main` exits before the terminal is
//! touched.

use crate::domain::ConfigError;

// ============================================================================
// Constants
// ============================================================================

/// Environment variable holding the wallet provider's project identifier.
pub const PROJECT_ID_VAR: &str = "WALLETBAR_PROJECT_ID";

/// Environment variable holding the hosting region.
pub const REGION_VAR: &str = "WALLETBAR_APP_REGION";

// ============================================================================
// RuntimeConfig
// ============================================================================

/// Values read once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Project identifier used to initialize the wallet provider.
    pub project_id: String,
    /// Hosting region, when the deployment layer provides one.
    pub region: Option<String>,
}

impl RuntimeConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProjectId`] if `WALLETBAR_PROJECT_ID` is
    /// unset, empty, or whitespace-only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProjectId`] if the project identifier is
    /// absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = non_blank(lookup(PROJECT_ID_VAR)).ok_or(ConfigError::MissingProjectId {
            var: PROJECT_ID_VAR,
        })?;
        let region = non_blank(lookup(REGION_VAR));

        Ok(Self { project_id, region })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_with_all_values() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            (PROJECT_ID_VAR, "abc123"),
            (REGION_VAR, "eu-west-1"),
        ]))
        .unwrap();

        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_from_lookup_region_is_optional() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[(PROJECT_ID_VAR, "abc123")])).unwrap();
        assert_eq!(config.region, None);
    }

    #[rstest]
    #[case::absent(&[])]
    #[case::empty(&[(PROJECT_ID_VAR, "")])]
    #[case::whitespace(&[(PROJECT_ID_VAR, "   ")])]
    #[case::only_region(&[(REGION_VAR, "us-east-1")])]
    fn test_from_lookup_missing_project_id(#[case] pairs: &[(&str, &str)]) {
        let result = RuntimeConfig::from_lookup(lookup_from(pairs));
        assert_eq!(
            result,
            Err(ConfigError::MissingProjectId {
                var: PROJECT_ID_VAR
            })
        );
    }

    #[test]
    fn test_from_lookup_trims_values() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            (PROJECT_ID_VAR, "  abc123\n"),
            (REGION_VAR, "  "),
        ]))
        .unwrap();

        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.region, None);
    }
}
