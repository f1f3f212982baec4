use std::collections::BTreeMap;

use thiserror::Error;

use oncall_adapters::slack::DEFAULT_USERGROUPS_UPDATE_URL;
use oncall_core::announcement::UserGroup;
use oncall_core::identity::IdentityMap;
use oncall_core::ids::UserGroupId;

const ENV_AWS_REGION: &str = "AWS_REGION";
const ENV_SLACK_API_URL: &str = "SLACK_API_URL";
const ENV_SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
const ENV_SLACK_API_TOKEN: &str = "SLACK_API_TOKEN";
const ENV_SLACK_SUBTEAM_ID: &str = "SLACK_SUBTEAM_ID";
const ENV_SLACK_SUBTEAM_NAME: &str = "SLACK_SUBTEAM_NAME";

const DEFAULT_AWS_REGION: &str = "eu-west-1";
const DEFAULT_SUBTEAM_NAME: &str = "support";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SLACK_API_TOKEN is not set")]
    MissingApiToken,
}

/// Everything one invocation needs, read once at cold start.
pub struct Config {
    pub aws_region: String,
    pub slack_api_url: String,
    pub slack_webhook_url: String,
    pub slack_api_token: String,
    pub user_group: UserGroup,
    pub identities: IdentityMap,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Empty values count as unset, so they fall back to the defaults.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

        let slack_api_token = get(ENV_SLACK_API_TOKEN).ok_or(ConfigError::MissingApiToken)?;

        Ok(Self {
            aws_region: get(ENV_AWS_REGION).unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            slack_api_url: get(ENV_SLACK_API_URL)
                .unwrap_or_else(|| DEFAULT_USERGROUPS_UPDATE_URL.to_string()),
            slack_webhook_url: get(ENV_SLACK_WEBHOOK_URL).unwrap_or_default(),
            slack_api_token,
            user_group: UserGroup::new(
                UserGroupId::new(get(ENV_SLACK_SUBTEAM_ID).unwrap_or_default()),
                get(ENV_SLACK_SUBTEAM_NAME).unwrap_or_else(|| DEFAULT_SUBTEAM_NAME.to_string()),
            ),
            identities: IdentityMap::from_vars(&vars),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("aws_region", &self.aws_region)
            .field("slack_api_url", &self.slack_api_url)
            .field("slack_webhook_url", &"<redacted>")
            .field("slack_api_token", &"<redacted>")
            .field("user_group", &self.user_group)
            .field("identities", &self.identities.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncall_core::ids::SlackUserId;

    fn with_token(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut vars = vec![(ENV_SLACK_API_TOKEN.to_string(), "xoxb-token".to_string())];
        vars.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        vars
    }

    #[test]
    fn missing_token_is_fatal() {
        let result = Config::from_vars(vec![("AWS_REGION", "us-east-1")]);
        assert!(matches!(result, Err(ConfigError::MissingApiToken)));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let result = Config::from_vars(vec![(ENV_SLACK_API_TOKEN, "")]);
        assert!(matches!(result, Err(ConfigError::MissingApiToken)));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(with_token(&[])).unwrap();
        assert_eq!(config.aws_region, "eu-west-1");
        assert_eq!(
            config.slack_api_url,
            "https://slack.com/api/usergroups.users.update"
        );
        assert_eq!(config.slack_webhook_url, "");
        assert_eq!(config.user_group.id().as_str(), "");
        assert_eq!(config.user_group.name(), "support");
        assert!(config.identities.is_empty());
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = Config::from_vars(with_token(&[
            (ENV_AWS_REGION, ""),
            (ENV_SLACK_SUBTEAM_NAME, ""),
        ]))
        .unwrap();
        assert_eq!(config.aws_region, "eu-west-1");
        assert_eq!(config.user_group.name(), "support");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_vars(with_token(&[
            (ENV_AWS_REGION, "us-west-2"),
            (ENV_SLACK_API_URL, "http://localhost:9000/update"),
            (ENV_SLACK_WEBHOOK_URL, "https://hooks.slack.com/services/T/B/X"),
            (ENV_SLACK_SUBTEAM_ID, "S0SUPPORT"),
            (ENV_SLACK_SUBTEAM_NAME, "oncall"),
        ]))
        .unwrap();
        assert_eq!(config.aws_region, "us-west-2");
        assert_eq!(config.slack_api_url, "http://localhost:9000/update");
        assert_eq!(
            config.slack_webhook_url,
            "https://hooks.slack.com/services/T/B/X"
        );
        assert_eq!(config.user_group.id().as_str(), "S0SUPPORT");
        assert_eq!(config.user_group.name(), "oncall");
    }

    #[test]
    fn prefixed_keys_populate_identities() {
        let config = Config::from_vars(with_token(&[
            ("SSM_ALICE", "U1"),
            ("SSM_BOB", "U2"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();
        assert_eq!(config.identities.len(), 2);
        assert_eq!(
            config.identities.lookup("alice"),
            Some(&SlackUserId::from("U1"))
        );
    }

    #[test]
    fn colliding_identity_keys_pick_the_same_user_every_time() {
        let forward = with_token(&[("SSM_ALICE", "U1"), ("SSM_Alice", "U2")]);
        let mut reversed = forward.clone();
        reversed.reverse();

        for vars in [forward, reversed] {
            for _ in 0..16 {
                let config = Config::from_vars(vars.clone()).unwrap();
                assert_eq!(config.identities.len(), 1);
                assert_eq!(
                    config.identities.lookup("alice"),
                    Some(&SlackUserId::from("U1"))
                );
            }
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = Config::from_vars(with_token(&[(
            ENV_SLACK_WEBHOOK_URL,
            "https://hooks.slack.com/services/T/B/SECRET",
        )]))
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("xoxb-token"));
        assert!(!rendered.contains("SECRET"));
    }
}
