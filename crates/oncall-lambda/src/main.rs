//! Scheduled Lambda that announces this week's on-call engineer in Slack.

mod config;

use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use oncall_adapters::slack::{SlackUserGroups, SlackWebhook};
use oncall_adapters::ssm_contacts::SsmContactsDirectory;
use oncall_app::error::AppError;
use oncall_app::OnCallService;
use oncall_core::announcement::Announcement;

use crate::config::Config;

type Announcer = OnCallService<SsmContactsDirectory, SlackUserGroups, SlackWebhook>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config =
        Config::from_env().inspect_err(|e| error!(error = %e, "invalid configuration"))?;
    info!(
        region = %config.aws_region,
        group = %config.user_group.id(),
        identities = config.identities.len(),
        "configuration loaded"
    );

    let directory = SsmContactsDirectory::from_region(&config.aws_region).await;
    let service = OnCallService::new(
        directory,
        SlackUserGroups::new(config.slack_api_url, config.slack_api_token),
        SlackWebhook::new(config.slack_webhook_url),
        config.identities,
        config.user_group,
    );

    let service = &service;
    lambda_runtime::run(service_fn(move |event| handle(service, event))).await
}

fn init_tracing() {
    // CloudWatch adds its own timestamps and does not render ANSI.
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

/// The trigger payload is ignored.
async fn handle(service: &Announcer, _event: LambdaEvent<Value>) -> Result<String, Error> {
    invocation_result(service.announce(Utc::now()).await)
}

/// The posted text, or `""` when nobody on shift has a Slack mapping. Any
/// failure is logged with its stage and fails the invocation.
fn invocation_result(outcome: Result<Option<Announcement>, AppError>) -> Result<String, Error> {
    match outcome {
        Ok(Some(announcement)) => Ok(announcement.text()),
        Ok(None) => Ok(String::new()),
        Err(e) => {
            error!(error = %e, stage = e.stage(), "on-call announcement failed");
            Err(e.into())
        }
    }
}
