use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use oncall_ports::error::NotifyError;
use oncall_ports::outbound::ChannelNotifier;

/// Slack incoming webhook for the support channel.
pub struct SlackWebhook {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackWebhook {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

#[async_trait]
impl ChannelNotifier for SlackWebhook {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        if self.webhook_url.is_empty() {
            return Err(NotifyError::Webhook("webhook URL is empty".to_string()));
        }

        debug!(channel = "slack", "posting on-call announcement");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { text })
            .send()
            .await
            .map_err(|e| NotifyError::Webhook(e.to_string()))?;

        // Webhooks answer a plain-text "ok" with 200; anything else is a failure.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                channel = "slack",
                status = %status,
                body = %body,
                "Slack webhook request failed"
            );
            return Err(NotifyError::Webhook(format!(
                "received non-200 response: {status}: {body}"
            )));
        }

        Ok(())
    }
}
