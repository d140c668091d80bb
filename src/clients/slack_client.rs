use crate::errors::NotificationError;
use crate::notification::ReviewNotification;
use async_trait::async_trait;
use reqwest::Client;

/// Chat side of the dispatch.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &ReviewNotification) -> Result<(), NotificationError>;
}

/// Slack Incoming Webhook
#[derive(Debug)]
pub struct SlackWebhook {
    url: String,
    client: Client,
}

impl SlackWebhook {
    pub fn new(url: String) -> Self {
        SlackWebhook {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    async fn notify(&self, notification: &ReviewNotification) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(&self.url)
            .json(&notification.to_payload())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(NotificationError::Rejected {
            status_code: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}
