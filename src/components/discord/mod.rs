use crate::components::reminders::ReminderNotification;
use crate::components::NotificationSink;
use crate::error::BotResult;
use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;

/// Sends reminders to a Discord channel over the REST API.
///
/// Uses a plain HTTP client without a gateway connection, since the
/// bot only posts messages and never receives events.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordNotifier {
    /// Create a notifier posting to the given channel
    pub fn new(token: &str, channel_id: u64) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotifier {
    async fn deliver(&self, notification: &ReminderNotification) -> BotResult<()> {
        self.channel_id
            .send_message(
                &self.http,
                CreateMessage::new().content(notification.format_message()),
            )
            .await?;

        Ok(())
    }
}
