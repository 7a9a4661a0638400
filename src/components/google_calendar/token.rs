use crate::config::Config;
use crate::error::{google_calendar_error, BotResult};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cached OAuth access token with its expiry timestamp
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: i64,
}

/// Manages the Google OAuth access token for the calendar account.
///
/// The access token is cached in memory and refreshed with the
/// configured refresh token when it is missing or about to expire.
#[derive(Clone)]
pub struct TokenManager {
    config: Arc<RwLock<Config>>,
    client: Client,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenManager {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            config,
            client: Client::new(),
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a valid access token, refreshing if needed
    pub async fn access_token(&self) -> BotResult<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = &*cached {
                // Leave a minute of slack so a token doesn't expire mid-request
                if token.expires_at > Utc::now().timestamp() + 60 {
                    return Ok(token.access_token.clone());
                }
            }
        }

        self.refresh_token().await
    }

    /// Exchange the refresh token for a fresh access token
    async fn refresh_token(&self) -> BotResult<String> {
        let (client_id, client_secret, refresh_token) = {
            let config_read = self.config.read().await;
            (
                config_read.google_client_id.clone(),
                config_read.google_client_secret.clone(),
                config_read.google_refresh_token.clone(),
            )
        };

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post("https://oauth2.googleapis.com/token")
            .form(&params)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let token_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = token_data
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| google_calendar_error("Token response missing 'access_token' field"))?
            .to_string();

        let expires_in = token_data
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);

        let mut cached = self.cached.write().await;
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Utc::now().timestamp() + expires_in,
        });

        Ok(access_token)
    }
}
