use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;

/// An email ready to hand to the mail provider.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Send an email via the Resend API.
///
/// Makes exactly one request, bounded by `mail_timeout_secs`; there is no
/// retry. Returns the provider's JSON response body on success.
pub async fn send_email(config: &Config, email: &OutboundEmail) -> Result<serde_json::Value> {
    let api_key = config
        .resend_api_key
        .as_deref()
        .context("RESEND_API_KEY not set")?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.mail_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(&config.mail_api_url)
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await
        .context("Failed to send request to mail API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Mail API error ({}): {}", status, body);
    }

    response
        .json()
        .await
        .context("Failed to parse mail API response")
}
