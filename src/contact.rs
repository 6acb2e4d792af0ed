//! Contact form submission handling.
//!
//! A submission is validated, rendered into a single email and handed to
//! the mail provider exactly once. There is no queue, retry or
//! deduplication: two identical submissions send two emails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::html;
use crate::mail::{self, OutboundEmail};

/// Raw contact form payload, posted either as JSON or as a urlencoded form.
///
/// Every field is optional at this layer so that an absent field and an
/// empty one are reported the same way. Scalar values are taken as text, so
/// `"title": 42` reads as `"42"`; arrays and objects count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// A validated submission: required fields are present and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Failed to send email")]
    Delivery(#[source] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ContactError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            ContactError::Delivery(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email"),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Successful submission: `{ "success": true, "data": <provider response> }`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub data: Value,
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = ContactError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        let name = required(request.name)?;
        let email = required(request.email)?;
        let message = required(request.message)?;

        Ok(Self {
            name,
            email,
            company: optional(request.company),
            title: optional(request.title),
            message,
        })
    }
}

impl ContactSubmission {
    /// Render the notification email sent to the company inbox.
    ///
    /// Replies go straight to the submitter. Company and title blocks are
    /// only rendered when they were provided.
    pub fn to_email(&self, config: &Config) -> OutboundEmail {
        let mut body = String::from("<h2>New Contact Form Submission</h2>\n");
        body.push_str(&field_block("Name", &self.name));
        body.push_str(&field_block("Email", &self.email));
        if let Some(company) = &self.company {
            body.push_str(&field_block("Company", company));
        }
        if let Some(title) = &self.title {
            body.push_str(&field_block("Title", title));
        }
        body.push_str(&format!(
            "<p><strong>Message:</strong></p>\n<p>{}</p>\n",
            html::escape(&self.message).replace('\n', "<br>")
        ));

        OutboundEmail {
            from: config.contact_from_email.clone(),
            to: vec![config.contact_to_email.clone()],
            subject: format!("New Contact Form Submission from {}", single_line(&self.name)),
            html: body,
            reply_to: self.email.clone(),
        }
    }
}

/// Validate a request and forward it to the mail provider.
pub async fn submit(config: &Config, request: ContactRequest) -> Result<ContactResponse, ContactError> {
    let submission = ContactSubmission::try_from(request)?;
    let email = submission.to_email(config);

    match mail::send_email(config, &email).await {
        Ok(data) => {
            info!("Contact submission forwarded");
            Ok(ContactResponse {
                success: true,
                data,
            })
        }
        Err(e) => {
            error!("Failed to send contact email: {:#}", e);
            Err(ContactError::Delivery(e))
        }
    }
}

fn required(value: Option<String>) -> Result<String, ContactError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ContactError::MissingFields)
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn field_block(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>\n", label, html::escape(value))
}

/// Collapse control characters so user input cannot break the subject line.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
