use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Public base URL used for canonical, alternate and sitemap links
    pub site_url: String,

    // Mail provider (Resend). The key is optional at startup and only
    // required once the contact handler actually sends.
    pub resend_api_key: Option<String>,
    pub mail_api_url: String,
    pub mail_timeout_secs: u64,
    pub contact_from_email: String,
    pub contact_to_email: String,

    // Analytics
    pub ga_measurement_id: Option<String>,
    pub gtm_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 3000,
            },

            site_url: normalize_site_url(
                &std::env::var("SITE_URL")
                    .unwrap_or_else(|_| "https://corridorpay.com".to_string()),
            ),

            // Mail
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            mail_timeout_secs: match std::env::var("MAIL_TIMEOUT_SECS") {
                Ok(v) => v
                    .parse()
                    .context("MAIL_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => 10,
            },
            contact_from_email: std::env::var("CONTACT_FROM_EMAIL")
                .unwrap_or_else(|_| "Corridor Website <noreply@corridorpay.com>".to_string()),
            contact_to_email: std::env::var("CONTACT_TO_EMAIL")
                .unwrap_or_else(|_| "hello@corridorpay.com".to_string()),

            // Analytics
            ga_measurement_id: non_empty_var("GA_MEASUREMENT_ID"),
            gtm_id: non_empty_var("GTM_ID"),
        })
    }
}

/// Read an environment variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Strip trailing slashes so URLs can be joined with `/{locale}{path}`.
pub fn normalize_site_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
