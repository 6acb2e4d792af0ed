//! HTTP surface: localized pages, sitemap/robots, contact API and health.
//!
//! ## Endpoints
//! - GET  /                  - Redirect to the negotiated locale
//! - GET  /{locale}[/{page}] - Localized pages (fallback)
//! - GET  /sitemap.xml       - Sitemap with alternate-language links
//! - GET  /robots.txt        - Crawl rules
//! - POST /api/contact       - Contact form submission
//! - GET  /health            - Liveness check

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::contact::{self, ContactError, ContactRequest, ContactResponse};
use crate::i18n::{Locale, LocaleRegistry};
use crate::pages;
use crate::routes::{self, ROUTES};
use crate::sitemap;

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(redirect_to_locale))
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/api/contact", post(submit_contact))
        .fallback(localized_page)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Arc<Config>) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router(config))
        .await
        .context("HTTP server error")
}

async fn health() -> &'static str {
    "OK"
}

async fn redirect_to_locale(headers: HeaderMap) -> Redirect {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = Locale::negotiate(accept_language);

    debug!("Redirecting / to /{}", locale);
    Redirect::temporary(&format!("/{}", locale))
}

/// Every path not claimed by a fixed route is `/{locale}` or
/// `/{locale}/{page}`; anything else is a 404.
async fn localized_page(State(config): State<Arc<Config>>, method: Method, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let (locale, page) = path.split_once('/').unwrap_or((path, ""));

    if !LocaleRegistry::get().contains(locale) {
        return not_found_response();
    }
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    render_page(&config, locale, page)
}

fn render_page(config: &Config, locale_code: &str, segment: &str) -> Response {
    let Ok(locale) = Locale::from_code(locale_code) else {
        return not_found_response();
    };
    let Some(route) = routes::find(segment) else {
        return not_found_response();
    };

    match pages::render(locale, route, &config.site_url) {
        Ok(page) => (
            [(header::CONTENT_LANGUAGE, locale.code())],
            Html(page),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render /{}{}: {}", locale, route.path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn sitemap_xml(State(config): State<Arc<Config>>) -> Response {
    let entries = sitemap::generate(ROUTES, LocaleRegistry::get(), &config.site_url);

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render_xml(&entries),
    )
        .into_response()
}

async fn robots_txt(State(config): State<Arc<Config>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&config.site_url),
    )
        .into_response()
}

/// POST /api/contact
///
/// Accepts a JSON body or a urlencoded form, as posted by the contact page
/// without scripting. A body that cannot be decoded cannot carry the
/// required fields, so it is answered like any other incomplete submission.
async fn submit_contact(
    State(config): State<Arc<Config>>,
    request: Request,
) -> Result<Json<ContactResponse>, ContactError> {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    let payload = if is_form {
        Form::<ContactRequest>::from_request(request, &())
            .await
            .map(|Form(payload)| payload)
            .map_err(|e| {
                debug!("Rejected contact form body: {}", e);
                ContactError::MissingFields
            })
    } else {
        Json::<ContactRequest>::from_request(request, &())
            .await
            .map(|Json(payload)| payload)
            .map_err(|e| {
                debug!("Rejected contact JSON body: {}", e);
                ContactError::MissingFields
            })
    };

    contact::submit(&config, payload?).await.map(Json)
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
