//! Client layer: owns the HTTP connection pool, runs requests and maps wire outcomes to
//! typed results and errors.
//!
//! Endpoint methods live next to each other per resource family (`contacts.rs`,
//! `messages.rs`, ...); they are thin wrappers around the executor defined here.

mod contacts;
mod custom_fields;
mod invoices;
mod lists;
mod messages;
mod numbers;
mod sender_ids;
mod templates;
mod unsubscribers;
mod user;

#[cfg(test)]
mod testing;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::domain::{ApiError, Credentials, Params, ValidationError};
use crate::transport::{
    HttpMethod, HttpRequest, TransportError, build_request, decode_error_document,
    decode_json_response, decode_ping_response, normalize_base_url,
};

/// TextMagic REST API v2 root. The trailing slash keeps relative joins below `v2`.
pub const DEFAULT_BASE_URL: &str = "https://rest.textmagic.com/api/v2/";

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);
            for (name, value) in request.headers {
                headers.insert(
                    HeaderName::from_bytes(name.as_bytes())?,
                    HeaderValue::from_str(&value)?,
                );
            }

            let mut builder = self.client.request(method, request.url);
            if let Some(form) = request.form {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                builder = builder.body(form);
            }
            let builder = builder.headers(headers);

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMagicClient`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, connection refused, timeouts),
/// - application errors decoded from TextMagic's error document,
/// - decode and validation failures.
pub enum TextMagicError {
    /// HTTP client / transport failure, surfaced as produced by the HTTP stack.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// TextMagic answered with a non-success status and an error document.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Non-success status whose body is not a TextMagic error document.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A success status other than the one the call requires (deletes expect 204).
    #[error("unexpected status for delete: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    /// Response body could not be decoded into the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL (or a path joined onto it) is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The authentication check did not receive its acknowledgement.
    #[error("unable to ping API")]
    PingFailed {
        #[source]
        source: Option<Box<TextMagicError>>,
    },
}

impl TextMagicError {
    /// The decoded error document, if TextMagic sent one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.code == 404)
            || matches!(self, Self::HttpStatus { status: 404, .. })
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api(err) if err.code == 401)
            || matches!(self, Self::HttpStatus { status: 401, .. })
            || matches!(self, Self::PingFailed { .. })
    }
}

impl From<TransportError> for TextMagicError {
    fn from(value: TransportError) -> Self {
        Self::Parse(Box::new(value))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextMagicClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TextMagicClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextMagicClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API root (for example a local mock server). A missing trailing slash is
    /// added.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextMagicClient`].
    pub fn build(self) -> Result<TextMagicClient, TextMagicError> {
        let base_url = normalize_base_url(&self.base_url)?.to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextMagicError::Transport(Box::new(err)))?;

        Ok(TextMagicClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level TextMagic client.
///
/// One instance owns a pooled HTTP client; clones share it. Every method performs exactly
/// one authenticated request against `https://rest.textmagic.com/api/v2/` (or the base URL
/// set on the builder). There is no retry, caching, or pagination helper.
pub struct TextMagicClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TextMagicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMagicClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TextMagicClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TextMagicClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TextMagicClientBuilder {
        TextMagicClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the credentials against `GET ping`.
    ///
    /// Errors:
    /// - [`TextMagicError::Api`] when TextMagic rejects the request (invalid credentials
    ///   come back as code 401),
    /// - [`TextMagicError::PingFailed`] for anything else: a missing or wrong `pong`, an
    ///   undecodable body, or a transport failure (kept as the source).
    pub async fn ping(&self) -> Result<(), TextMagicError> {
        let response = match self.execute(HttpMethod::Get, "ping", None, None).await {
            Ok(response) => response,
            Err(err @ TextMagicError::Api(_)) => return Err(err),
            Err(err) => {
                return Err(TextMagicError::PingFailed {
                    source: Some(Box::new(err)),
                });
            }
        };

        decode_ping_response(&response.body).map_err(|err| TextMagicError::PingFailed {
            source: Some(Box::new(err.into())),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Params>,
    ) -> Result<T, TextMagicError> {
        let response = self.execute(HttpMethod::Get, path, query, None).await?;
        decode_success(&response)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Option<&Params>,
    ) -> Result<T, TextMagicError> {
        let response = self.execute(HttpMethod::Post, path, None, form).await?;
        decode_success(&response)
    }

    /// POST whose response body, if any, is not needed.
    pub(crate) async fn post_unit(
        &self,
        path: &str,
        form: Option<&Params>,
    ) -> Result<(), TextMagicError> {
        self.execute(HttpMethod::Post, path, None, form).await?;
        Ok(())
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Option<&Params>,
    ) -> Result<T, TextMagicError> {
        let response = self.execute(HttpMethod::Put, path, None, form).await?;
        decode_success(&response)
    }

    /// DELETE that must be answered with 204 No Content.
    pub(crate) async fn delete(
        &self,
        path: &str,
        form: Option<&Params>,
    ) -> Result<(), TextMagicError> {
        let response = self.execute(HttpMethod::Delete, path, None, form).await?;
        if response.status != STATUS_NO_CONTENT {
            return Err(TextMagicError::UnexpectedStatus {
                expected: STATUS_NO_CONTENT,
                actual: response.status,
            });
        }
        Ok(())
    }

    /// Run one request. Returns the response only for 200, 201 and 204.
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Params>,
        form: Option<&Params>,
    ) -> Result<HttpResponse, TextMagicError> {
        let request = build_request(&self.credentials, &self.base_url, method, path, query, form)?;
        tracing::debug!(method = method.as_str(), url = %request.url, "sending TextMagic request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(TextMagicError::Transport)?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "received TextMagic response"
        );

        match response.status {
            STATUS_OK | STATUS_CREATED | STATUS_NO_CONTENT => Ok(response),
            status => Err(error_from_response(status, response.body)),
        }
    }
}

fn decode_success<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, TextMagicError> {
    if response.status == STATUS_NO_CONTENT {
        return Err(TransportError::EmptyBody.into());
    }
    Ok(decode_json_response(&response.body)?)
}

fn error_from_response(status: u16, body: String) -> TextMagicError {
    match decode_error_document(&body) {
        Ok(err) => TextMagicError::Api(err),
        Err(err) => {
            tracing::warn!(status, error = %err, "response is not a TextMagic error document");
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body)
            };
            TextMagicError::HttpStatus { status, body }
        }
    }
}
