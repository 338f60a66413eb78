//! REST client shared by every page.
//!
//! One round trip per call: resolve the path against the API root, attach the
//! stored bearer token, encode the body, and decode the reply. There is no
//! retry, caching or deduplication.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError` value. HTTP errors carry the server's
//! `message` field verbatim; a body that is not JSON is its own kind
//! (`InvalidBody`) rather than a decode failure leaking to the page. Download
//! failures never look at the body.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use super::types::Envelope;
use crate::state::session::bearer_token;
use crate::util::storage::KeyValueStore;

pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Request body: a structured value the client serializes, or bytes that are
/// already encoded (file uploads) and pass through untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Encoded(Vec<u8>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    #[default]
    Json,
    /// Raw bytes for file downloads.
    Blob,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Payload>,
    pub headers: Vec<(String, String)>,
    pub mode: ResponseMode,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(Payload::Json(body));
        self
    }

    /// Attach a pre-encoded body, optionally declaring its content type.
    #[must_use]
    pub fn encoded(mut self, bytes: Vec<u8>, content_type: Option<&str>) -> Self {
        self.body = Some(Payload::Encoded(bytes));
        if let Some(content_type) = content_type {
            self.headers.push(("Content-Type".to_owned(), content_type.to_owned()));
        }
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn blob(mut self) -> Self {
        self.mode = ResponseMode::Blob;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    Blob(Vec<u8>),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Non-2xx reply with a JSON body.
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE))]
    Status { status: u16, message: Option<String> },
    /// The reply body was not JSON.
    #[error("unexpected response from server (HTTP {status})")]
    InvalidBody { status: u16 },
    #[error("Download failed")]
    Download { status: u16 },
    /// 2xx reply whose envelope said `success: false`.
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE))]
    Rejected { message: Option<String> },
    #[error("request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unexpected response data: {0}")]
    Shape(String),
}

impl ApiError {
    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::InvalidBody { status } | Self::Download { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    store: S,
}

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    /// `base_url` is the API root relative paths resolve against, e.g.
    /// `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>, transport: T, store: S) -> Self {
        Self { base_url: base_url.into(), transport, store }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve_url(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }

    /// Build the wire request. The token is read from storage on every call so
    /// login and logout take effect on the next request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if a JSON body cannot be serialized.
    pub fn build_request(&self, path: &str, options: &RequestOptions) -> Result<HttpRequest, ApiError> {
        let mut headers = Vec::with_capacity(options.headers.len() + 2);
        let body = match &options.body {
            Some(Payload::Json(value)) => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                Some(serde_json::to_vec(value)?)
            }
            Some(Payload::Encoded(bytes)) => Some(bytes.clone()),
            None => None,
        };
        if let Some(token) = bearer_token(&self.store) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        headers.extend(options.headers.iter().cloned());
        Ok(HttpRequest { method: options.method, url: self.resolve_url(path), headers, body })
    }

    /// Perform one request in the given response mode.
    ///
    /// # Errors
    ///
    /// See `ApiError`; JSON mode fails on non-2xx with the server message,
    /// blob mode fails with `ApiError::Download`.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiPayload, ApiError> {
        let request = self.build_request(path, &options)?;
        let response = self.transport.send(request).await?;
        match options.mode {
            ResponseMode::Json => decode_json(&response).map(ApiPayload::Json),
            ResponseMode::Blob => decode_blob(response).map(ApiPayload::Blob),
        }
    }

    async fn send_json(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = self.build_request(path, &options)?;
        let response = self.transport.send(request).await?;
        decode_json(&response)
    }

    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Get)).await
    }

    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Post).json(body)).await
    }

    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Put).json(body)).await
    }

    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Patch).json(body)).await
    }

    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Delete)).await
    }

    /// POST an already-encoded body (e.g. a multipart upload).
    ///
    /// # Errors
    ///
    /// See `ApiClient::request`.
    pub async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: Option<&str>) -> Result<Value, ApiError> {
        self.send_json(path, RequestOptions::new(Method::Post).encoded(bytes, content_type))
            .await
    }

    /// GET raw bytes for a file download.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Download` on any non-2xx status.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.build_request(path, &RequestOptions::new(Method::Get))?;
        let response = self.transport.send(request).await?;
        decode_blob(response)
    }

    /// GET and unwrap the `{success, data}` envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` when the envelope reports failure and
    /// `ApiError::Shape` when `data` does not match `D`.
    pub async fn get_data<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let value = self.get(path).await?;
        unwrap_envelope(value)
    }
}

fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_owned()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn decode_json(response: &HttpResponse) -> Result<Value, ApiError> {
    let status = response.status;
    let value = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&response.body).map_err(|_| ApiError::InvalidBody { status })?
    };
    if !response.is_success() {
        let message = value.get("message").and_then(Value::as_str).map(str::to_owned);
        return Err(ApiError::Status { status, message });
    }
    Ok(value)
}

fn decode_blob(response: HttpResponse) -> Result<Vec<u8>, ApiError> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(ApiError::Download { status: response.status })
    }
}

pub(crate) fn unwrap_envelope<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    let envelope: Envelope<D> = serde_json::from_value(value).map_err(|e| ApiError::Shape(e.to_string()))?;
    match envelope {
        Envelope { success: true, data: Some(data), .. } => Ok(data),
        Envelope { message, .. } => Err(ApiError::Rejected { message }),
    }
}

/// The client the running app uses: browser `fetch` over `localStorage`.
pub type AppApi = ApiClient<super::transport::FetchTransport, crate::util::storage::LocalStorage>;
