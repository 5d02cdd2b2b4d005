//! Typed access to the backend REST API.
//!
//! One call, one attempt: no retries, no timeout, no deduplication of
//! concurrent requests. Callers that need any of those wrap the call.

mod options;

pub use options::RequestOptions;

use crate::error::api_client::ApiClientError;
use crate::{DEFAULT_API_BASE_URL, DEFAULT_ORIGIN, USER_AGENT};

use common::{ErrorLocation, HttpStatusCode, RedactedToken};
use models::{ApiResponse, Context, Id, Registry, Submission, User};

use std::panic::Location;

use log::{debug, error, warn};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

pub const CSRF_HEADER_KEY: &str = "x-csrf-token";
pub const JSON_CONTENT_TYPE: &str = "application/json";

const CURRENT_USER_ENDPOINT: &str = "users/me";
const SUBMISSIONS_ENDPOINT: &str = "submissions";
const CONTEXTS_ENDPOINT: &str = "contexts";

/// Outcome of [`ApiClient::fetch_current_user`].
///
/// Failures are folded into `Absent`, so this call never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUser {
    Found(User),
    Absent,
}

impl CurrentUser {
    pub fn is_found(&self) -> bool {
        matches!(self, CurrentUser::Found(_))
    }

    pub fn into_option(self) -> Option<User> {
        match self {
            CurrentUser::Found(user) => Some(user),
            CurrentUser::Absent => None,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    origin: Url,
    csrf_token: Option<RedactedToken>,
    client: Client,
}

impl ApiClient {
    /// Create a client from the registry's base URL and CSRF token.
    ///
    /// The registry is read once here; later changes to it are not observed.
    pub fn new(registry: &Registry) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: registry
                .api_base_url()
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            origin: Url::parse(DEFAULT_ORIGIN)?,
            csrf_token: registry.csrf_token().map(RedactedToken::new),
            client,
        })
    }

    /// Origin that a path-only base URL such as `/api` is resolved against.
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = origin;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single request and decode the `{ data, meta?, errors? }` envelope.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Http`] when no response arrives
    /// - [`ApiClientError::Status`] on a non-2xx status, carrying the server's
    ///   `message` or `API request failed with status {code}`
    /// - [`ApiClientError::Json`] when a 2xx body is not the expected JSON
    ///
    /// Every failure is logged before it is returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiClientError> {
        let result = self.send(endpoint, options).await;
        if let Err(e) = &result {
            error!("API request failed: {e}");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiClientError> {
        let url = self.resolve_url(endpoint)?;
        let headers = self.build_headers(&options)?;

        debug!("{} {}", options.method, url);

        let mut request = self
            .client
            .request(options.method, url)
            .headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body is treated like an empty one.
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiClientError::Status {
                status: HttpStatusCode(status.as_u16()),
                message: status_error_message(status.as_u16(), &body),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.bytes().await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;

        Ok(envelope)
    }

    fn resolve_url(&self, endpoint: &str) -> Result<Url, ApiClientError> {
        let full = build_endpoint_url(&self.base_url, endpoint);
        match Url::parse(&full) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.origin.join(&full)?),
            Err(e) => Err(e.into()),
        }
    }

    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap, ApiClientError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            // Repeated names are kept, as a browser `Headers` list does.
            headers.append(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if let Some(token) = &self.csrf_token {
            let mut value = HeaderValue::from_str(token.as_str())?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(CSRF_HEADER_KEY), value);
        }

        Ok(headers)
    }

    /// Fetch the signed-in user from `users/me`.
    ///
    /// Any failure, including an anonymous session's 401, resolves to
    /// [`CurrentUser::Absent`].
    pub async fn fetch_current_user(&self) -> CurrentUser {
        match self
            .request::<User>(CURRENT_USER_ENDPOINT, RequestOptions::default())
            .await
        {
            Ok(response) => CurrentUser::Found(response.into_data()),
            Err(e) => {
                warn!("Failed to fetch current user: {}", e.message());
                CurrentUser::Absent
            }
        }
    }

    /// Fetch one submission by id.
    ///
    /// # Errors
    /// Returns [`ApiClientError`] unchanged from [`ApiClient::request`].
    pub async fn fetch_submission(&self, submission_id: &Id) -> Result<Submission, ApiClientError> {
        let endpoint = format!("{SUBMISSIONS_ENDPOINT}/{submission_id}");
        let response = self
            .request::<Submission>(&endpoint, RequestOptions::default())
            .await?;
        Ok(response.into_data())
    }

    /// Fetch one journal context by id.
    pub async fn fetch_context(&self, context_id: &Id) -> Result<Context, ApiClientError> {
        let endpoint = format!("{CONTEXTS_ENDPOINT}/{context_id}");
        let response = self
            .request::<Context>(&endpoint, RequestOptions::default())
            .await?;
        Ok(response.into_data())
    }
}

/// Join base and endpoint with exactly one slash, whatever number of
/// leading slashes the endpoint carries.
pub fn build_endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}/{}", endpoint.trim_start_matches('/'))
}

fn status_error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("API request failed with status {status}"))
}
