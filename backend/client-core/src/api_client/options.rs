use crate::error::api_client::ApiClientError;

use reqwest::Method;
use serde::Serialize;

/// Per-call request settings, merged over the client's defaults.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers. A `Content-Type` here replaces the JSON default.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the request body.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiClientError> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }
}
