use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Registry, SessionContext, SessionUser};

use common::RedactedToken;

use std::panic::Location;

/// Builder for creating validated [`Registry`] instances.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    api_base_url: Option<String>,
    csrf_token: Option<RedactedToken>,
    current_locale: Option<String>,
    user: Option<SessionUser>,
    context: Option<SessionContext>,
}

impl RegistryBuilder {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn with_csrf_token(mut self, token: impl Into<RedactedToken>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn with_current_locale(mut self, locale: impl Into<String>) -> Self {
        self.current_locale = Some(locale.into());
        self
    }

    pub fn with_user(mut self, user: SessionUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_context(mut self, context: SessionContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the Registry with validation.
    ///
    /// Every field is optional. A base URL, when given, must be absolute
    /// (`http://` or `https://`) or an origin-relative path starting with `/`.
    #[track_caller]
    pub fn build(self) -> Result<Registry, ModelError> {
        let registry = Registry {
            api_base_url: self.api_base_url.unwrap_or_default(),
            csrf_token: self.csrf_token.unwrap_or_default(),
            current_locale: self.current_locale.unwrap_or_default(),
            user: self.user,
            context: self.context,
        };

        registry.validate()?;
        Ok(registry)
    }
}

impl Registry {
    /// Check field formats.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] for a malformed base URL or locale.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(url) = self.api_base_url() {
            let absolute = url.starts_with("http://") || url.starts_with("https://");
            if !absolute && !url.starts_with('/') {
                return Err(ModelError::Validation {
                    message: format!("Invalid API base URL: {url}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        if let Some(locale) = self.current_locale() {
            if locale.chars().any(char::is_whitespace) {
                return Err(ModelError::Validation {
                    message: format!("Invalid locale code: {locale:?}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
