pub mod api_client;
pub mod config;

pub use api_client::ApiClientError;
pub use config::ConfigError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    ApiClient(#[from] api_client::ApiClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
