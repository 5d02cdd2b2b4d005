pub mod api_client;
pub mod config;
pub mod error;
pub mod locale;
pub mod value;


pub use api_client::{ApiClient, CurrentUser, RequestOptions};
pub use locale::{LocaleResolver, get_localized_string};

/// Base URL used when the registry does not name one.
pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Origin that origin-relative base URLs (such as the default) resolve against.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1";
pub const USER_AGENT: &str = const_format::concatcp!("mojs/", env!("CARGO_PKG_VERSION"));
