mod api_client;
mod config;
