pub mod client_api;
pub mod generator;
pub mod http_client;
pub mod news;
