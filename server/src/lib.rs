pub mod builder;
pub mod error;
pub mod id;
pub mod news;
pub mod server;
pub mod store;
