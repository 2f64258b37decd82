//! A typed client for the JSON API of Cosmos SDK light client daemons (LCD), with support for
//! attaching extension namespaces to a single client.
pub use client::LcdClient;
pub use config::{BroadcastMode, ConnectionOptions};
pub use error::LcdClientError;
pub use extension::{
    Args, ClientBuilder, ExtendedClient, ExtensionFactory, ExtensionModule, Method, Namespace,
};

pub mod client;
pub mod config;
pub mod error;
pub mod extension;
pub mod extensions;
pub mod types;
pub mod utils;
