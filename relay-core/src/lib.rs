pub mod config;
pub mod error;
pub mod gateway;
pub mod normalizer;
pub mod observability;
pub mod security;
pub mod server;

pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use gateway::{Upstream, WebhookClient};
pub use normalizer::ResponseShape;
