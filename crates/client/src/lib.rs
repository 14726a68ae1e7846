pub mod app;
pub mod config;
pub mod credentials;
pub mod error;
pub mod remote;

pub use app::{App, View};
pub use config::{AdminConfig, ClientConfig, ENDPOINT_PLACEHOLDER};
pub use credentials::{ConfiguredCredentials, credentials_from_config};
pub use error::{ClientError, Result};
pub use remote::RemoteStore;
