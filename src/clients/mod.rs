pub mod api;
pub mod credentials;

pub use api::{ClientError, PartsApiClient};
pub use credentials::CredentialStore;
