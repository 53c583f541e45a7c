pub mod credentials;
pub mod hints;
pub mod tokens;

pub use credentials::{CredentialVerifier, PlainTextCredentials};
pub use tokens::{RandomTokens, TokenGenerator};
