//! Client credentials, redacted secrets, and access tokens issued by the accounts host.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
