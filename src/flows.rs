//! Network stages of an update cycle.
//!
//! [`CredentialExchanger`] turns client credentials into a bearer token and
//! [`NewReleasesFetcher`] spends that token on the browse endpoint. Both hold only an
//! immutable endpoint URL plus a shared transport, so a single pair can serve any number of
//! concurrent callers.

pub mod browse;
pub mod client_credentials;

pub use browse::*;
pub use client_credentials::*;
