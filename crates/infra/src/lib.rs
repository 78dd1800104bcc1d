//! Infrastructure layer: concrete adapters for the authentication core.

pub mod credential_store;

mod integration_tests;

pub use credential_store::InMemoryCredentialStore;
