/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bincentive SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    SecretEncryptor,
    Session,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    TraderClient,
    TraderError,
};

// Re-export all types
pub use types::*;
