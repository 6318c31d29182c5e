/*
[INPUT]:  Login credentials and server key material
[OUTPUT]: Session tokens and encrypted secrets
[POS]:    Auth layer - handles member login and secret encryption
[UPDATE]: When login flow or encryption scheme changes
*/

pub mod pgp;
pub mod session;

pub use pgp::SecretEncryptor;
pub use session::Session;
