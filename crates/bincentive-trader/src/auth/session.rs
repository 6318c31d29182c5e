/*
[INPUT]:  Member-service credentials and login endpoint
[OUTPUT]: Immutable session (bearer token + secret encryptor)
[POS]:    Auth layer - one-time login flow
[UPDATE]: When the login endpoint or response payload changes
*/

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::http::{Result, TraderError};
use crate::types::{Envelope, LoginData, LoginRequest};

use super::SecretEncryptor;

/// Login is cheap on the server side and callers expect constructor
/// failures quickly, so it gets a short fixed timeout of its own.
const LOGIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Credentials established by login, immutable for the client's lifetime.
///
/// Holds the bearer token attached to every subsequent request and the
/// encryptor built from the server's public key. Constructed only by
/// [`Session::login`]; a failed login never produces a session.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    encryptor: SecretEncryptor,
}

impl Session {
    /// Perform the one-time password login.
    ///
    /// POST `<member-base>/member/api/member/login` with
    /// `{email, password, source: 1}`. Any non-2xx response maps to
    /// [`TraderError::Authentication`]; transport failures keep their own
    /// taxonomy so a timeout is not mistaken for bad credentials.
    pub(crate) async fn login(
        http: &Client,
        login_url: Url,
        email: &str,
        password: &str,
    ) -> Result<Self> {
        debug!(url = %login_url, "logging in");

        let body = LoginRequest::new(email, password);
        let response = http
            .post(login_url)
            .timeout(LOGIN_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|err| TraderError::transport(err, LOGIN_TIMEOUT))?;

        if !response.status().is_success() {
            return Err(TraderError::Authentication {
                message: "invalid email or password".to_string(),
            });
        }

        let envelope: Envelope<LoginData> = response
            .json()
            .await
            .map_err(|err| TraderError::InvalidResponse(format!("login payload: {err}")))?;

        let encryptor = SecretEncryptor::from_armored(&envelope.data.public_key)?;
        info!("login succeeded");

        Ok(Self {
            token: envelope.data.token,
            encryptor,
        })
    }

    /// Bearer token attached to every authenticated request.
    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    /// Encrypt a secret under the server key's encryption subkey.
    pub fn encrypt_secret(&self, plaintext: &str) -> Result<String> {
        self.encryptor.encrypt(plaintext)
    }
}
