/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Authenticated client ready for gateway calls
[POS]:    HTTP layer - core client implementation and dispatch
[UPDATE]: When adding connection options or changing status mapping
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Session;
use crate::http::{Result, TraderError};
use crate::types::{ApiMessage, Envelope, Environment};

const MEMBER_LOGIN_PATH: &str = "/member/api/member/login";
const USER_AGENT: &str = "bincentive-rust-sdk";

/// Status the gateway uses for expected business-rule rejections.
const STATUS_BUSINESS_REJECTION: u16 = 450;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Authenticated client for the Bincentive trader gateway.
///
/// Construction performs the login; an instance therefore always holds a
/// usable session. The inner reqwest client reuses connections and is safe
/// to share across tasks.
#[derive(Debug)]
pub struct TraderClient {
    http: Client,
    trader_base_url: Url,
    config: ClientConfig,
    session: Session,
}

impl TraderClient {
    /// Log in with default configuration.
    pub async fn login(email: &str, password: &str, environment: Environment) -> Result<Self> {
        Self::login_with_config(email, password, environment, ClientConfig::default()).await
    }

    /// Log in with custom configuration.
    pub async fn login_with_config(
        email: &str,
        password: &str,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::login_with_config_and_base_urls(
            config,
            environment.member_base_url(),
            environment.trader_base_url(),
            email,
            password,
        )
        .await
    }

    /// Log in against explicit base URLs. Exists for tests against mock
    /// servers; production callers go through [`Environment`].
    pub async fn login_with_config_and_base_urls(
        config: ClientConfig,
        member_base_url: &str,
        trader_base_url: &str,
        email: &str,
        password: &str,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let login_url = Url::parse(member_base_url)?.join(MEMBER_LOGIN_PATH)?;
        let session = Session::login(&http, login_url, email, password).await?;

        Ok(Self {
            http,
            trader_base_url: Url::parse(trader_base_url)?,
            config,
            session,
        })
    }

    /// The session established at login.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Encrypt a secret under the server key, for embedding in request
    /// bodies. See [`Session::encrypt_secret`].
    pub fn encrypt_secret(&self, plaintext: &str) -> Result<String> {
        self.session.encrypt_secret(plaintext)
    }

    /// Build an authenticated request builder for a trader endpoint.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.trader_base_url.join(endpoint)?;
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(self.session.bearer_token()))
    }

    /// Send one request and unwrap the `data` envelope of a 200 response.
    ///
    /// No retries: transport failures and non-200 statuses surface
    /// immediately through the error taxonomy.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let response = self.send(builder, timeout).await?;
        if response.status() == StatusCode::OK {
            unwrap_envelope(response).await
        } else {
            fail_for_status(response).await
        }
    }

    /// Variant of [`dispatch`] for creation endpoints: a 2xx status other
    /// than 200 means the gateway accepted the call without producing the
    /// resource, which maps to `None` instead of an error.
    pub(crate) async fn dispatch_created<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<Option<T>> {
        let response = self.send(builder, timeout).await?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(Some(unwrap_envelope(response).await?))
        } else if status.is_success() {
            Ok(None)
        } else {
            fail_for_status(response).await
        }
    }

    async fn send(&self, builder: RequestBuilder, timeout: Option<Duration>) -> Result<Response> {
        let effective = timeout.unwrap_or(self.config.timeout);
        let response = builder
            .timeout(effective)
            .send()
            .await
            .map_err(|err| TraderError::transport(err, effective))?;
        debug!(status = %response.status(), url = %response.url(), "gateway response");
        Ok(response)
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|err| TraderError::InvalidResponse(format!("response envelope: {err}")))?;
    Ok(envelope.data)
}

/// Map a non-200 status to the error taxonomy. 450 carries the server
/// message; 500 and everything else are generic.
async fn fail_for_status<T>(response: Response) -> Result<T> {
    let status = response.status();
    if status.as_u16() == STATUS_BUSINESS_REJECTION {
        let body: ApiMessage = response
            .json()
            .await
            .map_err(|err| TraderError::InvalidResponse(format!("rejection body: {err}")))?;
        Err(TraderError::Api {
            message: body.message,
        })
    } else if status == StatusCode::INTERNAL_SERVER_ERROR {
        Err(TraderError::ApiServer)
    } else {
        Err(TraderError::Unexpected {
            status: status.as_u16(),
        })
    }
}
