/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bincentive-trader tests

use std::sync::OnceLock;

use pgp::composed::{
    Deserializable, KeyType, Message, SecretKeyParamsBuilder, SignedSecretKey, SubkeyParamsBuilder,
};
use pgp::types::SecretKeyTrait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bincentive_trader::{ClientConfig, TraderClient};

pub const TEST_TOKEN: &str = "test-bearer-token";

static SERVER_KEY: OnceLock<SignedSecretKey> = OnceLock::new();
static SERVER_PUBLIC_ARMORED: OnceLock<String> = OnceLock::new();

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// The mock gateway's secret key. Generated once; RSA keygen is too slow
/// to repeat per test.
pub fn server_secret_key() -> &'static SignedSecretKey {
    SERVER_KEY.get_or_init(|| {
        let mut params = SecretKeyParamsBuilder::default();
        params
            .key_type(KeyType::Rsa(2048))
            .can_certify(true)
            .can_sign(true)
            .primary_user_id("Gateway <gateway@bincentive.com>".into())
            .subkey(
                SubkeyParamsBuilder::default()
                    .key_type(KeyType::Rsa(2048))
                    .can_encrypt(true)
                    .build()
                    .unwrap(),
            );
        let secret_key = params.build().unwrap().generate().unwrap();
        secret_key.sign(String::new).unwrap()
    })
}

/// Armored public half of the mock gateway key, as the login response
/// delivers it.
pub fn server_public_key_armored() -> &'static str {
    SERVER_PUBLIC_ARMORED.get_or_init(|| {
        let secret = server_secret_key();
        let public = secret.public_key();
        let signed = public.sign(secret, String::new).unwrap();
        signed.to_armored_string(None.into()).unwrap()
    })
}

/// Mount a successful login response on the mock server.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/member/api/member/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "token": TEST_TOKEN,
                "publicKey": server_public_key_armored(),
            }
        })))
        .mount(server)
        .await;
}

/// Log a client in against the mock server (both bases point at it).
pub async fn login_test_client(server: &MockServer) -> TraderClient {
    TraderClient::login_with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
        "user@example.com",
        "correct-password",
    )
    .await
    .expect("login against mock server failed")
}

/// Decrypt an armored message under the mock gateway key.
#[allow(dead_code)]
pub fn decrypt_armored(armored: &str) -> String {
    let (message, _) = Message::from_string(armored).expect("armored message");
    let (decrypted, _) = message
        .decrypt(String::new, &[server_secret_key()])
        .expect("decryption");
    let content = decrypted
        .get_content()
        .expect("literal content")
        .expect("non-empty content");
    String::from_utf8(content).expect("utf8 plaintext")
}
