/*
[INPUT]:  Mock login responses and key material
[OUTPUT]: Test results for login flow and secret encryption
[POS]:    Integration tests - authentication
[UPDATE]: When login endpoint or session shape changes
*/

mod common;

use common::{
    decrypt_armored, login_test_client, mount_login, server_public_key_armored, setup_mock_server,
    TEST_TOKEN,
};

use bincentive_trader::{ClientConfig, TraderClient, TraderError};
use pgp::composed::{KeyType, SecretKeyParamsBuilder};
use pgp::types::SecretKeyTrait;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_builds_usable_session() {
    let server = setup_mock_server().await;
    mount_login(&server).await;

    let client = login_test_client(&server).await;
    assert_eq!(client.session().bearer_token(), TEST_TOKEN);
}

#[tokio::test]
async fn test_login_posts_credentials_with_sdk_source() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/member/api/member/login"))
        .and(body_json(serde_json::json!({
            "email": "user@example.com",
            "password": "correct-password",
            "source": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "token": TEST_TOKEN, "publicKey": server_public_key_armored() }
        })))
        .expect(1)
        .mount(&server)
        .await;

    login_test_client(&server).await;
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = setup_mock_server().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/common/ExchangeList"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = login_test_client(&server).await;
    let exchanges = client.exchange_list(None).await.unwrap();
    assert!(exchanges.is_empty());
}

#[tokio::test]
async fn test_rejected_login_produces_no_client() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/member/api/member/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = TraderClient::login_with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
        "user@example.com",
        "wrong-password",
    )
    .await
    .unwrap_err();

    match err {
        TraderError::Authentication { message } => {
            assert_eq!(message, "invalid email or password");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_rejects_key_without_encryption_subkey() {
    // A signing-only key has no subkey the client could encrypt to.
    let mut params = SecretKeyParamsBuilder::default();
    params
        .key_type(KeyType::Rsa(2048))
        .can_certify(true)
        .can_sign(true)
        .primary_user_id("Gateway <gateway@bincentive.com>".into());
    let secret = params.build().unwrap().generate().unwrap();
    let signed_secret = secret.sign(String::new).unwrap();
    let public = signed_secret.public_key();
    let armored = public
        .sign(&signed_secret, String::new)
        .unwrap()
        .to_armored_string(None.into())
        .unwrap();

    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/member/api/member/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "token": TEST_TOKEN, "publicKey": armored }
        })))
        .mount(&server)
        .await;

    let err = TraderClient::login_with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
        "user@example.com",
        "correct-password",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TraderError::Key(_)));
}

#[tokio::test]
async fn test_encrypt_secret_roundtrip() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    let client = login_test_client(&server).await;

    let ciphertext = client.encrypt_secret("exchange-api-secret").unwrap();
    assert!(ciphertext.starts_with("-----BEGIN PGP MESSAGE-----"));
    assert_eq!(decrypt_armored(&ciphertext), "exchange-api-secret");

    // Randomized session keys: same plaintext, different bytes, same result.
    let again = client.encrypt_secret("exchange-api-secret").unwrap();
    assert_ne!(ciphertext, again);
    assert_eq!(decrypt_armored(&again), "exchange-api-secret");
}
