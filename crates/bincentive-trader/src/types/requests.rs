/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::AccountType;
use super::time::Timestamp;

/// Discriminator the member service expects from SDK logins.
const LOGIN_SOURCE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub source: u8,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            source: LOGIN_SOURCE,
        }
    }
}

/// Body for storing an exchange API key.
///
/// `secret_key` is the armored ciphertext produced by the session encryptor,
/// never the plaintext secret.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddApiKeyRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPositionRequest {
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub ratio: Decimal,
    #[serde(rename = "limitPrice", with = "rust_decimal::serde::str")]
    pub limit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderHistoryRequest {
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "beginTime")]
    pub begin_time: Timestamp,
    #[serde(rename = "endTime")]
    pub end_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountAssetRequest {
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
}
