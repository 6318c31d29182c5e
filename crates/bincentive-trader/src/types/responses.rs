/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;

/// Success wrapper every gateway response uses: `{ "data": ... }`.
///
/// The dispatch layer unwraps it; callers only ever see the payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error wrapper for business-rule rejections: `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Payload of a set-position call. `signal_id` is absent when the gateway
/// accepted the request without creating an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetPositionData {
    #[serde(rename = "signalId")]
    pub signal_id: Option<i64>,
}
