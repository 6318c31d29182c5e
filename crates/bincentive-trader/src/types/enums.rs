/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Deployment target for the Bincentive gateways.
///
/// Selects the member-login host and the trader gateway host as a pair;
/// there is no mixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Testing,
    Production,
}

impl Environment {
    /// Base URL of the member service (login).
    pub fn member_base_url(&self) -> &'static str {
        match self {
            Environment::Testing => "https://fs-sitapi.bincentive.com",
            Environment::Production => "https://fs-api.bincentive.com",
        }
    }

    /// Base URL of the trader gateway (all post-login endpoints).
    pub fn trader_base_url(&self) -> &'static str {
        match self {
            Environment::Testing => "https://bi-gateway-go-sit.bincentive.com",
            Environment::Production => "https://bi-gateway-go-prod.bincentive.com",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Real,
    Virtual,
}
