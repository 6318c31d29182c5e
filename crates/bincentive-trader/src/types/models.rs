/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::AccountType;

/// A strategy the account is approved to trade on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "strategyName")]
    pub strategy_name: String,
    #[serde(rename = "exchangeId", skip_serializing_if = "Option::is_none")]
    pub exchange_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    #[serde(rename = "exchangeId")]
    pub exchange_id: i64,
    #[serde(rename = "exchangeName")]
    pub exchange_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSymbol {
    #[serde(rename = "symbolId")]
    pub symbol_id: i64,
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "currencyId")]
    pub currency_id: i64,
    #[serde(rename = "currencyName")]
    pub currency_name: String,
}

/// One stored exchange API key. The secret never comes back from the
/// gateway, so the entry only carries the public half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyEntry {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// One executed order from the history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
    pub side: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "orderTime")]
    pub order_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAsset {
    #[serde(rename = "strategyId")]
    pub strategy_id: i64,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
    #[serde(rename = "currencyName")]
    pub currency_name: String,
    #[serde(rename = "totalAmount", with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    #[serde(rename = "availableAmount", with = "rust_decimal::serde::str")]
    pub available_amount: Decimal,
}
