/*
[INPUT]:  Query parameters and bearer authentication
[OUTPUT]: Exchange, symbol, and currency listings
[POS]:    HTTP layer - common reference-data endpoints
[UPDATE]: When adding new common endpoints or changing query parameters
*/

use std::time::Duration;

use reqwest::Method;

use crate::http::{Result, TraderClient};
use crate::types::{Currency, Exchange, ExchangeSymbol};

impl TraderClient {
    /// List exchanges currently active on the platform.
    ///
    /// GET /api/v1/common/ExchangeList
    pub async fn exchange_list(&self, timeout: Option<Duration>) -> Result<Vec<Exchange>> {
        let builder = self.request(Method::GET, "/api/v1/common/ExchangeList")?;
        self.dispatch(builder, timeout).await
    }

    /// List tradable symbols of one exchange.
    ///
    /// GET /api/v1/common/SymbolList?exchangeId={exchange_id}
    pub async fn exchange_symbol_list(
        &self,
        exchange_id: i64,
        timeout: Option<Duration>,
    ) -> Result<Vec<ExchangeSymbol>> {
        let endpoint = format!("/api/v1/common/SymbolList?exchangeId={}", exchange_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.dispatch(builder, timeout).await
    }

    /// List supported currencies.
    ///
    /// GET /api/v1/common/CurrencyList
    pub async fn currency_list(&self, timeout: Option<Duration>) -> Result<Vec<Currency>> {
        let builder = self.request(Method::GET, "/api/v1/common/CurrencyList")?;
        self.dispatch(builder, timeout).await
    }
}
