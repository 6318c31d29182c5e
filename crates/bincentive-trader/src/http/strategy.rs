/*
[INPUT]:  Strategy identifiers, order parameters, time ranges
[OUTPUT]: Strategy listings, order signals, order history
[POS]:    HTTP layer - strategy and order endpoints
[UPDATE]: When adding new strategy endpoints or changing order flow
*/

use std::time::Duration;

use reqwest::Method;
use rust_decimal::Decimal;

use crate::http::{Result, TraderClient};
use crate::types::{
    OrderHistoryRequest, OrderRecord, SetPositionData, SetPositionRequest, Strategy, Timestamp,
};

impl TraderClient {
    /// List the strategies this account is approved for.
    ///
    /// GET /api/v1/user/StrategyNameList
    pub async fn strategy_list(&self, timeout: Option<Duration>) -> Result<Vec<Strategy>> {
        let builder = self.request(Method::GET, "/api/v1/user/StrategyNameList")?;
        self.dispatch(builder, timeout).await
    }

    /// Submit a market order for a strategy.
    ///
    /// POST /api/v1/strategy/SetPosition
    ///
    /// Returns the created signal id, or `None` when the gateway accepted
    /// the call without creating an order. Rejections (450/500/other)
    /// surface as errors like every other endpoint.
    pub async fn submit_market_order(
        &self,
        strategy_id: i64,
        ratio: Decimal,
        limit_price: Decimal,
        timeout: Option<Duration>,
    ) -> Result<Option<i64>> {
        let body = SetPositionRequest {
            strategy_id,
            ratio,
            limit_price,
        };
        let builder = self
            .request(Method::POST, "/api/v1/strategy/SetPosition")?
            .json(&body);
        let data: Option<SetPositionData> = self.dispatch_created(builder, timeout).await?;
        Ok(data.and_then(|payload| payload.signal_id))
    }

    /// List executed orders of a strategy within a time range.
    ///
    /// POST /api/v1/user/OrderList
    ///
    /// Range bounds without a zone are resolved in the local time zone
    /// before serialization; see [`Timestamp`].
    pub async fn order_history(
        &self,
        strategy_id: i64,
        begin: impl Into<Timestamp>,
        end: impl Into<Timestamp>,
        timeout: Option<Duration>,
    ) -> Result<Vec<OrderRecord>> {
        let body = OrderHistoryRequest {
            strategy_id,
            begin_time: begin.into(),
            end_time: end.into(),
        };
        let builder = self
            .request(Method::POST, "/api/v1/user/OrderList")?
            .json(&body);
        self.dispatch(builder, timeout).await
    }
}
