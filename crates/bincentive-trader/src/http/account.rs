/*
[INPUT]:  Exchange API credentials and account queries
[OUTPUT]: Stored key listings and account asset data
[POS]:    HTTP layer - API key management and account endpoints
[UPDATE]: When adding new account endpoints or changing key handling
*/

use std::time::Duration;

use reqwest::Method;

use crate::http::{Result, TraderClient};
use crate::types::{AccountAsset, AccountAssetRequest, AccountType, AddApiKeyRequest, ApiKeyEntry};

impl TraderClient {
    /// Store an exchange API key for a strategy.
    ///
    /// POST /api/v1/user/ApiKey
    ///
    /// The secret is encrypted under the session key before the request
    /// body is built; its plaintext never appears in a serialized request.
    pub async fn add_api_key(
        &self,
        api_key: &str,
        api_secret: &str,
        strategy_id: i64,
        timeout: Option<Duration>,
    ) -> Result<bool> {
        let body = AddApiKeyRequest {
            api_key: api_key.to_string(),
            secret_key: self.encrypt_secret(api_secret)?,
            strategy_id,
        };
        let builder = self.request(Method::POST, "/api/v1/user/ApiKey")?.json(&body);
        self.dispatch(builder, timeout).await
    }

    /// List stored exchange API keys.
    ///
    /// GET /api/v1/user/ApiKey
    pub async fn api_key_list(&self, timeout: Option<Duration>) -> Result<Vec<ApiKeyEntry>> {
        let builder = self.request(Method::GET, "/api/v1/user/ApiKey")?;
        self.dispatch(builder, timeout).await
    }

    /// Delete the stored API key of a strategy.
    ///
    /// DELETE /api/v1/user/ApiKey?strategyId={strategy_id}
    pub async fn delete_api_key(&self, strategy_id: i64, timeout: Option<Duration>) -> Result<bool> {
        let endpoint = format!("/api/v1/user/ApiKey?strategyId={}", strategy_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.dispatch(builder, timeout).await
    }

    /// Fetch the asset snapshot of a strategy account.
    ///
    /// POST /api/v1/user/AccountAsset
    pub async fn account_asset(
        &self,
        strategy_id: i64,
        account_type: AccountType,
        timeout: Option<Duration>,
    ) -> Result<AccountAsset> {
        let body = AccountAssetRequest {
            strategy_id,
            account_type,
        };
        let builder = self
            .request(Method::POST, "/api/v1/user/AccountAsset")?
            .json(&body);
        self.dispatch(builder, timeout).await
    }
}
