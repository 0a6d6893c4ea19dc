use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{
    backend_dto::{BalanceDto, CryptoOrderDto, InvestmentDto},
    error::ApiError,
    utils::parse_array,
};
use crate::{
    config::Session,
    models::{AccountBalance, CryptoOrder, InvestmentNav},
};

/// Client for the brokerage backend. All endpoints are bearer-token
/// authenticated with the session's token.
#[derive(Clone, Debug)]
pub struct BrokerageApi {
    client: Client,
    base_url: String,
    session: Session,
}

impl BrokerageApi {
    pub fn new(client: Client, base_url: String, session: Session) -> Self {
        Self {
            client,
            base_url,
            session,
        }
    }

    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let res = self
            .client
            .get(&url)
            .bearer_auth(self.session.token())
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth),
            status if !status.is_success() => Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            }),
            _ => {
                let text = res.text().await?;
                Ok(serde_json::from_str::<Value>(&text)?)
            }
        }
    }

    pub async fn account_balance(&self) -> Result<AccountBalance, ApiError> {
        let data = self.get_json("auth/account/balance").await?;
        let dto = serde_json::from_value::<BalanceDto>(data)?;
        Ok(dto.to_balance())
    }

    /// The user's full crypto order ledger. Holdings are derived from this,
    /// never stored separately.
    pub async fn crypto_orders(&self) -> Result<Vec<CryptoOrder>, ApiError> {
        let data = self.get_json("cryptoOrders").await?;
        let orders = parse_array::<CryptoOrderDto>(data, "cryptoOrders")?;
        Ok(orders.iter().map(CryptoOrderDto::to_order).collect())
    }

    pub async fn my_investments(&self) -> Result<Vec<InvestmentNav>, ApiError> {
        let data = self.get_json("investment/my-investments").await?;
        let investments = data
            .get("investments")
            .cloned()
            .ok_or_else(|| ApiError::Shape(String::from("missing 'investments' in response")))?;
        let dtos = parse_array::<InvestmentDto>(investments, "my-investments")?;
        Ok(dtos.iter().filter_map(InvestmentDto::to_nav).collect())
    }
}
