use derive_getters::Getters;
use derive_new::new;
use reqwest::Url;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::{app::trade::TradeMode, config::Session};

#[derive(Debug, Error)]
pub enum RampError {
    #[error("ramp API key is not configured")]
    MissingApiKey,
    #[error("no wallet address on file; add one in account settings")]
    MissingWalletAddress,
    #[error("failed to build checkout url: {0}")]
    Url(String),
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum RampEnvironment {
    #[strum(to_string = "STAGING")]
    Staging,
    #[strum(to_string = "PRODUCTION")]
    Production,
}

impl RampEnvironment {
    pub fn host(&self) -> &'static str {
        match self {
            RampEnvironment::Staging => "https://global-stg.transak.com",
            RampEnvironment::Production => "https://global.transak.com",
        }
    }
}

/// A ready-to-open hosted checkout. The widget takes over from here; the
/// dashboard re-fetches balance and holdings once the view is dismissed.
#[derive(Clone, Debug, Getters, new)]
pub struct CheckoutSession {
    url: String,
    mode: TradeMode,
    amount: Decimal,
}

/// Hands validated trades off to the hosted on/off-ramp checkout. The widget
/// itself is external; this service only assembles its launch URL from the
/// session and the validated trade.
#[derive(Clone, Debug)]
pub struct RampService {
    api_key: String,
    environment: RampEnvironment,
}

impl RampService {
    pub fn new(api_key: String, environment: RampEnvironment) -> Self {
        Self {
            api_key,
            environment,
        }
    }

    pub fn checkout(
        &self,
        session: &Session,
        mode: TradeMode,
        amount: Decimal,
    ) -> Result<CheckoutSession, RampError> {
        if self.api_key.is_empty() {
            return Err(RampError::MissingApiKey);
        }

        let wallet = session
            .wallet_address()
            .as_deref()
            .filter(|w| !w.is_empty())
            .ok_or(RampError::MissingWalletAddress)?;

        let mut url =
            Url::parse(self.environment.host()).map_err(|err| RampError::Url(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("environment", &self.environment.to_string())
            .append_pair("walletAddress", wallet)
            .append_pair("fiatCurrency", "USD")
            .append_pair("fiatAmount", &amount.to_string())
            .append_pair("email", session.email())
            .append_pair("productsAvailed", &mode.to_string())
            .append_pair("defaultCryptoCurrency", "ETH")
            .append_pair("themeColor", "000000");

        Ok(CheckoutSession::new(url.into(), mode, amount))
    }
}
