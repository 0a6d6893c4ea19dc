#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::trade::TradeMode;
    use crate::config::Session;
    use crate::services::{RampEnvironment, RampError, RampService};

    fn session_with_wallet() -> Session {
        Session::new(
            String::from("token"),
            String::from("user@example.com"),
            Some(String::from("0xabc123")),
        )
    }

    #[test]
    fn checkout_url_carries_the_validated_trade() {
        let service = RampService::new(String::from("test-key"), RampEnvironment::Staging);
        let session = session_with_wallet();

        let checkout = service
            .checkout(&session, TradeMode::Buy, dec!(125.50))
            .unwrap();

        assert!(checkout.url().starts_with("https://global-stg.transak.com/?"));
        assert!(checkout.url().contains("apiKey=test-key"));
        assert!(checkout.url().contains("walletAddress=0xabc123"));
        assert!(checkout.url().contains("fiatAmount=125.50"));
        assert!(checkout.url().contains("email=user%40example.com"));
        assert!(checkout.url().contains("productsAvailed=BUY"));
        assert_eq!(*checkout.amount(), dec!(125.50));
    }

    #[test]
    fn production_checkout_uses_the_live_host() {
        let service = RampService::new(String::from("test-key"), RampEnvironment::Production);
        let session = session_with_wallet();

        let checkout = service
            .checkout(&session, TradeMode::Sell, dec!(50))
            .unwrap();

        assert!(checkout.url().starts_with("https://global.transak.com/?"));
        assert!(checkout.url().contains("productsAvailed=SELL"));
    }

    #[test]
    fn missing_wallet_address_blocks_the_checkout() {
        let service = RampService::new(String::from("test-key"), RampEnvironment::Staging);
        let session = Session::new(String::from("token"), String::from("user@example.com"), None);

        let result = service.checkout(&session, TradeMode::Buy, dec!(100));

        assert!(matches!(result, Err(RampError::MissingWalletAddress)));
    }

    #[test]
    fn missing_api_key_blocks_the_checkout() {
        let service = RampService::new(String::new(), RampEnvironment::Staging);
        let session = session_with_wallet();

        let result = service.checkout(&session, TradeMode::Buy, dec!(100));

        assert!(matches!(result, Err(RampError::MissingApiKey)));
    }
}
