#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Local;
    use reqwest::StatusCode;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    use crate::api::ApiError;
    use crate::app::dashboard::{AppEvent, Dashboard};
    use crate::config::{Config, Session};
    use crate::models::{
        AccountBalance, CryptoOrder, OrderSide, OrderStatus, PricePoint, PriceSnapshot,
    };
    use crate::services::RampEnvironment;

    fn dashboard() -> Dashboard {
        let (tx, _rx) = mpsc::unbounded_channel();
        let config = Config {
            base_url: String::from("http://localhost:7000/api"),
            symbols: vec![String::from("BTC")],
            poll_interval: Duration::from_secs(15),
            ramp_api_key: String::from("test-key"),
            ramp_environment: RampEnvironment::Staging,
            session: Session::new(
                String::from("token"),
                String::from("user@example.com"),
                Some(String::from("0xabc123")),
            ),
        };

        Dashboard::new(config, tx)
    }

    fn balance(amount: Decimal) -> AppEvent {
        AppEvent::Balance(Ok(AccountBalance::new(amount, dec!(0), dec!(0))))
    }

    fn btc_order(quantity: Decimal) -> CryptoOrder {
        CryptoOrder::new(
            String::from("9f2c41d7"),
            String::from("BTC/USD"),
            String::from("BTC"),
            OrderSide::Buy,
            quantity,
            dec!(750),
            None,
            OrderStatus::Completed,
            None,
        )
    }

    fn btc_prices(price: Decimal) -> AppEvent {
        AppEvent::Prices(PriceSnapshot::new(
            vec![PricePoint::new(String::from("BTC"), price, dec!(0.5))],
            Local::now(),
        ))
    }

    #[test]
    fn equity_waits_for_the_first_ledger_fetch() {
        let mut dashboard = dashboard();

        dashboard.apply_event(balance(dec!(500)));
        dashboard.apply_event(btc_prices(dec!(60000)));

        assert!(dashboard.equity().is_none());
    }

    #[test]
    fn equity_combines_cash_with_marked_holdings() {
        let mut dashboard = dashboard();

        dashboard.apply_event(balance(dec!(500)));
        dashboard.apply_event(AppEvent::Orders(Ok(vec![btc_order(dec!(0.01))])));
        dashboard.apply_event(btc_prices(dec!(60000)));

        let equity = dashboard.equity().unwrap();
        assert_eq!(*equity.total_equity(), dec!(1100.00));
    }

    #[test]
    fn failed_ledger_fetch_degrades_to_cash_only_equity() {
        let mut dashboard = dashboard();

        dashboard.apply_event(balance(dec!(500)));
        dashboard.apply_event(AppEvent::Orders(Err(ApiError::Status {
            endpoint: String::from("cryptoOrders"),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })));
        dashboard.apply_event(btc_prices(dec!(60000)));

        let equity = dashboard.equity().unwrap();
        assert_eq!(*equity.total_equity(), dec!(500));
        assert!(dashboard.last_error().is_some());
        assert!(!dashboard.session_expired());
    }

    #[test]
    fn auth_failure_flags_the_session() {
        let mut dashboard = dashboard();

        dashboard.apply_event(AppEvent::Balance(Err(ApiError::Auth)));

        assert!(dashboard.session_expired());
    }

    #[test]
    fn chart_history_is_bounded() {
        let mut dashboard = dashboard();

        for i in 0..40 {
            dashboard.apply_event(btc_prices(dec!(60000) + Decimal::from(i)));
        }

        assert_eq!(dashboard.history().len(), 30);
        assert_eq!(dashboard.history().latest(), Some(dec!(60039)));
    }

    #[test]
    fn ticker_strip_always_carries_the_gold_quote() {
        let dashboard = dashboard();

        let points = dashboard.ticker_points();

        assert!(points.iter().any(|point| point.symbol() == "XAU"));
    }
}
