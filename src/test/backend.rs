#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::api::backend_dto::{BalanceDto, CryptoOrderDto, InvestmentDto};
    use crate::api::coingecko_dto::CoinMarketDto;
    use crate::models::{OrderSide, OrderStatus};

    #[test]
    fn balance_dto_maps_to_account_balance() {
        let json = r#"{ "balance": 500.25, "totalProfit": 42.10, "pctChange": 1.8 }"#;
        let dto = serde_json::from_str::<BalanceDto>(json).unwrap();
        let balance = dto.to_balance();

        assert_eq!(*balance.balance(), dec!(500.25));
        assert_eq!(*balance.total_profit(), dec!(42.10));
        assert_eq!(*balance.pct_change(), dec!(1.8));
    }

    #[test]
    fn order_dto_maps_the_nested_ledger_entry() {
        let json = r#"{
            "id": "9f2c41d7",
            "details": { "cryptoCurrency": "BTC", "fiatCurrency": "USD" },
            "cryptoAmount": 0.0125,
            "amountPaid": 750.00,
            "isBuyOrSell": "BUY",
            "conversionPrice": 60000,
            "status": "PENDING",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;

        let dto = serde_json::from_str::<CryptoOrderDto>(json).unwrap();
        let order = dto.to_order();

        assert_eq!(order.symbol(), "BTC");
        assert_eq!(order.pair(), "BTC/USD");
        assert_eq!(*order.side(), OrderSide::Buy);
        assert_eq!(*order.status(), OrderStatus::Open);
        assert_eq!(*order.quantity(), dec!(0.0125));
        assert_eq!(order.signed_quantity(), dec!(0.0125));
        assert_eq!(order.short_id(), "BG-9f2");
        assert!(order.created_at().is_some());
    }

    #[test]
    fn order_dto_tolerates_missing_optional_fields() {
        let json = r#"{
            "details": { "cryptoCurrency": "ETH" },
            "cryptoAmount": 1.5,
            "isBuyOrSell": "SELL",
            "status": "COMPLETED"
        }"#;

        let dto = serde_json::from_str::<CryptoOrderDto>(json).unwrap();
        let order = dto.to_order();

        assert_eq!(order.pair(), "ETH/USD");
        assert_eq!(*order.side(), OrderSide::Sell);
        assert_eq!(*order.status(), OrderStatus::Completed);
        assert_eq!(order.signed_quantity(), dec!(-1.5));
        assert!(order.price().is_none());
        assert!(order.created_at().is_none());
    }

    #[test]
    fn investment_dto_labels_the_bar_by_weekday() {
        let json = r#"{ "amount": 1200, "createdAt": "2024-05-01T00:00:00Z" }"#;
        let dto = serde_json::from_str::<InvestmentDto>(json).unwrap();
        let nav = dto.to_nav().unwrap();

        assert_eq!(nav.label(), "Wed");
        assert_eq!(*nav.amount(), dec!(1200));
    }

    #[test]
    fn investment_dto_with_a_bad_timestamp_is_skipped() {
        let json = r#"{ "amount": 1200, "createdAt": "yesterday" }"#;
        let dto = serde_json::from_str::<InvestmentDto>(json).unwrap();

        assert!(dto.to_nav().is_none());
    }

    #[test]
    fn coin_market_dto_formats_the_insight_summary() {
        let json = r#"{
            "name": "Bitcoin",
            "symbol": "btc",
            "current_price": 60000,
            "price_change_percentage_24h": 1.234
        }"#;

        let dto = serde_json::from_str::<CoinMarketDto>(json).unwrap();
        let insight = dto.to_insight();

        assert_eq!(insight.title(), "Bitcoin (BTC) Market Update");
        assert_eq!(insight.summary(), "Price: $60000 | 24h Change: 1.23%");
        assert_eq!(insight.tags(), &vec![String::from("Market"), String::from("BTC")]);
    }
}
