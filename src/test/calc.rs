#[cfg(test)]
mod tests {
    use chrono::Local;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app::calc::{compute_equity, reduce_holdings};
    use crate::models::{CryptoOrder, Holding, OrderSide, OrderStatus, PricePoint, PriceSnapshot};

    fn order(symbol: &str, side: OrderSide, quantity: Decimal) -> CryptoOrder {
        CryptoOrder::new(
            String::from("abc123"),
            format!("{}/USD", symbol),
            symbol.to_string(),
            side,
            quantity,
            dec!(100),
            None,
            OrderStatus::Completed,
            None,
        )
    }

    fn snapshot(points: Vec<PricePoint>) -> PriceSnapshot {
        PriceSnapshot::new(points, Local::now())
    }

    #[test]
    fn holdings_sum_across_orders_of_the_same_symbol() {
        let orders = vec![
            order("BTC", OrderSide::Buy, dec!(0.5)),
            order("BTC", OrderSide::Buy, dec!(0.25)),
            order("ETH", OrderSide::Buy, dec!(2)),
        ];

        let holdings = reduce_holdings(&orders);

        assert_eq!(
            holdings,
            vec![
                Holding::new(String::from("BTC"), dec!(0.75)),
                Holding::new(String::from("ETH"), dec!(2)),
            ]
        );
    }

    #[test]
    fn sells_subtract_from_holdings() {
        let orders = vec![
            order("BTC", OrderSide::Buy, dec!(1)),
            order("BTC", OrderSide::Sell, dec!(0.4)),
        ];

        let holdings = reduce_holdings(&orders);

        assert_eq!(holdings, vec![Holding::new(String::from("BTC"), dec!(0.6))]);
    }

    #[test]
    fn fully_sold_symbols_are_dropped() {
        let orders = vec![
            order("BTC", OrderSide::Buy, dec!(1)),
            order("BTC", OrderSide::Sell, dec!(1)),
            order("SOL", OrderSide::Sell, dec!(3)),
        ];

        assert!(reduce_holdings(&orders).is_empty());
    }

    #[test]
    fn equity_with_no_holdings_equals_cash() {
        let result = compute_equity(dec!(500), &[], &snapshot(Vec::new()), None);

        assert_eq!(*result.total_equity(), dec!(500));
    }

    #[test]
    fn equity_marks_holdings_to_live_prices() {
        let holdings = vec![Holding::new(String::from("BTC"), dec!(0.01))];
        let prices = snapshot(vec![PricePoint::new(
            String::from("BTC"),
            dec!(60000),
            dec!(1.2),
        )]);

        let result = compute_equity(dec!(500), &holdings, &prices, None);

        assert_eq!(*result.total_equity(), dec!(1100.00));
    }

    #[test]
    fn holding_without_a_live_price_contributes_nothing() {
        let holdings = vec![
            Holding::new(String::from("BTC"), dec!(0.01)),
            Holding::new(String::from("SOL"), dec!(10)),
        ];
        let prices = snapshot(vec![PricePoint::new(
            String::from("BTC"),
            dec!(60000),
            dec!(1.2),
        )]);

        let result = compute_equity(dec!(500), &holdings, &prices, None);

        assert_eq!(*result.total_equity(), dec!(1100.00));
    }

    #[test]
    fn first_computation_reports_zero_percent_change() {
        let result = compute_equity(dec!(500), &[], &snapshot(Vec::new()), None);

        assert_eq!(*result.percent_change(), Decimal::ZERO);
    }

    #[test]
    fn percent_change_is_measured_against_the_previous_snapshot() {
        let result = compute_equity(dec!(1100), &[], &snapshot(Vec::new()), Some(dec!(1000)));

        assert_eq!(*result.percent_change(), dec!(10.00));
        assert!(result.is_gain());
    }

    #[test]
    fn zero_previous_equity_does_not_divide() {
        let result = compute_equity(dec!(500), &[], &snapshot(Vec::new()), Some(Decimal::ZERO));

        assert_eq!(*result.percent_change(), Decimal::ZERO);
    }

    #[test]
    fn equity_never_falls_below_cash_for_complete_prices() {
        let holdings = vec![
            Holding::new(String::from("BTC"), dec!(0.2)),
            Holding::new(String::from("ETH"), dec!(1.5)),
        ];
        let prices = snapshot(vec![
            PricePoint::new(String::from("BTC"), dec!(60000), dec!(-2.1)),
            PricePoint::new(String::from("ETH"), dec!(3800), dec!(0.4)),
        ]);

        let cash = dec!(250);
        let result = compute_equity(cash, &holdings, &prices, None);

        assert!(*result.total_equity() >= cash);
    }
}
