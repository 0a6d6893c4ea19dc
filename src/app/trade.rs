use rust_decimal::Decimal;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum TradeMode {
    #[strum(to_string = "BUY")]
    Buy,
    #[strum(to_string = "SELL")]
    Sell,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    NoBalance,
    InvalidAmount,
    InsufficientBalance { available: Decimal },
}

impl RejectReason {
    pub fn message(&self) -> String {
        match self {
            RejectReason::NoBalance => {
                String::from("Insufficient balance. Fund your account before making a transaction.")
            }
            RejectReason::InvalidAmount => String::from("Please enter a valid amount."),
            RejectReason::InsufficientBalance { available } => {
                format!("You only have ${} available.", available.round_dp(2))
            }
        }
    }
}

/// Validation standing between a trade intent and the external checkout.
/// Linear and unpersisted: `Idle -> AmountPrompted -> Validated ->
/// WidgetOpened`, or a terminal `Rejected` for this attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum TradeGate {
    Idle,
    AmountPrompted { mode: TradeMode, input: String },
    Validated { mode: TradeMode, amount: Decimal },
    WidgetOpened { mode: TradeMode, amount: Decimal },
    Rejected(RejectReason),
}

impl TradeGate {
    /// A user with no cash at all is turned away before being prompted.
    pub fn begin(mode: TradeMode, cash: Decimal) -> Self {
        if cash <= Decimal::ZERO {
            TradeGate::Rejected(RejectReason::NoBalance)
        } else {
            TradeGate::AmountPrompted {
                mode,
                input: String::new(),
            }
        }
    }

    pub fn submit(self, cash: Decimal) -> Self {
        match self {
            TradeGate::AmountPrompted { mode, input } => match validate_amount(&input, cash) {
                Ok(amount) => TradeGate::Validated { mode, amount },
                Err(reason) => TradeGate::Rejected(reason),
            },
            other => other,
        }
    }

    pub fn open_widget(self) -> Self {
        match self {
            TradeGate::Validated { mode, amount } => TradeGate::WidgetOpened { mode, amount },
            other => other,
        }
    }
}

/// Currency formatting is tolerated: a leading `$` and thousands separators
/// are stripped before parsing, so "$1,000" reads as 1000.
pub fn validate_amount(input: &str, cash: Decimal) -> Result<Decimal, RejectReason> {
    let cleaned = input.trim().trim_start_matches('$').replace(',', "");
    let amount = cleaned
        .parse::<Decimal>()
        .map_err(|_| RejectReason::InvalidAmount)?;

    if amount <= Decimal::ZERO {
        return Err(RejectReason::InvalidAmount);
    }

    if amount > cash {
        return Err(RejectReason::InsufficientBalance { available: cash });
    }

    Ok(amount)
}
