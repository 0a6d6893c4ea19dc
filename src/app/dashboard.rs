use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tokio_stream::StreamExt;
use tracing::warn;

use crate::{
    api::{ApiError, BrokerageApi, binance, coingecko},
    app::{
        calc::{compute_equity, reduce_holdings},
        trade::TradeMode,
    },
    config::{Config, Session},
    models::{
        AccountBalance, CryptoOrder, EquitySnapshot, Holding, InvestmentNav, MarketInsight,
        PriceHistory, PricePoint, PriceSnapshot,
    },
    services::{CheckoutSession, RampError, RampService},
};

const HISTORY_WINDOW: usize = 30;
const CHART_SYMBOL: &str = "BTC";
const INSIGHT_COUNT: usize = 5;

// Spot gold entry on the ticker strip; none of the feeds carry it.
const GOLD_SYMBOL: &str = "XAU";
const GOLD_SPOT_PRICE: Decimal = dec!(2358);
const GOLD_SPOT_CHANGE: Decimal = dec!(0.3);

/// Results of the independently scheduled fetches, delivered to the shell's
/// event loop over one channel. Once the shell is gone the channel is closed
/// and late results are discarded, never applied.
pub enum AppEvent {
    Prices(PriceSnapshot),
    Balance(Result<AccountBalance, ApiError>),
    Orders(Result<Vec<CryptoOrder>, ApiError>),
    Insights(Result<Vec<MarketInsight>, ApiError>),
    Investments(Result<Vec<InvestmentNav>, ApiError>),
}

/// All dashboard state. Each slot is written only by applying its own fetch
/// result in the event loop, as an atomic replace.
pub struct Dashboard {
    backend: BrokerageApi,
    market_client: Client,
    ramp: RampService,
    session: Session,
    symbols: Vec<String>,
    poll_interval: Duration,
    tx: UnboundedSender<AppEvent>,

    balance: AccountBalance,
    holdings: Vec<Holding>,
    holdings_loaded: bool,
    orders: Vec<CryptoOrder>,
    prices: PriceSnapshot,
    history: PriceHistory,
    insights: Vec<MarketInsight>,
    investments: Vec<InvestmentNav>,
    equity: Option<EquitySnapshot>,
    last_error: Option<String>,
    session_expired: bool,
}

impl Dashboard {
    pub fn new(config: Config, tx: UnboundedSender<AppEvent>) -> Self {
        let client = Client::new();
        let backend = BrokerageApi::new(client.clone(), config.base_url, config.session.clone());
        let ramp = RampService::new(config.ramp_api_key, config.ramp_environment);

        Self {
            backend,
            market_client: client,
            ramp,
            session: config.session,
            symbols: config.symbols,
            poll_interval: config.poll_interval,
            tx,
            balance: AccountBalance::default(),
            holdings: Vec::new(),
            holdings_loaded: false,
            orders: Vec::new(),
            prices: PriceSnapshot::empty(),
            history: PriceHistory::with_capacity(HISTORY_WINDOW),
            insights: Vec::new(),
            investments: Vec::new(),
            equity: None,
            last_error: None,
            session_expired: false,
        }
    }

    /// Kick off the initial fetches and the price feed. The returned handle
    /// must be aborted when the shell exits so polling stops with it.
    pub fn start(&self) -> JoinHandle<()> {
        self.refresh_all();
        self.spawn_insights_refresh();

        let stream = binance::price_stream(
            self.market_client.clone(),
            self.symbols.clone(),
            self.poll_interval,
        );
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::pin!(stream);
            while let Some(snapshot) = stream.next().await {
                if tx.send(AppEvent::Prices(snapshot)).is_err() {
                    break;
                }
            }
        })
    }

    pub fn refresh_all(&self) {
        self.spawn_balance_refresh();
        self.spawn_orders_refresh();
        self.spawn_investments_refresh();
    }

    /// The checkout outcome is not observable from here, so both slots the
    /// trade could have moved are re-fetched from the backend.
    pub fn reconcile_after_checkout(&self) {
        self.spawn_balance_refresh();
        self.spawn_orders_refresh();
    }

    fn spawn_balance_refresh(&self) {
        let api = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Balance(api.account_balance().await));
        });
    }

    fn spawn_orders_refresh(&self) {
        let api = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Orders(api.crypto_orders().await));
        });
    }

    fn spawn_investments_refresh(&self) {
        let api = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Investments(api.my_investments().await));
        });
    }

    fn spawn_insights_refresh(&self) {
        let client = self.market_client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = coingecko::market_insights(&client, "usd", INSIGHT_COUNT).await;
            let _ = tx.send(AppEvent::Insights(result));
        });
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Prices(snapshot) => {
                if let Some(price) = snapshot.price_for(CHART_SYMBOL) {
                    self.history.push(price);
                }
                self.prices = snapshot;
                self.recompute_equity();
            }
            AppEvent::Balance(Ok(balance)) => {
                self.balance = balance;
                self.recompute_equity();
            }
            AppEvent::Balance(Err(err)) => self.handle_api_error("balance", err),
            AppEvent::Orders(Ok(orders)) => {
                self.holdings = reduce_holdings(&orders);
                self.orders = orders;
                self.holdings_loaded = true;
                self.recompute_equity();
            }
            AppEvent::Orders(Err(err)) => {
                // Prior holdings, if any, stay on screen. The aggregator may
                // now run; with nothing loaded it degrades to cash-only.
                self.holdings_loaded = true;
                self.handle_api_error("orders", err);
            }
            AppEvent::Insights(Ok(insights)) => self.insights = insights,
            AppEvent::Insights(Err(err)) => self.handle_api_error("insights", err),
            AppEvent::Investments(Ok(investments)) => self.investments = investments,
            AppEvent::Investments(Err(err)) => self.handle_api_error("investments", err),
        }
    }

    /// Never runs before the first ledger fetch completes; an equity figure
    /// computed from a half-loaded ledger would silently understate assets.
    fn recompute_equity(&mut self) {
        if !self.holdings_loaded {
            return;
        }

        let previous = self.equity.map(|snapshot| *snapshot.total_equity());
        self.equity = Some(compute_equity(
            self.cash(),
            &self.holdings,
            &self.prices,
            previous,
        ));
    }

    fn handle_api_error(&mut self, source: &str, err: ApiError) {
        if err.is_auth() {
            self.session_expired = true;
            return;
        }
        warn!("{} fetch failed: {}", source, err);
        self.last_error = Some(format!("{}: {}", source, err));
    }

    pub fn checkout(
        &self,
        mode: TradeMode,
        amount: Decimal,
    ) -> Result<CheckoutSession, RampError> {
        self.ramp.checkout(&self.session, mode, amount)
    }

    pub fn cash(&self) -> Decimal {
        *self.balance.balance()
    }

    pub fn balance(&self) -> &AccountBalance {
        &self.balance
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn orders(&self) -> &[CryptoOrder] {
        &self.orders
    }

    pub fn prices(&self) -> &PriceSnapshot {
        &self.prices
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn chart_symbol(&self) -> &'static str {
        CHART_SYMBOL
    }

    pub fn insights(&self) -> &[MarketInsight] {
        &self.insights
    }

    pub fn investments(&self) -> &[InvestmentNav] {
        &self.investments
    }

    pub fn equity(&self) -> Option<&EquitySnapshot> {
        self.equity.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    pub fn session_expired(&self) -> bool {
        self.session_expired
    }

    /// Strip entries: the tracked symbols plus the static gold quote.
    pub fn ticker_points(&self) -> Vec<PricePoint> {
        let mut points = self.prices.points().clone();
        points.push(PricePoint::new(
            GOLD_SYMBOL.to_string(),
            GOLD_SPOT_PRICE,
            GOLD_SPOT_CHANGE,
        ));
        points
    }
}
