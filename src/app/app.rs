use std::{io, time::Duration};

use anyhow::{Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::{
    app::{
        dashboard::{AppEvent, Dashboard},
        trade::{TradeGate, TradeMode},
        ui,
    },
    config::Config,
    services::CheckoutSession,
};

const TICK_RATE: Duration = Duration::from_millis(250);

pub struct App {
    dashboard: Dashboard,
    rx: UnboundedReceiver<AppEvent>,
    table_state: TableState,
    trade: TradeGate,
    checkout: Option<CheckoutSession>,
    popup_message: Option<String>,
    error_popup: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            dashboard: Dashboard::new(config, tx),
            rx,
            table_state: TableState::default(),
            trade: TradeGate::Idle,
            checkout: None,
            popup_message: None,
            error_popup: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let poller = self.dashboard.start();
        let result = self.run_app(&mut terminal).await;
        poller.abort();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let mut applied = false;
            while let Ok(event) = self.rx.try_recv() {
                self.dashboard.apply_event(event);
                applied = true;
            }
            if applied {
                self.popup_message = None;
            }

            if self.dashboard.session_expired() {
                bail!("Session expired. Log in again to continue.");
            }

            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.dashboard,
                    &self.trade,
                    self.checkout.as_ref(),
                    &self.popup_message,
                    &self.error_popup,
                    &mut self.table_state,
                )
            })?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.error_popup.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.error_popup = None;
            }
            return;
        }

        match &mut self.trade {
            TradeGate::AmountPrompted { input, .. } => match code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Esc => self.trade = TradeGate::Idle,
                KeyCode::Enter => self.submit_trade(),
                _ => {}
            },
            TradeGate::Rejected(_) => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                    self.trade = TradeGate::Idle;
                }
            }
            TradeGate::WidgetOpened { .. } => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                    self.dismiss_checkout();
                }
            }
            _ => self.handle_idle_key(code),
        }
    }

    fn handle_idle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') => {
                self.trade = TradeGate::begin(TradeMode::Buy, self.dashboard.cash());
            }
            KeyCode::Char('s') => {
                self.trade = TradeGate::begin(TradeMode::Sell, self.dashboard.cash());
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.popup_message = Some(String::from("Refreshing account data..."));
                self.dashboard.clear_last_error();
                self.dashboard.refresh_all();
            }
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down => self.select_order(1),
            KeyCode::Up => self.select_order(-1),
            _ => {}
        }
    }

    fn submit_trade(&mut self) {
        let cash = self.dashboard.cash();
        let next = std::mem::replace(&mut self.trade, TradeGate::Idle).submit(cash);

        match next {
            TradeGate::Validated { mode, amount } => match self.dashboard.checkout(mode, amount) {
                Ok(session) => {
                    self.checkout = Some(session);
                    self.trade = TradeGate::Validated { mode, amount }.open_widget();
                }
                Err(err) => {
                    self.error_popup = Some(format!("Checkout unavailable: {}", err));
                    self.trade = TradeGate::Idle;
                }
            },
            other => self.trade = other,
        }
    }

    fn dismiss_checkout(&mut self) {
        self.checkout = None;
        self.trade = TradeGate::Idle;
        self.popup_message = Some(String::from("Refreshing balance and holdings..."));
        self.dashboard.reconcile_after_checkout();
    }

    fn select_order(&mut self, step: i64) {
        let orders = self.dashboard.orders();
        if orders.is_empty() {
            return;
        }

        let len = orders.len() as i64;
        let i = match self.table_state.selected() {
            Some(i) => (i as i64 + step).rem_euclid(len) as usize,
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}
