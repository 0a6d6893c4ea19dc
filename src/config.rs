use std::{env, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use derive_getters::Getters;
use derive_new::new;
use dotenv::dotenv;
use std::str::FromStr;

use crate::services::RampEnvironment;

const DEFAULT_BASE_URL: &str = "https://brokers-backend-h2nt.onrender.com/api";

#[derive(Debug, Parser)]
#[command(name = "brokerage-dashboard-tui")]
#[command(about = "Terminal dashboard for a gold/crypto brokerage account")]
pub struct Cli {
    /// Brokerage backend base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Symbols to track on the price feed
    #[arg(long, value_delimiter = ',', default_value = "BTC,ETH,SOL")]
    pub symbols: Vec<String>,

    /// Price feed poll cadence in seconds
    #[arg(long, default_value_t = 15)]
    pub poll_interval_secs: u64,

    /// On/off-ramp environment (STAGING or PRODUCTION)
    #[arg(long, default_value = "STAGING", value_parser = parse_ramp_environment)]
    pub ramp_environment: RampEnvironment,
}

fn parse_ramp_environment(value: &str) -> Result<RampEnvironment, String> {
    RampEnvironment::from_str(value)
        .map_err(|_| format!("'{}' is not a ramp environment (STAGING or PRODUCTION)", value))
}

/// The authenticated user handed to every client explicitly. There is no
/// process-wide store; whoever needs the token gets a `Session`.
#[derive(Clone, Debug, Getters, new)]
pub struct Session {
    token: String,
    email: String,
    wallet_address: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub symbols: Vec<String>,
    pub poll_interval: Duration,
    pub ramp_api_key: String,
    pub ramp_environment: RampEnvironment,
    pub session: Session,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();
        let cli = Cli::parse();
        Self::from_cli(cli)
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let token =
            env::var("BROKER_AUTH_TOKEN").with_context(|| "Missing BROKER_AUTH_TOKEN in environment")?;
        let email = env::var("BROKER_USER_EMAIL").unwrap_or_default();
        let wallet_address = env::var("BROKER_WALLET_ADDRESS").ok().filter(|w| !w.is_empty());
        let ramp_api_key = env::var("RAMP_API_KEY").unwrap_or_default();

        Ok(Self {
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            symbols: cli.symbols,
            poll_interval: Duration::from_secs(cli.poll_interval_secs),
            ramp_api_key,
            ramp_environment: cli.ramp_environment,
            session: Session::new(token, email, wallet_address),
        })
    }
}
