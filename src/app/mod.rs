pub mod app;
pub mod calc;
pub mod dashboard;
pub mod trade;
pub mod ui;

pub use app::App;
pub use dashboard::{AppEvent, Dashboard};
pub use trade::{TradeGate, TradeMode};
