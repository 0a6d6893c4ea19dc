pub mod ramp;

pub use ramp::{CheckoutSession, RampEnvironment, RampError, RampService};
