//! Event dispatch
//!
//! Maps the data of dispatch payloads into typed events and hands them to
//! registered listeners.

mod dispatcher;
mod error;

pub use dispatcher::{DispatchOutcome, EventDispatcher};
pub use error::{GatewayError, GatewayResult};
