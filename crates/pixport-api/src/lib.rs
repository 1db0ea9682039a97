//! HTTP surface of the conversion service: state, routes, handlers,
//! error-to-response mapping, and server lifecycle.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use state::AppState;
