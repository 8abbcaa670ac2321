//! UI layer: HTTP routing and WebSocket session handling.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::{Server, ServerConfig, ServerError};
pub use state::AppState;
