//! Rustodoro - a Pomodoro timer
//!
//! Runs either as a plain console countdown or, with `--web`, as a local
//! HTTP server whose session manager drives a cancellable cyclic countdown
//! and pushes live state to any number of WebSocket observers.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod notify;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::SessionError;
pub use notify::{Notifier, TerminalBell};
pub use state::{Phase, SessionManager, TimerRequest, TimerSession};
pub use utils::signals::shutdown_signal;
