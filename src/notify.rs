//! Phase-completion notifications

use std::io::{self, Write};

use tracing::info;

/// One-way notifications fired when a phase finishes.
///
/// Implementations must be non-blocking and must never propagate a failure
/// back into the caller; the timer engine invokes these fire-and-forget
/// between phases.
pub trait Notifier: Send + Sync {
    fn focus_complete(&self);
    fn break_complete(&self);
}

/// Rings the terminal bell and logs the transition.
pub struct TerminalBell;

impl TerminalBell {
    fn ring(times: usize) {
        let mut stdout = io::stdout();
        for _ in 0..times {
            let _ = stdout.write_all(b"\x07");
        }
        let _ = stdout.flush();
    }
}

impl Notifier for TerminalBell {
    fn focus_complete(&self) {
        Self::ring(1);
        info!("focus period complete");
    }

    fn break_complete(&self) {
        Self::ring(2);
        info!("break period complete");
    }
}
