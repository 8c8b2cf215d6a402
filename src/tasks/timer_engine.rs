//! Timer engine background task

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tracing::debug;

use crate::state::manager::{RunId, SessionManager};
use crate::state::session::{Phase, TimerRequest};

/// One engine run: the cyclic focus/break countdown behind a session.
///
/// Spawned by [`SessionManager::start`] as an independent task. The run
/// owns session mutation only while `run_id` is the current generation;
/// the moment a new start or a stop bumps the generation, every mutation
/// attempt fails and the task winds down without touching the session
/// again. Cancellation is detected within at most one tick.
pub async fn timer_engine_task(manager: SessionManager, request: TimerRequest, run_id: RunId) {
    let mut cancelled = manager.subscribe_run();
    let focus_seconds = request.focus_minutes as u32 * 60;
    let break_seconds = request.break_minutes as u32 * 60;
    let repeat_count = request.repeat_count as u32;

    for cycle in 1..=repeat_count {
        if !manager
            .begin_phase(run_id, Phase::Focus, focus_seconds, repeat_count, cycle)
            .await
        {
            return;
        }
        manager.broadcast().await;
        if !run_countdown(&manager, run_id, focus_seconds, &mut cancelled).await {
            return;
        }
        manager.notifier().focus_complete();

        if cycle < repeat_count || request.continue_through_breaks {
            if !manager
                .begin_phase(run_id, Phase::Break, break_seconds, repeat_count, cycle)
                .await
            {
                return;
            }
            manager.broadcast().await;
            if !run_countdown(&manager, run_id, break_seconds, &mut cancelled).await {
                return;
            }
            manager.notifier().break_complete();
        }
    }

    if manager.complete(run_id).await {
        manager.broadcast().await;
    }
}

/// Count one phase down to zero, broadcasting after every decrement.
///
/// Suspends up to one second per tick, racing the tick against the
/// cancellation signal; whichever fires first wins. Returns false as soon
/// as the run is superseded, before any further mutation.
async fn run_countdown(
    manager: &SessionManager,
    run_id: RunId,
    duration: u32,
    cancelled: &mut watch::Receiver<RunId>,
) -> bool {
    let mut ticker = interval(Duration::from_secs(1));
    // The first tick of a fresh interval completes immediately; consume it
    // so each loop iteration below waits a full second.
    ticker.tick().await;

    let mut remaining = duration;
    while remaining > 0 {
        if !manager.is_current(run_id) {
            debug!(run = run_id, "run superseded, abandoning countdown");
            return false;
        }
        tokio::select! {
            _ = ticker.tick() => {}
            _ = cancelled.changed() => {
                debug!(run = run_id, "cancellation signalled mid-tick");
                return false;
            }
        }
        remaining -= 1;
        if !manager.record_tick(run_id, remaining).await {
            return false;
        }
        manager.broadcast().await;
    }

    manager.is_current(run_id)
}
