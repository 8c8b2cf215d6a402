//! Session manager: control surface and broadcaster for the web timer

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, watch, RwLock};
use tracing::info;

use crate::error::SessionError;
use crate::notify::Notifier;
use crate::tasks::timer_engine_task;

use super::registry::{ObserverId, ObserverRegistry};
use super::session::{Phase, TimerRequest, TimerSession};
use super::validate::validate_durations;

/// Generation number identifying one timer engine run.
pub type RunId = u64;

/// Owns the single timer session, the observer registry and the
/// cancellation signal for the running engine.
///
/// Cheap to clone; every clone is a handle to the same state. Supersession
/// works by generation: each engine run captures its [`RunId`] at start and
/// every mutation re-checks that id while holding the session write lock,
/// so once `start` or `stop` bumps the generation, the superseded run can
/// never touch the session again. A watch channel carries the current
/// generation so a run sleeping between ticks observes the bump without
/// polling.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<ManagerInner>,
}

struct ManagerInner {
    session: RwLock<Option<TimerSession>>,
    registry: ObserverRegistry,
    notifier: Arc<dyn Notifier>,
    run_counter: AtomicU64,
    run_tx: watch::Sender<RunId>,
    started_at: Instant,
}

impl SessionManager {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        let (run_tx, _) = watch::channel(0);
        Self {
            inner: Arc::new(ManagerInner {
                session: RwLock::new(None),
                registry: ObserverRegistry::new(),
                notifier,
                run_counter: AtomicU64::new(0),
                run_tx,
                started_at: Instant::now(),
            }),
        }
    }

    /// Start a new timer session, superseding any running one.
    ///
    /// Validates the request first; on failure nothing is mutated. On
    /// success the current engine run (if any) is cancelled, a fresh run is
    /// spawned as an independent background task, and acceptance is
    /// reported immediately without waiting for the run.
    pub async fn start(&self, request: TimerRequest) -> Result<(), SessionError> {
        validate_durations(
            request.focus_minutes,
            request.break_minutes,
            request.repeat_count,
        )?;

        let run_id = {
            let _session = self.inner.session.write().await;
            self.bump_run()
        };
        info!(
            run = run_id,
            focus = request.focus_minutes,
            breaks = request.break_minutes,
            repeat = request.repeat_count,
            "starting timer session"
        );
        tokio::spawn(timer_engine_task(self.clone(), request, run_id));
        Ok(())
    }

    /// Stop the active session, if there is one.
    ///
    /// Always succeeds; stopping an idle manager is a no-op. No broadcast
    /// follows the stop, the session is simply marked inactive and the
    /// engine abandons its run at the next tick boundary.
    pub async fn stop(&self) {
        let mut session = self.inner.session.write().await;
        self.bump_run();
        if let Some(session) = session.as_mut() {
            if session.active {
                session.active = false;
                info!("timer session stopped");
            }
        }
    }

    /// Current session snapshot, if any session has been started.
    pub async fn snapshot(&self) -> Option<TimerSession> {
        self.inner.session.read().await.clone()
    }

    /// Register a new observer and hand back its update stream.
    ///
    /// A joiner immediately receives the current session snapshot when one
    /// exists, ahead of any subsequent broadcasts, so late joiners see
    /// current progress rather than waiting for the next tick.
    pub async fn attach_observer(
        &self,
    ) -> (ObserverId, mpsc::UnboundedReceiver<TimerSession>) {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(snapshot) = self.snapshot().await {
            let _ = tx.send(snapshot);
        }
        let id = self.inner.registry.register(tx).await;
        (id, rx)
    }

    /// Drop an observer. Safe to call after it was already removed by a
    /// failed delivery.
    pub async fn detach_observer(&self, id: ObserverId) {
        self.inner.registry.unregister(id).await;
    }

    pub async fn observer_count(&self) -> usize {
        self.inner.registry.len().await
    }

    /// Push the current session snapshot to every observer.
    ///
    /// The session lock is released before the registry is touched; the
    /// two are never held together.
    pub async fn broadcast(&self) {
        let snapshot = self.snapshot().await;
        if let Some(session) = snapshot {
            self.inner.registry.broadcast(&session).await;
        }
    }

    /// Server uptime as a short human-readable string.
    pub fn uptime(&self) -> String {
        let secs = self.inner.started_at.elapsed().as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{hours}h {minutes}m {seconds}s")
        } else if minutes > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{seconds}s")
        }
    }

    fn bump_run(&self) -> RunId {
        let id = self.inner.run_counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.run_tx.send_replace(id);
        id
    }

    pub(crate) fn subscribe_run(&self) -> watch::Receiver<RunId> {
        self.inner.run_tx.subscribe()
    }

    pub(crate) fn is_current(&self, run_id: RunId) -> bool {
        *self.inner.run_tx.borrow() == run_id
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.inner.notifier.as_ref()
    }

    /// Enter a phase: replace the session with a fresh full-phase state.
    ///
    /// Returns false without mutating when `run_id` has been superseded.
    pub(crate) async fn begin_phase(
        &self,
        run_id: RunId,
        phase: Phase,
        duration: u32,
        repeat_count: u32,
        current_cycle: u32,
    ) -> bool {
        let mut session = self.inner.session.write().await;
        if !self.is_current(run_id) {
            return false;
        }
        *session = Some(TimerSession::starting(
            phase,
            duration,
            repeat_count,
            current_cycle,
        ));
        true
    }

    /// Record one tick's decrement. Returns false without mutating when
    /// `run_id` has been superseded.
    pub(crate) async fn record_tick(&self, run_id: RunId, remaining: u32) -> bool {
        let mut session = self.inner.session.write().await;
        if !self.is_current(run_id) {
            return false;
        }
        if let Some(session) = session.as_mut() {
            session.remaining = remaining;
        }
        true
    }

    /// Move the session to its terminal state. Returns false without
    /// mutating when `run_id` has been superseded.
    pub(crate) async fn complete(&self, run_id: RunId) -> bool {
        let mut session = self.inner.session.write().await;
        if !self.is_current(run_id) {
            return false;
        }
        if let Some(session) = session.as_mut() {
            session.active = false;
            session.phase = Phase::Completed;
            session.remaining = 0;
        }
        info!(run = run_id, "timer session completed");
        true
    }
}
