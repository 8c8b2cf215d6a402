//! HTTP endpoint handlers

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use futures::{SinkExt, StreamExt};
use tracing::{error, info, warn};

use crate::state::{SessionManager, TimerRequest};

use super::responses::{ApiResponse, HealthResponse, StatusResponse};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Handle GET / - Serve the timer page
pub async fn home_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle POST /api/timer/start - Start a session, superseding any running one
pub async fn start_timer_handler(
    State(manager): State<SessionManager>,
    Json(request): Json<TimerRequest>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)> {
    match manager.start(request).await {
        Ok(()) => {
            info!("Start endpoint called - timer session launched");
            Ok(Json(ApiResponse::started()))
        }
        Err(e) => {
            warn!("Rejected start request: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::rejected(e.to_string())),
            ))
        }
    }
}

/// Handle POST /api/timer/stop - Stop the active session
///
/// Stopping an idle server is a no-op, the response is always an
/// acknowledgment.
pub async fn stop_timer_handler(State(manager): State<SessionManager>) -> Json<ApiResponse> {
    manager.stop().await;
    Json(ApiResponse::stopped())
}

/// Handle GET /status - Return the current session snapshot
pub async fn status_handler(State(manager): State<SessionManager>) -> Json<StatusResponse> {
    Json(StatusResponse {
        session: manager.snapshot().await,
        observers: manager.observer_count().await,
        uptime: manager.uptime(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handle GET /ws - Join as a live observer
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(manager): State<SessionManager>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| observer_loop(socket, manager))
}

/// Pump session updates to one connected socket until it closes.
///
/// The observer receives the current snapshot on join (when a session
/// exists) and every broadcast thereafter, in order. Any socket failure
/// ends the loop; the registry entry is removed either here or by the
/// next failed delivery, whichever comes first.
async fn observer_loop(socket: WebSocket, manager: SessionManager) {
    let (id, mut updates) = manager.attach_observer().await;
    let (mut sink, mut stream) = socket.split();
    info!(observer = id, "observer connected");

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(session) = update else { break };
                let payload = match serde_json::to_string(&session) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("Failed to serialize session snapshot: {}", e);
                        break;
                    }
                };
                if sink.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Pings are answered by axum; client chatter is ignored.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    manager.detach_observer(id).await;
    info!(observer = id, "observer disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use std::sync::Arc;

    struct Silent;

    impl Notifier for Silent {
        fn focus_complete(&self) {}
        fn break_complete(&self) {}
    }

    fn state() -> State<SessionManager> {
        State(SessionManager::new(Arc::new(Silent)))
    }

    fn request(focus: i64, breaks: i64, repeat: i64) -> TimerRequest {
        TimerRequest {
            focus_minutes: focus,
            break_minutes: breaks,
            repeat_count: repeat,
            continue_through_breaks: false,
        }
    }

    #[tokio::test]
    async fn start_accepts_a_valid_request() {
        let response = start_timer_handler(state(), Json(request(25, 5, 1))).await;

        let Json(body) = response.expect("valid request should be accepted");
        assert_eq!(body.status, "started");
    }

    #[tokio::test]
    async fn start_rejects_out_of_bounds_durations() {
        let response = start_timer_handler(state(), Json(request(0, 5, 1))).await;

        let (status, Json(body)) = response.expect_err("zero focus should be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, "rejected");
        assert!(body.message.contains("positive"));
    }

    #[tokio::test]
    async fn stop_acknowledges_even_when_idle() {
        let Json(body) = stop_timer_handler(state()).await;
        assert_eq!(body.status, "stopped");
    }

    #[tokio::test]
    async fn status_reports_no_session_on_a_fresh_server() {
        let Json(body) = status_handler(state()).await;
        assert!(body.session.is_none());
        assert_eq!(body.observers, 0);
    }
}
