//! Timer session data types

use serde::{Deserialize, Serialize};

/// Phase of a running timer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
    Completed,
}

/// Snapshot of the one in-progress timer session.
///
/// Exactly one instance exists process-wide while a countdown is running.
/// The timer engine is the only writer; everyone else receives clones.
/// `duration` and `remaining` are both in seconds, so
/// `0 <= remaining <= duration` holds for every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    pub active: bool,
    pub phase: Phase,
    /// Configured length of the current phase, in seconds.
    pub duration: u32,
    /// Seconds left in the current phase.
    pub remaining: u32,
    /// Total focus/break cycles requested.
    pub repeat_count: u32,
    /// Cycle currently running, starting at 1.
    pub current_cycle: u32,
}

impl TimerSession {
    /// Session state at the start of a phase.
    pub fn starting(phase: Phase, duration: u32, repeat_count: u32, current_cycle: u32) -> Self {
        Self {
            active: true,
            phase,
            duration,
            remaining: duration,
            repeat_count,
            current_cycle,
        }
    }
}

/// A request to start a new timer session.
///
/// Durations are in minutes and validated before a session is created, so
/// signed fields are accepted here and bounds-checked rather than rejected
/// at the deserialization layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRequest {
    pub focus_minutes: i64,
    pub break_minutes: i64,
    pub repeat_count: i64,
    #[serde(default)]
    pub continue_through_breaks: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_serializes_with_camel_case_fields() {
        let session = TimerSession::starting(Phase::Focus, 1500, 4, 1);
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["active"], true);
        assert_eq!(value["phase"], "focus");
        assert_eq!(value["duration"], 1500);
        assert_eq!(value["remaining"], 1500);
        assert_eq!(value["repeatCount"], 4);
        assert_eq!(value["currentCycle"], 1);
    }

    #[test]
    fn phase_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"break\"");
        assert_eq!(
            serde_json::to_string(&Phase::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn request_defaults_continue_through_breaks_to_false() {
        let request: TimerRequest =
            serde_json::from_str(r#"{"focusMinutes":25,"breakMinutes":5,"repeatCount":2}"#)
                .unwrap();

        assert_eq!(request.focus_minutes, 25);
        assert_eq!(request.break_minutes, 5);
        assert_eq!(request.repeat_count, 2);
        assert!(!request.continue_through_breaks);
    }
}
