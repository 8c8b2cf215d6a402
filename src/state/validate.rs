//! Duration validation for timer requests

use crate::error::SessionError;

/// Longest focus or break phase accepted, in minutes.
pub const MAX_PHASE_MINUTES: i64 = 60;

/// Check requested focus/break/repeat values against the domain limits.
///
/// Pure and total over integers; no state is touched. Every rule must hold
/// or the request fails with an [`SessionError::InvalidDuration`] carrying
/// a human-readable reason.
pub fn validate_durations(
    focus_minutes: i64,
    break_minutes: i64,
    repeat_count: i64,
) -> Result<(), SessionError> {
    if focus_minutes <= 0 || break_minutes <= 0 {
        return Err(SessionError::InvalidDuration(
            "focus and break durations must be positive integers".to_string(),
        ));
    }
    if focus_minutes > MAX_PHASE_MINUTES || break_minutes > MAX_PHASE_MINUTES {
        return Err(SessionError::InvalidDuration(format!(
            "focus and break durations must not exceed {MAX_PHASE_MINUTES} minutes"
        )));
    }
    if repeat_count <= 0 {
        return Err(SessionError::InvalidDuration(
            "repeat count must be a positive integer".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        let cases = [
            (25, 5, 2, true),
            (1, 1, 1, true),
            (60, 60, 1, true),
            (0, 5, 1, false),
            (-1, 5, 0, false),
            (25, 0, -1, false),
            (25, -5, 10, false),
            (61, 5, 1, false),
            (25, 61, 10, false),
            (25, 5, 0, false),
        ];

        for (focus, break_minutes, repeat, ok) in cases {
            let result = validate_durations(focus, break_minutes, repeat);
            assert_eq!(
                result.is_ok(),
                ok,
                "focus={focus} break={break_minutes} repeat={repeat}: {result:?}"
            );
        }
    }

    #[test]
    fn rejection_names_the_offending_rule() {
        let err = validate_durations(0, 5, 1).unwrap_err();
        assert!(err.to_string().contains("positive"));

        let err = validate_durations(25, 61, 1).unwrap_err();
        assert!(err.to_string().contains("60 minutes"));

        let err = validate_durations(25, 5, -3).unwrap_err();
        assert!(err.to_string().contains("repeat count"));
    }
}
