//! Composer interaction rules
//!
//! The send/stop state machine is small but easy to get subtly wrong
//! (whitespace-only sends, double submits while a turn is in flight,
//! IME Enter presses). The decision points live here as pure functions
//! so they are testable without a UI.

/// Whether a submit is allowed right now.
///
/// Requires non-empty input after trimming and no in-flight send or
/// running assistant turn.
pub fn can_submit(input: &str, sending: bool, running: bool) -> bool {
    !input.trim().is_empty() && !sending && !running
}

/// Whether an Enter keypress should submit.
///
/// Shift+Enter inserts a newline, and Enter during IME composition
/// confirms the composed text instead of sending (intermediate Enter
/// presses are part of CJK input methods).
pub fn enter_submits(shift: bool, composing: bool) -> bool {
    !shift && !composing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_blocks_submit() {
        assert!(!can_submit("", false, false));
        assert!(!can_submit("   \n\t", false, false));
    }

    #[test]
    fn test_in_flight_flags_block_submit() {
        assert!(!can_submit("hello", true, false));
        assert!(!can_submit("hello", false, true));
        assert!(!can_submit("hello", true, true));
    }

    #[test]
    fn test_plain_text_submits() {
        assert!(can_submit("hello", false, false));
        assert!(can_submit("  hello  ", false, false));
    }

    #[test]
    fn test_enter_submits_truth_table() {
        assert!(enter_submits(false, false));
        assert!(!enter_submits(true, false));
        assert!(!enter_submits(false, true));
        assert!(!enter_submits(true, true));
    }
}
