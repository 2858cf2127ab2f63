/// Asserts the controller is in the given phase.
#[macro_export]
macro_rules! assert_phase {
    ($ctl:expr, $phase:expr) => {
        assert_eq!($ctl.phase(), $phase, "Run phase mismatch");
    };
}

/// Asserts an `attempt_move` result was rejected by the given rule.
#[macro_export]
macro_rules! assert_rejected_by {
    ($verdict:expr, $rule:expr) => {
        let verdict = $verdict.expect("Move was ignored, run not in progress");
        let rejection = verdict
            .rejection()
            .unwrap_or_else(|| panic!("Move was accepted, expected rejection by {}", $rule));
        assert_eq!(rejection.id, $rule, "Rejected by the wrong rule");
    };
}

/// Asserts an `attempt_move` result was accepted.
#[macro_export]
macro_rules! assert_accepted {
    ($verdict:expr) => {
        let verdict = $verdict.expect("Move was ignored, run not in progress");
        assert!(
            verdict.is_accept(),
            "Move was rejected: {:?}",
            verdict.rejection()
        );
    };
}
