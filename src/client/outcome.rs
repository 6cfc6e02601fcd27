/// Classified result of a single webhook exchange

use serde_json::Value;

/// What happened when the payload was posted
///
/// Every variant is a reported result, never a crash: the probe prints it and
/// the process still exits normally unless strict mode is on.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 200 with a JSON body
    Delivered { status: u16, body: Value },
    /// Any status other than 200; body kept verbatim
    Rejected { status: u16, text: String },
    /// 200 whose body is not valid JSON
    MalformedBody { status: u16, text: String, error: String },
    /// The request never produced a complete response
    ConnectionFailed { error: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Delivered { .. })
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Delivered { status, .. }
            | ProbeOutcome::Rejected { status, .. }
            | ProbeOutcome::MalformedBody { status, .. } => Some(*status),
            ProbeOutcome::ConnectionFailed { .. } => None,
        }
    }

    /// Process exit code for this outcome
    ///
    /// Reported failures exit 0 unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.is_success() {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reported_failures_exit_zero_by_default() {
        let outcomes = [
            ProbeOutcome::Delivered { status: 200, body: json!({"status": "ok"}) },
            ProbeOutcome::Rejected { status: 404, text: "not found".into() },
            ProbeOutcome::MalformedBody { status: 200, text: "<html>".into(), error: "expected value".into() },
            ProbeOutcome::ConnectionFailed { error: "connection refused".into() },
        ];
        for outcome in &outcomes {
            assert_eq!(outcome.exit_code(false), 0, "{:?}", outcome);
        }
    }

    #[test]
    fn strict_mode_fails_everything_but_delivery() {
        let delivered = ProbeOutcome::Delivered { status: 200, body: json!([]) };
        let rejected = ProbeOutcome::Rejected { status: 500, text: String::new() };
        let offline = ProbeOutcome::ConnectionFailed { error: "refused".into() };

        assert_eq!(delivered.exit_code(true), 0);
        assert_eq!(rejected.exit_code(true), 1);
        assert_eq!(offline.exit_code(true), 1);
        assert_eq!(rejected.status(), Some(500));
        assert_eq!(offline.status(), None);
    }
}
