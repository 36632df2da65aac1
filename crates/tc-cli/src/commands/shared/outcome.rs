use serde::Serialize;
use tc_review::Outcome;

/// Result line printed after a state-changing command.
#[derive(Debug, Serialize)]
pub struct ActionReport {
    pub action: &'static str,
    pub ids: Vec<String>,
    pub outcome: &'static str,
}

impl ActionReport {
    pub fn new(action: &'static str, ids: Vec<String>, outcome: Outcome) -> Self {
        Self {
            action,
            ids,
            outcome: outcome_name(outcome),
        }
    }
}

pub const fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Done => "done",
        Outcome::NothingToDo => "nothing_to_do",
        Outcome::Cancelled => "cancelled",
        Outcome::Failed => "failed",
    }
}

/// A failed outcome has already been reported as a notice; turn it into a
/// non-zero exit.
pub fn ensure_not_failed(outcome: Outcome, action: &str) -> anyhow::Result<()> {
    if outcome == Outcome::Failed {
        anyhow::bail!("{action} failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tc_review::Outcome;

    use super::{ActionReport, ensure_not_failed};

    #[test]
    fn only_failed_outcomes_are_errors() {
        assert!(ensure_not_failed(Outcome::Done, "approve").is_ok());
        assert!(ensure_not_failed(Outcome::Cancelled, "approve").is_ok());
        assert!(ensure_not_failed(Outcome::NothingToDo, "approve").is_ok());
        let err = ensure_not_failed(Outcome::Failed, "approve").expect_err("should fail");
        assert_eq!(err.to_string(), "approve failed");
    }

    #[test]
    fn report_serializes_outcome_name() {
        let report = ActionReport::new("bulk read", vec!["a".into()], Outcome::NothingToDo);
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["outcome"], "nothing_to_do");
        assert_eq!(value["ids"][0], "a");
    }
}
