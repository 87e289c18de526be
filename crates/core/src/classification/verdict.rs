use serde::Serialize;

/// The two-valued engagement label.
///
/// Deliberately coarse: any detected face counts as `Engaged`. This is a
/// presence heuristic, not an emotion classifier.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmotionLabel {
    Engaged,
    Neutral,
}

/// The single JSON object written to stdout.
///
/// `error` is present only on the hard-failure path and is diagnostic
/// text, not a stable contract.
#[derive(Serialize, Debug)]
pub struct Verdict {
    pub emotion: EmotionLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    pub fn engaged() -> Self {
        Self {
            emotion: EmotionLabel::Engaged,
            error: None,
        }
    }

    pub fn neutral() -> Self {
        Self {
            emotion: EmotionLabel::Neutral,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            emotion: EmotionLabel::Neutral,
            error: Some(message.into()),
        }
    }

    /// Compact single-line JSON for stdout.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"emotion":"Neutral"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engaged_serializes_compact() {
        assert_eq!(Verdict::engaged().to_json(), r#"{"emotion":"Engaged"}"#);
    }

    #[test]
    fn test_neutral_omits_error_key() {
        assert_eq!(Verdict::neutral().to_json(), r#"{"emotion":"Neutral"}"#);
    }

    #[test]
    fn test_failure_includes_error_key() {
        let json = Verdict::failure("bad frame").to_json();
        assert_eq!(json, r#"{"emotion":"Neutral","error":"bad frame"}"#);
    }

    #[test]
    fn test_failure_is_always_neutral() {
        let verdict = Verdict::failure("whatever");
        assert_eq!(verdict.emotion, EmotionLabel::Neutral);
    }

    #[test]
    fn test_json_is_single_line() {
        for verdict in [Verdict::engaged(), Verdict::failure("multi\nline")] {
            let json = verdict.to_json();
            assert_eq!(json.lines().count(), 1);
            assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
        }
    }
}
