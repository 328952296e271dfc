//! @ai:module:intent Result record written by the benchmark harness for one exercise
//! @ai:module:layer domain
//! @ai:module:public_api RunResult
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent The fields of a result file that matter for solve statistics
/// @ai:effects pure
///
/// Result files carry many more fields; they are ignored so that older and
/// newer harness versions parse alike. The two fields read here are typed
/// strictly: a non-string `testcase` or a non-boolean outcome makes the whole
/// file fail to parse, and the loader skips it as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub testcase: Option<String>,
    #[serde(default)]
    pub tests_outcomes: Option<Vec<bool>>,
}

impl RunResult {
    /// @ai:intent Exercise name, if present and non-empty
    /// @ai:effects pure
    pub fn exercise(&self) -> Option<&str> {
        self.testcase.as_deref().filter(|name| !name.is_empty())
    }

    /// @ai:intent Whether the final recorded attempt passed
    /// @ai:effects pure
    pub fn is_solved(&self) -> bool {
        self.tests_outcomes
            .as_ref()
            .and_then(|outcomes| outcomes.last())
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RunResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_last_attempt_wins() {
        assert!(parse(r#"{"testcase": "bowling", "tests_outcomes": [false, true]}"#).is_solved());
        assert!(!parse(r#"{"testcase": "bowling", "tests_outcomes": [true, false]}"#).is_solved());
    }

    #[test]
    fn test_no_outcomes_is_unsolved() {
        assert!(!parse(r#"{"testcase": "bowling", "tests_outcomes": []}"#).is_solved());
        assert!(!parse(r#"{"testcase": "bowling"}"#).is_solved());
        assert!(!parse(r#"{"testcase": "bowling", "tests_outcomes": null}"#).is_solved());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let result = parse(
            r#"{
                "testcase": "grep",
                "model": "gpt-4o",
                "edit_format": "diff",
                "cost": 0.12,
                "chat_hashes": [["a", "b"]],
                "tests_outcomes": [true]
            }"#,
        );
        assert_eq!(result.exercise(), Some("grep"));
        assert!(result.is_solved());
    }

    #[test]
    fn test_empty_testcase_has_no_exercise() {
        assert_eq!(parse(r#"{"testcase": "", "tests_outcomes": [true]}"#).exercise(), None);
        assert_eq!(parse(r#"{"tests_outcomes": [true]}"#).exercise(), None);
    }
}
