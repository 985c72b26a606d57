//! Invoice payment retry preferences.
//!
//! These preferences configure the *server's* automatic retry schedule for
//! failed invoice payments. The client itself never retries anything: the
//! retry-preferences call is an ordinary single-shot request like every
//! other operation.

use serde::{Deserialize, Serialize};

/// Account-wide schedule for retrying failed invoice payments.
///
/// Each `*_try` field is the number of days the server waits before that
/// attempt; `finally` is what happens to the subscription after the third
/// attempt fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPreferences {
    /// Days before the first retry.
    pub first_try: u32,
    /// Days between the first and second retries.
    pub second_try: u32,
    /// Days between the second and third retries.
    pub third_try: u32,
    /// Outcome applied after the last failed attempt.
    pub finally: RetryOutcome,
}

/// Outcome the server applies when all retries fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetryOutcome {
    /// Cancel the subscription.
    Cancel,
    /// Suspend the subscription.
    Suspend,
    /// Leave the subscription untouched.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_full_schedule() {
        let preferences = RetryPreferences {
            first_try: 1,
            second_try: 1,
            third_try: 1,
            finally: RetryOutcome::Cancel,
        };

        let json = serde_json::to_string(&preferences).unwrap();
        assert_eq!(
            json,
            r#"{"first_try":1,"second_try":1,"third_try":1,"finally":"CANCEL"}"#
        );
    }

    #[test]
    fn round_trip() {
        let preferences = RetryPreferences {
            first_try: 3,
            second_try: 5,
            third_try: 7,
            finally: RetryOutcome::Suspend,
        };

        let json = serde_json::to_string(&preferences).unwrap();
        let back: RetryPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preferences);
    }

    #[test]
    fn outcome_literals_are_exact() {
        assert_eq!(serde_json::to_string(&RetryOutcome::Cancel).unwrap(), "\"CANCEL\"");
        assert_eq!(serde_json::to_string(&RetryOutcome::Suspend).unwrap(), "\"SUSPEND\"");
        assert_eq!(serde_json::to_string(&RetryOutcome::None).unwrap(), "\"NONE\"");
        assert!(serde_json::from_str::<RetryOutcome>("\"cancel\"").is_err());
    }
}
