//! Failed-attempt registry and retry flow
//!
//! The coordinator owns the mapping from file name to its most recent failure
//! record. A retry is user-triggered and runs in three steps so it fits the
//! event loop's spawn-and-poll execution model:
//!
//! 1. [`RetryCoordinator::begin`] looks up the record and marks the key
//!    in-flight (retries for the same key are serialized; distinct keys may
//!    overlap freely).
//! 2. [`submit`] performs the upload on a spawned task and reduces the
//!    response to a [`RetryOutcome`].
//! 3. [`RetryCoordinator::finish`] applies the outcome: success removes the
//!    registry entry, failure leaves it untouched for a later attempt.
//!
//! [`RetryCoordinator::retry`] composes the three for headless callers.

use crate::api::{ConversionApi, UploadResponse};
use crate::ux::notifications::Notifications;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// One conversion failure awaiting retry. Replaced wholesale when the same
/// file fails again; never mutated in place.
#[derive(Debug, Clone)]
pub struct FailedAttempt {
    pub error: String,
    pub data: Vec<u8>,
    pub recorded_at: DateTime<Utc>,
}

/// Why a retry did not start. Neither case is fatal; both are surfaced to the
/// user as a notification and no network request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryRefusal {
    /// No failure record exists for the file name
    NotFound,
    /// A retry for this key is still outstanding
    AlreadyInFlight,
}

/// Result of one retry submission, delivered back to the event loop.
#[derive(Debug, Clone)]
pub struct RetryOutcome {
    pub file_name: String,
    pub result: Result<(), String>,
}

#[derive(Debug, Default)]
pub struct RetryCoordinator {
    failures: HashMap<String, FailedAttempt>,
    in_flight: HashSet<String>,
}

impl RetryCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the failure record for `file_name`. No side
    /// effects beyond the registry; the caller is responsible for notifying.
    pub fn record_failure(&mut self, file_name: &str, error: impl Into<String>, data: Vec<u8>) {
        self.failures.insert(
            file_name.to_string(),
            FailedAttempt {
                error: error.into(),
                data,
                recorded_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, file_name: &str) -> Option<&FailedAttempt> {
        self.failures.get(file_name)
    }

    pub fn is_in_flight(&self, file_name: &str) -> bool {
        self.in_flight.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Start a retry: returns the retained payload to resubmit, or the reason
    /// the retry was refused. On success the key is marked in-flight until
    /// [`finish`](Self::finish) runs.
    pub fn begin(&mut self, file_name: &str) -> Result<Vec<u8>, RetryRefusal> {
        if self.in_flight.contains(file_name) {
            return Err(RetryRefusal::AlreadyInFlight);
        }
        let attempt = self.failures.get(file_name).ok_or(RetryRefusal::NotFound)?;
        self.in_flight.insert(file_name.to_string());
        Ok(attempt.data.clone())
    }

    /// Apply a completed retry. Success removes the registry entry and emits
    /// a success toast; failure leaves the entry unchanged and emits an error
    /// toast with the most specific message available. Returns whether the
    /// retry succeeded.
    pub fn finish(&mut self, outcome: &RetryOutcome, notifier: &mut Notifications) -> bool {
        self.in_flight.remove(&outcome.file_name);
        match &outcome.result {
            Ok(()) => {
                self.failures.remove(&outcome.file_name);
                notifier.success(format!("{} converted successfully", outcome.file_name));
                true
            }
            Err(message) => {
                notifier.error(format!("Retry failed for {}: {}", outcome.file_name, message));
                false
            }
        }
    }

    /// Surface a refusal to the user, matching the retry contract: an unknown
    /// file name is an error toast, a duplicate attempt an informational one.
    pub fn notify_refusal(
        &self,
        file_name: &str,
        refusal: RetryRefusal,
        notifier: &mut Notifications,
    ) {
        match refusal {
            RetryRefusal::NotFound => {
                notifier.error(format!("File not found: {file_name}"));
            }
            RetryRefusal::AlreadyInFlight => {
                notifier.info(format!("Retry already in progress for {file_name}"));
            }
        }
    }

    /// Full retry flow for headless callers: begin, announce, submit, finish.
    /// Returns whether the retry ran and succeeded.
    pub async fn retry(
        &mut self,
        file_name: &str,
        api: &dyn ConversionApi,
        notifier: &mut Notifications,
    ) -> bool {
        let data = match self.begin(file_name) {
            Ok(data) => data,
            Err(refusal) => {
                self.notify_refusal(file_name, refusal, notifier);
                return false;
            }
        };
        notifier.info(format!("Retrying {file_name}..."));
        let outcome = submit(api, file_name, data).await;
        self.finish(&outcome, notifier)
    }
}

/// Resubmit a retained payload and reduce the response to an outcome. Runs on
/// a spawned task in the TUI; errors are folded into the outcome, never
/// propagated.
pub async fn submit(api: &dyn ConversionApi, file_name: &str, data: Vec<u8>) -> RetryOutcome {
    let result = match api.upload(file_name, data).await {
        Ok(resp) => evaluate_upload(&resp),
        Err(e) => Err(e.to_string()),
    };
    if let Err(ref message) = result {
        tracing::warn!("Retry for {} failed: {}", file_name, message);
    }
    RetryOutcome {
        file_name: file_name.to_string(),
        result,
    }
}

/// Reduce a single-file upload response to success or the most specific
/// failure message the server provided.
pub fn evaluate_upload(resp: &UploadResponse) -> Result<(), String> {
    match resp.first_result() {
        Some(r) if r.is_success() => Ok(()),
        Some(r) => Err(r
            .error
            .clone()
            .unwrap_or_else(|| "unknown error".to_string())),
        None => Err("server returned no results".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_failure_overwrites_previous_entry() {
        let mut retry = RetryCoordinator::new();
        retry.record_failure("a.txt", "x", vec![1]);
        retry.record_failure("a.txt", "y", vec![2]);
        assert_eq!(retry.len(), 1);
        let attempt = retry.get("a.txt").unwrap();
        assert_eq!(attempt.error, "y");
        assert_eq!(attempt.data, vec![2]);
    }

    #[test]
    fn begin_refuses_unknown_and_duplicate_keys() {
        let mut retry = RetryCoordinator::new();
        assert_eq!(retry.begin("missing.txt"), Err(RetryRefusal::NotFound));

        retry.record_failure("a.txt", "boom", vec![7]);
        assert_eq!(retry.begin("a.txt"), Ok(vec![7]));
        assert!(retry.is_in_flight("a.txt"));
        assert_eq!(retry.begin("a.txt"), Err(RetryRefusal::AlreadyInFlight));
    }

    #[test]
    fn finish_clears_in_flight_on_failure_but_keeps_entry() {
        let mut retry = RetryCoordinator::new();
        let mut sink = Notifications::new();
        retry.record_failure("a.txt", "original", vec![1]);
        retry.begin("a.txt").unwrap();

        let outcome = RetryOutcome {
            file_name: "a.txt".to_string(),
            result: Err("bad".to_string()),
        };
        assert!(!retry.finish(&outcome, &mut sink));
        assert!(!retry.is_in_flight("a.txt"));
        // Registry entry is untouched, a later attempt may run.
        assert_eq!(retry.get("a.txt").unwrap().error, "original");
        assert!(sink.visible()[0].message.contains("bad"));
    }
}
