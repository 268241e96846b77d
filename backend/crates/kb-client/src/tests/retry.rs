use crate::{ClientError, with_retry};

use kb_config::RetryConfig;

use std::sync::atomic::{AtomicU32, Ordering};

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

#[tokio::test]
async fn given_transient_failures_then_retried_until_success() {
    let attempts = AtomicU32::new(0);

    let result = with_retry(&fast_retry(), "test_op", || async {
        if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(ClientError::api_error(503, "unavailable"))
        } else {
            Ok("done")
        }
    })
    .await;

    assert_eq!(result.unwrap(), "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn given_permanent_failure_then_not_retried() {
    let attempts = AtomicU32::new(0);

    let result: Result<(), _> = with_retry(&fast_retry(), "test_op", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::api_error(404, "missing"))
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_persistent_server_error_then_gives_up_after_max_attempts() {
    let attempts = AtomicU32::new(0);

    let result: Result<(), _> = with_retry(&fast_retry(), "test_op", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::api_error(500, "boom"))
    })
    .await;

    assert_eq!(result.unwrap_err().status(), Some(500));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
