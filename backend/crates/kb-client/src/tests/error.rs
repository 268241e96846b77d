use crate::{ClientError, IsRetryable};

use kb_core::GatewayError;

use std::sync::Arc;

#[test]
fn given_server_errors_then_retryable() {
    assert!(ClientError::api_error(500, "x").is_retryable());
    assert!(ClientError::api_error(503, "x").is_retryable());
    assert!(ClientError::api_error(429, "x").is_retryable());
}

#[test]
fn given_client_errors_then_not_retryable() {
    assert!(!ClientError::api_error(400, "x").is_retryable());
    assert!(!ClientError::api_error(403, "x").is_retryable());
    assert!(!ClientError::api_error(404, "x").is_retryable());
}

#[test]
fn given_json_error_then_not_retryable() {
    let error = ClientError::from(serde_json::from_str::<u32>("nope").unwrap_err());

    assert!(!error.is_retryable());
    assert!(error.user_message().starts_with("Invalid server response"));
}

#[test]
fn given_shared_error_then_delegates() {
    let error = ClientError::Shared(Arc::new(ClientError::api_error(502, "bad gateway")));

    assert!(error.is_retryable());
    assert_eq!(error.status(), Some(502));
}

#[test]
fn given_api_error_when_converted_then_gateway_error_keeps_message() {
    let error = ClientError::api_error(403, "Access denied. You are not a member of this project.");

    let gateway: GatewayError = error.into();

    assert_eq!(
        gateway.message,
        "Access denied. You are not a member of this project."
    );
}
