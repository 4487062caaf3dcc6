//! Trait abstraction for the submission gateway to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;

use super::client::GatewayError;

/// Contract the form controller depends on.
///
/// A production replacement (an HTTP client) must honor the same shape:
/// accept a values snapshot and eventually resolve or reject with a
/// human-readable message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit the form values, resolving after the backend accepts them
    async fn submit(&self, values: FormValues) -> Result<(), GatewayError>;
}
