//! Submission gateway module

mod client;
mod traits;

pub use client::{GatewayError, SimulatedGateway, DEFAULT_DELAY};
pub use traits::SubmissionGateway;

#[cfg(test)]
pub use traits::MockSubmissionGateway;
