//! HTTP implementation of the task persistence gateway, with a read cache and retries.

mod cache;
mod error;
mod gateway;
mod retry;

#[cfg(test)]
mod tests;

pub use cache::{RequestCache, cache_key};
pub use error::{ClientError, Result as ClientResult};
pub use gateway::HttpTaskGateway;
pub use retry::{IsRetryable, with_retry};
