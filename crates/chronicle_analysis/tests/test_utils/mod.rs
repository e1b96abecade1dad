//! Mock driver for testing the analyst without API calls.

use async_trait::async_trait;
use chronicle_core::{GenerateRequest, GenerateResponse};
use chronicle_error::{ChronicleResult, ProviderError, ProviderErrorKind};
use chronicle_interface::AnalysisDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ProviderErrorKind),
}

/// Mock driver for testing.
///
/// Allows tests to control responses and verify call counts without making
/// actual API calls.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Handle to the call counter, usable after the driver is moved into an
    /// analyst.
    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl AnalysisDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse { text: text.clone() }),
            MockBehavior::Error(kind) => Err(ProviderError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
