use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::sleep;

use crate::models::assignment::Assignment;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("teacher service unavailable: {0}")]
    Unavailable(String),
    #[error("link delivery failed: {0}")]
    LinkDelivery(String),
}

/// Boundary for the delegated I/O steps of the lifecycle: handing a finished
/// assignment to the teacher and sending a parent-review link out of band.
/// The engine commits a status change only after the call returns `Ok`.
#[async_trait]
pub trait DeliveryService: Send + Sync {
    async fn submit_to_teacher(&self, assignment: &Assignment) -> Result<(), DeliveryError>;
    async fn deliver_parent_link(&self, url: &str) -> Result<(), DeliveryError>;
}

/// In-memory stand-in for the real delivery channel. Latency defaults to the
/// 1.5 s the product shows while "sending", and can be switched off in tests.
pub struct SimulatedDelivery {
    latency: Option<Duration>,
    fail: bool,
}

impl SimulatedDelivery {
    pub fn new() -> Self {
        Self {
            latency: Some(Duration::from_millis(1500)),
            fail: false,
        }
    }

    /// No artificial latency.
    pub fn instant() -> Self {
        Self {
            latency: None,
            fail: false,
        }
    }

    /// Every call fails, for exercising the retry path.
    pub fn failing() -> Self {
        Self {
            latency: None,
            fail: true,
        }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryService for SimulatedDelivery {
    async fn submit_to_teacher(&self, assignment: &Assignment) -> Result<(), DeliveryError> {
        if let Some(latency) = self.latency {
            sleep(latency).await;
        }
        if self.fail {
            return Err(DeliveryError::Unavailable(format!(
                "simulated outage while submitting assignment {}",
                assignment.id
            )));
        }
        Ok(())
    }

    async fn deliver_parent_link(&self, url: &str) -> Result<(), DeliveryError> {
        if let Some(latency) = self.latency {
            sleep(latency).await;
        }
        if self.fail {
            return Err(DeliveryError::LinkDelivery(format!(
                "simulated outage while delivering {url}"
            )));
        }
        Ok(())
    }
}
