use tracing::info;

use crate::error::{Error, Result};

/// Smallest number of resolved targets a session may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinTargets(pub usize);

impl MinTargets {
    pub fn check<T>(self, targets: &[T]) -> Result<()> {
        if targets.len() < self.0 {
            info!(found = targets.len(), required = self.0, "not enough targets to start");
            return Err(Error::InsufficientTargets {
                found: targets.len(),
                required: self.0,
            });
        }
        Ok(())
    }
}
