use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Bounded retry with a fixed pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 4,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Runs `op` until it succeeds or the attempts run out, returning the last
    /// error. `op` receives the 1-based attempt number. At least one attempt
    /// is always made.
    pub fn run<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut(u32) -> Result<T>,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(err) if attempt < attempts => {
                    warn!(attempt, attempts, error = %err, "attempt failed, retrying");
                    thread::sleep(self.delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Downloads the vocabulary archive into memory.
pub fn fetch_archive(url: &str, policy: &RetryPolicy) -> Result<Vec<u8>> {
    info!(url, "fetching vocabulary archive");
    let bytes = policy.run(|attempt| {
        debug!(attempt, "requesting archive");
        download(url)
    })?;
    info!(size = bytes.len(), "vocabulary archive downloaded");
    Ok(bytes)
}

fn download(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::HttpStatus(status.as_u16()));
    }
    Ok(response.bytes()?.to_vec())
}
