//! Sliding window rate limiting.

use std::time::{Duration, Instant};

/// A sliding window rate limiter.
///
/// Tracks request timestamps within a sliding window and enforces a maximum
/// number of requests within that window.
#[derive(Debug)]
pub struct SlidingWindow {
    /// Request timestamps
    requests: Vec<Instant>,
    /// Window duration
    window: Duration,
    /// Maximum requests per window
    max_requests: u32,
}

impl SlidingWindow {
    /// Create a new sliding window rate limiter.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            requests: Vec::with_capacity(max_requests as usize),
            window,
            max_requests,
        }
    }

    /// Try to acquire a permit.
    ///
    /// Returns `Ok(())` if allowed, `Err(wait_time)` if rate limited.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        self.cleanup_old();

        if (self.requests.len() as u32) < self.max_requests {
            self.requests.push(Instant::now());
            Ok(())
        } else {
            // Find when the oldest request will expire.
            let wait_time = self
                .requests
                .first()
                .map(|oldest| self.window.saturating_sub(oldest.elapsed()))
                .unwrap_or_default();
            Err(wait_time)
        }
    }

    /// Check if a request would be allowed without consuming a permit.
    pub fn would_allow(&self) -> bool {
        let count = self
            .requests
            .iter()
            .filter(|ts| ts.elapsed() < self.window)
            .count();
        (count as u32) < self.max_requests
    }

    /// Get the number of remaining permits.
    pub fn remaining(&self) -> u32 {
        let count = self
            .requests
            .iter()
            .filter(|ts| ts.elapsed() < self.window)
            .count() as u32;
        self.max_requests.saturating_sub(count)
    }

    /// Remove requests that are outside the window.
    fn cleanup_old(&mut self) {
        let window = self.window;
        self.requests.retain(|ts| ts.elapsed() < window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_requests() {
        let mut limiter = SlidingWindow::new(Duration::from_secs(60), 3);

        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_err());
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut limiter = SlidingWindow::new(Duration::from_secs(60), 2);

        assert_eq!(limiter.remaining(), 2);
        limiter.try_acquire().unwrap();
        assert_eq!(limiter.remaining(), 1);
        assert!(limiter.would_allow());
        limiter.try_acquire().unwrap();
        assert_eq!(limiter.remaining(), 0);
        assert!(!limiter.would_allow());
    }

    #[test]
    fn test_wait_time_bounded_by_window() {
        let mut limiter = SlidingWindow::new(Duration::from_secs(60), 1);

        limiter.try_acquire().unwrap();
        let wait = limiter.try_acquire().unwrap_err();
        assert!(wait <= Duration::from_secs(60));
    }

    #[test]
    fn test_expired_requests_free_permits() {
        let mut limiter = SlidingWindow::new(Duration::from_millis(10), 1);

        limiter.try_acquire().unwrap();
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.try_acquire().is_ok());
    }
}
