use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-IP limiter for endpoints that call the text generator.
pub struct GenerationRateLimiter {
    /// ip -> (count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
    limit: u32,
    window: Duration,
}

impl GenerationRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    /// Check if request is allowed. Returns Ok(()) or Err with retry-after seconds.
    /// A limit of zero disables limiting.
    pub fn check(&self, ip: IpAddr) -> Result<(), u64> {
        if self.limit == 0 {
            return Ok(());
        }

        let now = Instant::now();

        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > self.window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= self.limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(self.window.as_secs().saturating_sub(elapsed));
        }

        *count += 1;
        Ok(())
    }

    /// Remove entries whose window has expired.
    pub fn cleanup(&self) {
        let now = Instant::now();
        let window = self.window;
        self.entries.retain(|_, (_, start)| now.duration_since(*start) < window);
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
