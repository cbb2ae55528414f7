//! Token-bucket limiter gating outbound cloud calls.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Tokens available after `elapsed` has passed since the last refill.
///
/// Never exceeds `burst`.
pub fn replenished_tokens(tokens: f64, elapsed: Duration, rate: f64, burst: f64) -> f64 {
    (tokens + elapsed.as_secs_f64() * rate).min(burst)
}

const MIN_RATE: f64 = 0.001;

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last: Instant,
}

/// A token bucket safe for concurrent use.
///
/// Starts full. `acquire` waits for one token; `try_acquire` never waits.
#[derive(Debug)]
pub struct RateLimiter {
    rate: f64,
    burst: f64,
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Creates a limiter refilling `rate` tokens per second up to `burst`.
    ///
    /// Values below one token per thousand seconds, and a zero burst, are
    /// raised to those minimums.
    pub fn new(rate: f64, burst: usize) -> Self {
        let burst = burst.max(1) as f64;
        Self {
            rate: rate.max(MIN_RATE),
            burst,
            bucket: Mutex::new(Bucket {
                tokens: burst,
                last: Instant::now(),
            }),
        }
    }

    /// Takes one token if available, otherwise returns how long to wait.
    fn reserve(&self) -> Result<(), Duration> {
        let mut bucket = self.bucket.lock();
        let now = Instant::now();
        bucket.tokens =
            replenished_tokens(bucket.tokens, now - bucket.last, self.rate, self.burst);
        bucket.last = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            Ok(())
        } else {
            Err(Duration::from_secs_f64((1.0 - bucket.tokens) / self.rate))
        }
    }

    pub fn try_acquire(&self) -> bool {
        self.reserve().is_ok()
    }

    /// Waits until a token is available and takes it.
    pub async fn acquire(&self) {
        while let Err(wait) = self.reserve() {
            tokio::time::sleep(wait).await;
        }
    }
}
