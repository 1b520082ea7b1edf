//! Nonce generation for key/secret request signing.
//!
//! Every signed request carries a nonce that the server refuses to accept
//! twice, so two requests from the same signer must never share one.

use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// Nonces from UTC nanoseconds, forced strictly increasing.
///
/// Wall-clock nanoseconds alone can repeat under a coarse clock or concurrent
/// callers; the atomic keeps the last issued value and bumps past it.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_nanos() -> u64 {
        u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or_default()
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = Self::current_time_nanos();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}
