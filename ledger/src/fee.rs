//! Fee estimation with bounded fallback.
//!
//! Minting must never block indefinitely on fee-oracle unavailability, so a
//! failed or implausibly low oracle read falls back to a fixed conservative
//! default. Availability over precision.

use crate::client::LedgerClient;
use std::time::Duration;

/// Timeout for the fee-oracle read.
const FEE_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Floor below which an oracle value is considered bogus (1 gwei).
const FEE_FLOOR: u128 = 1_000_000_000;

/// Fallback fee when the oracle is unavailable or bogus (20 gwei).
const FEE_FALLBACK: u128 = 20_000_000_000;

/// Produces a safe fee-per-gas value.
#[derive(Clone, Copy, Debug)]
pub struct FeeEstimator {
    floor: u128,
    fallback: u128,
    timeout: Duration,
}

impl Default for FeeEstimator {
    fn default() -> Self {
        Self {
            floor: FEE_FLOOR,
            fallback: FEE_FALLBACK,
            timeout: FEE_READ_TIMEOUT,
        }
    }
}

impl FeeEstimator {
    pub fn new(floor: u128, fallback: u128, timeout: Duration) -> Self {
        Self {
            floor,
            fallback,
            timeout,
        }
    }

    /// Read the oracle and return a safe fee value. Never fails: timeout,
    /// error, or a sub-floor reading all yield the fixed fallback.
    pub async fn estimate<C: LedgerClient>(&self, client: &C) -> u128 {
        match tokio::time::timeout(self.timeout, client.gas_price()).await {
            Ok(Ok(price)) if price >= self.floor => price,
            Ok(Ok(price)) => {
                tracing::warn!(price, fallback = self.fallback, "fee oracle below floor");
                self.fallback
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, fallback = self.fallback, "fee oracle read failed");
                self.fallback
            }
            Err(_) => {
                tracing::warn!(fallback = self.fallback, "fee oracle read timed out");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_stub::StubLedger;

    #[tokio::test]
    async fn healthy_oracle_value_passes_through() {
        let client = StubLedger {
            gas_price: Ok(45_000_000_000),
            ..StubLedger::default()
        };
        assert_eq!(FeeEstimator::default().estimate(&client).await, 45_000_000_000);
    }

    #[tokio::test]
    async fn oracle_error_yields_fallback() {
        let client = StubLedger {
            gas_price: Err(()),
            ..StubLedger::default()
        };
        assert_eq!(FeeEstimator::default().estimate(&client).await, FEE_FALLBACK);
    }

    #[tokio::test]
    async fn sub_floor_reading_yields_fallback() {
        let client = StubLedger {
            gas_price: Ok(1),
            ..StubLedger::default()
        };
        assert_eq!(FeeEstimator::default().estimate(&client).await, FEE_FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_oracle_times_out_to_fallback() {
        let client = StubLedger {
            hang_gas_price: true,
            ..StubLedger::default()
        };
        assert_eq!(FeeEstimator::default().estimate(&client).await, FEE_FALLBACK);
    }
}
