//! Artificial network latency for the simulated store.

use rand::Rng;
use std::time::Duration;

/// Store operations, each with its own delay range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    GetById,
    ListByNameMatch,
    Create,
    Update,
    Delete,
    ListPaginated,
    Count,
}

impl Operation {
    /// Inclusive delay range in milliseconds.
    #[must_use]
    pub const fn delay_range_ms(self) -> (u64, u64) {
        match self {
            Self::ListAll | Self::Delete | Self::ListPaginated => (300, 600),
            Self::GetById => (200, 400),
            Self::ListByNameMatch => (200, 500),
            Self::Create => (500, 1000),
            Self::Update => (400, 800),
            Self::Count => (100, 200),
        }
    }
}

/// Whether the simulated store sleeps before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyProfile {
    /// Uniformly random delay inside each operation's range.
    #[default]
    Realistic,
    /// Answer immediately.
    Instant,
}

impl LatencyProfile {
    /// Maps the `simulate_latency` config flag to a profile.
    #[must_use]
    pub const fn from_flag(simulate: bool) -> Self {
        if simulate {
            Self::Realistic
        } else {
            Self::Instant
        }
    }

    /// Picks the delay for one call of `op`.
    #[must_use]
    pub fn delay_for(self, op: Operation) -> Duration {
        match self {
            Self::Instant => Duration::ZERO,
            Self::Realistic => {
                let (min, max) = op.delay_range_ms();
                Duration::from_millis(rand::thread_rng().gen_range(min..=max))
            }
        }
    }
}
