//! Execution driver for stepwise algorithm runs.
//!
//! A [`Session`] borrows the strategy registries, owns the grid and array a
//! front end displays, and drives one generator at a time:
//!
//! ```text
//!   start_search / start_sort ──► Running ◄──► Paused
//!                                    │
//!             tick / step / advance  ▼
//!                         Finished(Outcome) | Idle (cancel, invalidation)
//! ```
//!
//! Sorting runs are followed by a verification sweep unless
//! [`SessionConfig::sweep_after_sort`] is off.

mod config;
mod event;
mod pacer;
mod session;

pub use config::SessionConfig;
pub use event::{Event, Outcome, Overlay, Phase, Stats, Status};
pub use pacer::Pacer;
pub use session::Session;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fills_defaults() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"delay_ms":16}"#).unwrap();
        assert_eq!(cfg.delay_ms, 16);
        assert_eq!(cfg.steps_per_frame, 203);
        assert!(cfg.sweep_after_sort);
    }
}
