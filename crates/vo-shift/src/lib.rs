//! Inter-frame motion from a pair of intensity profiles.
//!
//! The current profile is slid against the previous one over signed column
//! offsets in `[-S, S)`, scoring each offset by the mean absolute difference
//! of the overlapping samples. The best offset becomes a rotation rate and the
//! residual difference becomes a translation speed.
//!
//! Sign convention:
//! - offset `-o` pairs `current[k]` with `previous[k + o]` (scene moved right),
//! - offset `+o` pairs `current[k + o]` with `previous[k]` (scene moved left).
//!
//! Candidates are evaluated `-0, -1, ..., -(S-1)` then `+0, +1, ..., +(S-1)`
//! and only a strictly smaller score replaces the current best, so ties keep
//! the earliest candidate.

mod calibration;
mod search;

pub use calibration::{Calibration, Motion};
pub use search::{DEFAULT_SEARCH_RADIUS, ShiftEstimator, ShiftMatch, best_shift};
