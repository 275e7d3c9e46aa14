//! Umbrella crate for the `visual-odometry` workspace.
//!
//! Re-exports the frame types, the profile extractor, the shift estimator and
//! the per-stream [`VisualOdometry`] driver.

pub use vo_core::*;
pub use vo_odometry::*;
pub use vo_profile::*;
pub use vo_shift::*;
