//! Profile-based visual odometry for a single camera stream.
//!
//! [`VisualOdometry`] keeps two regions, one driving translation and one
//! driving rotation. Each frame, both regions are reduced to column profiles
//! and matched against the profiles kept from the previous frame:
//! - the translation region's residual difference, scaled and clamped, is the
//!   speed,
//! - the rotation region's best column offset, converted through the field of
//!   view and frame rate, is the turn rate.
//!
//! Profile buffers are sized once at construction and reused for every frame.
//! One instance serves one stream; it is not meant to be shared across
//! threads without external serialization.

mod config;
mod odometry;

pub use config::OdometryConfig;
pub use odometry::VisualOdometry;
pub use vo_shift::{Calibration, Motion};
