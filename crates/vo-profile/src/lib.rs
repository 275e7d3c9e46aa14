//! 1D intensity profiles for profile-based visual odometry.
//!
//! A profile summarizes a rectangular frame region column by column: the
//! region is split into equal-width column blocks spanning its full height,
//! and each block contributes the mean normalized intensity of its pixels.
//! Values lie on `[0, 1]`; RGB pixels use the sum of their three channels.
//!
//! Block width is `region.width() / profile.len()` using integer division.
//! When the division is not exact the trailing columns of the region are not
//! scanned. Odometry always requests one block per pixel column, which makes
//! the division exact.

mod profile;

pub use profile::{ProfileExtractor, extract_profile};
