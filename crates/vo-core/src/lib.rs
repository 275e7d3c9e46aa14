//! Foundational types for profile-based visual odometry.
//!
//! ## Frames and Stride
//! A [`FrameView`] borrows a raw 8-bit buffer laid out row-major, either one
//! greyscale sample or one RGB triple per pixel. Stride is expressed in
//! elements (bytes) between adjacent row starts and may exceed the packed row
//! length, so padded capture buffers can be viewed without copying.
//!
//! ## Regions
//! A [`RegionSpec`] is the configured, signed form of a rectangle. A maximum
//! bound of zero or less means "use the full frame dimension" and is resolved
//! exactly once, against the frame size known at construction, into a
//! [`Region`] with inclusive-exclusive unsigned bounds.

mod error;
mod frame;
mod image;
mod region;

pub use error::Error;
pub use frame::{FrameView, PixelFormat};
pub use image::ImageView;
pub use region::{Region, RegionSpec};
