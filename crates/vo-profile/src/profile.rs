use serde::{Deserialize, Serialize};
use vo_core::{FrameView, PixelFormat, Region};

/// Writes the column-block profile of `region` into `out`.
///
/// `out.len()` is the number of column blocks. The buffer is overwritten
/// entirely.
///
/// # Panics
/// If `out` is empty, if the region is narrower than `out.len()` columns, or
/// if the region does not lie inside the frame.
pub fn extract_profile(frame: &FrameView<'_>, region: &Region, out: &mut [f64]) {
    assert!(!out.is_empty(), "profile must have at least one column block");
    assert!(
        region.fits_within(frame.width(), frame.height()),
        "region {region:?} outside {}x{} frame",
        frame.width(),
        frame.height()
    );

    let block_w = region.width() / out.len();
    assert!(block_w > 0, "region narrower than the requested profile");
    let block_h = region.height();

    out.fill(0.0);

    match frame.format() {
        PixelFormat::Grey => {
            for y in region.y_min..region.y_max {
                let row = &frame.row(y)[region.x_min..];
                for (dst, block) in out.iter_mut().zip(row.chunks_exact(block_w)) {
                    *dst += block.iter().map(|&v| f64::from(v)).sum::<f64>();
                }
            }
        }
        PixelFormat::Rgb => {
            for y in region.y_min..region.y_max {
                let row = &frame.row(y)[region.x_min * 3..];
                for (dst, block) in out.iter_mut().zip(row.chunks_exact(block_w * 3)) {
                    *dst += block.iter().map(|&v| f64::from(v)).sum::<f64>();
                }
            }
        }
    }

    let norm = frame.format().max_sum() * (block_w * block_h) as f64;
    for v in out.iter_mut() {
        *v /= norm;
    }
}

/// Region plus a pre-sized profile buffer, one column block per pixel column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExtractor {
    region: Region,
    profile: Vec<f64>,
}

impl ProfileExtractor {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            profile: vec![0.0; region.width()],
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn profile(&self) -> &[f64] {
        &self.profile
    }

    pub fn extract(&mut self, frame: &FrameView<'_>) -> &[f64] {
        extract_profile(frame, &self.region, &mut self.profile);
        &self.profile
    }
}
