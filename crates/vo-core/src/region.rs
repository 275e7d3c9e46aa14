use serde::{Deserialize, Serialize};

use crate::Error;

/// Configured rectangle in signed pixel bounds.
///
/// `x_max <= 0` and `y_max <= 0` stand for the full frame width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionSpec {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl RegionSpec {
    pub const FULL_FRAME: Self = Self {
        x_min: 0,
        x_max: -1,
        y_min: 0,
        y_max: -1,
    };

    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Replaces sentinel bounds with the frame size and checks the result
    /// is a non-empty rectangle inside a `width x height` frame.
    pub fn resolve(&self, width: usize, height: usize) -> Result<Region, Error> {
        let (x_min, x_max) = resolve_axis("x", self.x_min, self.x_max, width)?;
        let (y_min, y_max) = resolve_axis("y", self.y_min, self.y_max, height)?;

        let region = Region {
            x_min,
            x_max,
            y_min,
            y_max,
        };

        if !region.fits_within(width, height) {
            return Err(Error::RegionOutOfBounds {
                x_min,
                x_max,
                y_min,
                y_max,
                width,
                height,
            });
        }

        Ok(region)
    }
}

impl Default for RegionSpec {
    fn default() -> Self {
        Self::FULL_FRAME
    }
}

fn resolve_axis(
    axis: &'static str,
    min: i32,
    max: i32,
    extent: usize,
) -> Result<(usize, usize), Error> {
    let max = if max <= 0 {
        i64::try_from(extent).unwrap_or(i64::MAX)
    } else {
        i64::from(max)
    };
    let min = i64::from(min);

    if min < 0 || min >= max {
        return Err(Error::EmptyRegion { axis, min, max });
    }

    // Both bounds are non-negative here.
    Ok((min as usize, max as usize))
}

/// Resolved rectangle with inclusive-exclusive bounds, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl Region {
    #[inline]
    pub fn width(&self) -> usize {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y_max - self.y_min
    }

    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x_min < self.x_max
            && self.y_min < self.y_max
            && self.x_max <= width
            && self.y_max <= height
    }
}

#[cfg(test)]
mod tests {
    use super::{Region, RegionSpec};
    use crate::Error;

    #[test]
    fn negative_max_resolves_to_frame_size() {
        let region = RegionSpec::new(0, -1, 10, -1)
            .resolve(160, 120)
            .expect("valid region");
        assert_eq!(
            region,
            Region {
                x_min: 0,
                x_max: 160,
                y_min: 10,
                y_max: 120
            }
        );
        assert_eq!(region.width(), 160);
        assert_eq!(region.height(), 110);
    }

    #[test]
    fn zero_max_is_also_full_frame() {
        let region = RegionSpec::new(20, 0, 0, 0)
            .resolve(64, 48)
            .expect("valid region");
        assert_eq!(region.x_max, 64);
        assert_eq!(region.y_max, 48);
        assert_eq!(region.width(), 44);
    }

    #[test]
    fn explicit_bounds_are_kept() {
        let region = RegionSpec::new(15, 95, 30, 60)
            .resolve(160, 120)
            .expect("valid region");
        assert_eq!(region.width(), 80);
        assert_eq!(region.height(), 30);
    }

    #[test]
    fn empty_and_negative_min_are_rejected() {
        assert_eq!(
            RegionSpec::new(50, 50, 0, -1).resolve(160, 120).unwrap_err(),
            Error::EmptyRegion {
                axis: "x",
                min: 50,
                max: 50
            }
        );
        assert!(matches!(
            RegionSpec::new(0, -1, -4, 10).resolve(160, 120),
            Err(Error::EmptyRegion { axis: "y", .. })
        ));
        assert!(matches!(
            RegionSpec::new(200, -1, 0, -1).resolve(160, 120),
            Err(Error::EmptyRegion { axis: "x", .. })
        ));
    }

    #[test]
    fn out_of_frame_is_rejected() {
        assert!(matches!(
            RegionSpec::new(0, 200, 0, -1).resolve(160, 120),
            Err(Error::RegionOutOfBounds { width: 160, .. })
        ));
    }

    #[test]
    fn spec_from_json_with_missing_fields() {
        let spec: RegionSpec =
            serde_json::from_str(r#"{"x_min":5,"y_max":40}"#).expect("valid json");
        assert_eq!(spec, RegionSpec::new(5, -1, 0, 40));
    }
}
