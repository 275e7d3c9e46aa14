use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use vo_core::{Error, FrameView, PixelFormat, Region};
use vo_profile::ProfileExtractor;
use vo_shift::{Calibration, Motion, ShiftEstimator, ShiftMatch};

use crate::OdometryConfig;

/// Current and previous profile of one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegionTrack {
    extractor: ProfileExtractor,
    previous: Vec<f64>,
}

impl RegionTrack {
    fn new(region: Region) -> Self {
        Self {
            extractor: ProfileExtractor::new(region),
            previous: vec![0.0; region.width()],
        }
    }

    fn region(&self) -> &Region {
        self.extractor.region()
    }

    fn update(
        &mut self,
        frame: &FrameView<'_>,
        estimator: &ShiftEstimator,
        seed_previous: bool,
    ) -> ShiftMatch {
        let current = self.extractor.extract(frame);
        if seed_previous {
            self.previous.copy_from_slice(current);
        }
        estimator.estimate(current, &mut self.previous)
    }
}

/// Speed and turn-rate estimator for one camera stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualOdometry {
    calibration: Calibration,
    estimator: ShiftEstimator,
    translation: RegionTrack,
    rotation: RegionTrack,
    image_width: usize,
    image_height: usize,
    first: bool,
    frames: u64,
}

impl VisualOdometry {
    /// Resolves both regions against an `image_width x image_height` frame
    /// and allocates their profile buffers.
    pub fn new(
        config: &OdometryConfig,
        image_width: usize,
        image_height: usize,
    ) -> Result<Self, Error> {
        config.validate()?;

        let translation = config.translation_region.resolve(image_width, image_height)?;
        let rotation = config.rotation_region.resolve(image_width, image_height)?;

        debug!(
            ?translation,
            ?rotation,
            image_width,
            image_height,
            search_radius = config.search_radius,
            "visual odometry regions resolved"
        );
        for (name, region) in [("translation", &translation), ("rotation", &rotation)] {
            if region.width() <= config.search_radius {
                debug!(
                    region = name,
                    width = region.width(),
                    search_radius = config.search_radius,
                    "search radius capped by profile length"
                );
            }
        }

        Ok(Self {
            calibration: config.calibration,
            estimator: ShiftEstimator::new(config.search_radius),
            translation: RegionTrack::new(translation),
            rotation: RegionTrack::new(rotation),
            image_width,
            image_height,
            first: true,
            frames: 0,
        })
    }

    /// Processes one frame and returns the motion since the previous one.
    ///
    /// The first frame always yields [`Motion::ZERO`].
    ///
    /// # Panics
    /// If either region does not fit inside `frame`.
    pub fn on_image(&mut self, frame: &FrameView<'_>) -> Motion {
        if (frame.width(), frame.height()) != (self.image_width, self.image_height) {
            warn!(
                from_width = self.image_width,
                from_height = self.image_height,
                to_width = frame.width(),
                to_height = frame.height(),
                "frame size changed"
            );
            self.image_width = frame.width();
            self.image_height = frame.height();
        }

        let seed = self.first;
        self.first = false;

        let trans = self.translation.update(frame, &self.estimator, seed);
        let rot = self.rotation.update(frame, &self.estimator, seed);
        let motion = Motion::from_matches(&self.calibration, &trans, &rot, self.image_width);

        self.frames += 1;
        trace!(
            frame = self.frames,
            trans_diff = trans.min_diff,
            rot_offset = rot.offset,
            trans_speed = motion.trans_speed,
            rot_rate = motion.rot_rate,
            "visual odometry"
        );

        motion
    }

    /// Convenience wrapper for a tightly packed buffer.
    pub fn on_image_raw(
        &mut self,
        data: &[u8],
        greyscale: bool,
        width: usize,
        height: usize,
    ) -> Result<Motion, Error> {
        let format = PixelFormat::from_greyscale(greyscale);
        let frame = FrameView::new(data, width, height, format)?;
        Ok(self.on_image(&frame))
    }

    /// Whether both regions lie inside a `width x height` frame, i.e. whether
    /// [`VisualOdometry::on_image`] accepts such a frame.
    pub fn fits_frame(&self, width: usize, height: usize) -> bool {
        self.translation.region().fits_within(width, height)
            && self.rotation.region().fits_within(width, height)
    }

    pub fn translation_region(&self) -> &Region {
        self.translation.region()
    }

    pub fn rotation_region(&self) -> &Region {
        self.rotation.region()
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn search_radius(&self) -> usize {
        self.estimator.search_radius()
    }

    /// Frame size latched from the most recent frame, or from construction.
    pub fn image_size(&self) -> (usize, usize) {
        (self.image_width, self.image_height)
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    pub fn is_first_frame(&self) -> bool {
        self.first
    }

    /// Translation profile of the last processed frame.
    pub fn translation_profile(&self) -> &[f64] {
        self.translation.extractor.profile()
    }

    /// Rotation profile of the last processed frame.
    pub fn rotation_profile(&self) -> &[f64] {
        self.rotation.extractor.profile()
    }
}
