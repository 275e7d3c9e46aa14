use serde::{Deserialize, Serialize};
use vo_core::{Error, RegionSpec};
use vo_shift::{Calibration, DEFAULT_SEARCH_RADIUS};

/// Construction parameters for [`crate::VisualOdometry`].
///
/// Missing fields take the defaults below, which are tuned for a forward
/// facing camera at 10 Hz with both regions spanning the whole frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OdometryConfig {
    pub translation_region: RegionSpec,
    pub rotation_region: RegionSpec,
    #[serde(flatten)]
    pub calibration: Calibration,
    /// Largest column shift searched in each direction.
    pub search_radius: usize,
}

impl Default for OdometryConfig {
    fn default() -> Self {
        Self {
            translation_region: RegionSpec::FULL_FRAME,
            rotation_region: RegionSpec::FULL_FRAME,
            calibration: Calibration::default(),
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl OdometryConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.calibration.validate()?;
        if self.search_radius == 0 {
            return Err(Error::InvalidCalibration(
                "search_radius must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vo_core::{Error, RegionSpec};

    use super::OdometryConfig;

    #[test]
    fn defaults_cover_full_frame() {
        let cfg = OdometryConfig::default();
        assert_eq!(cfg.translation_region, RegionSpec::FULL_FRAME);
        assert_eq!(cfg.rotation_region, RegionSpec::FULL_FRAME);
        assert_eq!(cfg.calibration.camera_fov_deg, 50.0);
        assert_eq!(cfg.calibration.camera_hz, 10.0);
        assert_eq!(cfg.calibration.trans_scaling, 100.0);
        assert_eq!(cfg.calibration.trans_max, 20.0);
        assert_eq!(cfg.search_radius, 40);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = OdometryConfig::from_json_str(
            r#"{
                "rotation_region": { "x_min": 15, "x_max": 95, "y_min": 30, "y_max": 60 },
                "camera_fov_deg": 53.0,
                "trans_max": 0.5
            }"#,
        )
        .expect("valid config");

        assert_eq!(cfg.rotation_region, RegionSpec::new(15, 95, 30, 60));
        assert_eq!(cfg.translation_region, RegionSpec::FULL_FRAME);
        assert_eq!(cfg.calibration.camera_fov_deg, 53.0);
        assert_eq!(cfg.calibration.camera_hz, 10.0);
        assert_eq!(cfg.calibration.trans_max, 0.5);
        assert_eq!(cfg.search_radius, 40);
    }

    #[test]
    fn zero_search_radius_is_rejected() {
        let cfg = OdometryConfig {
            search_radius: 0,
            ..OdometryConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidCalibration(_))));
    }
}
