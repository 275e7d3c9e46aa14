use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use vo_core::Error;

use crate::ShiftMatch;

/// Camera and scaling constants that turn profile matches into motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Horizontal field of view, degrees.
    pub camera_fov_deg: f64,
    /// Frame rate, Hz.
    pub camera_hz: f64,
    /// Speed per unit of mean profile difference.
    pub trans_scaling: f64,
    /// Ceiling applied to the translation speed.
    pub trans_max: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            camera_fov_deg: 50.0,
            camera_hz: 10.0,
            trans_scaling: 100.0,
            trans_max: 20.0,
        }
    }
}

impl Calibration {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.camera_fov_deg.is_finite() && self.camera_fov_deg > 0.0) {
            return Err(Error::InvalidCalibration("camera_fov_deg must be positive"));
        }
        if !(self.camera_hz.is_finite() && self.camera_hz > 0.0) {
            return Err(Error::InvalidCalibration("camera_hz must be positive"));
        }
        if !(self.trans_scaling.is_finite() && self.trans_scaling >= 0.0) {
            return Err(Error::InvalidCalibration("trans_scaling must be non-negative"));
        }
        if !(self.trans_max.is_finite() && self.trans_max >= 0.0) {
            return Err(Error::InvalidCalibration("trans_max must be non-negative"));
        }
        Ok(())
    }

    /// Rotation rate in rad/s for a column shift observed on a frame
    /// `image_width` pixels wide.
    pub fn rotation_rate(&self, offset: isize, image_width: usize) -> f64 {
        offset as f64 * self.camera_fov_deg / image_width as f64 * self.camera_hz * PI / 180.0
    }

    /// Translation speed for a mean profile difference, clamped to `trans_max`.
    pub fn translation_speed(&self, min_diff: f64) -> f64 {
        (min_diff * self.trans_scaling).min(self.trans_max)
    }
}

/// Per-frame motion estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Motion {
    /// Translational speed, units of `trans_scaling` (conventionally m/s).
    pub trans_speed: f64,
    /// Signed rotational rate, rad/s. Positive for a positive column offset.
    pub rot_rate: f64,
}

impl Motion {
    pub const ZERO: Self = Self {
        trans_speed: 0.0,
        rot_rate: 0.0,
    };

    /// Combines the translation-region match and the rotation-region match.
    pub fn from_matches(
        calibration: &Calibration,
        translation: &ShiftMatch,
        rotation: &ShiftMatch,
        image_width: usize,
    ) -> Self {
        Self {
            trans_speed: calibration.translation_speed(translation.min_diff),
            rot_rate: calibration.rotation_rate(rotation.offset, image_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Calibration, Motion};
    use crate::ShiftMatch;
    use vo_core::Error;

    #[test]
    fn rotation_rate_from_offset() {
        let cal = Calibration {
            camera_fov_deg: 64.0,
            camera_hz: 20.0,
            ..Calibration::default()
        };
        // 4 px of a 128 px, 64 deg frame is 2 deg per frame, 40 deg/s.
        let rate = cal.rotation_rate(4, 128);
        assert!((rate - 40.0f64.to_radians()).abs() < 1e-12);
        assert!((cal.rotation_rate(-4, 128) + rate).abs() < 1e-12);
        assert_eq!(cal.rotation_rate(0, 128), 0.0);
    }

    #[test]
    fn translation_speed_is_scaled_and_clamped() {
        let cal = Calibration::default();
        assert!((cal.translation_speed(0.05) - 5.0).abs() < 1e-12);
        assert_eq!(cal.translation_speed(0.5), 20.0);
        assert_eq!(cal.translation_speed(0.0), 0.0);
    }

    #[test]
    fn motion_combines_both_regions() {
        let cal = Calibration::default();
        let trans = ShiftMatch {
            offset: 7,
            min_diff: 0.01,
        };
        let rot = ShiftMatch {
            offset: -2,
            min_diff: 0.3,
        };
        let m = Motion::from_matches(&cal, &trans, &rot, 100);
        assert!((m.trans_speed - 1.0).abs() < 1e-12);
        assert!((m.rot_rate - (-2.0_f64 * 50.0 / 100.0 * 10.0).to_radians()).abs() < 1e-12);
    }

    #[test]
    fn validation_rejects_bad_constants() {
        assert!(Calibration::default().validate().is_ok());
        let bad = Calibration {
            camera_hz: 0.0,
            ..Calibration::default()
        };
        assert_eq!(
            bad.validate(),
            Err(Error::InvalidCalibration("camera_hz must be positive"))
        );
        let bad = Calibration {
            camera_fov_deg: f64::NAN,
            ..Calibration::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn motion_serializes_with_named_fields() {
        let json = serde_json::to_string(&Motion::ZERO).expect("serializable");
        assert_eq!(json, r#"{"trans_speed":0.0,"rot_rate":0.0}"#);
    }
}
