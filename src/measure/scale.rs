use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, Result};

use super::estimate::Point2;
use super::measurements::LandmarkMeasurements;

/// ピクセル→cm 比率の基準
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "referenceType", rename_all = "lowercase")]
pub enum ScaleReference {
    /// 既知の身長と画像上の身長
    #[serde(rename_all = "camelCase")]
    Height { height_cm: f64, total_height_pixels: f64 },
    /// 既知の頭の大きさと画像上の大きさ
    #[serde(rename_all = "camelCase")]
    Head { head_size_pixels: f64, head_size_cm: f64 },
}

/// cm単位の計測値
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CmMeasurements {
    pub shoulder_width: f64,
    pub hip_width: f64,
    pub waist_width: f64,
    pub waist_position: Point2,
    pub upper_body_length: f64,
    pub lower_body_length: f64,
    pub total_height: f64,
}

fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeasurementError::InvalidScaleReference(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

pub fn calculate_pixel_to_cm_ratio(reference: &ScaleReference) -> Result<f64> {
    match *reference {
        ScaleReference::Height { height_cm, total_height_pixels } => {
            let cm = require_positive("heightCm", height_cm)?;
            let px = require_positive("totalHeightPixels", total_height_pixels)?;
            Ok(cm / px)
        }
        ScaleReference::Head { head_size_pixels, head_size_cm } => {
            let cm = require_positive("headSizeCm", head_size_cm)?;
            let px = require_positive("headSizePixels", head_size_pixels)?;
            Ok(cm / px)
        }
    }
}

/// 全フィールドに比率を掛けてcmへ変換
pub fn convert_measurements_to_cm(
    measurements: &LandmarkMeasurements,
    ratio: f64,
) -> CmMeasurements {
    CmMeasurements {
        shoulder_width: measurements.shoulder_width * ratio,
        hip_width: measurements.hip_width * ratio,
        waist_width: measurements.waist_width * ratio,
        waist_position: Point2::new(
            measurements.waist_position.x * ratio,
            measurements.waist_position.y * ratio,
        ),
        upper_body_length: measurements.upper_body_length * ratio,
        lower_body_length: measurements.lower_body_length * ratio,
        total_height: measurements.total_height * ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::test_support::approx_eq;

    fn sample_measurements() -> LandmarkMeasurements {
        LandmarkMeasurements {
            shoulder_width: 300.0,
            hip_width: 200.0,
            waist_width: 160.0,
            waist_position: Point2::new(500.0, 450.0),
            upper_body_length: 250.0,
            lower_body_length: 400.0,
            total_height: 877.5,
        }
    }

    fn scaled(m: &LandmarkMeasurements, k: f64) -> LandmarkMeasurements {
        LandmarkMeasurements {
            shoulder_width: m.shoulder_width * k,
            hip_width: m.hip_width * k,
            waist_width: m.waist_width * k,
            waist_position: Point2::new(m.waist_position.x * k, m.waist_position.y * k),
            upper_body_length: m.upper_body_length * k,
            lower_body_length: m.lower_body_length * k,
            total_height: m.total_height * k,
        }
    }

    #[test]
    fn test_height_reference() {
        let ratio = calculate_pixel_to_cm_ratio(&ScaleReference::Height {
            height_cm: 170.0,
            total_height_pixels: 1000.0,
        })
        .unwrap();
        assert_eq!(ratio, 0.17);
    }

    #[test]
    fn test_head_reference() {
        let ratio = calculate_pixel_to_cm_ratio(&ScaleReference::Head {
            head_size_pixels: 100.0,
            head_size_cm: 22.0,
        })
        .unwrap();
        assert_eq!(ratio, 0.22);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let height = ScaleReference::Height { height_cm: 170.0, total_height_pixels: 0.0 };
        let head = ScaleReference::Head { head_size_pixels: 0.0, head_size_cm: 22.0 };
        for reference in [height, head] {
            match calculate_pixel_to_cm_ratio(&reference) {
                Err(MeasurementError::InvalidScaleReference(msg)) => {
                    assert!(msg.contains("Pixels"), "{}", msg);
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(calculate_pixel_to_cm_ratio(&ScaleReference::Height {
            height_cm: 170.0,
            total_height_pixels: -10.0,
        })
        .is_err());
        assert!(calculate_pixel_to_cm_ratio(&ScaleReference::Head {
            head_size_pixels: f64::NAN,
            head_size_cm: 22.0,
        })
        .is_err());
        assert!(calculate_pixel_to_cm_ratio(&ScaleReference::Height {
            height_cm: 0.0,
            total_height_pixels: 1000.0,
        })
        .is_err());
    }

    #[test]
    fn test_reference_json_shape() {
        let reference: ScaleReference = serde_json::from_str(
            r#"{"referenceType": "height", "heightCm": 170, "totalHeightPixels": 1000}"#,
        )
        .unwrap();
        assert_eq!(
            reference,
            ScaleReference::Height { height_cm: 170.0, total_height_pixels: 1000.0 }
        );

        let reference: ScaleReference = serde_json::from_str(
            r#"{"referenceType": "head", "headSizePixels": 100, "headSizeCm": 22}"#,
        )
        .unwrap();
        assert_eq!(calculate_pixel_to_cm_ratio(&reference).unwrap(), 0.22);
    }

    #[test]
    fn test_convert_to_cm() {
        let cm = convert_measurements_to_cm(&sample_measurements(), 0.2);
        assert!(approx_eq(cm.shoulder_width, 60.0, 1e-9));
        assert!(approx_eq(cm.hip_width, 40.0, 1e-9));
        assert!(approx_eq(cm.waist_width, 32.0, 1e-9));
        assert!(approx_eq(cm.waist_position.x, 100.0, 1e-9));
        assert!(approx_eq(cm.waist_position.y, 90.0, 1e-9));
        assert!(approx_eq(cm.upper_body_length, 50.0, 1e-9));
        assert!(approx_eq(cm.lower_body_length, 80.0, 1e-9));
        assert!(approx_eq(cm.total_height, 175.5, 1e-9));
    }

    #[test]
    fn test_convert_is_linear() {
        let m = sample_measurements();
        let ratio = 0.17;
        for k in [0.5, 2.0, 3.25] {
            let base = convert_measurements_to_cm(&m, ratio);
            let from_scaled = convert_measurements_to_cm(&scaled(&m, k), ratio);
            assert!(approx_eq(from_scaled.shoulder_width, base.shoulder_width * k, 1e-9));
            assert!(approx_eq(from_scaled.waist_position.y, base.waist_position.y * k, 1e-9));
            assert!(approx_eq(from_scaled.total_height, base.total_height * k, 1e-9));
        }
    }
}
