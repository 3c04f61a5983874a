use serde::Serialize;

use crate::error::Result;
use crate::pose::{ImageSize, PoseLandmarks};

use super::estimate::estimate_head_size_pixels;
use super::measurements::{extract_landmark_measurements, LandmarkMeasurements};
use super::proportions::{calculate_body_proportions, BodyProportions};
use super::scale::{
    calculate_pixel_to_cm_ratio, convert_measurements_to_cm, CmMeasurements, ScaleReference,
};

/// 実寸が分かっている基準（画像上の大きさは計測から求める）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnownScale {
    /// 身長 (cm)。画像上の身長は推定身長を使う
    Height { height_cm: f64 },
    /// 耳間の幅 (cm)。画像上の大きさは左右の耳の距離を使う
    Head { head_size_cm: f64 },
}

/// 1フレーム分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyReport {
    /// 画像座標系（ピクセル）での計測値
    pub measurements: LandmarkMeasurements,
    pub proportions: BodyProportions,
    /// ピクセル→cm 比率（基準なしの場合None）
    pub scale_ratio: Option<f64>,
    pub centimeters: Option<CmMeasurements>,
    pub average_visibility: f64,
}

/// 正規化ランドマークから、ピクセル計測・比率・cm換算までをまとめて行う
///
/// 画像サイズが正の有限値でなければ計測前に `InvalidImageSize` を返す
pub fn measure_body(
    pose: &PoseLandmarks,
    image_size: ImageSize,
    known: Option<KnownScale>,
) -> Result<BodyReport> {
    image_size.validate()?;
    let pixel_pose = pose.to_image_space(image_size);
    let measurements = extract_landmark_measurements(&pixel_pose)?;
    let proportions = calculate_body_proportions(&pixel_pose)?;

    let reference = match known {
        None => None,
        Some(KnownScale::Height { height_cm }) => Some(ScaleReference::Height {
            height_cm,
            total_height_pixels: measurements.total_height,
        }),
        Some(KnownScale::Head { head_size_cm }) => Some(ScaleReference::Head {
            head_size_pixels: estimate_head_size_pixels(&pixel_pose)?,
            head_size_cm,
        }),
    };

    let scale_ratio = reference
        .as_ref()
        .map(calculate_pixel_to_cm_ratio)
        .transpose()?;
    let centimeters = scale_ratio.map(|ratio| convert_measurements_to_cm(&measurements, ratio));

    Ok(BodyReport {
        measurements,
        proportions,
        scale_ratio,
        centimeters,
        average_visibility: pose.average_visibility(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasurementError;
    use crate::measure::test_support::{approx_eq, sample_pose};
    use crate::pose::LandmarkIndex;

    #[test]
    fn test_report_without_scale() {
        let report = measure_body(&sample_pose(), ImageSize::unit(), None).unwrap();
        assert!(report.scale_ratio.is_none());
        assert!(report.centimeters.is_none());
        assert!(approx_eq(report.proportions.shr, 1.5, 1e-9));
        assert!(approx_eq(report.measurements.hip_width, 0.2, 1e-9));
    }

    #[test]
    fn test_report_height_scale() {
        let report = measure_body(
            &sample_pose(),
            ImageSize::new(1000.0, 1000.0),
            Some(KnownScale::Height { height_cm: 175.5 }),
        )
        .unwrap();

        let ratio = report.scale_ratio.unwrap();
        assert!(approx_eq(ratio, 0.2, 1e-9));
        let cm = report.centimeters.unwrap();
        assert!(approx_eq(cm.total_height, 175.5, 1e-9));
        assert!(approx_eq(cm.shoulder_width, 60.0, 1e-6));
        assert!(approx_eq(cm.lower_body_length, 80.0, 1e-6));
    }

    #[test]
    fn test_report_head_scale() {
        let report = measure_body(
            &sample_pose(),
            ImageSize::new(1000.0, 1000.0),
            Some(KnownScale::Head { head_size_cm: 15.0 }),
        )
        .unwrap();

        // 耳間 100px → 0.15 cm/px
        assert!(approx_eq(report.scale_ratio.unwrap(), 0.15, 1e-9));
        assert!(approx_eq(report.centimeters.unwrap().hip_width, 30.0, 1e-6));
    }

    #[test]
    fn test_report_head_scale_needs_ears() {
        let mut pose = sample_pose();
        pose.landmarks[LandmarkIndex::RightEar as usize].visibility = 0.1;

        assert!(measure_body(&pose, ImageSize::unit(), None).is_ok());
        let known = Some(KnownScale::Head { head_size_cm: 15.0 });
        let err = measure_body(&pose, ImageSize::unit(), known).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::UnreliableLandmarks { landmarks: vec![LandmarkIndex::RightEar] }
        );
    }

    #[test]
    fn test_report_rejects_zero_image_width() {
        let err = measure_body(&sample_pose(), ImageSize::new(0.0, 1000.0), None).unwrap_err();
        assert_eq!(err, MeasurementError::InvalidImageSize { width: 0.0, height: 1000.0 });

        let err = measure_body(
            &sample_pose(),
            ImageSize::new(1000.0, f64::NAN),
            Some(KnownScale::Height { height_cm: 170.0 }),
        )
        .unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidImageSize { .. }));
    }

    #[test]
    fn test_report_invalid_known_scale() {
        let err = measure_body(
            &sample_pose(),
            ImageSize::unit(),
            Some(KnownScale::Height { height_cm: 0.0 }),
        )
        .unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidScaleReference(_)));
    }

    #[test]
    fn test_report_unreliable_pose() {
        let mut pose = sample_pose();
        pose.landmarks[LandmarkIndex::LeftAnkle as usize].visibility = 0.3;
        let err = measure_body(&pose, ImageSize::unit(), None).unwrap_err();
        assert!(matches!(err, MeasurementError::UnreliableLandmarks { .. }));
    }
}
