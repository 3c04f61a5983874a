use serde::Serialize;

use crate::error::Result;
use crate::pose::{ensure_essential_landmarks, PoseLandmarks};

use super::estimate::{
    estimate_hip_width, estimate_mean_lower_body_length, estimate_shoulder_width,
    estimate_total_height, estimate_upper_body_length, estimate_waist_position,
    estimate_waist_width, Point2,
};

/// ランドマークから求めた体の計測値
///
/// 単位は入力座標系に従う（正規化座標なら正規化単位、ピクセル座標ならピクセル）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandmarkMeasurements {
    pub shoulder_width: f64,
    pub hip_width: f64,
    pub waist_width: f64,
    pub waist_position: Point2,
    pub upper_body_length: f64,
    /// 左右の腰→足首の平均
    pub lower_body_length: f64,
    pub total_height: f64,
}

/// 必須ランドマークを検証してから全推定値をまとめて計算する
///
/// 検証に失敗した場合は部分的な結果を返さずエラーにする
pub fn extract_landmark_measurements(pose: &PoseLandmarks) -> Result<LandmarkMeasurements> {
    ensure_essential_landmarks(pose)?;

    Ok(LandmarkMeasurements {
        shoulder_width: estimate_shoulder_width(pose)?,
        hip_width: estimate_hip_width(pose)?,
        waist_width: estimate_waist_width(pose)?,
        waist_position: estimate_waist_position(pose)?,
        upper_body_length: estimate_upper_body_length(pose)?,
        lower_body_length: estimate_mean_lower_body_length(pose)?,
        total_height: estimate_total_height(pose)?,
    })
}
