use serde::Serialize;

use crate::error::{MeasurementError, Result};
use crate::pose::{ensure_essential_landmarks, PoseLandmarks};

use super::estimate::{
    estimate_hip_width, estimate_mean_lower_body_length, estimate_shoulder_width,
    estimate_upper_body_length, estimate_waist_width,
};

/// 体型分類に使う比率
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyProportions {
    /// 肩幅 / 腰幅
    pub shr: f64,
    /// 上半身長 / 下半身長
    pub upper_lower_ratio: f64,
    /// ウエスト幅 / 腰幅
    ///
    /// ウエスト幅自体が腰幅の固定倍率なので常に 0.8。実測のWHRではない
    pub estimated_waist_hip_ratio: f64,
}

fn require_nonzero(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MeasurementError::DegenerateGeometry(format!("{} is {}", name, value)))
    }
}

/// 必須ランドマークを検証してから比率を計算する
///
/// 信頼できる点でも左右の腰が重なる（腰幅0）か、腰と足首が重なる（下半身長0）場合は
/// 比率が定義できないので `DegenerateGeometry` を返す（∞やNaNは返さない）
pub fn calculate_body_proportions(pose: &PoseLandmarks) -> Result<BodyProportions> {
    ensure_essential_landmarks(pose)?;

    let shoulder_width = estimate_shoulder_width(pose)?;
    let hip_width = require_nonzero("hip width", estimate_hip_width(pose)?)?;
    let waist_width = estimate_waist_width(pose)?;
    let upper = estimate_upper_body_length(pose)?;
    let lower = require_nonzero("lower body length", estimate_mean_lower_body_length(pose)?)?;

    Ok(BodyProportions {
        shr: shoulder_width / hip_width,
        upper_lower_ratio: upper / lower,
        estimated_waist_hip_ratio: waist_width / hip_width,
    })
}
