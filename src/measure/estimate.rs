use serde::Serialize;

use crate::error::Result;
use crate::pose::{ensure_reliable, LandmarkIndex, PoseLandmarks};

/// 肩中点→腰中点のうち、ウエストを置く位置の割合
pub const WAIST_POSITION_RATIO: f64 = 0.6;
/// ウエスト幅 = 腰幅 × この係数（33点モデルにウエストのランドマークはない）
pub const WAIST_TO_HIP_RATIO: f64 = 0.8;
/// 肩〜足首の長さに対する頭頸部＋足首下の補正割合
pub const HEAD_CORRECTION_FACTOR: f64 = 0.35;

/// 左右の指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn hip(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftHip,
            Side::Right => LandmarkIndex::RightHip,
        }
    }

    fn ankle(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftAnkle,
            Side::Right => LandmarkIndex::RightAnkle,
        }
    }
}

/// 2D座標
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// self から other へ t の割合だけ進んだ点
    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        Point2::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

fn point(pose: &PoseLandmarks, index: LandmarkIndex) -> Point2 {
    let lm = pose.get(index);
    Point2::new(lm.x, lm.y)
}

const SHOULDERS: [LandmarkIndex; 2] = [LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder];
const HIPS: [LandmarkIndex; 2] = [LandmarkIndex::LeftHip, LandmarkIndex::RightHip];
const TORSO: [LandmarkIndex; 4] = [
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
];
const TORSO_AND_LEGS: [LandmarkIndex; 6] = [
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

fn shoulder_mid(pose: &PoseLandmarks) -> Point2 {
    point(pose, LandmarkIndex::LeftShoulder).midpoint(&point(pose, LandmarkIndex::RightShoulder))
}

fn hip_mid(pose: &PoseLandmarks) -> Point2 {
    point(pose, LandmarkIndex::LeftHip).midpoint(&point(pose, LandmarkIndex::RightHip))
}

/// 肩幅（左右の肩の距離）
pub fn estimate_shoulder_width(pose: &PoseLandmarks) -> Result<f64> {
    ensure_reliable(pose, &SHOULDERS)?;
    let left = point(pose, LandmarkIndex::LeftShoulder);
    Ok(left.distance(&point(pose, LandmarkIndex::RightShoulder)))
}

/// 腰幅（左右の腰の距離）
pub fn estimate_hip_width(pose: &PoseLandmarks) -> Result<f64> {
    ensure_reliable(pose, &HIPS)?;
    Ok(point(pose, LandmarkIndex::LeftHip).distance(&point(pose, LandmarkIndex::RightHip)))
}

/// ウエスト位置
///
/// 肩中点から腰中点へ 60% 進んだ点（ウエストは腰寄り）
pub fn estimate_waist_position(pose: &PoseLandmarks) -> Result<Point2> {
    ensure_reliable(pose, &TORSO)?;
    Ok(shoulder_mid(pose).lerp(&hip_mid(pose), WAIST_POSITION_RATIO))
}

/// ウエスト幅の近似値（腰幅の 80%）
///
/// 実測値ではない。下流の体型分類がこの定数に依存するので係数は変えないこと
pub fn estimate_waist_width(pose: &PoseLandmarks) -> Result<f64> {
    Ok(WAIST_TO_HIP_RATIO * estimate_hip_width(pose)?)
}

/// 上半身の長さ（肩中点→腰中点）
pub fn estimate_upper_body_length(pose: &PoseLandmarks) -> Result<f64> {
    ensure_reliable(pose, &TORSO)?;
    Ok(shoulder_mid(pose).distance(&hip_mid(pose)))
}

/// 下半身の長さ（指定側の腰→足首）
pub fn estimate_lower_body_length(pose: &PoseLandmarks, side: Side) -> Result<f64> {
    ensure_reliable(pose, &[side.hip(), side.ankle()])?;
    Ok(point(pose, side.hip()).distance(&point(pose, side.ankle())))
}

/// 左右の下半身長の平均
pub fn estimate_mean_lower_body_length(pose: &PoseLandmarks) -> Result<f64> {
    let left = estimate_lower_body_length(pose, Side::Left)?;
    let right = estimate_lower_body_length(pose, Side::Right)?;
    Ok((left + right) / 2.0)
}

/// 身長の推定値
///
/// 肩〜足首は頭頸部と足首から下を含まないため、
/// (上半身 + 下半身) × HEAD_CORRECTION_FACTOR を加算する
pub fn estimate_total_height(pose: &PoseLandmarks) -> Result<f64> {
    ensure_reliable(pose, &TORSO_AND_LEGS)?;
    let span = estimate_upper_body_length(pose)? + estimate_mean_lower_body_length(pose)?;
    Ok(span + span * HEAD_CORRECTION_FACTOR)
}

/// 頭の幅（左右の耳の距離）。スケール基準の補助に使う
pub fn estimate_head_size_pixels(pose: &PoseLandmarks) -> Result<f64> {
    ensure_reliable(pose, &[LandmarkIndex::LeftEar, LandmarkIndex::RightEar])?;
    Ok(point(pose, LandmarkIndex::LeftEar).distance(&point(pose, LandmarkIndex::RightEar)))
}
