use crate::error::{MeasurementError, Result};

use super::landmark::{Landmark, LandmarkIndex, PoseLandmarks};

/// visibility / presence の閾値（これを超えた場合のみ信頼する）
pub const RELIABILITY_THRESHOLD: f64 = 0.5;

/// 計測の可否を決める必須ランドマーク（肩・腰・膝・足首の左右）
pub const ESSENTIAL_LANDMARKS: [LandmarkIndex; 8] = [
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
    LandmarkIndex::LeftKnee,
    LandmarkIndex::RightKnee,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

/// visibility と presence の両方が閾値を超えているか
pub fn is_reliable_landmark(point: &Landmark) -> bool {
    point.visibility > RELIABILITY_THRESHOLD && point.presence > RELIABILITY_THRESHOLD
}

/// 必須ランドマークがすべて信頼できるか
pub fn are_essential_landmarks_reliable(pose: &PoseLandmarks) -> bool {
    ESSENTIAL_LANDMARKS
        .iter()
        .all(|&idx| is_reliable_landmark(pose.get(idx)))
}

/// 指定ランドマークがすべて信頼できることを確認し、だめなら該当点を列挙したエラーを返す
pub fn ensure_reliable(pose: &PoseLandmarks, required: &[LandmarkIndex]) -> Result<()> {
    let unreliable: Vec<LandmarkIndex> = required
        .iter()
        .copied()
        .filter(|&idx| !is_reliable_landmark(pose.get(idx)))
        .collect();

    if unreliable.is_empty() {
        Ok(())
    } else {
        Err(MeasurementError::UnreliableLandmarks { landmarks: unreliable })
    }
}

/// 集約関数の入口で使うゲート
pub fn ensure_essential_landmarks(pose: &PoseLandmarks) -> Result<()> {
    ensure_reliable(pose, &ESSENTIAL_LANDMARKS)
}
