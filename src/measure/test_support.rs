//! テスト用のサンプル姿勢

use crate::pose::{Landmark, LandmarkIndex, PoseLandmarks};

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// 正面立ちのサンプル
///
/// 肩幅0.3 / 腰幅0.2 / 上半身0.25 / 下半身0.4 / 耳間0.1
pub fn sample_pose() -> PoseLandmarks {
    let mut landmarks = [Landmark::new(0.5, 0.5, 0.0, 0.9, 0.95); LandmarkIndex::COUNT];
    let mut set = |idx: LandmarkIndex, x: f64, y: f64| {
        landmarks[idx as usize] = Landmark::new(x, y, 0.0, 0.9, 0.95);
    };
    set(LandmarkIndex::Nose, 0.5, 0.15);
    set(LandmarkIndex::LeftEar, 0.45, 0.15);
    set(LandmarkIndex::RightEar, 0.55, 0.15);
    set(LandmarkIndex::LeftShoulder, 0.35, 0.3);
    set(LandmarkIndex::RightShoulder, 0.65, 0.3);
    set(LandmarkIndex::LeftHip, 0.4, 0.55);
    set(LandmarkIndex::RightHip, 0.6, 0.55);
    set(LandmarkIndex::LeftKnee, 0.4, 0.75);
    set(LandmarkIndex::RightKnee, 0.6, 0.75);
    set(LandmarkIndex::LeftAnkle, 0.4, 0.95);
    set(LandmarkIndex::RightAnkle, 0.6, 0.95);
    PoseLandmarks::new(landmarks)
}
