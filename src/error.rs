//! 計測ライブラリのエラー型

use crate::pose::LandmarkIndex;

pub type Result<T> = std::result::Result<T, MeasurementError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    /// 必須ランドマークの visibility / presence が閾値以下
    #[error("unreliable landmarks: {}", join_names(.landmarks))]
    UnreliableLandmarks { landmarks: Vec<LandmarkIndex> },

    /// スケール基準の分母がゼロ・負・非有限
    #[error("invalid scale reference: {0}")]
    InvalidScaleReference(String),

    /// 画像サイズがゼロ・負・非有限
    #[error("invalid image size: {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },

    /// 信頼できる点から求めた長さがゼロで比率が定義できない
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("expected {expected} landmarks, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },
}

fn join_names(landmarks: &[LandmarkIndex]) -> String {
    landmarks
        .iter()
        .map(|idx| idx.name())
        .collect::<Vec<_>>()
        .join(", ")
}
