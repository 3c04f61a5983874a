use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, Result};

/// MediaPipe Pose の 33 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    /// 配列順の全インデックス
    pub const ALL: [LandmarkIndex; Self::COUNT] = {
        use LandmarkIndex::*;
        [
            Nose, LeftEyeInner, LeftEye, LeftEyeOuter, RightEyeInner, RightEye, RightEyeOuter,
            LeftEar, RightEar, MouthLeft, MouthRight,
            LeftShoulder, RightShoulder, LeftElbow, RightElbow, LeftWrist, RightWrist,
            LeftPinky, RightPinky, LeftIndex, RightIndex, LeftThumb, RightThumb,
            LeftHip, RightHip, LeftKnee, RightKnee, LeftAnkle, RightAnkle,
            LeftHeel, RightHeel, LeftFootIndex, RightFootIndex,
        ]
    };

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// MediaPipe の定数名 (例: "LEFT_SHOULDER")
    pub fn name(self) -> &'static str {
        use LandmarkIndex::*;
        match self {
            Nose => "NOSE",
            LeftEyeInner => "LEFT_EYE_INNER",
            LeftEye => "LEFT_EYE",
            LeftEyeOuter => "LEFT_EYE_OUTER",
            RightEyeInner => "RIGHT_EYE_INNER",
            RightEye => "RIGHT_EYE",
            RightEyeOuter => "RIGHT_EYE_OUTER",
            LeftEar => "LEFT_EAR",
            RightEar => "RIGHT_EAR",
            MouthLeft => "MOUTH_LEFT",
            MouthRight => "MOUTH_RIGHT",
            LeftShoulder => "LEFT_SHOULDER",
            RightShoulder => "RIGHT_SHOULDER",
            LeftElbow => "LEFT_ELBOW",
            RightElbow => "RIGHT_ELBOW",
            LeftWrist => "LEFT_WRIST",
            RightWrist => "RIGHT_WRIST",
            LeftPinky => "LEFT_PINKY",
            RightPinky => "RIGHT_PINKY",
            LeftIndex => "LEFT_INDEX",
            RightIndex => "RIGHT_INDEX",
            LeftThumb => "LEFT_THUMB",
            RightThumb => "RIGHT_THUMB",
            LeftHip => "LEFT_HIP",
            RightHip => "RIGHT_HIP",
            LeftKnee => "LEFT_KNEE",
            RightKnee => "RIGHT_KNEE",
            LeftAnkle => "LEFT_ANKLE",
            RightAnkle => "RIGHT_ANKLE",
            LeftHeel => "LEFT_HEEL",
            RightHeel => "RIGHT_HEEL",
            LeftFootIndex => "LEFT_FOOT_INDEX",
            RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

impl std::fmt::Display for LandmarkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 画像サイズ（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// 正規化座標のまま扱うためのサイズ
    pub fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    /// 幅・高さとも正の有限値であること
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(MeasurementError::InvalidImageSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// 単一ランドマーク
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// 正規化されたX座標 (0.0〜1.0)
    pub x: f64,
    /// 正規化されたY座標 (0.0〜1.0)
    pub y: f64,
    /// 腰中点を基準とした相対深度
    #[serde(default)]
    pub z: f64,
    /// フレーム内に写っている確からしさ (0.0〜1.0)
    #[serde(default)]
    pub visibility: f64,
    /// 姿勢中に存在する確からしさ (0.0〜1.0)
    #[serde(default)]
    pub presence: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64, presence: f64) -> Self {
        Self { x, y, z, visibility, presence }
    }

    /// ピクセル座標に変換（信頼度はそのまま）
    ///
    /// zはMediaPipeの慣例どおり画像幅でスケールする
    pub fn to_pixel(&self, size: ImageSize) -> Self {
        Self {
            x: self.x * size.width,
            y: self.y * size.height,
            z: self.z * size.width,
            ..*self
        }
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            visibility: 0.0,
            presence: 0.0,
        }
    }
}

/// 33ランドマークからなる姿勢
#[derive(Debug, Clone, PartialEq)]
pub struct PoseLandmarks {
    pub landmarks: [Landmark; LandmarkIndex::COUNT],
}

impl PoseLandmarks {
    pub fn new(landmarks: [Landmark; LandmarkIndex::COUNT]) -> Self {
        Self { landmarks }
    }

    /// 外部から受け取った可変長リストから構築（33点ちょうどでなければエラー）
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let landmarks: [Landmark; LandmarkIndex::COUNT] =
            landmarks
                .try_into()
                .map_err(|_| MeasurementError::InvalidLandmarkCount {
                    expected: LandmarkIndex::COUNT,
                    actual: landmarks.len(),
                })?;
        Ok(Self::new(landmarks))
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }

    /// 全ランドマークをピクセル座標へ射影した新しい姿勢
    pub fn to_image_space(&self, size: ImageSize) -> Self {
        Self::new(self.landmarks.map(|lm| lm.to_pixel(size)))
    }

    /// 全ランドマークの平均visibility
    pub fn average_visibility(&self) -> f64 {
        let sum: f64 = self.landmarks.iter().map(|lm| lm.visibility).sum();
        sum / LandmarkIndex::COUNT as f64
    }

    /// 全ランドマークの平均presence
    pub fn average_presence(&self) -> f64 {
        let sum: f64 = self.landmarks.iter().map(|lm| lm.presence).sum();
        sum / LandmarkIndex::COUNT as f64
    }
}

impl Default for PoseLandmarks {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LandmarkIndex::COUNT],
        }
    }
}
