use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::landmark::{Landmark, PoseLandmarks};

/// ランドマークJSONの形式
///
/// `{ "landmarks": [...] }` と素の配列 `[...]` の両方を受け付ける
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LandmarkFrame {
    Object { landmarks: Vec<Landmark> },
    Bare(Vec<Landmark>),
}

impl LandmarkFrame {
    pub fn into_landmarks(self) -> Vec<Landmark> {
        match self {
            Self::Object { landmarks } | Self::Bare(landmarks) => landmarks,
        }
    }
}

pub fn parse_landmarks(json: &str) -> Result<PoseLandmarks> {
    let frame: LandmarkFrame =
        serde_json::from_str(json).context("Failed to parse landmark JSON")?;
    let pose = PoseLandmarks::from_slice(&frame.into_landmarks())?;
    Ok(pose)
}

pub fn load_landmarks<P: AsRef<Path>>(path: P) -> Result<PoseLandmarks> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read landmark file: {}", path.display()))?;
    parse_landmarks(&content)
}
