use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::measure::KnownScale;
use crate::pose::ImageSize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub measure: MeasureConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MeasureConfig {
    /// 画像幅（ピクセル）。1.0なら正規化座標のまま計測
    #[serde(default = "default_image_size")]
    pub image_width: f64,
    /// 画像高さ（ピクセル）
    #[serde(default = "default_image_size")]
    pub image_height: f64,
}

/// cm換算の基準
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    #[default]
    None,
    Height,
    Head,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScaleConfig {
    #[serde(default)]
    pub reference: ReferenceKind,
    /// 身長（cm）
    #[serde(default = "default_height_cm")]
    pub height_cm: f64,
    /// 耳間の幅（cm）
    #[serde(default = "default_head_size_cm")]
    pub head_size_cm: f64,
}

fn default_image_size() -> f64 { 1.0 }
fn default_height_cm() -> f64 { 170.0 }
fn default_head_size_cm() -> f64 { 15.0 }

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            image_width: default_image_size(),
            image_height: default_image_size(),
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceKind::default(),
            height_cm: default_height_cm(),
            head_size_cm: default_head_size_cm(),
        }
    }
}

impl MeasureConfig {
    pub fn image_size(&self) -> ImageSize {
        ImageSize::new(self.image_width, self.image_height)
    }
}

impl ScaleConfig {
    pub fn known_scale(&self) -> Option<KnownScale> {
        match self.reference {
            ReferenceKind::None => None,
            ReferenceKind::Height => Some(KnownScale::Height { height_cm: self.height_cm }),
            ReferenceKind::Head => Some(KnownScale::Head { head_size_cm: self.head_size_cm }),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config
            .measure
            .image_size()
            .validate()
            .context("Invalid [measure] section")?;
        Ok(config)
    }

    /// 読めなければデフォルト設定で続行
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config: {:#} (using defaults)", e);
                Self::default()
            }
        }
    }
}
