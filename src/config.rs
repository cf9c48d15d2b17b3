//! 데모 앱 설정
//!
//! `<config_dir>/nexus-tui/config.toml` 또는 `NEXUS_TUI_CONFIG`가 가리키는 파일.
//! 파일이 없으면 기본값, 형식이 잘못되면 `NexusError::Config`.

use crate::utils::error::{NexusError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 설정 파일 경로를 덮어쓰는 환경변수
pub const CONFIG_ENV_VAR: &str = "NEXUS_TUI_CONFIG";
const CONFIG_DIR_NAME: &str = "nexus-tui";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 테마 이름
    pub theme: String,
    /// 드롭다운 화살표 회전 시간 (ms)
    pub animation_ms: u64,
    /// 인사말 대상 ("Hello {greeting}!")
    pub greeting: String,
    /// 드롭다운 항목
    pub items: Vec<String>,
    /// `RUST_LOG`가 없을 때의 로그 필터
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            animation_ms: 150,
            greeting: "Terminal".to_string(),
            items: ["Apple", "Banana", "Coconut", "Potato"]
                .into_iter()
                .map(String::from)
                .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 설정 파일 경로 (환경변수 우선)
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV_VAR) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 기본 경로에서 로드
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 지정 경로에서 로드 (파일이 없으면 기본값)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        let config = Self::parse(&data)
            .map_err(|e| NexusError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// TOML 문자열 파싱 (빠진 필드는 기본값)
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| NexusError::Config(e.to_string()))
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}
