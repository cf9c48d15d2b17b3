use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 색상 테마
///
/// 드롭다운과 다이얼로그가 사용하는 색상 묶음입니다.
/// TOML 파일에서 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_muted: ColorDef,

    // 드롭다운
    pub surface_bg: ColorDef,
    pub field_border: ColorDef,
    pub field_focus_border: ColorDef,
    pub item_selected_bg: ColorDef,
    pub item_selected_fg: ColorDef,

    // 다이얼로그
    pub dialog_bg: ColorDef,
    pub button_bg: ColorDef,
    pub button_fg: ColorDef,
    pub button_selected_bg: ColorDef,
    pub button_selected_fg: ColorDef,
    pub input_bg: ColorDef,

    // 강조 (다이얼로그 테두리)
    pub info: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
    pub neutral: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    // 바이트 슬라이싱 전에 ASCII 확인 (비 ASCII 값은 문자 경계가 맞지 않음)
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            fg_muted: "#808080".into(),

            surface_bg: "#252526".into(),
            field_border: "#3c3c3c".into(),
            field_focus_border: "#0078d4".into(),
            item_selected_bg: "#0078d4".into(),
            item_selected_fg: "#ffffff".into(),

            dialog_bg: "#2d2d30".into(),
            button_bg: "#3c3c3c".into(),
            button_fg: "#d4d4d4".into(),
            button_selected_bg: "#0078d4".into(),
            button_selected_fg: "#ffffff".into(),
            input_bg: "#1e1e1e".into(),

            info: "#3794ff".into(),
            warning: "#cca700".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
            neutral: "#808080".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),
            fg_muted: "#6e6e6e".into(),

            surface_bg: "#f3f3f3".into(),
            field_border: "#cccccc".into(),
            field_focus_border: "#0078d4".into(),
            item_selected_bg: "#add6ff".into(),
            item_selected_fg: "#000000".into(),

            dialog_bg: "#ffffff".into(),
            button_bg: "#e5e5e5".into(),
            button_fg: "#1e1e1e".into(),
            button_selected_bg: "#0078d4".into(),
            button_selected_fg: "#ffffff".into(),
            input_bg: "#f3f3f3".into(),

            info: "#0066cc".into(),
            warning: "#bf8803".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
            neutral: "#8a8a8a".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),
            fg_muted: "#c0c0c0".into(),

            surface_bg: "#000000".into(),
            field_border: "#808080".into(),
            field_focus_border: "#00ff00".into(),
            item_selected_bg: "#00ff00".into(),
            item_selected_fg: "#000000".into(),

            dialog_bg: "#000000".into(),
            button_bg: "#333333".into(),
            button_fg: "#ffffff".into(),
            button_selected_bg: "#00ff00".into(),
            button_selected_fg: "#000000".into(),
            input_bg: "#1a1a1a".into(),

            info: "#00ffff".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
            neutral: "#c0c0c0".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current_index: usize,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_index: 0,
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current_index].1
    }

    /// 현재 테마 이름
    pub fn current_name(&self) -> &str {
        &self.available_themes[self.current_index].0
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current_index = index;
                Ok(())
            }
            None => Err(format!("theme not found: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.available_themes.len();
    }

    /// 사용 가능한 테마 목록 반환
    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        if let Some(slot) = self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = theme;
        } else {
            self.available_themes.push((name, theme));
        }
    }

    /// 디렉토리의 `*.toml` 테마 파일 로드, 로드한 테마 수 반환
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    tracing::debug!(theme = %name, "loaded custom theme");
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping invalid theme file");
                }
            }
        }

        Ok(loaded)
    }

    /// 설정 디렉토리의 테마 경로 (`<config_dir>/nexus-tui/themes`)
    pub fn config_themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nexus-tui").join("themes"))
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#fff"), Color::Reset);
    }

    #[test]
    fn test_non_ascii_hex_color_is_reset() {
        assert_eq!(parse_hex_color("#aébcd"), Color::Reset);
        assert_eq!(ColorDef::Hex("#ééé".into()).to_color(), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("Grey"), Color::Gray);
        assert_eq!(parse_named_color("nonsense"), Color::Reset);
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert_eq!(
            manager.current().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );
        assert!(manager.switch_theme("solarized").is_err());
        assert_eq!(manager.current_name(), "light");
    }

    #[test]
    fn test_theme_cycling_wraps() {
        let mut manager = ThemeManager::new();
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "light");
        manager.cycle_theme();
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "dark");
    }

    #[test]
    fn test_load_themes_from_dir() {
        let temp = TempDir::new().unwrap();
        let content = toml::to_string_pretty(&Theme::high_contrast()).unwrap();
        fs::write(temp.path().join("mono.toml"), content).unwrap();
        fs::write(temp.path().join("broken.toml"), "not = [valid").unwrap();
        fs::write(temp.path().join("readme.txt"), "ignored").unwrap();

        let mut manager = ThemeManager::new();
        let loaded = manager.load_themes_from_dir(temp.path()).unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(manager.available_themes().len(), 4);
        assert!(manager.switch_theme("mono").is_ok());
    }

    #[test]
    fn test_load_themes_from_missing_dir() {
        let mut manager = ThemeManager::new();
        let loaded = manager
            .load_themes_from_dir(Path::new("/definitely/not/here"))
            .unwrap();
        assert_eq!(loaded, 0);
    }
}
