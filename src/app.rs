use nexus_tui::config::Config;
use nexus_tui::ui::{DialogKind, DropdownState, LayoutManager, Theme, ThemeManager};
use nexus_tui::utils::error::{NexusError, Result};
use std::path::Path;

mod dialogs;
mod input;


/// 드롭다운 레이블
pub const DROPDOWN_LABEL: &str = "Fruit";
/// 선택 전 필드 표시
pub const PLACEHOLDER: &str = "Please choose";

/// 데모 앱 상태
///
/// 선택 값과 표시 중인 다이얼로그는 앱이 소유하고,
/// 컴포넌트는 표시 상태(`DropdownState`, `DialogKind` 내부 상태)만 가진다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 인사말 대상 ("Hello {greeting}!")
    pub greeting: String,
    /// 드롭다운 항목
    pub items: Vec<String>,
    /// 현재 선택된 항목
    pub selected: Option<String>,
    pub dropdown: DropdownState,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 마지막 상호작용 결과 (상태 행 표시)
    pub last_event: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::new(),
            greeting: config.greeting.clone(),
            items: config.items.clone(),
            selected: None,
            dropdown: DropdownState::new().with_rotation(config.animation_duration()),
            dialog: None,
            last_event: None,
        };

        if let Some(dir) = ThemeManager::config_themes_dir() {
            if let Err(err) = app.load_custom_themes(&dir) {
                tracing::warn!(error = %err, "custom themes not loaded");
            }
        }
        if let Err(err) = app.theme_manager.switch_theme(&config.theme) {
            tracing::warn!(error = %err, "falling back to default theme");
        }
        app
    }

    /// 테마 디렉토리의 사용자 테마 로드
    pub fn load_custom_themes(&mut self, dir: &Path) -> Result<usize> {
        let loaded = self
            .theme_manager
            .load_themes_from_dir(dir)
            .map_err(|e| NexusError::Theme(format!("{}: {}", dir.display(), e)))?;
        if loaded > 0 {
            tracing::info!(count = loaded, "custom themes loaded");
        }
        Ok(loaded)
    }

    pub fn theme(&self) -> &Theme {
        self.theme_manager.current()
    }

    /// 다음 테마로 전환 (F2)
    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        tracing::debug!(theme = self.theme_manager.current_name(), "theme switched");
    }

    /// 드롭다운 선택 결과 반영
    pub fn select_item(&mut self, item: String) {
        tracing::info!(item = %item, "item selected");
        self.last_event = Some(format!("Selected {}", item));
        self.selected = Some(item);
    }

    pub fn greeting_line(&self) -> String {
        format!("Hello {}!", self.greeting)
    }

    /// 렌더 루프가 짧은 간격으로 다시 그려야 하는지
    pub fn is_animating(&self) -> bool {
        self.dropdown.is_animating()
    }

    /// 종료
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
