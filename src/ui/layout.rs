// Layout system - 데모 화면 레이아웃
//
// 위에서부터: 헤더 | 인사말 | 드롭다운 | 상태 | (여백) | 커맨드 바
// 최소 크기보다 작으면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 15;
/// 드롭다운 필드 최대 너비
pub const DROPDOWN_MAX_WIDTH: u16 = 40;
/// 레이블 1행 + 필드 3행
pub const DROPDOWN_HEIGHT: u16 = 4;
const H_MARGIN: u16 = 2;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 상단 헤더 (앱 이름, 테마)
    pub header: Rect,
    pub greeting: Rect,
    /// 드롭다운 (레이블 + 필드)
    pub dropdown: Rect,
    /// 선택 값 / 마지막 다이얼로그 결과
    pub status: Rect,
    /// 하단 커맨드 바
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // 헤더
                Constraint::Length(1),               // 여백
                Constraint::Length(1),               // 인사말
                Constraint::Length(1),               // 여백
                Constraint::Length(DROPDOWN_HEIGHT), // 드롭다운
                Constraint::Length(1),               // 여백
                Constraint::Length(2),               // 상태
                Constraint::Min(0),                  // 메뉴가 펼쳐질 여백
                Constraint::Length(1),               // 커맨드 바
            ])
            .split(area);

        let inset = |row: Rect, max_width: u16| Rect {
            x: row.x + H_MARGIN,
            width: row.width.saturating_sub(H_MARGIN * 2).min(max_width),
            ..row
        };

        LayoutAreas {
            header: rows[0],
            greeting: inset(rows[2], u16::MAX),
            dropdown: inset(rows[4], DROPDOWN_MAX_WIDTH),
            status: inset(rows[6], u16::MAX),
            command_bar: rows[8],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 터미널이 너무 작은지 확인
    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }
}
