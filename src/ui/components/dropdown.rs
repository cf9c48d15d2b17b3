// Dropdown selector - 드롭다운 선택 컴포넌트
//
// 레이블 + 선택 필드 + 항목 메뉴. 선택값은 호스트가 소유하고,
// 컴포넌트는 열림/닫힘, 측정 너비, 화살표 회전만 관리한다.

mod indicator;

pub use indicator::{
    glyph_for_angle, IndicatorAnimation, CLOSED_ANGLE, DEFAULT_ROTATION, OPEN_ANGLE,
};

use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, StatefulWidget, Widget},
};
use std::time::{Duration, Instant};

/// 선택 필드 높이 (테두리 포함)
pub const FIELD_HEIGHT: u16 = 3;

/// 드롭다운 상태
///
/// 호스트가 프레임 사이에 보관하고, 렌더링 시 필드 너비와 영역이 갱신된다.
#[derive(Debug, Clone)]
pub struct DropdownState {
    is_open: bool,
    /// 마지막 렌더링에서 측정한 필드 너비
    measured_width: u16,
    /// 키보드 하이라이트 항목
    highlighted: usize,
    /// 메뉴 스크롤 시작 인덱스
    scroll_offset: usize,
    focused: bool,
    indicator: IndicatorAnimation,
    field_area: Rect,
    menu_area: Option<Rect>,
}

impl Default for DropdownState {
    fn default() -> Self {
        Self {
            is_open: false,
            measured_width: 0,
            highlighted: 0,
            scroll_offset: 0,
            focused: false,
            indicator: IndicatorAnimation::default(),
            field_area: Rect::default(),
            menu_area: None,
        }
    }
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 화살표 회전 시간 지정
    pub fn with_rotation(mut self, duration: Duration) -> Self {
        self.indicator.set_duration(duration);
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn measured_width(&self) -> u16 {
        self.measured_width
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn field_area(&self) -> Rect {
        self.field_area
    }

    /// 마지막으로 그려진 메뉴 영역 (닫혀 있으면 None)
    pub fn menu_area(&self) -> Option<Rect> {
        self.menu_area
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// 메뉴 열기
    pub fn open(&mut self) {
        self.set_open(true, Instant::now());
    }

    /// 메뉴 닫기
    pub fn close(&mut self) {
        self.set_open(false, Instant::now());
    }

    /// 필드 클릭과 동일: 열림/닫힘 전환
    pub fn toggle(&mut self) {
        self.set_open(!self.is_open, Instant::now());
    }

    /// 메뉴가 닫기를 요청 (바깥 클릭, Esc)
    pub fn dismiss(&mut self) {
        if self.is_open {
            tracing::debug!("dropdown dismissed");
            self.close();
        }
    }

    fn set_open(&mut self, open: bool, now: Instant) {
        if self.is_open == open {
            return;
        }
        self.is_open = open;
        if open {
            self.highlighted = 0;
            self.scroll_offset = 0;
        } else {
            self.menu_area = None;
        }
        let target = if open { OPEN_ANGLE } else { CLOSED_ANGLE };
        self.indicator.animate_to(target, now);
        tracing::debug!(open, "dropdown toggled");
    }

    /// 항목 선택: 메뉴를 닫은 뒤 콜백을 한 번 호출
    ///
    /// 메뉴가 닫혀 있거나 인덱스가 범위를 벗어나면 아무 일도 하지 않고 false.
    pub fn select<T>(
        &mut self,
        items: &[T],
        index: usize,
        on_item_clicked: impl FnOnce(&T),
    ) -> bool {
        if !self.is_open {
            return false;
        }
        let Some(item) = items.get(index) else {
            return false;
        };
        self.close();
        tracing::debug!(index, "dropdown item selected");
        on_item_clicked(item);
        true
    }

    /// 다음 항목 하이라이트 (순환)
    pub fn next_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.highlighted = (self.highlighted + 1) % item_count;
        }
    }

    /// 이전 항목 하이라이트 (순환)
    pub fn prev_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.highlighted = if self.highlighted == 0 {
                item_count - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    /// 키 입력 처리, 처리했으면 true
    pub fn handle_key<T>(
        &mut self,
        key: KeyEvent,
        items: &[T],
        on_item_clicked: impl FnOnce(&T),
    ) -> bool {
        if !self.is_open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Esc => self.dismiss(),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Down => self.next_item(items.len()),
            KeyCode::Up => self.prev_item(items.len()),
            KeyCode::Enter => {
                if items.is_empty() {
                    self.close();
                } else {
                    self.select(items, self.highlighted, on_item_clicked);
                }
            }
            _ => return false,
        }
        true
    }

    /// 마우스 입력 처리, 처리했으면 true
    ///
    /// 마지막 렌더링의 필드/메뉴 영역을 기준으로 판정한다.
    pub fn handle_mouse<T>(
        &mut self,
        mouse: MouseEvent,
        items: &[T],
        on_item_clicked: impl FnOnce(&T),
    ) -> bool {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(self.field_area, column, row) {
                    self.toggle();
                    return true;
                }
                if !self.is_open {
                    return false;
                }
                match self.menu_area {
                    Some(menu) if contains(menu, column, row) => {
                        if let Some(index) = self.item_index_at(menu, row, items.len()) {
                            self.select(items, index, on_item_clicked);
                        }
                    }
                    _ => self.dismiss(),
                }
                true
            }
            MouseEventKind::Moved => {
                let Some(menu) = self.menu_area.filter(|_| self.is_open) else {
                    return false;
                };
                if !contains(menu, column, row) {
                    return false;
                }
                if let Some(index) = self.item_index_at(menu, row, items.len()) {
                    self.highlighted = index;
                }
                true
            }
            _ => false,
        }
    }

    /// 메뉴 행 -> 항목 인덱스 (테두리 행은 None)
    fn item_index_at(&self, menu: Rect, row: u16, item_count: usize) -> Option<usize> {
        if row <= menu.y || row + 1 >= menu.y + menu.height {
            return None;
        }
        let index = self.scroll_offset + (row - menu.y - 1) as usize;
        (index < item_count).then_some(index)
    }

    /// 현재 화살표 각도
    pub fn indicator_angle(&self) -> f32 {
        self.indicator.angle_at(Instant::now())
    }

    pub fn indicator_angle_at(&self, now: Instant) -> f32 {
        self.indicator.angle_at(now)
    }

    /// 화살표 회전 중인지 (렌더 루프가 프레임을 더 그려야 하는지)
    pub fn is_animating(&self) -> bool {
        self.indicator.is_running(Instant::now())
    }

    /// 하이라이트 항목이 보이도록 스크롤 보정
    fn ensure_visible(&mut self, visible_rows: usize, item_count: usize) {
        if item_count == 0 || visible_rows == 0 {
            self.scroll_offset = 0;
            return;
        }
        self.highlighted = self.highlighted.min(item_count - 1);
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.highlighted + 1 - visible_rows;
        }
        self.scroll_offset = self.scroll_offset.min(item_count.saturating_sub(visible_rows));
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// 드롭다운 위젯
///
/// `content`는 필드 표시용으로 현재 값(없으면 None)과 함께 한 번,
/// 열린 메뉴에서는 항목마다 한 번 호출된다.
///
/// 열린 메뉴는 `area` 아래(공간이 부족하면 위) 행에 겹쳐 그려지므로
/// 주변 위젯보다 나중에 렌더링해야 한다.
pub struct Dropdown<'a, T, F>
where
    F: Fn(Option<&'a T>) -> Line<'a>,
{
    items: &'a [T],
    label: Option<&'a str>,
    pre_selected: Option<&'a T>,
    content: F,
    bg_color: Color,
    fg_color: Color,
    label_color: Color,
    border_color: Color,
    focus_border_color: Color,
    selected_bg: Color,
    selected_fg: Color,
}

impl<'a, T, F> Dropdown<'a, T, F>
where
    F: Fn(Option<&'a T>) -> Line<'a>,
{
    pub fn new(items: &'a [T], content: F) -> Self {
        Self {
            items,
            label: None,
            pre_selected: None,
            content,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            label_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(60, 60, 60),
            focus_border_color: Color::Rgb(0, 120, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// 필드에 표시할 값 (표시 전용)
    pub fn pre_selected(mut self, value: Option<&'a T>) -> Self {
        self.pre_selected = value;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.surface_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.label_color = theme.fg_muted.to_color();
        self.border_color = theme.field_border.to_color();
        self.focus_border_color = theme.field_focus_border.to_color();
        self.selected_bg = theme.item_selected_bg.to_color();
        self.selected_fg = theme.item_selected_fg.to_color();
        self
    }

    /// 레이블 + 필드가 차지하는 높이
    pub fn height(&self) -> u16 {
        FIELD_HEIGHT + u16::from(self.label.is_some())
    }

    fn render_field(&self, field: Rect, buf: &mut Buffer, state: &DropdownState) {
        let border_color = if state.focused || state.is_open {
            self.focus_border_color
        } else {
            self.border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color).fg(self.fg_color));
        let inner = block.inner(field);
        block.render(field, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        // 현재 값 (없으면 안내 문구)
        let line = (self.content)(self.pre_selected);
        buf.set_line(inner.x + 1, inner.y, &line, inner.width - 3);

        let glyph = glyph_for_angle(state.indicator_angle());
        buf.set_string(
            inner.x + inner.width - 1,
            inner.y,
            glyph.to_string(),
            Style::default().fg(border_color).bg(self.bg_color),
        );
    }

    /// 메뉴 위치: 필드 바로 아래, 부족하면 위
    fn menu_rect(&self, field: Rect, width: u16, bounds: Rect) -> Option<Rect> {
        let wanted = self.items.len().saturating_add(2).min(u16::MAX as usize) as u16;
        let below_top = field.y + field.height;
        let below = (bounds.y + bounds.height).saturating_sub(below_top);
        let above = field.y.saturating_sub(bounds.y);

        let (y, height) = if below >= wanted || below >= above {
            (below_top, wanted.min(below))
        } else {
            let height = wanted.min(above);
            (field.y - height, height)
        };
        if height < 2 || width < 2 {
            return None;
        }

        let x = field.x.max(bounds.x);
        Some(Rect {
            x,
            y,
            width: width.min((bounds.x + bounds.width).saturating_sub(x)),
            height,
        })
    }

    fn render_menu(&self, menu: Rect, buf: &mut Buffer, state: &mut DropdownState) {
        Clear.render(menu, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.focus_border_color))
            .style(Style::default().bg(self.bg_color).fg(self.fg_color));
        let inner = block.inner(menu);
        block.render(menu, buf);

        let visible_rows = inner.height as usize;
        state.ensure_visible(visible_rows, self.items.len());

        let visible = self
            .items
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(visible_rows);
        for (row, (index, item)) in visible.enumerate() {
            let row_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            };
            let style = if index == state.highlighted {
                Style::default().bg(self.selected_bg).fg(self.selected_fg)
            } else {
                Style::default().bg(self.bg_color).fg(self.fg_color)
            };
            buf.set_style(row_area, style);

            let line = (self.content)(Some(item));
            buf.set_line(
                row_area.x + 1,
                row_area.y,
                &line,
                row_area.width.saturating_sub(2),
            );
        }
    }
}

impl<'a, T, F> StatefulWidget for Dropdown<'a, T, F>
where
    F: Fn(Option<&'a T>) -> Line<'a>,
{
    type State = DropdownState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DropdownState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut field_y = area.y;
        if let Some(label) = self.label {
            buf.set_stringn(
                area.x,
                area.y,
                label,
                area.width as usize,
                Style::default().fg(self.label_color).bg(self.bg_color),
            );
            field_y += 1;
        }

        let field = Rect {
            x: area.x,
            y: field_y,
            width: area.width,
            height: FIELD_HEIGHT.min((area.y + area.height).saturating_sub(field_y)),
        };

        // 레이아웃 측정: 메뉴보다 먼저 갱신해 열린 상태에서도 너비를 따라간다
        state.measured_width = field.width;
        state.field_area = field;

        self.render_field(field, buf, state);

        state.menu_area = if state.is_open {
            self.menu_rect(field, state.measured_width, buf.area)
        } else {
            None
        };
        if let Some(menu) = state.menu_area {
            self.render_menu(menu, buf, state);
        }
    }
}
