use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

impl App {
    /// 키 입력 분기: 다이얼로그 > 드롭다운 > 전역 단축키
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(dialog) = self.dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        if key.code == KeyCode::Tab {
            self.toggle_dropdown_focus();
            return;
        }

        if self.dropdown.is_focused() {
            let mut picked = None;
            let handled = self
                .dropdown
                .handle_key(key, &self.items, |item| picked = Some(item.clone()));
            if let Some(item) = picked {
                self.select_item(item);
            }
            if handled {
                return;
            }
            if key.code == KeyCode::Esc {
                self.dropdown.set_focused(false);
                return;
            }
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.show_exit_dialog(),
            (_, KeyCode::F(2)) => self.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Char(c)) => match c {
                'i' | 'e' | 'h' | 's' | 'g' => self.show_message_dialog(c),
                'c' => self.show_content_dialog(),
                't' => self.show_greeting_dialog(),
                'q' => self.show_exit_dialog(),
                _ => {}
            },
            _ => {}
        }
    }

    /// 마우스 입력 분기
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(dialog) = self.dialog.as_mut() {
            let (width, height) = self.layout.terminal_size();
            if let Some(result) = dialog.handle_mouse(mouse, Rect::new(0, 0, width, height)) {
                self.handle_dialog_result(result);
            }
            return;
        }

        let on_field = self
            .dropdown
            .field_area()
            .contains(Position::new(mouse.column, mouse.row));
        let mut picked = None;
        self.dropdown
            .handle_mouse(mouse, &self.items, |item| picked = Some(item.clone()));
        let selected = picked.is_some();
        if let Some(item) = picked {
            self.select_item(item);
        }

        // 필드 클릭이나 항목 선택은 포커스, 그 밖의 클릭은 포커스 해제
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.dropdown.set_focused(on_field || selected);
        }
    }

    /// 드롭다운 포커스 전환 (Tab), 포커스를 잃으면 메뉴도 닫는다
    fn toggle_dropdown_focus(&mut self) {
        let focused = !self.dropdown.is_focused();
        if !focused && self.dropdown.is_open() {
            self.dropdown.dismiss();
        }
        self.dropdown.set_focused(focused);
    }
}
