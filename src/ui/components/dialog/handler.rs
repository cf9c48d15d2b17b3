use super::{dialog_layout, DialogButton, DialogKind, DialogResult, INPUT_ERROR_MESSAGE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// 문자 입력이 아닌 Ctrl 단축키인지
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

impl DialogKind {
    /// 키 입력 처리
    ///
    /// 결과가 있는 상호작용(OK, 입력 완료, 버튼, 닫기 요청)이면 Some.
    /// 다이얼로그는 스스로 닫히지 않으며 닫기는 호스트가 결정한다.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match key.code {
            KeyCode::Enter => return self.confirm(),
            KeyCode::Esc => return self.request_dismiss(),
            _ => {}
        }

        match self {
            DialogKind::Message { .. } | DialogKind::Content { .. } => match key.code {
                KeyCode::Char(' ') => self.confirm(),
                _ => None,
            },
            DialogKind::TextInput {
                keyboard,
                field,
                error,
                ..
            } => {
                let edited = match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                        field.delete_prev_word();
                        true
                    }
                    // AltGr 조합은 CONTROL | ALT로 들어온다
                    (modifiers, KeyCode::Char(c)) if !is_control_chord(modifiers) => {
                        if keyboard.accepts(c, field.value()) {
                            field.insert_char(c);
                            true
                        } else {
                            false
                        }
                    }
                    (_, KeyCode::Backspace) => {
                        field.backspace();
                        true
                    }
                    (_, KeyCode::Delete) => {
                        field.delete();
                        true
                    }
                    (_, KeyCode::Left) => {
                        field.left();
                        false
                    }
                    (_, KeyCode::Right) => {
                        field.right();
                        false
                    }
                    (_, KeyCode::Home) => {
                        field.home();
                        false
                    }
                    (_, KeyCode::End) => {
                        field.end();
                        false
                    }
                    _ => false,
                };
                // 편집 키 입력은 이전 검증 메시지를 지운다
                if edited {
                    *error = None;
                }
                None
            }
            DialogKind::TwoButton {
                selected_button, ..
            } => {
                match key.code {
                    KeyCode::Left => *selected_button = 0,
                    KeyCode::Right => *selected_button = 1,
                    KeyCode::Tab | KeyCode::BackTab => *selected_button = (*selected_button + 1) % 2,
                    _ => {}
                }
                None
            }
        }
    }

    /// 확인 동작 (Enter 또는 OK/선택 버튼 클릭)
    ///
    /// 입력 다이얼로그는 공백뿐인 입력이면 검증 메시지를 설정하고 None.
    pub fn confirm(&mut self) -> Option<DialogResult> {
        match self {
            DialogKind::Message { .. } | DialogKind::Content { .. } => Some(DialogResult::Ok),
            DialogKind::TextInput { field, error, .. } => {
                if field.is_blank() {
                    tracing::debug!("text input rejected: blank value");
                    *error = Some(INPUT_ERROR_MESSAGE.to_string());
                    None
                } else {
                    *error = None;
                    Some(DialogResult::Finished(field.value().to_string()))
                }
            }
            DialogKind::TwoButton {
                selected_button, ..
            } => Some(if *selected_button == 0 {
                DialogResult::Left
            } else {
                DialogResult::Right
            }),
        }
    }

    /// 확인 없이 닫기 요청 (Esc, 바깥 클릭)
    ///
    /// 닫기 가능한 입력 다이얼로그만 `Dismissed`를 돌려주고, 나머지는 무시한다.
    pub fn request_dismiss(&mut self) -> Option<DialogResult> {
        match self {
            DialogKind::TextInput {
                dismissible: true, ..
            } => Some(DialogResult::Dismissed),
            _ => None,
        }
    }

    /// 마우스 입력 처리
    ///
    /// `screen`은 다이얼로그를 렌더링한 영역이다.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) -> Option<DialogResult> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let layout = dialog_layout(self, screen);
        match layout.button_at(mouse.column, mouse.row) {
            Some(DialogButton::Ok) => self.confirm(),
            Some(button @ (DialogButton::Left | DialogButton::Right)) => {
                let index = usize::from(button == DialogButton::Right);
                if let DialogKind::TwoButton {
                    selected_button, ..
                } = self
                {
                    *selected_button = index;
                }
                self.confirm()
            }
            None if !layout.contains(mouse.column, mouse.row) => self.request_dismiss(),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::dialog::KeyboardType;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(kind: &mut DialogKind, text: &str) {
        for c in text.chars() {
            assert_eq!(kind.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn button_center(kind: &DialogKind, button: DialogButton) -> (u16, u16) {
        let layout = dialog_layout(kind, SCREEN);
        let (_, rect) = layout
            .buttons
            .iter()
            .find(|(b, _)| *b == button)
            .copied()
            .unwrap();
        (rect.x + rect.width / 2, rect.y)
    }

    #[test]
    fn test_message_ok_by_key_and_click() {
        let mut kind = DialogKind::success("done");
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), Some(DialogResult::Ok));
        assert_eq!(kind.handle_key(key(KeyCode::Char(' '))), Some(DialogResult::Ok));

        let (x, y) = button_center(&kind, DialogButton::Ok);
        assert_eq!(kind.handle_mouse(click(x, y), SCREEN), Some(DialogResult::Ok));
    }

    #[test]
    fn test_every_named_variant_ok_click() {
        let kinds = [
            DialogKind::info("i"),
            DialogKind::error("e"),
            DialogKind::hint("h"),
            DialogKind::success("s"),
            DialogKind::generic(None, "g"),
        ];
        for mut kind in kinds {
            let layout = dialog_layout(&kind, SCREEN);
            assert_eq!(layout.buttons.len(), 1);

            let (x, y) = button_center(&kind, DialogButton::Ok);
            assert_eq!(kind.handle_mouse(click(x, y), SCREEN), Some(DialogResult::Ok));
            // 버튼 바깥 다이얼로그 내부 클릭은 무시
            assert_eq!(
                kind.handle_mouse(click(layout.area.x + 1, layout.area.y + 1), SCREEN),
                None
            );
        }
    }

    #[test]
    fn test_message_ignores_dismiss_requests() {
        let mut kind = DialogKind::error("boom");
        assert_eq!(kind.handle_key(key(KeyCode::Esc)), None);
        assert_eq!(kind.handle_mouse(click(0, 0), SCREEN), None);
        assert_eq!(kind.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_blank_input_sets_error_and_blocks_finish() {
        let mut kind = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(kind.validation_error(), Some(INPUT_ERROR_MESSAGE));

        type_text(&mut kind, "   ");
        assert_eq!(kind.validation_error(), None);
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(kind.validation_error(), Some(INPUT_ERROR_MESSAGE));
    }

    #[test]
    fn test_filled_input_finishes_once_without_error() {
        let mut kind = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        type_text(&mut kind, "abc");

        assert_eq!(
            kind.handle_key(key(KeyCode::Enter)),
            Some(DialogResult::Finished("abc".to_string()))
        );
        assert_eq!(kind.validation_error(), None);
    }

    #[test]
    fn test_next_keystroke_clears_error_even_if_still_blank() {
        let mut kind = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        kind.handle_key(key(KeyCode::Enter));
        assert!(kind.validation_error().is_some());

        kind.handle_key(key(KeyCode::Backspace));
        assert_eq!(kind.input_value(), Some(""));
        assert_eq!(kind.validation_error(), None);
    }

    #[test]
    fn test_cursor_moves_keep_error() {
        let mut kind = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        kind.handle_key(key(KeyCode::Enter));
        kind.handle_key(key(KeyCode::Left));
        kind.handle_key(key(KeyCode::Home));
        assert!(kind.validation_error().is_some());
    }

    #[test]
    fn test_number_keyboard_rejects_letters() {
        let mut kind = DialogKind::text_input(None, "Amount", KeyboardType::Number, false);
        type_text(&mut kind, "1a2b");
        assert_eq!(kind.input_value(), Some("12"));

        kind.handle_key(key(KeyCode::Left));
        kind.handle_key(key(KeyCode::Delete));
        assert_eq!(kind.input_value(), Some("1"));
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut kind = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        type_text(&mut kind, "hello world");
        kind.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(kind.input_value(), Some("hello "));
    }

    #[test]
    fn test_altgr_characters_are_inserted() {
        let mut kind = DialogKind::text_input(None, "Email", KeyboardType::Email, false);
        type_text(&mut kind, "me");
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        kind.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        kind.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(kind.input_value(), Some("me@x"));

        // Ctrl 단축키는 문자로 들어가지 않는다
        kind.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        kind.handle_key(KeyEvent::new(
            KeyCode::Char('B'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(kind.input_value(), Some("me@x"));
    }

    #[test]
    fn test_dismiss_only_when_dismissible() {
        let mut locked = DialogKind::text_input(None, "Name", KeyboardType::Text, false);
        assert_eq!(locked.handle_key(key(KeyCode::Esc)), None);
        assert_eq!(locked.handle_mouse(click(0, 0), SCREEN), None);

        let mut open = DialogKind::text_input(None, "Name", KeyboardType::Text, true);
        assert_eq!(open.handle_key(key(KeyCode::Esc)), Some(DialogResult::Dismissed));
        assert_eq!(
            open.handle_mouse(click(0, 0), SCREEN),
            Some(DialogResult::Dismissed)
        );
    }

    #[test]
    fn test_input_ok_click_validates() {
        let mut kind = DialogKind::text_input(Some("Qty"), "Amount", KeyboardType::Number, false);
        let (x, y) = button_center(&kind, DialogButton::Ok);

        assert_eq!(kind.handle_mouse(click(x, y), SCREEN), None);
        assert!(kind.validation_error().is_some());

        type_text(&mut kind, "5");
        assert_eq!(
            kind.handle_mouse(click(x, y), SCREEN),
            Some(DialogResult::Finished("5".to_string()))
        );
    }

    #[test]
    fn test_two_button_keys() {
        let mut kind = DialogKind::two_button("Cancel", "Exit");
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), Some(DialogResult::Left));

        kind.handle_key(key(KeyCode::Right));
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), Some(DialogResult::Right));

        kind.handle_key(key(KeyCode::Tab));
        assert_eq!(kind.handle_key(key(KeyCode::Enter)), Some(DialogResult::Left));

        assert_eq!(kind.handle_key(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_two_button_clicks() {
        let mut kind = DialogKind::two_button("Cancel", "Exit");
        let (lx, ly) = button_center(&kind, DialogButton::Left);
        let (rx, ry) = button_center(&kind, DialogButton::Right);

        assert_eq!(kind.handle_mouse(click(rx, ry), SCREEN), Some(DialogResult::Right));
        assert_eq!(kind.handle_mouse(click(lx, ly), SCREEN), Some(DialogResult::Left));
        assert_eq!(kind.handle_mouse(click(0, 0), SCREEN), None);
    }
}
