use super::*;
use nexus_tui::ui::{DialogResult, KeyboardType};

impl App {
    // === 다이얼로그 표시/결과 처리 ===

    /// 다이얼로그 표시 (열린 드롭다운은 닫는다)
    pub fn show_dialog(&mut self, kind: DialogKind) {
        if self.dropdown.is_open() {
            self.dropdown.dismiss();
        }
        tracing::debug!(title = ?kind.title(), "dialog shown");
        self.dialog = Some(kind);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 이름 있는 메시지 다이얼로그 (i/e/h/s/g)
    pub fn show_message_dialog(&mut self, key: char) {
        let kind = match key {
            'i' => DialogKind::info("Dropdown and dialogs are ready to use."),
            'e' => DialogKind::error("Something went wrong. Nothing was changed."),
            'h' => DialogKind::hint("Press Tab to focus the dropdown, then Enter to open it."),
            's' => DialogKind::success(match &self.selected {
                Some(item) => format!("{} is your choice.", item),
                None => "Nothing selected yet, and that is fine too.".to_string(),
            }),
            'g' => DialogKind::generic(
                Some("Nexus"),
                "A generic dialog with a caller supplied title and a neutral border.",
            ),
            _ => return,
        };
        self.show_dialog(kind);
    }

    /// 항목 목록 내용 다이얼로그 (c)
    pub fn show_content_dialog(&mut self) {
        let body_height = self.content_lines().len() as u16;
        self.show_dialog(DialogKind::content(Some("Items"), body_height));
    }

    /// 내용 다이얼로그 본문 (선택 항목 표시)
    pub fn content_lines(&self) -> Vec<String> {
        if self.items.is_empty() {
            return vec!["(no items)".to_string()];
        }
        self.items
            .iter()
            .map(|item| {
                let marker = if self.selected.as_ref() == Some(item) {
                    "●"
                } else {
                    "○"
                };
                format!("{} {}", marker, item)
            })
            .collect()
    }

    /// 인사말 이름 입력 다이얼로그 (t)
    pub fn show_greeting_dialog(&mut self) {
        self.show_dialog(DialogKind::text_input(
            Some("Greeting"),
            "Your name",
            KeyboardType::Text,
            true,
        ));
    }

    /// 종료 확인 다이얼로그 (q, Ctrl+C)
    pub fn show_exit_dialog(&mut self) {
        self.show_dialog(DialogKind::two_button("Cancel", "Exit"));
    }

    /// 다이얼로그 결과 처리, 닫기는 여기서만 한다
    pub fn handle_dialog_result(&mut self, result: DialogResult) {
        tracing::info!(?result, "dialog result");
        self.last_event = Some(match &result {
            DialogResult::Ok => "Dialog confirmed".to_string(),
            DialogResult::Finished(value) => format!("Input finished: {}", value),
            DialogResult::Dismissed => "Dialog dismissed".to_string(),
            DialogResult::Left => "Exit cancelled".to_string(),
            DialogResult::Right => "Exiting".to_string(),
        });

        match result {
            DialogResult::Ok | DialogResult::Dismissed | DialogResult::Left => self.close_dialog(),
            DialogResult::Finished(value) => {
                self.greeting = value.trim().to_string();
                self.close_dialog();
            }
            DialogResult::Right => {
                self.close_dialog();
                self.quit();
            }
        }
    }
}
