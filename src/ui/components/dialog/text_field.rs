/// 한 줄 입력 버퍼
///
/// `cursor_pos`는 바이트 인덱스이며 항상 문자 경계에 놓인다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor_pos: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기값으로 생성 (커서는 끝)
    pub fn with_value(value: impl Into<String>) -> Self {
        let value: String = value.into();
        let cursor_pos = value.len();
        Self { value, cursor_pos }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// 커서 앞 문자 삭제, 삭제했으면 true
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_char_start(self.cursor_pos);
        self.value.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// 커서 위치 문자 삭제, 삭제했으면 true
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor_pos);
        true
    }

    pub fn left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_char_start(self.cursor_pos);
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.value[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W), 삭제했으면 true
    pub fn delete_prev_word(&mut self) -> bool {
        let original = self.cursor_pos;
        let mut pos = original;

        // 커서 왼쪽 구분자 건너뛰기
        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if !is_word_delimiter(self.value[prev..pos].chars().next().unwrap_or(' ')) {
                break;
            }
            pos = prev;
        }
        // 단어 시작까지
        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if is_word_delimiter(self.value[prev..pos].chars().next().unwrap_or(' ')) {
                break;
            }
            pos = prev;
        }

        self.value.replace_range(pos..original, "");
        self.cursor_pos = pos;
        pos != original
    }

    fn prev_char_start(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_backspace_delete_utf8() {
        let mut field = TextField::with_value("\u{AC00}\u{B098}");
        field.left();
        field.insert_char('\u{B2E4}');
        assert_eq!(field.value(), "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(field.cursor_pos(), "\u{AC00}\u{B2E4}".len());

        assert!(field.backspace());
        assert_eq!(field.value(), "\u{AC00}\u{B098}");

        field.home();
        assert!(field.delete());
        assert_eq!(field.value(), "\u{B098}");
        assert!(!field.backspace());
    }

    #[test]
    fn test_cursor_moves_on_char_boundaries() {
        let mut field = TextField::with_value("a\u{AC00}b");
        field.left();
        assert_eq!(field.cursor_pos(), "a\u{AC00}".len());
        field.left();
        assert_eq!(field.cursor_pos(), 1);
        field.right();
        assert_eq!(field.cursor_pos(), "a\u{AC00}".len());
        field.end();
        field.right();
        assert_eq!(field.cursor_pos(), field.value().len());
    }

    #[test]
    fn test_delete_prev_word() {
        let mut field = TextField::with_value("hello big world  ");
        assert!(field.delete_prev_word());
        assert_eq!(field.value(), "hello big ");
        field.home();
        assert!(!field.delete_prev_word());
    }

    #[test]
    fn test_blank_detection() {
        assert!(TextField::new().is_blank());
        assert!(TextField::with_value(" \t ").is_blank());
        assert!(!TextField::with_value(" a ").is_blank());
    }
}
