// Command bar component - 하단 단축키 안내 바
//
// 데모 화면의 키 조작 안내, 폭이 모자라면 뒤쪽 항목부터 생략

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 커맨드 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// 단축키 (Tab, q, F2, ...)
    pub key: String,
    /// 레이블
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// "key:label" 표시 폭
    fn width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Self::default_commands(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 데모 화면 기본 커맨드 목록
    pub fn default_commands() -> Vec<CommandItem> {
        vec![
            CommandItem::new("Tab", "Fruit"),
            CommandItem::new("i", "Info"),
            CommandItem::new("e", "Error"),
            CommandItem::new("h", "Hint"),
            CommandItem::new("s", "Success"),
            CommandItem::new("g", "Generic"),
            CommandItem::new("c", "Content"),
            CommandItem::new("t", "Input"),
            CommandItem::new("F2", "Theme"),
            CommandItem::new("q", "Quit"),
        ]
    }

    /// 커맨드 목록 설정
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.surface_bg.to_color();
        self.key_fg_color = theme.field_focus_border.to_color();
        self.label_fg_color = theme.fg_muted.to_color();
        self
    }

    /// 폭 안에 들어가는 항목 수 (왼쪽 패딩 1 + 항목 사이 공백 1)
    fn visible_count(&self, width: u16) -> usize {
        let mut used = 1;
        let mut count = 0;
        for (i, cmd) in self.commands.iter().enumerate() {
            let needed = cmd.width() + usize::from(i > 0);
            if used + needed > width as usize {
                break;
            }
            used += needed;
            count += 1;
        }
        count
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let visible = self.visible_count(area.width);
        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().take(visible).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(cmd.key.as_str(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.as_str(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_row(bar: CommandBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()).to_string())
            .collect()
    }

    #[test]
    fn test_renders_key_label_pairs() {
        let bar = CommandBar::new().commands(vec![
            CommandItem::new("Tab", "Fruit"),
            CommandItem::new("q", "Quit"),
        ]);
        assert_eq!(rendered_row(bar, 30).trim_end(), " Tab:Fruit q:Quit");
    }

    #[test]
    fn test_drops_items_that_do_not_fit() {
        let bar = CommandBar::new().commands(vec![
            CommandItem::new("Tab", "Fruit"),
            CommandItem::new("q", "Quit"),
        ]);
        assert_eq!(bar.visible_count(12), 1);
        assert_eq!(rendered_row(bar, 12).trim_end(), " Tab:Fruit");
    }

    #[test]
    fn test_default_commands_cover_demo_keys() {
        let keys: Vec<_> = CommandBar::default_commands()
            .into_iter()
            .map(|c| c.key)
            .collect();
        for key in ["Tab", "i", "e", "h", "s", "g", "c", "t", "F2", "q"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }
}
