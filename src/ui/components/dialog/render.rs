use super::{DialogButton, DialogKind, KeyboardType, TextField};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
const DIALOG_WIDTH: u16 = 50;
const DIALOG_MIN_WIDTH: u16 = 24;
const OK_LABEL: &str = "OK";

/// 다이얼로그 영역 배치
///
/// 렌더링과 마우스 판정이 같은 계산을 공유한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub title: Option<Rect>,
    pub body: Rect,
    /// 입력 다이얼로그: 힌트, 입력 필드, 검증 메시지 행
    pub hint: Option<Rect>,
    pub input: Option<Rect>,
    pub error: Option<Rect>,
    pub buttons: Vec<(DialogButton, Rect)>,
}

impl DialogLayout {
    /// 좌표의 버튼
    pub fn button_at(&self, column: u16, row: u16) -> Option<DialogButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    /// 좌표가 다이얼로그 안인지
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// 화면 중앙 다이얼로그 배치 계산
pub fn dialog_layout(kind: &DialogKind, screen: Rect) -> DialogLayout {
    let width = DIALOG_WIDTH
        .min(screen.width.saturating_sub(4))
        .max(DIALOG_MIN_WIDTH)
        .min(screen.width);
    let inner_width = width.saturating_sub(2 + DIALOG_H_PADDING * 2);

    let title_rows: u16 = if kind.title().is_some() { 2 } else { 0 };
    let body_rows = match kind {
        DialogKind::Message { message, .. } | DialogKind::TwoButton { message, .. } => {
            wrapped_line_count(message, inner_width)
        }
        DialogKind::Content { body_height, .. } => *body_height,
        // 힌트 + 입력 + 검증 메시지
        DialogKind::TextInput { .. } => 3,
    };

    // border + padding + title + body + gap + buttons + border
    let wanted = (2 + DIALOG_V_PADDING + title_rows)
        .saturating_add(body_rows)
        .saturating_add(2);
    let height = wanted.min(screen.height);

    let area = Rect {
        x: screen.x + (screen.width - width) / 2,
        y: screen.y + (screen.height - height) / 2,
        width,
        height,
    };

    // 테두리 안쪽으로 잘라낸다 (작은 화면에서 영역 밖 렌더링 방지)
    let frame = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let clip = |rect: Rect| Some(rect.intersection(frame)).filter(|r| !r.is_empty());

    let inner_x = area.x.saturating_add(1 + DIALOG_H_PADDING);
    let mut y = area.y.saturating_add(1 + DIALOG_V_PADDING);

    let title = kind.title().and_then(|_| {
        let rect = Rect::new(inner_x, y, inner_width, 1);
        y = y.saturating_add(2);
        clip(rect)
    });

    let button_y = (area.y + area.height).saturating_sub(2);
    let body = Rect::new(
        inner_x,
        y,
        inner_width,
        button_y.saturating_sub(y.saturating_add(1)),
    )
    .intersection(frame);

    let row = |offset: u16| {
        (offset < body.height)
            .then(|| Rect::new(body.x, body.y + offset, body.width, 1))
            .and_then(clip)
    };
    let (hint, input, error) = match kind {
        DialogKind::TextInput { .. } => (row(0), row(1), row(2)),
        _ => (None, None, None),
    };

    let buttons = match kind {
        DialogKind::TwoButton { .. } => {
            let left_width = inner_width.saturating_sub(2) / 2;
            vec![
                (DialogButton::Left, Rect::new(inner_x, button_y, left_width, 1)),
                (
                    DialogButton::Right,
                    Rect::new(
                        inner_x.saturating_add(left_width + 2),
                        button_y,
                        inner_width.saturating_sub(left_width + 2),
                        1,
                    ),
                ),
            ]
        }
        _ => {
            let ok_width = (OK_LABEL.len() as u16 + 6).min(inner_width);
            let ok_x = inner_x.saturating_add((inner_width - ok_width) / 2);
            vec![(DialogButton::Ok, Rect::new(ok_x, button_y, ok_width, 1))]
        }
    };
    let buttons = buttons
        .into_iter()
        .filter_map(|(button, rect)| clip(rect).map(|rect| (button, rect)))
        .collect();

    DialogLayout {
        area,
        title,
        body,
        hint,
        input,
        error,
        buttons,
    }
}

/// 단어 단위 줄바꿈 후의 줄 수 (Paragraph + Wrap 기준 근사)
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total = 0usize;

    for line in text.split('\n') {
        let mut rows = 1;
        let mut col = 0;
        for word in line.split_whitespace() {
            let w = word.width();
            if col == 0 {
                col = w;
            } else if col + 1 + w <= width {
                col += 1 + w;
            } else {
                rows += 1;
                col = w;
            }
            // 너비보다 긴 단어는 강제 분할
            while col > width {
                rows += 1;
                col -= width;
            }
        }
        total += rows;
    }

    total.clamp(1, u16::MAX as usize) as u16
}

/// 커서가 보이도록 표시 시작점 결정: (표시 문자열, 커서 열)
///
/// `cursor_pos`는 바이트 인덱스, 반환 열은 표시 너비 기준.
fn scroll_to_cursor(value: &str, cursor_pos: usize, max_width: usize) -> (&str, usize) {
    let cursor_col = value[..cursor_pos].width();
    if cursor_col < max_width {
        return (value, cursor_col);
    }

    let target = cursor_col + 1 - max_width;
    let mut skipped = 0;
    for (i, c) in value.char_indices() {
        if skipped >= target {
            return (&value[i..], cursor_col - skipped);
        }
        skipped += c.width().unwrap_or(0);
    }
    (&value[value.len()..], cursor_col.saturating_sub(skipped))
}

/// 다이얼로그 위젯
///
/// `show`가 false면 아무것도 그리지 않는다.
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    show: bool,
    content: Option<Box<dyn FnOnce(Rect, &mut Buffer) + 'a>>,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    frame_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    error_color: Color,
    theme: Option<&'a Theme>,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            show: true,
            content: None,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(128, 128, 128),
            frame_color: Color::White,
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            error_color: Color::Rgb(244, 71, 71),
            theme: None,
        }
    }

    /// 표시 여부
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// 임의 내용 다이얼로그의 본문 위젯
    pub fn content<W: Widget + 'a>(mut self, body: W) -> Self {
        self.content = Some(Box::new(move |area, buf| body.render(area, buf)));
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.bg_color = theme.dialog_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.frame_color = theme.fg_primary.to_color();
        self.button_bg = theme.button_bg.to_color();
        self.button_fg = theme.button_fg.to_color();
        self.button_selected_bg = theme.button_selected_bg.to_color();
        self.button_selected_fg = theme.button_selected_fg.to_color();
        self.input_bg = theme.input_bg.to_color();
        self.error_color = theme.error.to_color();
        self.theme = Some(theme);
        self
    }

    /// 다이얼로그 배치 계산
    pub fn layout(&self, screen: Rect) -> DialogLayout {
        dialog_layout(self.kind, screen)
    }

    /// 테두리 색상: 메시지 다이얼로그는 강조 색상, 나머지는 기본 테두리
    fn border_color(&self) -> Color {
        match self.kind {
            DialogKind::Message { tone, .. } => match self.theme {
                Some(theme) => tone.border_color(theme),
                None => tone.border_color(&Theme::default()),
            },
            _ => self.frame_color,
        }
    }

    /// 버튼 렌더링 헬퍼 (영역 중앙에 레이블)
    fn render_button(&self, buf: &mut Buffer, rect: Rect, label: &str, bg: Color, fg: Color) {
        buf.set_style(rect, Style::default().bg(bg));
        let label_width = (label.width() as u16).min(rect.width);
        let x = rect.x + (rect.width - label_width) / 2;
        buf.set_stringn(
            x,
            rect.y,
            label,
            rect.width as usize,
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        );
    }

    fn render_paragraph(&self, buf: &mut Buffer, area: Rect, text: &str) {
        if area.is_empty() {
            return;
        }
        Paragraph::new(text)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    /// 입력 필드 렌더링
    fn render_text_field(
        &self,
        buf: &mut Buffer,
        area: Rect,
        field: &TextField,
        keyboard: KeyboardType,
        has_error: bool,
    ) {
        let style = if has_error {
            Style::default()
                .fg(self.fg_color)
                .bg(self.input_bg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.fg_color).bg(self.input_bg)
        };
        buf.set_style(area, style);

        // 비밀번호는 문자 수만큼 '*'로 표시
        let (shown, cursor_pos) = if keyboard.is_masked() {
            let value = field.value();
            (
                "*".repeat(value.chars().count()),
                value[..field.cursor_pos()].chars().count(),
            )
        } else {
            (field.value().to_string(), field.cursor_pos())
        };

        let max_display = area.width.saturating_sub(2) as usize;
        if max_display == 0 {
            return;
        }
        let (display, cursor_col) = scroll_to_cursor(&shown, cursor_pos, max_display);
        buf.set_stringn(area.x + 1, area.y, display, max_display, style);

        let cursor_x = area.x + 1 + cursor_col as u16;
        if let Some(cell) = buf.cell_mut((cursor_x, area.y)) {
            if cursor_pos < shown.len() {
                cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
            } else {
                cell.set_char('▏');
            }
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.show {
            return;
        }

        let layout = self.layout(area.intersection(buf.area));
        if layout.area.is_empty() {
            return;
        }

        // 배경 클리어
        Clear.render(layout.area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color()))
            .style(Style::default().bg(self.bg_color).fg(self.fg_color));
        block.render(layout.area, buf);

        if let (Some(title), Some(rect)) = (self.kind.title(), layout.title) {
            Paragraph::new(Line::styled(
                title,
                Style::default().fg(self.fg_color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(rect, buf);
        }

        match self.kind {
            DialogKind::Message { message, .. } => {
                self.render_paragraph(buf, layout.body, message);
            }
            DialogKind::Content { .. } => {}
            DialogKind::TextInput {
                input_hint,
                keyboard,
                field,
                error,
                ..
            } => {
                let hint_color = if error.is_some() {
                    self.error_color
                } else {
                    self.muted_color
                };
                if let Some(rect) = layout.hint {
                    buf.set_stringn(
                        rect.x,
                        rect.y,
                        input_hint,
                        rect.width as usize,
                        Style::default().fg(hint_color),
                    );
                }
                if let Some(rect) = layout.input {
                    self.render_text_field(buf, rect, field, *keyboard, error.is_some());
                }
                if let (Some(message), Some(rect)) = (error, layout.error) {
                    buf.set_stringn(
                        rect.x + 1,
                        rect.y,
                        message,
                        rect.width.saturating_sub(1) as usize,
                        Style::default().fg(self.error_color),
                    );
                }
            }
            DialogKind::TwoButton { message, .. } => {
                self.render_paragraph(buf, layout.body, message);
            }
        }

        for (button, rect) in &layout.buttons {
            match (button, self.kind) {
                (
                    DialogButton::Left | DialogButton::Right,
                    DialogKind::TwoButton {
                        left_label,
                        right_label,
                        selected_button,
                        ..
                    },
                ) => {
                    let (label, index) = if *button == DialogButton::Left {
                        (left_label, 0)
                    } else {
                        (right_label, 1)
                    };
                    let (bg, fg) = if *selected_button == index {
                        (self.button_selected_bg, self.button_selected_fg)
                    } else {
                        (self.button_bg, self.button_fg)
                    };
                    self.render_button(buf, *rect, label, bg, fg);
                }
                (_, DialogKind::Message { .. }) => {
                    // OK 버튼은 테두리와 같은 강조 색상
                    self.render_button(
                        buf,
                        *rect,
                        OK_LABEL,
                        self.border_color(),
                        self.button_selected_fg,
                    );
                }
                _ => {
                    self.render_button(
                        buf,
                        *rect,
                        OK_LABEL,
                        self.button_selected_bg,
                        self.button_selected_fg,
                    );
                }
            }
        }

        if let Some(content) = self.content {
            if matches!(self.kind, DialogKind::Content { .. }) && !layout.body.is_empty() {
                content(layout.body, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::dialog::DialogTone;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn render(dialog: Dialog<'_>) -> Buffer {
        let mut buf = Buffer::empty(SCREEN);
        dialog.render(SCREEN, &mut buf);
        buf
    }

    fn rendered_text(buf: &Buffer) -> String {
        let mut rendered = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    rendered.push_str(cell.symbol());
                }
            }
            rendered.push('\n');
        }
        rendered
    }

    fn count_ok_buttons(rendered: &str) -> usize {
        rendered.matches(OK_LABEL).count()
    }

    fn every_kind() -> Vec<DialogKind> {
        vec![
            DialogKind::info("hello"),
            DialogKind::error("hello"),
            DialogKind::hint("hello"),
            DialogKind::success("hello"),
            DialogKind::generic(Some("Notice"), "hello"),
            DialogKind::generic(None, "hello"),
            DialogKind::content(Some("Details"), 3),
            DialogKind::text_input(Some("Amount"), "Quantity", KeyboardType::Number, false),
            DialogKind::two_button("Cancel", "Exit"),
        ]
    }

    #[test]
    fn test_hidden_dialog_renders_nothing() {
        for kind in every_kind() {
            let buf = render(
                Dialog::new(&kind)
                    .content(Paragraph::new("body"))
                    .show(false),
            );
            assert_eq!(buf, Buffer::empty(SCREEN), "kind = {:?}", kind);
        }
    }

    #[test]
    fn test_tiny_areas_render_without_panic() {
        for kind in every_kind() {
            for width in 0..40 {
                for height in 0..8 {
                    let area = Rect::new(0, 0, width, height);
                    let layout = dialog_layout(&kind, area);
                    let rects = layout
                        .title
                        .iter()
                        .chain(layout.hint.iter())
                        .chain(layout.input.iter())
                        .chain(layout.error.iter())
                        .chain(layout.buttons.iter().map(|(_, rect)| rect));
                    for rect in rects {
                        assert!(!rect.is_empty());
                        assert_eq!(rect.intersection(layout.area), *rect);
                    }
                    assert_eq!(layout.body.intersection(layout.area), layout.body);

                    let mut buf = Buffer::empty(area);
                    Dialog::new(&kind)
                        .content(Paragraph::new("body"))
                        .render(area, &mut buf);
                }
            }
        }
    }

    #[test]
    fn test_render_area_larger_than_buffer_is_clipped() {
        let kind = DialogKind::two_button("Cancel", "Exit");
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        Dialog::new(&kind).render(SCREEN, &mut buf);
    }

    #[test]
    fn test_named_variants_render_title_message_and_single_ok() {
        let theme = Theme::dark();
        let cases = [
            (DialogKind::info("saved to disk"), "Info", DialogTone::Info),
            (DialogKind::error("saved to disk"), "Error", DialogTone::Error),
            (DialogKind::hint("saved to disk"), "Hint", DialogTone::Hint),
            (DialogKind::success("saved to disk"), "Success", DialogTone::Success),
        ];

        for (kind, title, tone) in cases {
            let dialog = Dialog::new(&kind).theme(&theme);
            let layout = dialog.layout(SCREEN);
            let buf = render(dialog);
            let rendered = rendered_text(&buf);

            assert!(rendered.contains(title), "rendered=\n{}", rendered);
            assert!(rendered.contains("saved to disk"), "rendered=\n{}", rendered);
            assert_eq!(count_ok_buttons(&rendered), 1, "rendered=\n{}", rendered);
            assert_eq!(layout.buttons.len(), 1);

            let corner = buf.cell((layout.area.x, layout.area.y)).unwrap();
            assert_eq!(corner.fg, tone.border_color(&theme));
        }
    }

    #[test]
    fn test_title_is_bold_and_centered() {
        let kind = DialogKind::info("m");
        let dialog = Dialog::new(&kind);
        let layout = dialog.layout(SCREEN);
        let buf = render(dialog);

        let title_rect = layout.title.unwrap();
        let start = title_rect.x + (title_rect.width - 4) / 2;
        let cell = buf.cell((start, title_rect.y)).unwrap();
        assert_eq!(cell.symbol(), "I");
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_generic_dialog_without_title_starts_with_message() {
        let kind = DialogKind::generic(None, "plain message");
        let dialog = Dialog::new(&kind);
        let layout = dialog.layout(SCREEN);
        assert!(layout.title.is_none());

        let buf = render(dialog);
        let mut row = String::new();
        for x in 0..SCREEN.width {
            row.push_str(buf.cell((x, layout.body.y)).unwrap().symbol());
        }
        assert!(row.contains("plain message"));
    }

    #[test]
    fn test_long_message_grows_dialog() {
        let short = dialog_layout(&DialogKind::info("one line"), SCREEN);
        let long = dialog_layout(&DialogKind::info("word ".repeat(40)), SCREEN);
        assert!(long.area.height > short.area.height);
        assert!(long.body.height >= wrapped_line_count(&"word ".repeat(40), long.body.width));
    }

    #[test]
    fn test_content_dialog_renders_body_widget() {
        let kind = DialogKind::content(Some("Details"), 2);
        let body = Paragraph::new(vec![Line::from("first row"), Line::from("second row")]);
        let buf = render(Dialog::new(&kind).content(body));
        let rendered = rendered_text(&buf);

        assert!(rendered.contains("Details"));
        assert!(rendered.contains("first row"));
        assert!(rendered.contains("second row"));
        assert_eq!(count_ok_buttons(&rendered), 1);
    }

    #[test]
    fn test_text_input_renders_hint_and_error() {
        let mut kind = DialogKind::text_input(Some("Amount"), "Quantity", KeyboardType::Text, false);
        if let DialogKind::TextInput { field, error, .. } = &mut kind {
            *field = TextField::with_value("12");
            *error = Some("Please check your input".to_string());
        }
        let dialog = Dialog::new(&kind);
        let layout = dialog.layout(SCREEN);
        let buf = render(dialog);
        let rendered = rendered_text(&buf);

        assert!(rendered.contains("Amount"));
        assert!(rendered.contains("Quantity"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Please check your input"));

        let error_rect = layout.error.unwrap();
        let cell = buf.cell((error_rect.x + 1, error_rect.y)).unwrap();
        assert_eq!(cell.fg, Color::Rgb(244, 71, 71));
    }

    #[test]
    fn test_password_input_is_masked() {
        let mut kind = DialogKind::text_input(None, "PIN", KeyboardType::Password, true);
        if let DialogKind::TextInput { field, .. } = &mut kind {
            *field = TextField::with_value("secret");
        }
        let rendered = rendered_text(&render(Dialog::new(&kind)));

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("******"));
    }

    #[test]
    fn test_two_button_renders_both_labels_with_selection() {
        let kind = DialogKind::two_button("Cancel", "Exit");
        let dialog = Dialog::new(&kind);
        let layout = dialog.layout(SCREEN);
        let buf = render(dialog);
        let rendered = rendered_text(&buf);

        assert!(rendered.contains("Exit app"));
        assert!(rendered.contains("Cancel"));
        assert!(rendered.contains("Exit"));
        assert_eq!(count_ok_buttons(&rendered), 0);
        assert_eq!(layout.buttons.len(), 2);

        let (_, left) = layout.buttons[0];
        let (_, right) = layout.buttons[1];
        assert_eq!(buf.cell((left.x, left.y)).unwrap().bg, Color::Rgb(0, 120, 212));
        assert_eq!(buf.cell((right.x, right.y)).unwrap().bg, Color::Rgb(60, 60, 60));
    }

    #[test]
    fn test_layout_fits_small_screen() {
        let screen = Rect::new(0, 0, 30, 8);
        let layout = dialog_layout(&DialogKind::error("word ".repeat(60)), screen);
        assert!(layout.area.width <= screen.width);
        assert!(layout.area.height <= screen.height);
        let (_, ok) = layout.buttons[0];
        assert!(ok.y < screen.height);
    }

    #[test]
    fn test_huge_content_height_is_capped_by_screen() {
        let layout = dialog_layout(&DialogKind::content(Some("t"), u16::MAX), SCREEN);
        assert_eq!(layout.area.height, SCREEN.height);
        assert_eq!(layout.area.y, 0);
        let (_, ok) = layout.buttons[0];
        assert_eq!(ok.y, SCREEN.height - 2);

        let kind = DialogKind::content(None, u16::MAX - 1);
        let buf = render(Dialog::new(&kind).content(Paragraph::new("tall body")));
        assert!(rendered_text(&buf).contains("tall body"));
    }

    #[test]
    fn test_scroll_to_cursor_keeps_cursor_visible() {
        assert_eq!(scroll_to_cursor("abc", 3, 10), ("abc", 3));
        let (display, col) = scroll_to_cursor("abcdefghij", 10, 5);
        assert_eq!(display, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("one two", 10), 1);
        assert_eq!(wrapped_line_count("one two three", 10), 2);
        assert_eq!(wrapped_line_count("a\nb", 10), 2);
        assert_eq!(wrapped_line_count("abcdefghijklmnop", 10), 2);
    }
}
