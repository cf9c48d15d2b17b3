mod app;

use app::{App, DROPDOWN_LABEL, PLACEHOLDER};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nexus_tui::config::Config;
use nexus_tui::logging;
use nexus_tui::ui::{
    CommandBar, Dialog, DialogKind, Dropdown, LayoutMode, Theme, WarningScreen,
};
use nexus_tui::utils::error::Result;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;

/// 드롭다운 화살표 회전 중 프레임 간격
const ANIMATION_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::load()?;
    let _log_guard = logging::init(&config.log_level)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "demo terminated with error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        // 화살표 회전 중에는 짧은 타임아웃으로 프레임 갱신
        let poll_timeout = if app.is_animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 드롭다운 필드/항목 표시
fn item_line(item: Option<&String>) -> Line<'_> {
    match item {
        Some(name) => Line::from(name.as_str()),
        None => Line::from(PLACEHOLDER),
    }
}

/// 헤더: 앱 이름 + 현재 테마
fn render_header(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let title = Span::styled(
        " nexus-tui demo",
        Style::default()
            .fg(theme.fg_primary.to_color())
            .add_modifier(Modifier::BOLD),
    );
    let theme_name = Span::styled(
        format!("  theme: {}", app.theme_manager.current_name()),
        Style::default().fg(theme.fg_muted.to_color()),
    );
    let header = Paragraph::new(Line::from(vec![title, theme_name]))
        .style(Style::default().bg(theme.surface_bg.to_color()));
    f.render_widget(header, area);
}

/// 선택 값 + 마지막 상호작용
fn render_status(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let muted = Style::default().fg(theme.fg_muted.to_color());
    let value = Style::default().fg(theme.fg_primary.to_color());
    let lines = vec![
        Line::from(vec![
            Span::styled("Selected: ", muted),
            Span::styled(app.selected.as_deref().unwrap_or("-"), value),
        ]),
        Line::from(vec![
            Span::styled("Last: ", muted),
            Span::styled(app.last_event.as_deref().unwrap_or("-"), value),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &mut App) {
    let areas = app.layout.areas().clone();
    let theme = app.theme().clone();

    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.bg_primary.to_color())),
        f.area(),
    );
    render_header(f, app, &theme, areas.header);
    f.render_widget(
        Paragraph::new(app.greeting_line()).style(Style::default().fg(theme.fg_primary.to_color())),
        areas.greeting,
    );
    render_status(f, app, &theme, areas.status);
    f.render_widget(CommandBar::new().theme(&theme), areas.command_bar);

    // 열린 메뉴가 위 위젯들을 덮도록 나중에 그린다
    let dropdown = Dropdown::new(&app.items, item_line)
        .label(DROPDOWN_LABEL)
        .pre_selected(app.selected.as_ref())
        .theme(&theme);
    f.render_stateful_widget(dropdown, areas.dropdown, &mut app.dropdown);

    if let Some(kind) = &app.dialog {
        let mut dialog = Dialog::new(kind).theme(&theme);
        if matches!(kind, DialogKind::Content { .. }) {
            dialog = dialog.content(Paragraph::new(
                app.content_lines()
                    .into_iter()
                    .map(Line::from)
                    .collect::<Vec<_>>(),
            ));
        }
        f.render_widget(dialog, f.area());
    }
}
