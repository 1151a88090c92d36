pub mod backdrop;
pub mod chrome;
pub mod pages;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::state::AppState,
    cli::{Cli, ColorArg},
    ui::{
        backdrop::StormBackdrop,
        theme::{ColorCapability, Theme, detect_color_capability, theme_for},
        widgets::{Glyphs, centered_rect},
    },
};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 40 || area.height < 12 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x12.")
            .block(Block::default().borders(Borders::ALL).title("stormfolio"));
        frame.render_widget(warning, area);
        return;
    }

    let capability = match cli.effective_color_mode() {
        ColorArg::Never => ColorCapability::Basic16,
        ColorArg::Always => ColorCapability::TrueColor,
        ColorArg::Auto => detect_color_capability(),
    };
    let theme = theme_for(state.settings.theme, capability);
    let glyphs = Glyphs::for_mode(state.settings.icon_mode);

    frame.render_widget(
        StormBackdrop {
            theme: &theme,
            storm: &state.storm,
            clock: state.animation_clock,
            frame_tick: state.frame_tick,
            motion: state.settings.motion,
            no_flash: state.settings.no_flash,
        },
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    chrome::render_header(frame, chunks[0], state, &theme, &glyphs);
    pages::render(frame, page_margin(chunks[1]), state, &theme, &glyphs);
    chrome::render_footer(frame, chunks[2], state, &theme);

    if state.show_help {
        render_help(frame, area, &theme);
    }
}

/// One-cell gutter so the storm stays visible around the page cards.
fn page_margin(area: Rect) -> Rect {
    if area.width < 6 || area.height < 4 {
        return area;
    }
    Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width - 4,
        height: area.height,
    }
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(46, 16, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().fg(theme.text).bg(theme.surface_alt));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = [
        ("Tab / → , BackTab / ←", "cycle pages"),
        ("1-5", "jump to page"),
        ("↑ / ↓", "scroll lists"),
        ("Enter", "compose (Contact)"),
        ("t", "trigger a strike"),
        ("T", "cycle theme"),
        ("+ / -", "rain intensity"),
        ("a", "toggle animation"),
        ("m", "toggle ambience"),
        ("?", "toggle this help"),
        ("q / Esc", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<22}"),
                    Style::default().fg(theme.electric),
                ),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
