use chrono::{Datelike, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState, Page},
    content,
    ui::{theme::Theme, widgets::Glyphs},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    glyphs: &Glyphs,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} DA ", glyphs.bolt),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.border)),
    ];

    for page in Page::ALL {
        if page == state.page {
            spans.push(Span::styled(
                format!("[{}]", page.label()),
                Style::default()
                    .fg(theme.electric)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", page.label()),
                Style::default().fg(theme.muted_text),
            ));
        }
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.surface));
    frame.render_widget(tabs, area);

    render_status_chips(frame, area, state, theme, glyphs);
}

/// Right-aligned strike counter and ambient audio chip.
fn render_status_chips(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    glyphs: &Glyphs,
) {
    let strikes = state.storm.strike.strike_count();
    let strike_color = if state.storm.reveal.revealed() {
        theme.success
    } else {
        theme.accent
    };
    let chips = Line::from(vec![
        Span::styled(
            format!("{} {strikes}", glyphs.bolt),
            Style::default().fg(strike_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", glyphs.note, state.audio.status()),
            Style::default().fg(if state.audio.playing {
                theme.electric
            } else {
                theme.muted_text
            }),
        ),
        Span::raw(" "),
    ]);

    let width = (chips.width() as u16).min(area.width);
    let chip_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(chips).style(Style::default().bg(theme.surface)),
        chip_area,
    );
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = hint_text(state.mode, state.page);
    let copyright = copyright_line();

    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(theme.muted_text),
    )];
    let used = hints.chars().count() as u16 + 1;
    let right_len = copyright.chars().count() as u16 + 1;
    if area.width > used + right_len {
        let pad = area.width - used - right_len;
        spans.push(Span::raw(" ".repeat(pad as usize)));
        spans.push(Span::styled(
            copyright,
            Style::default().fg(theme.muted_text),
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
        area,
    );
}

fn hint_text(mode: AppMode, page: Page) -> String {
    match mode {
        AppMode::Editing => "Esc back · Tab next field · Enter send".to_string(),
        AppMode::Browsing if page == Page::Contact => {
            "Tab/←→ pages · Enter compose · t strike · ? help · q quit".to_string()
        }
        _ => "Tab/←→ pages · ↑↓ scroll · t strike · ? help · q quit".to_string(),
    }
}

fn copyright_line() -> String {
    format!("© {} {}. {}", Utc::now().year(), content::NAME, content::CRAFTED_LINE)
}
