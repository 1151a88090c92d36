use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    content,
    ui::{
        theme::Theme,
        widgets::{Glyphs, card_block},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    render_hobby_cards(frame, rows[0], theme);
    render_ambient_note(frame, rows[1], state, theme, glyphs);
}

fn render_hobby_cards(frame: &mut Frame, area: Rect, theme: &Theme) {
    let columns = if area.width >= 75 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area)
            .to_vec()
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area)
            .to_vec()
    };

    for (hobby, slot) in content::HOBBIES.iter().zip(columns.iter()) {
        let block = card_block(hobby.title, theme);
        let inner = block.inner(*slot);
        frame.render_widget(block, *slot);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hobby.note,
                Style::default().fg(theme.text),
            )))
            .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

/// Soundscape hint tied to the header chip.
fn render_ambient_note(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    glyphs: &Glyphs,
) {
    let status = if state.audio.playing {
        "storm ambience is playing"
    } else {
        "storm ambience is paused"
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", glyphs.note),
            Style::default()
                .fg(theme.electric)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(status, Style::default().fg(theme.text)),
        Span::styled(" · press m to toggle", Style::default().fg(theme.muted_text)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.surface)),
        area,
    );
}
