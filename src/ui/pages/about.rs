use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    content::{self, art},
    ui::{
        theme::Theme,
        widgets::{Glyphs, card_block},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let wide = area.width >= 88;
    let columns = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    if columns.len() > 1 {
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(8)])
            .split(columns[0]);
        render_avatar(frame, left[0], state, theme);
        render_personas(frame, left[1], theme);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(7),
                Constraint::Length(5),
            ])
            .split(columns[1]);
        render_timeline(frame, right[0], state, theme, glyphs);
        render_expertise(frame, right[1], theme, glyphs);
        render_certifications(frame, right[2], theme, glyphs);
    } else {
        render_timeline(frame, columns[0], state, theme, glyphs);
    }
}

/// ASCII portrait that flickers electric while a strike is on screen.
fn render_avatar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = card_block(content::NAME, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if state.storm.strike.is_striking() {
        Style::default()
            .fg(theme.electric)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_text)
    };

    let mut lines: Vec<Line> = art::AVATAR
        .iter()
        .skip(2)
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(Span::styled(
        content::LOCATION,
        Style::default().fg(theme.muted_text),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_personas(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = card_block("Who I Am", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for persona in content::PERSONAS {
        lines.push(Line::from(Span::styled(
            persona.title,
            Style::default()
                .fg(theme.electric)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            persona.lead,
            Style::default().fg(theme.text),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_timeline(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let total = content::TIMELINE.len();
    let title = format!("Career Timeline ({}/{total})", state.list_offset + 1);
    let block = card_block(&title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (idx, entry) in content::TIMELINE.iter().enumerate().skip(state.list_offset) {
        let current = idx == state.list_offset;
        let marker = if current { glyphs.pointer } else { " " };
        let head_style = if current {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(theme.accent)),
            Span::styled(entry.period, Style::default().fg(theme.electric)),
            Span::raw("  "),
            Span::styled(entry.role, head_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.company),
            Style::default().fg(theme.muted_text),
        )));
        if current {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.note),
                Style::default().fg(theme.text),
            )));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_expertise(frame: &mut Frame, area: Rect, theme: &Theme, glyphs: &Glyphs) {
    let block = card_block("Expertise", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = content::EXPERTISE
        .iter()
        .map(|group| {
            Line::from(vec![
                Span::styled(
                    format!("{} {}: ", glyphs.bullet, group.category),
                    Style::default()
                        .fg(theme.electric)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(group.skills.join(" · "), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_certifications(frame: &mut Frame, area: Rect, theme: &Theme, glyphs: &Glyphs) {
    let block = card_block("Certifications", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = content::CERTIFICATIONS
        .iter()
        .map(|cert| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", glyphs.bullet),
                    Style::default().fg(theme.success),
                ),
                Span::styled(*cert, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
