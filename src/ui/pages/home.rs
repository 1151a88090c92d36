use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    content::{self, art},
    storm::reveal::{PortraitCue, portrait_cue},
    ui::{
        theme::Theme,
        widgets::{Glyphs, badge, card_block, plain_card, skill_meter},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(11),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

    render_hero(frame, rows[0], state, theme, glyphs);
    render_stats(frame, rows[1], theme);
    render_feature_row(frame, rows[2], state, theme, glyphs);
}

fn render_hero(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let block = card_block(content::TITLE, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                content::NAME,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", glyphs.bolt, state.storm.strike.strike_count()),
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::from(Span::styled(
            content::HEADLINE,
            Style::default()
                .fg(theme.electric)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            content::TAGLINE,
            Style::default().fg(theme.muted_text),
        )),
        Line::from(Span::styled(content::INTRO, Style::default().fg(theme.text))),
        Line::default(),
        Line::from(vec![
            badge(content::AVAILABILITY, theme),
            Span::raw("  "),
            Span::styled(content::LOCATION, Style::default().fg(theme.muted_text)),
        ]),
        Line::default(),
    ];
    lines.extend(skill_rows(theme, glyphs));

    if inner.height < 9 {
        lines.retain(|line| !line.spans.is_empty());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Core skills in two rows of four, each with its proficiency meter.
fn skill_rows(theme: &Theme, glyphs: &Glyphs) -> Vec<Line<'static>> {
    content::CORE_SKILLS
        .chunks(4)
        .map(|row| {
            let mut spans = Vec::new();
            for skill in row {
                spans.push(Span::styled(
                    format!("{} ", skill.name),
                    Style::default().fg(theme.text),
                ));
                spans.push(Span::styled(
                    skill_meter(skill.level, glyphs),
                    Style::default().fg(theme.electric),
                ));
                spans.push(Span::raw("   "));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_stats(frame: &mut Frame, area: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (stat, column) in content::STATS.iter().zip(columns.iter()) {
        let block = plain_card(theme);
        let inner = block.inner(*column);
        frame.render_widget(block, *column);
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.label,
                Style::default().fg(theme.muted_text),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_feature_row(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    glyphs: &Glyphs,
) {
    let wide = area.width >= 64;
    let columns = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    render_featured_project(frame, columns[0], theme, glyphs);
    if columns.len() > 1 {
        render_portrait(frame, columns[1], state, theme);
    }
}

fn render_featured_project(frame: &mut Frame, area: Rect, theme: &Theme, glyphs: &Glyphs) {
    let project = content::featured_project();
    let block = card_block("Featured Work", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut tag_spans = vec![Span::styled(
        format!("{} ", glyphs.pointer),
        Style::default().fg(theme.accent),
    )];
    for tag in project.tags {
        tag_spans.push(badge(tag, theme));
        tag_spans.push(Span::raw(" "));
    }

    let mut metric_spans = Vec::new();
    for (label, value) in project.metrics {
        metric_spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(theme.muted_text),
        ));
        metric_spans.push(Span::styled(
            format!("{value}  "),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            project.title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(project.blurb, Style::default().fg(theme.text))),
        Line::default(),
        Line::from(tag_spans),
        Line::from(metric_spans),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// The storm-gated portrait. Until the reveal latches, the face shows only
/// while lightning is on screen; afterwards it stays, dimmed between
/// strikes and charged during them.
fn render_portrait(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = card_block("Portrait", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cue = portrait_cue(
        state.storm.reveal.revealed(),
        state.storm.strike.is_striking(),
    );
    let mut lines = Vec::new();

    match cue {
        PortraitCue::Hidden => {
            for row in art::STORM_MONOGRAM {
                lines.push(Line::from(Span::styled(
                    *row,
                    Style::default().fg(theme.border),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Waiting for the storm...",
                Style::default().fg(theme.muted_text),
            )));
        }
        PortraitCue::Flash | PortraitCue::Charged => {
            let style = Style::default()
                .fg(theme.electric)
                .add_modifier(Modifier::BOLD);
            for row in art::AVATAR {
                lines.push(Line::from(Span::styled(*row, style)));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                content::TITLE,
                Style::default().fg(theme.accent),
            )));
        }
        PortraitCue::Dimmed => {
            for row in art::AVATAR {
                lines.push(Line::from(Span::styled(
                    *row,
                    Style::default().fg(theme.muted_text),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                content::TITLE,
                Style::default().fg(theme.muted_text),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
