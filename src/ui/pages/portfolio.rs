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
        widgets::{Glyphs, badge, card_block, sparkline_blocks},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    render_trend(frame, rows[0], theme);
    render_projects(frame, rows[1], state, theme, glyphs);
}

/// Projects-per-year strip across the top of the page.
fn render_trend(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = card_block("Delivery Trend", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 {
        return;
    }

    let values: Vec<u64> = content::EXPERIENCE_CURVE.iter().map(|(_, v)| *v).collect();
    let spark = sparkline_blocks(&values, inner.width as usize);
    let labels = content::EXPERIENCE_CURVE
        .iter()
        .map(|(year, _)| *year)
        .collect::<Vec<_>>()
        .join("   ");

    let lines = vec![
        Line::from(Span::styled(spark, Style::default().fg(theme.accent))),
        Line::from(Span::styled(labels, Style::default().fg(theme.muted_text))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_projects(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let selected = state.list_offset.min(content::PROJECTS.len().saturating_sub(1));
    let visible = &content::PROJECTS[selected..];

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .enumerate()
        .map(|(pos, _)| {
            if pos == 0 {
                Constraint::Min(8)
            } else {
                Constraint::Length(4)
            }
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (pos, project) in visible.iter().enumerate() {
        let slot = slots[pos];
        if slot.height == 0 {
            continue;
        }
        let expanded = pos == 0;
        render_project_card(frame, slot, project, expanded, theme, glyphs);
    }
}

fn render_project_card(
    frame: &mut Frame,
    area: Rect,
    project: &content::Project,
    expanded: bool,
    theme: &Theme,
    glyphs: &Glyphs,
) {
    let title = if expanded {
        format!("{} {}", glyphs.pointer, project.title)
    } else {
        project.title.to_string()
    };
    let block = card_block(&title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if expanded {
        lines.push(Line::from(Span::styled(
            project.blurb,
            Style::default().fg(theme.text),
        )));
        lines.push(Line::default());
    }

    let mut tag_spans = Vec::new();
    for tag in project.tags {
        tag_spans.push(badge(tag, theme));
        tag_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tag_spans));

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
    lines.push(Line::from(metric_spans));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
