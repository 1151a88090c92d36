use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::{
        form::{FormFocus, FormNotice},
        state::{AppMode, AppState},
    },
    content,
    ui::{
        theme::Theme,
        widgets::{Glyphs, card_block},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let wide = area.width >= 70;
    let columns = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    if columns.len() > 1 {
        render_methods(frame, columns[0], theme, glyphs);
        render_form(frame, columns[1], state, theme, glyphs);
    } else {
        render_form(frame, columns[0], state, theme, glyphs);
    }
}

fn render_methods(frame: &mut Frame, area: Rect, theme: &Theme, glyphs: &Glyphs) {
    let block = card_block("Reach Me", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Let's build something with real impact.",
            Style::default().fg(theme.text),
        )),
        Line::default(),
    ];
    for method in content::CONTACT_METHODS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}: ", glyphs.bullet, method.label),
                Style::default().fg(theme.muted_text),
            ),
            Span::styled(
                method.value,
                Style::default()
                    .fg(theme.electric)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        content::AVAILABILITY,
        Style::default().fg(theme.success),
    )));
    lines.push(Line::from(Span::styled(
        content::LOCATION,
        Style::default().fg(theme.muted_text),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, glyphs: &Glyphs) {
    let editing = state.mode == AppMode::Editing;
    let title = if editing {
        "Send a Message (editing)"
    } else {
        "Send a Message (Enter to compose)"
    };
    let block = card_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for focus in FormFocus::ALL {
        let focused = editing && state.form_focus == focus;
        match focus {
            FormFocus::Submit => {
                lines.push(Line::default());
                lines.push(submit_row(focused, theme, glyphs));
            }
            _ => {
                lines.extend(field_rows(state, focus, focused, theme));
            }
        }
    }

    if let Some(notice) = state.form_notice {
        lines.push(Line::default());
        lines.push(notice_row(notice, theme));
    }
    if let Some(err) = &state.last_error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.warning),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_rows(
    state: &AppState,
    focus: FormFocus,
    focused: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let value = state.form.field(focus).unwrap_or_default().to_string();
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_text)
    };

    let mut value_spans = vec![Span::styled(
        format!("  {value}"),
        Style::default().fg(theme.text),
    )];
    if focused {
        value_spans.push(Span::styled("█", Style::default().fg(theme.electric)));
    } else if value.is_empty() {
        value_spans = vec![Span::styled(
            "  ...",
            Style::default().fg(theme.border),
        )];
    }

    vec![
        Line::from(Span::styled(format!("{}:", focus.label()), label_style)),
        Line::from(value_spans),
    ]
}

fn submit_row(focused: bool, theme: &Theme, glyphs: &Glyphs) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.surface)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    Line::from(Span::styled(
        format!("  {} {} ", glyphs.bolt, FormFocus::Submit.label()),
        style,
    ))
}

fn notice_row(notice: FormNotice, theme: &Theme) -> Line<'static> {
    let color = match notice {
        FormNotice::Sent => theme.success,
        FormNotice::MissingFields => theme.danger,
    };
    Line::from(Span::styled(
        notice.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}
