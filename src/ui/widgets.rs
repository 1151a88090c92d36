use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding},
};

use crate::{cli::IconMode, content::SkillLevel, ui::theme::Theme};

/// Glyph set swapped as a whole when the terminal font cannot be trusted
/// with box-drawing and arrows.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub pointer: &'static str,
    pub bolt: &'static str,
    pub note: &'static str,
    pub meter_on: &'static str,
    pub meter_off: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn for_mode(mode: IconMode) -> Self {
        match mode {
            IconMode::Unicode => Self {
                bullet: "•",
                pointer: "▸",
                bolt: "⚡",
                note: "♪",
                meter_on: "■",
                meter_off: "□",
            },
            IconMode::Ascii => Self {
                bullet: "*",
                pointer: ">",
                bolt: "~",
                note: "#",
                meter_on: "#",
                meter_off: "-",
            },
        }
    }
}

pub fn panel_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

/// Translucent-card stand-in: a rounded border over the surface tint.
pub fn card_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(panel_style(theme))
        .padding(Padding::horizontal(1))
}

pub fn plain_card(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(panel_style(theme))
        .padding(Padding::horizontal(1))
}

pub fn badge(text: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(theme.electric)
            .bg(theme.surface_alt)
            .add_modifier(Modifier::BOLD),
    )
}

/// Five-slot proficiency meter, filled per level.
#[must_use]
pub fn skill_meter(level: SkillLevel, glyphs: &Glyphs) -> String {
    let filled = match level {
        SkillLevel::Expert => 5,
        SkillLevel::Advanced => 4,
        SkillLevel::Proficient => 3,
    };
    let mut out = String::new();
    for slot in 0..5 {
        out.push_str(if slot < filled {
            glyphs.meter_on
        } else {
            glyphs.meter_off
        });
    }
    out
}

#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn sparkline_blocks(values: &[u64], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let min = values.iter().copied().min().unwrap_or_default();
    let max = values.iter().copied().max().unwrap_or_default();
    let span = (max.saturating_sub(min) as f32).max(0.001);
    (0..width)
        .map(|idx| {
            let src = (idx * values.len() / width).min(values.len().saturating_sub(1));
            let norm = ((values[src] - min) as f32 / span).clamp(0.0, 1.0);
            BARS[(norm * (BARS.len() - 1) as f32).round() as usize]
        })
        .collect()
}

/// Fixed-size rect centered in `area`, shrunk to fit when the terminal
/// is smaller than the request.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
