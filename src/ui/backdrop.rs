#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    app::settings::MotionSetting,
    storm::{StormState, bolt::Bolt, rain::{Raindrop, drop_fall}},
    ui::theme::Theme,
};

/// Amount the sky lightens toward the wash color while a bolt is alive.
const FLASH_WASH: f32 = 0.30;

/// Full-viewport storm layer: gradient sky, falling rain, live bolts and
/// the lightning wash. Painted first so every page renders on top of it.
pub struct StormBackdrop<'a> {
    pub theme: &'a Theme,
    pub storm: &'a StormState,
    pub clock: f64,
    pub frame_tick: u64,
    pub motion: MotionSetting,
    pub no_flash: bool,
}

impl Widget for StormBackdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let flash = if self.flash_now() { FLASH_WASH } else { 0.0 };
        paint_sky(area, buf, self.theme, flash);

        if self.motion == MotionSetting::Off {
            return;
        }

        let stride = if self.motion == MotionSetting::Reduced {
            2
        } else {
            1
        };
        for drop in self.storm.rain.iter().step_by(stride) {
            paint_drop(area, buf, self.theme, drop, self.clock);
        }

        for bolt in self.storm.bolts.iter() {
            if bolt_visible(self.frame_tick, self.motion) {
                paint_bolt(area, buf, self.theme, bolt);
            }
        }
    }
}

impl StormBackdrop<'_> {
    fn flash_now(&self) -> bool {
        !self.no_flash && self.motion == MotionSetting::Full && self.storm.flash_active()
    }
}

/// Bolts flicker by skipping one frame in five. Reduced motion holds
/// them steady instead.
fn bolt_visible(frame_tick: u64, motion: MotionSetting) -> bool {
    motion == MotionSetting::Reduced || frame_tick % 5 != 4
}

fn paint_sky(area: Rect, buf: &mut Buffer, theme: &Theme, flash: f32) {
    for y in area.top()..area.bottom() {
        let depth = if area.height <= 1 {
            0.0
        } else {
            (y - area.top()) as f32 / (area.height - 1) as f32
        };
        let color = theme.sky_row(depth, flash);
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}

fn paint_drop(area: Rect, buf: &mut Buffer, theme: &Theme, drop: &Raindrop, clock: f64) {
    let Some(fall) = drop_fall(drop, clock) else {
        return;
    };
    let Some((x, y)) = cell_at(area, drop.x_pct, fall.y_pct) else {
        return;
    };
    if let Some(cell) = buf.cell_mut((x, y)) {
        let bg = cell.bg;
        cell.set_char(drop_glyph(fall.opacity))
            .set_fg(theme.rain_color(fall.opacity))
            .set_bg(bg);
    }
}

fn drop_glyph(opacity: f64) -> char {
    if opacity < 0.15 {
        '·'
    } else if opacity < 0.28 {
        '╎'
    } else {
        '│'
    }
}

fn paint_bolt(area: Rect, buf: &mut Buffer, theme: &Theme, bolt: &Bolt) {
    let color = theme.bolt_color();
    for pair in bolt.points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let rows = ((y1 - y0).abs().round() as i64).max(1);
        for step in 0..=rows {
            let t = step as f64 / rows as f64;
            let xp = x0 + (x1 - x0) * t;
            let yp = y0 + (y1 - y0) * t;
            let Some((x, y)) = cell_at(area, bolt.left_pct + (xp - 50.0) * 0.4, yp) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = cell.bg;
                cell.set_char(segment_glyph(x1 - x0))
                    .set_fg(color)
                    .set_bg(bg);
            }
        }
    }
}

fn segment_glyph(dx: f64) -> char {
    if dx > 2.0 {
        '╲'
    } else if dx < -2.0 {
        '╱'
    } else {
        '│'
    }
}

/// Maps percent coordinates onto a cell, clipping anything past the
/// viewport edge (drops run to 110 percent before looping).
fn cell_at(area: Rect, x_pct: f64, y_pct: f64) -> Option<(u16, u16)> {
    if !(0.0..=100.0).contains(&x_pct) || y_pct < 0.0 {
        return None;
    }
    let x = area.x + ((x_pct / 100.0) * f64::from(area.width)) as u16;
    let y = area.y + ((y_pct / 100.0) * f64::from(area.height)) as u16;
    if x < area.right() && y < area.bottom() {
        Some((x, y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::style::Color;

    use super::*;
    use crate::{cli::ThemeArg, ui::theme::{ColorCapability, theme_for}};

    fn fixture(rain: u16) -> StormState {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        StormState::new(rain, &mut rng)
    }

    fn render(backdrop: StormBackdrop<'_>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        backdrop.render(area, &mut buf);
        buf
    }

    #[test]
    fn cell_mapping_clips_past_the_bottom_edge() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(cell_at(area, 50.0, 50.0).is_some());
        assert_eq!(cell_at(area, 50.0, 108.0), None);
        assert_eq!(cell_at(area, 120.0, 50.0), None);
    }

    #[test]
    fn flicker_skips_one_frame_in_five() {
        let hidden = (0..20)
            .filter(|tick| !bolt_visible(*tick, MotionSetting::Full))
            .count();
        assert_eq!(hidden, 4);
        assert!((0..20).all(|tick| bolt_visible(tick, MotionSetting::Reduced)));
    }

    #[test]
    fn sky_fills_every_cell() {
        let storm = fixture(0);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 10, 4);
        let buf = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 0,
                motion: MotionSetting::Full,
                no_flash: false,
            },
            area,
        );
        for y in 0..4 {
            for x in 0..10 {
                assert_ne!(buf[(x, y)].bg, Color::Reset);
            }
        }
    }

    #[test]
    fn flash_wash_lightens_rows_while_a_bolt_is_alive() {
        let mut storm = fixture(0);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 4, 4);

        let calm = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 0,
                motion: MotionSetting::Full,
                no_flash: false,
            },
            area,
        );

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        storm.bolts.spawn(&mut rng);
        let flashed = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 4,
                motion: MotionSetting::Full,
                no_flash: false,
            },
            area,
        );

        let lum = |c: Color| match c {
            Color::Rgb(r, g, b) => u32::from(r) + u32::from(g) + u32::from(b),
            _ => 0,
        };
        assert!(lum(flashed[(0, 0)].bg) > lum(calm[(0, 0)].bg));
    }

    #[test]
    fn no_flash_keeps_the_sky_calm() {
        let mut storm = fixture(0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        storm.bolts.spawn(&mut rng);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 4, 4);

        let buf = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 4,
                motion: MotionSetting::Full,
                no_flash: true,
            },
            area,
        );
        let top = theme.sky_row(0.0, 0.0);
        assert_eq!(buf[(0, 0)].bg, top);
    }

    #[test]
    fn reduced_motion_suppresses_the_flash() {
        let mut storm = fixture(0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        storm.bolts.spawn(&mut rng);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 4, 4);

        let buf = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 0,
                motion: MotionSetting::Reduced,
                no_flash: false,
            },
            area,
        );
        assert_eq!(buf[(0, 0)].bg, theme.sky_row(0.0, 0.0));
    }

    #[test]
    fn motion_off_paints_only_the_sky() {
        let mut storm = fixture(40);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        storm.bolts.spawn(&mut rng);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 40, 12);

        let buf = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 30.0,
                frame_tick: 0,
                motion: MotionSetting::Off,
                no_flash: false,
            },
            area,
        );
        for y in 0..12 {
            for x in 0..40 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
    }

    #[test]
    fn live_bolts_leave_strokes_on_the_buffer() {
        let mut storm = fixture(0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        storm.bolts.spawn(&mut rng);
        let theme = theme_for(ThemeArg::Storm, ColorCapability::TrueColor);
        let area = Rect::new(0, 0, 60, 20);

        let buf = render(
            StormBackdrop {
                theme: &theme,
                storm: &storm,
                clock: 0.0,
                frame_tick: 0,
                motion: MotionSetting::Full,
                no_flash: true,
            },
            area,
        );
        let strokes = (0..20)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() != " ")
            .count();
        assert!(strokes > 0);
    }
}
