use ratatui::style::Color;

use crate::cli::ThemeArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

pub type Rgb = (u8, u8, u8);

/// Resolved palette for one run. Sky endpoints stay as raw RGB so the
/// backdrop can interpolate rows before quantizing; everything else is
/// already quantized for the detected capability.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub capability: ColorCapability,
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
    pub flash_wash: Rgb,
    pub bolt_stroke: Rgb,
    pub rain_faint: Rgb,
    pub rain_bright: Rgb,
    pub surface: Color,
    pub surface_alt: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub electric: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub border: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

pub fn theme_for(mode: ThemeArg, capability: ColorCapability) -> Theme {
    if capability == ColorCapability::Basic16 {
        return basic16_theme(mode, capability);
    }

    let (
        sky_top,
        sky_bottom,
        flash_wash,
        bolt_stroke,
        surface,
        surface_alt,
        text,
        muted,
        accent,
        electric,
        success,
        border,
    ) = match mode {
        ThemeArg::Storm => (
            (15, 23, 42),
            (30, 41, 59),
            (248, 250, 252),
            (224, 242, 254),
            (30, 41, 59),
            (42, 56, 78),
            (248, 250, 252),
            (148, 163, 184),
            (56, 189, 248),
            (34, 211, 238),
            (74, 222, 128),
            (51, 65, 85),
        ),
        ThemeArg::Midnight => (
            (2, 6, 23),
            (15, 23, 42),
            (226, 232, 240),
            (186, 230, 253),
            (15, 23, 42),
            (30, 41, 59),
            (226, 232, 240),
            (100, 116, 139),
            (125, 211, 252),
            (103, 232, 249),
            (134, 239, 172),
            (30, 41, 59),
        ),
        ThemeArg::Paper => (
            (241, 245, 249),
            (226, 232, 240),
            (125, 211, 252),
            (3, 105, 161),
            (248, 250, 252),
            (226, 232, 240),
            (15, 23, 42),
            (71, 85, 105),
            (2, 132, 199),
            (14, 116, 144),
            (22, 163, 74),
            (148, 163, 184),
        ),
    };

    let (warning, danger) = if mode == ThemeArg::Paper {
        ((180, 83, 9), (185, 28, 28))
    } else {
        ((251, 191, 36), (248, 113, 113))
    };

    let rain_faint = mix_rgb(sky_bottom, bolt_stroke, 0.35);
    let rain_bright = mix_rgb(sky_bottom, bolt_stroke, 0.75);

    let q = |rgb: Rgb| quantize(Color::Rgb(rgb.0, rgb.1, rgb.2), capability);
    Theme {
        capability,
        sky_top,
        sky_bottom,
        flash_wash,
        bolt_stroke,
        rain_faint,
        rain_bright,
        surface: q(surface),
        surface_alt: q(surface_alt),
        text: q(text),
        muted_text: q(muted),
        accent: q(accent),
        electric: q(electric),
        success: q(success),
        warning: q(warning),
        danger: q(danger),
        border: q(border),
    }
}

fn basic16_theme(mode: ThemeArg, capability: ColorCapability) -> Theme {
    let light = mode == ThemeArg::Paper;
    let (sky_top, sky_bottom) = if light {
        ((200, 205, 212), (170, 176, 186))
    } else {
        ((0, 0, 0), (16, 22, 36))
    };

    Theme {
        capability,
        sky_top,
        sky_bottom,
        flash_wash: if light { (120, 170, 210) } else { (235, 240, 248) },
        bolt_stroke: if light { (20, 60, 120) } else { (235, 240, 248) },
        rain_faint: if light { (120, 128, 140) } else { (90, 100, 116) },
        rain_bright: if light { (70, 80, 96) } else { (160, 172, 190) },
        surface: if light { Color::Gray } else { Color::Black },
        surface_alt: if light { Color::White } else { Color::DarkGray },
        text: if light { Color::Black } else { Color::White },
        muted_text: if light { Color::DarkGray } else { Color::Gray },
        accent: if light { Color::Blue } else { Color::Cyan },
        electric: if light { Color::Cyan } else { Color::LightCyan },
        success: if light { Color::Green } else { Color::LightGreen },
        warning: Color::Yellow,
        danger: if light { Color::Red } else { Color::LightRed },
        border: if light { Color::DarkGray } else { Color::LightCyan },
    }
}

impl Theme {
    /// Sky color for one backdrop row. `depth` runs 0.0 at the top of the
    /// viewport to 1.0 at the bottom; `flash` lightens the row toward the
    /// wash color while a bolt is alive.
    #[must_use]
    pub fn sky_row(&self, depth: f32, flash: f32) -> Color {
        let base = mix_rgb(self.sky_top, self.sky_bottom, depth.clamp(0.0, 1.0));
        let washed = mix_rgb(base, self.flash_wash, flash.clamp(0.0, 1.0));
        quantize(Color::Rgb(washed.0, washed.1, washed.2), self.capability)
    }

    #[must_use]
    pub fn bolt_color(&self) -> Color {
        let (r, g, b) = self.bolt_stroke;
        quantize(Color::Rgb(r, g, b), self.capability)
    }

    /// Raindrop foreground stepped by opacity, brighter drops closer to
    /// the bolt stroke color.
    #[must_use]
    pub fn rain_color(&self, opacity: f64) -> Color {
        let t = (opacity.clamp(0.0, 1.0) as f32) / 0.4;
        let (r, g, b) = mix_rgb(self.rain_faint, self.rain_bright, t.min(1.0));
        quantize(Color::Rgb(r, g, b), self.capability)
    }
}

pub fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            let index = 16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b);
            Color::Indexed(index)
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        if light < 0.20 {
            return Color::Black;
        }
        if light < 0.40 {
            return Color::DarkGray;
        }
        if light < 0.72 {
            return Color::Gray;
        }
        return Color::White;
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    match hue {
        h if !(30.0..330.0).contains(&h) => {
            if bright {
                Color::LightRed
            } else {
                Color::Red
            }
        }
        h if h < 90.0 => {
            if bright {
                Color::LightYellow
            } else {
                Color::Yellow
            }
        }
        h if h < 150.0 => {
            if bright {
                Color::LightGreen
            } else {
                Color::Green
            }
        }
        h if h < 210.0 => {
            if bright {
                Color::LightCyan
            } else {
                Color::Cyan
            }
        }
        h if h < 270.0 => {
            if bright {
                Color::LightBlue
            } else {
                Color::Blue
            }
        }
        _ => {
            if bright {
                Color::LightMagenta
            } else {
                Color::Magenta
            }
        }
    }
}
