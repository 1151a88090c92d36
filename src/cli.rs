use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PageArg {
    Home,
    About,
    Portfolio,
    Hobbies,
    Contact,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeArg {
    Storm,
    Midnight,
    Paper,
}

impl ThemeArg {
    /// Next theme in the `T` key rotation.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            ThemeArg::Storm => ThemeArg::Midnight,
            ThemeArg::Midnight => ThemeArg::Paper,
            ThemeArg::Paper => ThemeArg::Storm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "stormfolio",
    version,
    about = "Storm-themed animated terminal portfolio"
)]
pub struct Cli {
    /// Page to open first
    #[arg(long, value_enum, default_value_t = PageArg::Home)]
    pub page: PageArg,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Raindrop population (0..200)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(0..=200))]
    pub rain: u16,

    /// Disable storm animation
    #[arg(long)]
    pub no_animation: bool,

    /// Lower motion mode
    #[arg(long)]
    pub reduced_motion: bool,

    /// Disable the lightning flash overlay
    #[arg(long)]
    pub no_flash: bool,

    /// Force ASCII glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Start with the ambient audio chip off
    #[arg(long)]
    pub muted: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Theme override
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Keep settings and submissions in memory only
    #[arg(long)]
    pub ephemeral: bool,
}

impl Cli {
    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}
