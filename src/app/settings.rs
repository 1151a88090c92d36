use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, IconMode, ThemeArg};

pub const DEFAULT_RAIN: u16 = 30;
pub const MAX_RAIN: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionSetting {
    Full,
    Reduced,
    Off,
}

/// User-tunable knobs that survive restarts. Loaded under the CLI, saved on
/// the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub theme: ThemeArg,
    pub motion: MotionSetting,
    pub no_flash: bool,
    pub icon_mode: IconMode,
    pub rain_intensity: u16,
    pub audio: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            theme: ThemeArg::Storm,
            motion: MotionSetting::Full,
            no_flash: false,
            icon_mode: IconMode::Unicode,
            rain_intensity: DEFAULT_RAIN,
            audio: true,
        }
    }
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        merged(Self::default(), cli)
    }
}

/// Lays CLI overrides on top of saved (or default) settings. Flags the user
/// did not pass leave the saved value alone.
fn merged(mut settings: RuntimeSettings, cli: &Cli) -> RuntimeSettings {
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if cli.no_animation {
        settings.motion = MotionSetting::Off;
    } else if cli.reduced_motion {
        settings.motion = MotionSetting::Reduced;
    }
    if cli.no_flash {
        settings.no_flash = true;
    }
    if cli.ascii {
        settings.icon_mode = IconMode::Ascii;
    }
    if cli.rain != DEFAULT_RAIN {
        settings.rain_intensity = cli.rain.min(MAX_RAIN);
    }
    if cli.muted {
        settings.audio = false;
    }
    settings
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    let mut settings = RuntimeSettings::default();
    if !enable_disk {
        return (merged(settings, cli), None);
    }

    let Some(path) = settings_path() else {
        return (merged(settings, cli), None);
    };

    if let Ok(content) = fs::read_to_string(&path)
        && let Ok(saved) = serde_json::from_str::<RuntimeSettings>(&content)
    {
        settings = saved;
    }

    (merged(settings, cli), Some(path))
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("STORMFOLIO_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("stormfolio")
            .join("settings.json"),
    )
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["stormfolio"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_describe_a_full_storm() {
        let settings = RuntimeSettings::default();
        assert_eq!(settings.theme, ThemeArg::Storm);
        assert_eq!(settings.motion, MotionSetting::Full);
        assert!(!settings.no_flash);
        assert_eq!(settings.rain_intensity, DEFAULT_RAIN);
        assert!(settings.audio);
    }

    #[test]
    fn cli_flags_override_saved_values() {
        let saved = RuntimeSettings {
            theme: ThemeArg::Paper,
            rain_intensity: 80,
            ..RuntimeSettings::default()
        };
        let merged_settings = merged(
            saved,
            &cli(&["--theme", "midnight", "--rain", "10", "--no-flash", "--muted"]),
        );
        assert_eq!(merged_settings.theme, ThemeArg::Midnight);
        assert_eq!(merged_settings.rain_intensity, 10);
        assert!(merged_settings.no_flash);
        assert!(!merged_settings.audio);
    }

    #[test]
    fn unset_flags_leave_saved_values_alone() {
        let saved = RuntimeSettings {
            theme: ThemeArg::Paper,
            motion: MotionSetting::Reduced,
            rain_intensity: 80,
            ..RuntimeSettings::default()
        };
        let merged_settings = merged(saved, &cli(&[]));
        assert_eq!(merged_settings.theme, ThemeArg::Paper);
        assert_eq!(merged_settings.motion, MotionSetting::Reduced);
        assert_eq!(merged_settings.rain_intensity, 80);
    }

    #[test]
    fn no_animation_beats_reduced_motion() {
        let settings = RuntimeSettings::from_cli_defaults(&cli(&[
            "--no-animation",
            "--reduced-motion",
        ]));
        assert_eq!(settings.motion, MotionSetting::Off);
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let settings = RuntimeSettings {
            theme: ThemeArg::Midnight,
            motion: MotionSetting::Reduced,
            no_flash: true,
            icon_mode: IconMode::Ascii,
            rain_intensity: 120,
            audio: false,
        };

        let file = NamedTempFile::new().expect("create temp settings file");
        save_runtime_settings(file.path(), &settings).expect("save settings");
        let content = std::fs::read_to_string(file.path()).expect("read settings");
        let restored: RuntimeSettings = serde_json::from_str(&content).expect("parse settings");

        assert_eq!(restored, settings);
    }

    #[test]
    fn load_without_disk_returns_cli_defaults() {
        let (settings, path) = load_runtime_settings(&cli(&["--rain", "55"]), false);
        assert!(path.is_none());
        assert_eq!(settings.rain_intensity, 55);
    }

    #[test]
    fn load_with_env_override_reads_the_custom_dir() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let saved = RuntimeSettings {
            rain_intensity: 90,
            ..RuntimeSettings::default()
        };
        save_runtime_settings(&temp_dir.path().join("settings.json"), &saved)
            .expect("save settings");

        unsafe {
            std::env::set_var("STORMFOLIO_CONFIG_DIR", temp_dir.path());
        }
        let (loaded, path) = load_runtime_settings(&cli(&[]), true);
        unsafe {
            std::env::remove_var("STORMFOLIO_CONFIG_DIR");
        }

        assert_eq!(loaded.rain_intensity, 90);
        assert!(path.expect("settings path").ends_with("settings.json"));
    }
}
