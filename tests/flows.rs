mod common;

use common::{cli_on, feed, press, quiet_cli, still_cli};
use crossterm::event::KeyCode;
use stormfolio::{
    app::{
        events::AppEvent,
        form::FormNotice,
        state::{AppMode, AppState, Page},
    },
    cli::{PageArg, ThemeArg},
};
use tokio::sync::mpsc;

#[tokio::test]
async fn digits_and_tabs_reach_every_page() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    for (digit, page) in [
        ('1', Page::Home),
        ('2', Page::About),
        ('3', Page::Portfolio),
        ('4', Page::Hobbies),
        ('5', Page::Contact),
    ] {
        press(&mut state, &tx, &cli, KeyCode::Char(digit)).await;
        assert_eq!(state.page, page);
    }

    press(&mut state, &tx, &cli, KeyCode::Tab).await;
    assert_eq!(state.page, Page::Home, "tab wraps past the last page");
    press(&mut state, &tx, &cli, KeyCode::BackTab).await;
    assert_eq!(state.page, Page::Contact);
}

#[tokio::test]
async fn compose_fill_and_send_round_trip() {
    let cli = cli_on(PageArg::Contact);
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Enter).await;
    assert_eq!(state.mode, AppMode::Editing);

    for (text, last) in [("Ada", false), ("ada@example.com", false), ("Hello", false), ("Storm's brewing.", true)]
    {
        for ch in text.chars() {
            press(&mut state, &tx, &cli, KeyCode::Char(ch)).await;
        }
        press(&mut state, &tx, &cli, KeyCode::Tab).await;
        if last {
            press(&mut state, &tx, &cli, KeyCode::Enter).await;
        }
    }

    assert_eq!(state.form_notice, Some(FormNotice::Sent));
    assert_eq!(state.mode, AppMode::Browsing);
    assert_eq!(state.submissions.len(), 1);
    assert_eq!(state.submissions[0].name, "Ada");
    assert_eq!(state.submissions[0].message, "Storm's brewing.");
    assert!(state.form.name.is_empty(), "form clears after send");

    feed(&mut state, &tx, &cli, AppEvent::NoticeExpired).await;
    assert_eq!(state.form_notice, None);
}

#[tokio::test]
async fn backspace_edits_the_focused_field() {
    let cli = cli_on(PageArg::Contact);
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Enter).await;
    for ch in "Davide".chars() {
        press(&mut state, &tx, &cli, KeyCode::Char(ch)).await;
    }
    press(&mut state, &tx, &cli, KeyCode::Backspace).await;
    assert_eq!(state.form.name, "David");

    press(&mut state, &tx, &cli, KeyCode::Esc).await;
    assert_eq!(state.mode, AppMode::Browsing);
    assert_eq!(state.form.name, "David", "draft survives leaving the editor");
}

#[tokio::test]
async fn strikes_accumulate_and_latch_the_portrait() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    feed(&mut state, &tx, &cli, AppEvent::StrikeSettled).await;
    assert!(!state.storm.reveal.revealed());

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    feed(&mut state, &tx, &cli, AppEvent::StrikeSettled).await;

    assert_eq!(state.storm.strike.strike_count(), 2);
    assert!(state.storm.reveal.revealed());
    assert!(!state.storm.strike.is_striking());
}

#[tokio::test]
async fn bolt_lifecycle_controls_the_flash() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    let mut rng = rand::rng();
    let first = state.storm.bolts.spawn(&mut rng);
    let second = state.storm.bolts.spawn(&mut rng);
    assert!(state.storm.flash_active());

    feed(&mut state, &tx, &cli, AppEvent::BoltExpired(first)).await;
    assert!(state.storm.flash_active(), "one bolt still alive");

    feed(&mut state, &tx, &cli, AppEvent::BoltExpired(second)).await;
    assert!(!state.storm.flash_active());

    feed(&mut state, &tx, &cli, AppEvent::BoltExpired(second)).await;
    assert!(!state.storm.flash_active(), "late expiry is a no-op");
}

#[tokio::test]
async fn audio_toggle_flows_into_settings() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);
    assert!(state.audio.playing, "ambience defaults on");

    press(&mut state, &tx, &cli, KeyCode::Char('m')).await;
    assert!(!state.audio.playing);
    assert!(!state.settings.audio);

    press(&mut state, &tx, &cli, KeyCode::Char('m')).await;
    assert!(state.settings.audio);
}

#[tokio::test]
async fn muted_flag_starts_the_chip_off() {
    let mut cli = quiet_cli();
    cli.muted = true;
    let state = AppState::new(&cli);
    assert!(!state.audio.playing);
}

#[tokio::test]
async fn theme_key_cycles_all_three_palettes() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);
    assert_eq!(state.settings.theme, ThemeArg::Storm);

    press(&mut state, &tx, &cli, KeyCode::Char('T')).await;
    assert_eq!(state.settings.theme, ThemeArg::Midnight);
    press(&mut state, &tx, &cli, KeyCode::Char('T')).await;
    assert_eq!(state.settings.theme, ThemeArg::Paper);
    press(&mut state, &tx, &cli, KeyCode::Char('T')).await;
    assert_eq!(state.settings.theme, ThemeArg::Storm);
}

#[tokio::test]
async fn help_overlay_toggles() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('?')).await;
    assert!(state.show_help);
    press(&mut state, &tx, &cli, KeyCode::Char('?')).await;
    assert!(!state.show_help);
}

#[tokio::test]
async fn quit_key_posts_quit_and_stops_the_loop() {
    let cli = still_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('q')).await;
    let event = rx.recv().await.expect("quit event queued");
    assert!(matches!(event, AppEvent::Quit));

    feed(&mut state, &tx, &cli, event).await;
    assert_eq!(state.mode, AppMode::Quit);
}
