mod common;

use std::time::Duration;

use common::{cli_on, feed, press, quiet_cli, seeded_rng};
use crossterm::event::KeyCode;
use stormfolio::{
    app::{
        events::{AppEvent, schedule_bolt_expiry, start_bolt_task, start_frame_task},
        form::FormNotice,
        state::{AppState, Page},
    },
    cli::PageArg,
};
use tokio::sync::mpsc;

/// Lets freshly spawned timer tasks run far enough to register their
/// sleeps against the paused clock.
async fn settle_tasks() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn strike_settles_after_exactly_1200_ms() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    assert!(state.storm.strike.is_striking());
    settle_tasks().await;

    tokio::time::advance(Duration::from_millis(1199)).await;
    settle_tasks().await;
    assert!(rx.try_recv().is_err(), "no settle before the window closes");

    tokio::time::advance(Duration::from_millis(1)).await;
    let event = rx.recv().await.expect("settle event");
    assert!(matches!(event, AppEvent::StrikeSettled));

    feed(&mut state, &tx, &cli, event).await;
    assert!(!state.storm.strike.is_striking());
    assert_eq!(state.storm.strike.strike_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn retrigger_inside_the_window_never_extends_it() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    settle_tasks().await;

    tokio::time::advance(Duration::from_millis(600)).await;
    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    settle_tasks().await;
    assert_eq!(state.storm.strike.strike_count(), 1, "retrigger ignored");

    tokio::time::advance(Duration::from_millis(600)).await;
    let event = rx.recv().await.expect("settle from the first trigger");
    assert!(matches!(event, AppEvent::StrikeSettled));
    feed(&mut state, &tx, &cli, event).await;
    assert!(!state.storm.strike.is_striking());

    settle_tasks().await;
    tokio::time::advance(Duration::from_millis(1200)).await;
    settle_tasks().await;
    assert!(
        rx.try_recv().is_err(),
        "the rejected trigger scheduled nothing"
    );

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    assert_eq!(state.storm.strike.strike_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn bolts_expire_exactly_500_ms_after_creation() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(8);

    let mut rng = seeded_rng(3);
    let id = state.storm.bolts.spawn(&mut rng);
    schedule_bolt_expiry(tx.clone(), id);
    settle_tasks().await;
    assert!(state.storm.flash_active());

    tokio::time::advance(Duration::from_millis(499)).await;
    settle_tasks().await;
    assert!(rx.try_recv().is_err());

    tokio::time::advance(Duration::from_millis(1)).await;
    let event = rx.recv().await.expect("expiry event");
    assert!(matches!(event, AppEvent::BoltExpired(got) if got == id));

    feed(&mut state, &tx, &cli, event).await;
    assert!(!state.storm.flash_active());
}

#[tokio::test(start_paused = true)]
async fn bolt_generator_waits_a_full_period_before_rolling() {
    let (tx, mut rx) = mpsc::channel(8);
    start_bolt_task(tx);
    settle_tasks().await;

    tokio::time::advance(Duration::from_millis(2999)).await;
    settle_tasks().await;
    assert!(rx.try_recv().is_err(), "no roll inside the first period");

    tokio::time::advance(Duration::from_millis(1)).await;
    let event = rx.recv().await.expect("first generator tick");
    assert!(matches!(event, AppEvent::TickBolt));

    tokio::time::advance(Duration::from_millis(3000)).await;
    let event = rx.recv().await.expect("second generator tick");
    assert!(matches!(event, AppEvent::TickBolt));
}

#[tokio::test(start_paused = true)]
async fn form_notice_clears_after_exactly_5000_ms() {
    let cli = cli_on(PageArg::Contact);
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Enter).await;
    for _ in 0..4 {
        press(&mut state, &tx, &cli, KeyCode::Tab).await;
    }
    press(&mut state, &tx, &cli, KeyCode::Enter).await;
    assert_eq!(state.form_notice, Some(FormNotice::MissingFields));
    settle_tasks().await;

    tokio::time::advance(Duration::from_millis(4999)).await;
    settle_tasks().await;
    assert!(rx.try_recv().is_err());

    tokio::time::advance(Duration::from_millis(1)).await;
    let event = rx.recv().await.expect("notice expiry");
    assert!(matches!(event, AppEvent::NoticeExpired));

    feed(&mut state, &tx, &cli, event).await;
    assert_eq!(state.form_notice, None);
}

#[tokio::test(start_paused = true)]
async fn frame_task_ticks_at_the_requested_cadence() {
    let (tx, mut rx) = mpsc::channel(8);
    start_frame_task(tx, 20);
    settle_tasks().await;

    let event = rx.recv().await.expect("immediate first frame");
    assert!(matches!(event, AppEvent::TickFrame));

    tokio::time::advance(Duration::from_millis(49)).await;
    settle_tasks().await;
    assert!(rx.try_recv().is_err());

    tokio::time::advance(Duration::from_millis(1)).await;
    let event = rx.recv().await.expect("second frame");
    assert!(matches!(event, AppEvent::TickFrame));
}

#[tokio::test(start_paused = true)]
async fn dropped_receiver_silences_every_timer() {
    let cli = quiet_cli();
    let mut state = AppState::new(&cli);
    let (tx, rx) = mpsc::channel(8);

    press(&mut state, &tx, &cli, KeyCode::Char('t')).await;
    let mut rng = seeded_rng(4);
    let id = state.storm.bolts.spawn(&mut rng);
    schedule_bolt_expiry(tx.clone(), id);
    settle_tasks().await;

    drop(rx);
    drop(tx);
    tokio::time::advance(Duration::from_millis(6000)).await;
    settle_tasks().await;

    assert!(state.storm.strike.is_striking(), "no receiver, no settle");
    assert_eq!(state.page, Page::Home);
}
