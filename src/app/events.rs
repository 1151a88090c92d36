use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{interval, sleep};

use crate::storm::{BOLT_INTERVAL, BOLT_LIFETIME, STRIKE_DURATION};

/// How long the contact-form notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    TickBolt,
    StrikeSettled,
    BoltExpired(u64),
    NoticeExpired,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

/// Drives the bolt generator for the life of the app. The first interval
/// tick completes immediately, so it is consumed up front; the generator
/// rolls only after a full period has passed.
pub fn start_bolt_task(tx: tokio::sync::mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(BOLT_INTERVAL);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickBolt).await.is_err() {
                break;
            }
        }
    });
}

/// Ends the strike exactly one window after the accepted trigger. When the
/// app is torn down before the timer lands, the send is discarded.
pub fn schedule_strike_settle(tx: tokio::sync::mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        sleep(STRIKE_DURATION).await;
        let _ = tx.send(AppEvent::StrikeSettled).await;
    });
}

pub fn schedule_bolt_expiry(tx: tokio::sync::mpsc::Sender<AppEvent>, id: u64) {
    tokio::spawn(async move {
        sleep(BOLT_LIFETIME).await;
        let _ = tx.send(AppEvent::BoltExpired(id)).await;
    });
}

pub fn schedule_notice_expiry(tx: tokio::sync::mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        sleep(NOTICE_DURATION).await;
        let _ = tx.send(AppEvent::NoticeExpired).await;
    });
}
