#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stormfolio::{
    app::{events::AppEvent, state::AppState},
    cli::{Cli, ColorArg, PageArg},
};
use tokio::sync::mpsc;

pub fn quiet_cli() -> Cli {
    Cli {
        page: PageArg::Home,
        fps: 30,
        rain: 30,
        no_animation: false,
        reduced_motion: false,
        no_flash: false,
        ascii: false,
        muted: false,
        color: ColorArg::Always,
        no_color: false,
        theme: None,
        ephemeral: true,
    }
}

pub fn cli_on(page: PageArg) -> Cli {
    Cli {
        page,
        ..quiet_cli()
    }
}

pub fn still_cli() -> Cli {
    Cli {
        no_animation: true,
        ..quiet_cli()
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub async fn press(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, cli: &Cli, code: KeyCode) {
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            tx,
            cli,
        )
        .await
        .expect("key event");
}

pub async fn feed(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, cli: &Cli, event: AppEvent) {
    state.handle_event(event, tx, cli).await.expect("app event");
}
