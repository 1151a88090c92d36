use crate::storm::strike::{StormError, StrikeObserver};

/// Strikes needed before the hidden portrait stays on screen.
pub const REVEAL_THRESHOLD: u64 = 2;

/// One-way latch tying the hidden portrait to cumulative strike activity.
#[derive(Debug)]
pub struct RevealCoordinator {
    observer: StrikeObserver,
    revealed: bool,
}

impl RevealCoordinator {
    pub fn new(observer: StrikeObserver) -> Self {
        Self {
            observer,
            revealed: false,
        }
    }

    /// Folds the current strike tally into the latch. The latch only moves
    /// one way: once enough strikes have landed, the portrait stays revealed
    /// for the rest of the session.
    pub fn refresh(&mut self) -> Result<bool, StormError> {
        let state = self.observer.state()?;
        if state.strike_count >= REVEAL_THRESHOLD {
            self.revealed = true;
        }
        Ok(self.revealed)
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

/// How the portrait panel should read this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitCue {
    Hidden,
    Flash,
    Dimmed,
    Charged,
}

/// Pre-latch the portrait only shows while a strike is active; post-latch it
/// idles dimmed and charges back up during strikes.
pub fn portrait_cue(revealed: bool, is_striking: bool) -> PortraitCue {
    match (revealed, is_striking) {
        (false, false) => PortraitCue::Hidden,
        (false, true) => PortraitCue::Flash,
        (true, false) => PortraitCue::Dimmed,
        (true, true) => PortraitCue::Charged,
    }
}
