//! The storm engine: strike broadcast, bolt generator, rain field, and the
//! strike-driven reveal latch. Everything here is plain state plus pure
//! functions; timers live with the event loop and feed back in as events.

use std::time::Duration;

use rand::Rng;

pub mod bolt;
pub mod rain;
pub mod reveal;
pub mod strike;

pub use bolt::BoltField;
pub use rain::RainField;
pub use reveal::RevealCoordinator;
pub use strike::{StormError, StrikeSignal, StrikeState};

/// How long a single strike keeps the sky lit.
pub const STRIKE_DURATION: Duration = Duration::from_millis(1200);
/// Cadence of the bolt generator tick.
pub const BOLT_INTERVAL: Duration = Duration::from_millis(3000);
/// How long a spawned bolt stays alive before its expiry event lands.
pub const BOLT_LIFETIME: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct StormState {
    pub strike: StrikeSignal,
    pub bolts: BoltField,
    pub rain: RainField,
    pub reveal: RevealCoordinator,
}

impl StormState {
    pub fn new(rain_intensity: u16, rng: &mut impl Rng) -> Self {
        let strike = StrikeSignal::new();
        let reveal = RevealCoordinator::new(strike.observe());
        Self {
            strike,
            bolts: BoltField::default(),
            rain: RainField::generate(usize::from(rain_intensity), rng),
            reveal,
        }
    }

    /// Re-rolls the rain population after an intensity change.
    pub fn reseed_rain(&mut self, intensity: u16, rng: &mut impl Rng) {
        self.rain = RainField::generate(usize::from(intensity), rng);
    }

    /// Whether the backdrop should paint the lightning flash overlay.
    pub fn flash_active(&self) -> bool {
        !self.bolts.is_empty()
    }
}
