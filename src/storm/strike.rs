use thiserror::Error;
use tokio::sync::watch;

/// Snapshot of the shared strike signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrikeState {
    pub is_striking: bool,
    pub strike_count: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StormError {
    #[error("strike signal closed: the owning handle was dropped")]
    SignalClosed,
}

/// Owner half of the strike broadcast. Exactly one per running app; every
/// other component reads through a [`StrikeObserver`].
#[derive(Debug)]
pub struct StrikeSignal {
    tx: watch::Sender<StrikeState>,
}

impl StrikeSignal {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(StrikeState::default()),
        }
    }

    pub fn state(&self) -> StrikeState {
        *self.tx.borrow()
    }

    pub fn is_striking(&self) -> bool {
        self.tx.borrow().is_striking
    }

    pub fn strike_count(&self) -> u64 {
        self.tx.borrow().strike_count
    }

    /// Starts a strike unless one is already lighting the sky.
    ///
    /// Returns `true` when a new strike began; the caller owns scheduling the
    /// matching settle. A trigger landing inside an active strike changes
    /// nothing and returns `false`.
    pub fn trigger(&self) -> bool {
        if self.tx.borrow().is_striking {
            return false;
        }
        self.tx.send_modify(|state| {
            state.is_striking = true;
            state.strike_count += 1;
        });
        true
    }

    /// Ends the active strike. Settling an idle signal changes nothing.
    pub fn settle(&self) {
        if self.tx.borrow().is_striking {
            self.tx.send_modify(|state| state.is_striking = false);
        }
    }

    pub fn observe(&self) -> StrikeObserver {
        StrikeObserver {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for StrikeSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap, cloneable subscriber handle onto the strike signal.
#[derive(Debug, Clone)]
pub struct StrikeObserver {
    rx: watch::Receiver<StrikeState>,
}

impl StrikeObserver {
    /// Current strike state, or [`StormError::SignalClosed`] once the owning
    /// signal has been dropped.
    pub fn state(&self) -> Result<StrikeState, StormError> {
        self.rx.has_changed().map_err(|_| StormError::SignalClosed)?;
        Ok(*self.rx.borrow())
    }
}
