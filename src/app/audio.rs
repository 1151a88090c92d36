/// The ambient storm soundscape toggle. Playback itself stays outside the
/// terminal; the chip tracks the preference and persists it across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientAudio {
    pub playing: bool,
}

impl AmbientAudio {
    #[must_use]
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        if self.playing { "on" } else { "off" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_the_preference() {
        let mut audio = AmbientAudio::new(true);
        assert_eq!(audio.status(), "on");
        audio.toggle();
        assert!(!audio.playing);
        assert_eq!(audio.status(), "off");
        audio.toggle();
        assert!(audio.playing);
    }
}
