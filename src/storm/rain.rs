use rand::Rng;

/// One falling drop. Parameters are fixed at generation time; motion is a
/// pure function of the shared animation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub x_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub peak_opacity: f64,
}

/// Where a drop is, and how bright, at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropFall {
    pub y_pct: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RainField {
    pub drops: Vec<Raindrop>,
}

impl RainField {
    /// Samples a fresh population of exactly `intensity` drops.
    pub fn generate(intensity: usize, rng: &mut impl Rng) -> Self {
        let drops = (0..intensity)
            .map(|_| Raindrop {
                x_pct: rng.random::<f64>() * 100.0,
                delay_secs: rng.random::<f64>() * 5.0,
                duration_secs: 1.0 + rng.random::<f64>(),
                peak_opacity: 0.1 + rng.random::<f64>() * 0.3,
            })
            .collect();
        Self { drops }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Raindrop> {
        self.drops.iter()
    }
}

/// Phase of one drop at `clock_secs` on the shared animation clock.
///
/// `None` until the drop's start delay has elapsed. After that the drop
/// loops forever with its own period, falling from the top edge to just past
/// the bottom (110% of the viewport) while its opacity ramps up to the
/// sampled peak, holds, and fades back out.
pub fn drop_fall(drop: &Raindrop, clock_secs: f64) -> Option<DropFall> {
    let since_start = clock_secs - drop.delay_secs;
    if since_start < 0.0 {
        return None;
    }
    let t = (since_start / drop.duration_secs).fract();
    let opacity = if t < 1.0 / 3.0 {
        drop.peak_opacity * (t * 3.0)
    } else if t < 2.0 / 3.0 {
        drop.peak_opacity
    } else {
        drop.peak_opacity * ((1.0 - t) * 3.0)
    };
    Some(DropFall {
        y_pct: 110.0 * t,
        opacity,
    })
}
