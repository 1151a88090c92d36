use rand::Rng;

/// One live lightning bolt. `points` trace the strike in a 0-100 square;
/// `left_pct` places that square horizontally in the viewport.
#[derive(Debug, Clone)]
pub struct Bolt {
    pub id: u64,
    pub points: Vec<(f64, f64)>,
    pub left_pct: f64,
}

/// The set of bolts currently on screen. Ids are monotonic so a late expiry
/// event can never remove a newer bolt.
#[derive(Debug, Default)]
pub struct BoltField {
    bolts: Vec<Bolt>,
    next_id: u64,
}

impl BoltField {
    /// Spawns a bolt and returns its id for the expiry timer.
    pub fn spawn(&mut self, rng: &mut impl Rng) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bolts.push(Bolt {
            id,
            points: bolt_path(rng),
            left_pct: 10.0 + rng.random::<f64>() * 80.0,
        });
        id
    }

    /// Removes the bolt with the given id. Unknown ids are a no-op.
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.bolts.len();
        self.bolts.retain(|bolt| bolt.id != id);
        self.bolts.len() != before
    }

    pub fn clear(&mut self) {
        self.bolts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bolts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bolts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bolt> {
        self.bolts.iter()
    }
}

/// Per-tick spawn gate. Three ticks in ten produce a bolt.
pub fn spawn_roll(rng: &mut impl Rng) -> bool {
    rng.random::<f64>() > 0.7
}

/// Builds one jagged strike path in a 0-100 square.
///
/// The path enters at top center and reaches the ground line in 5 to 7
/// segments; each elbow wanders up to 20 units sideways while staying inside
/// the 10-90 band.
pub fn bolt_path(rng: &mut impl Rng) -> Vec<(f64, f64)> {
    let segments = 5 + rng.random_range(0..3);
    let mut points = Vec::with_capacity(segments + 1);
    let mut x = 50.0;
    let mut y = 0.0;
    points.push((x, y));
    for _ in 0..segments {
        x = (x + (rng.random::<f64>() - 0.5) * 40.0).clamp(10.0, 90.0);
        y += 100.0 / segments as f64;
        points.push((x, y));
    }
    points
}
