//! Short-lived fake dialog overlays.

use std::time::{Duration, Instant};

use rand::Rng;

/// How long a popup stays on screen.
pub const POPUP_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Alert,
    Info,
}

#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub body: String,
    pub kind: PopupKind,
    /// Random nudge off dead-center, in cells.
    pub offset: (i16, i16),
    spawned_at: Instant,
}

impl Popup {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.spawned_at)
    }
}

/// Active popups, newest rendered last (on top).
#[derive(Debug, Default)]
pub struct Popups {
    popups: Vec<Popup>,
}

impl Popups {
    pub fn new() -> Self {
        Popups { popups: Vec::new() }
    }

    pub fn spawn(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: PopupKind,
        rng: &mut impl Rng,
    ) {
        self.popups.push(Popup {
            title: title.into(),
            body: body.into(),
            kind,
            offset: (rng.gen_range(-10..=10), rng.gen_range(-4..=4)),
            spawned_at: Instant::now(),
        });
    }

    /// Drop every popup older than [`POPUP_LIFETIME`].
    pub fn sweep(&mut self, now: Instant) {
        self.popups.retain(|p| p.age(now) < POPUP_LIFETIME);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Popup> {
        self.popups.iter()
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sweep_expires_old_popups() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut popups = Popups::new();
        popups.spawn("SECURITY ALERT", "something something camera", PopupKind::Alert, &mut rng);
        assert_eq!(popups.len(), 1);

        // Still fresh "now"
        popups.sweep(Instant::now());
        assert_eq!(popups.len(), 1);

        // Well past the lifetime
        popups.sweep(Instant::now() + POPUP_LIFETIME * 2);
        assert!(popups.is_empty());
    }

    #[test]
    fn test_offsets_are_bounded() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut popups = Popups::new();
        for _ in 0..100 {
            popups.spawn("t", "b", PopupKind::Info, &mut rng);
        }
        for popup in popups.iter() {
            assert!((-10..=10).contains(&popup.offset.0));
            assert!((-4..=4).contains(&popup.offset.1));
        }
    }
}
