//! Matrix rain: one falling glyph per column.

use rand::Rng;

const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&*()[]{}<>?/|\\";

/// How far above the top a wrapped drop may restart.
const WRAP_HEADROOM: i32 = 16;

/// Per-column drop positions in rows. Negative means above the visible
/// area, so drops enter staggered instead of all at once.
#[derive(Debug, Default)]
pub struct Rain {
    drops: Vec<i32>,
}

impl Rain {
    pub fn new() -> Self {
        Rain { drops: Vec::new() }
    }

    pub fn drops(&self) -> &[i32] {
        &self.drops
    }

    /// Grow or shrink to the panel width, seeding new columns above the top.
    pub fn resize(&mut self, columns: usize, rng: &mut impl Rng) {
        if self.drops.len() > columns {
            self.drops.truncate(columns);
        }
        while self.drops.len() < columns {
            self.drops.push(rng.gen_range(-WRAP_HEADROOM..=0));
        }
    }

    /// Move every drop down, wrapping past the bottom back above the top.
    pub fn advance(&mut self, height: u16, rng: &mut impl Rng) {
        let bottom = i32::from(height) + 2;
        for drop in &mut self.drops {
            *drop += rng.gen_range(1..=2);
            if *drop > bottom {
                *drop = rng.gen_range(-WRAP_HEADROOM..=0);
            }
        }
    }

    /// A random glyph from the rain charset.
    pub fn glyph(rng: &mut impl Rng) -> char {
        CHARSET[rng.gen_range(0..CHARSET.len())] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_drops_stay_within_wrap_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut rain = Rain::new();
        rain.resize(80, &mut rng);
        assert_eq!(rain.drops().len(), 80);

        let height = 24u16;
        for _ in 0..500 {
            rain.advance(height, &mut rng);
            for &drop in rain.drops() {
                assert!(drop >= -WRAP_HEADROOM);
                assert!(drop <= i32::from(height) + 2);
            }
        }
    }

    #[test]
    fn test_resize_is_idempotent_and_shrinks() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut rain = Rain::new();
        rain.resize(120, &mut rng);
        rain.resize(120, &mut rng);
        assert_eq!(rain.drops().len(), 120);
        rain.resize(40, &mut rng);
        assert_eq!(rain.drops().len(), 40);
    }

    #[test]
    fn test_glyphs_come_from_charset() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let glyph = Rain::glyph(&mut rng);
            assert!(CHARSET.contains(&(glyph as u8)));
        }
    }
}
