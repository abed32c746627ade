// seed.rs - Initial cell states for buffer A

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{ALIVE, CellState, DEAD};

/// Caller-supplied rule for the initial state of cell `(row, col)`.
///
/// Called once per cell on initialize and again on every reset, so it must
/// return the same grid each time for a reset to reproduce the start state.
pub type SeedFn = Box<dyn Fn(usize, usize) -> CellState + Send>;

pub fn from_fn<F>(f: F) -> SeedFn
where
    F: Fn(usize, usize) -> CellState + Send + 'static,
{
    Box::new(f)
}

pub fn constant(state: CellState) -> SeedFn {
    Box::new(move |_, _| state)
}

/// Each cell alive independently with `probability`.
///
/// The draw for a cell depends only on `seed` and its coordinates.
pub fn random(probability: f64, seed: u64) -> SeedFn {
    let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
    Box::new(move |row, col| {
        let mut hasher = DefaultHasher::new();
        (seed, row, col).hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());
        if rng.gen_bool(probability) { ALIVE } else { DEAD }
    })
}

/// Alive exactly at the pattern's cells, shifted by `offset` (row, col).
pub fn pattern(pattern: &'static Pattern, offset: (usize, usize)) -> SeedFn {
    Box::new(move |row, col| {
        let hit = pattern
            .cells
            .iter()
            .any(|&(r, c)| r + offset.0 == row && c + offset.1 == col);
        if hit { ALIVE } else { DEAD }
    })
}

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_reproducible() {
        let a = random(0.4, 7);
        let b = random(0.4, 7);
        for row in 0..16 {
            for col in 0..16 {
                assert_eq!(a(row, col), b(row, col));
            }
        }
    }

    #[test]
    fn test_random_extremes() {
        let never = random(0.0, 1);
        let always = random(1.0, 1);
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(never(row, col), DEAD);
                assert_eq!(always(row, col), ALIVE);
            }
        }
        // Out-of-range and NaN probabilities are clamped rather than panicking
        assert_eq!(random(2.5, 1)(0, 0), ALIVE);
        assert_eq!(random(f64::NAN, 1)(0, 0), DEAD);
    }

    #[test]
    fn test_random_density_is_roughly_probability() {
        let seed = random(0.4, 42);
        let alive: usize = (0..64)
            .flat_map(|r| (0..64).map(move |c| (r, c)))
            .filter(|&(r, c)| seed(r, c) == ALIVE)
            .count();
        let density = alive as f64 / 4096.0;
        assert!((0.3..0.5).contains(&density), "density {density}");
    }

    #[test]
    fn test_pattern_offset() {
        let glider = find_pattern("glider").unwrap();
        let seed = pattern(glider, (5, 5));
        assert_eq!(seed(5, 6), ALIVE);
        assert_eq!(seed(7, 7), ALIVE);
        assert_eq!(seed(0, 1), DEAD);
        assert_eq!(seed(5, 5), DEAD);
    }

    #[test]
    fn test_find_pattern_unknown() {
        assert!(find_pattern("spaceship-9000").is_none());
    }
}
