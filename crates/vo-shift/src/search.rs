use serde::{Deserialize, Serialize};

/// Search radius used when none is configured.
pub const DEFAULT_SEARCH_RADIUS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftMatch {
    /// Signed column shift of the best candidate.
    pub offset: isize,
    /// Mean absolute difference at `offset`.
    pub min_diff: f64,
}

/// Exhaustive search over signed offsets in `[-radius, radius)`.
///
/// The radius is capped at the profile length so every candidate overlaps by
/// at least one sample.
///
/// # Panics
/// If the profiles differ in length or are empty.
pub fn best_shift(current: &[f64], previous: &[f64], search_radius: usize) -> ShiftMatch {
    assert_eq!(current.len(), previous.len(), "profile length mismatch");
    assert!(!current.is_empty(), "profiles must not be empty");

    let len = current.len();
    let radius = search_radius.min(len);

    let mut best = ShiftMatch {
        offset: 0,
        min_diff: f64::INFINITY,
    };

    let candidates = (0..radius)
        .map(|o| -(o as isize))
        .chain((0..radius).map(|o| o as isize));

    for offset in candidates {
        let o = offset.unsigned_abs();
        let diff = if offset <= 0 {
            mean_abs_diff(&current[..len - o], &previous[o..])
        } else {
            mean_abs_diff(&current[o..], &previous[..len - o])
        };

        if diff < best.min_diff {
            best = ShiftMatch {
                offset,
                min_diff: diff,
            };
        }
    }

    best
}

#[inline]
fn mean_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    sum / a.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEstimator {
    search_radius: usize,
}

impl Default for ShiftEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_RADIUS)
    }
}

impl ShiftEstimator {
    pub fn new(search_radius: usize) -> Self {
        Self { search_radius }
    }

    pub fn search_radius(&self) -> usize {
        self.search_radius
    }

    /// Matches `current` against `previous`, then copies `current` into
    /// `previous` for the next frame.
    pub fn estimate(&self, current: &[f64], previous: &mut [f64]) -> ShiftMatch {
        let m = best_shift(current, previous, self.search_radius);
        previous.copy_from_slice(current);
        m
    }
}
