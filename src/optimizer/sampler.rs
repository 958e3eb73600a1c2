use crate::consts::{SAMPLER_BATCH_SIZE, SAMPLER_SCALE};
use crate::error::{SolverError, SolverResult};
use fastrand::Rng;

/// Endless stream of right-skewed samples in [0, 1].
///
/// Samples are exponential (scale 0.2 by default) with anything above 1.0
/// thrown away, so small values dominate. The generator scales them onto the
/// remaining-letter list to favour frequent letters.
///
/// Draws happen in batches; `next` only pops from the buffer. The stream never
/// ends and can only be restarted by building a new sampler.
pub struct BiasedSampler {
    rng: Rng,
    scale: f64,
    batch_size: usize,
    buffer: Vec<f64>,
}

impl BiasedSampler {
    pub fn new() -> Self {
        Self::from_rng(Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Rng::with_seed(seed))
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::with_seed(s),
            None => Self::new(),
        }
    }

    fn from_rng(rng: Rng) -> Self {
        Self {
            rng,
            scale: SAMPLER_SCALE,
            batch_size: SAMPLER_BATCH_SIZE,
            buffer: Vec::new(),
        }
    }

    pub fn with_params(mut self, scale: f64, batch_size: usize) -> SolverResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SolverError::Config(format!(
                "sampler scale must be positive, got {}",
                scale
            )));
        }
        if batch_size == 0 {
            return Err(SolverError::Config(
                "sampler batch size must be at least 1".to_string(),
            ));
        }
        self.scale = scale;
        self.batch_size = batch_size;
        self.buffer.clear();
        Ok(self)
    }

    fn refill(&mut self) {
        while self.buffer.is_empty() {
            self.buffer.extend(
                (0..self.batch_size)
                    .map(|_| -self.scale * (1.0 - self.rng.f64()).ln())
                    .filter(|&v| v <= 1.0),
            );
        }
        // Pop from the back, keep draw order.
        self.buffer.reverse();
    }
}

impl Default for BiasedSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for BiasedSampler {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.buffer.is_empty() {
            self.refill();
        }
        self.buffer.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_unit_interval() {
        let sampler = BiasedSampler::with_seed(7);
        for v in sampler.take(50_000) {
            assert!((0.0..=1.0).contains(&v), "sample out of range: {}", v);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<f64> = BiasedSampler::with_seed(99).take(100).collect();
        let b: Vec<f64> = BiasedSampler::with_seed(99).take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_batches_still_stream() {
        let sampler = BiasedSampler::with_seed(3).with_params(0.2, 1).unwrap();
        assert_eq!(sampler.take(1000).count(), 1000);
    }

    #[test]
    fn test_distribution_is_front_loaded() {
        // Bucket samples onto 0..=5; each bucket must be strictly rarer than the one before.
        let mut counts = [0usize; 6];
        for v in BiasedSampler::with_seed(2024).take(200_000) {
            counts[(v * 5.0).round() as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0), "missing bucket: {:?}", counts);
        for w in counts.windows(2) {
            assert!(w[0] > w[1], "not decreasing: {:?}", counts);
        }
    }

    #[test]
    fn test_rejects_bad_params() {
        assert!(BiasedSampler::with_seed(1).with_params(0.0, 10).is_err());
        assert!(BiasedSampler::with_seed(1).with_params(0.2, 0).is_err());
    }
}
