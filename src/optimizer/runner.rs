use super::generator::KeyGenerator;
use crate::cipher::Ciphertext;
use crate::consts::DEFAULT_MAX_ATTEMPTS;
use crate::error::{SolverError, SolverResult};
use crate::history::History;
use crate::key::Key;
use crate::scorer::{Lexicon, Scorer};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub evaluated: usize,
    pub best_key: Option<Key>,
    pub best_score: f64,
    /// Stopped because no unseen key could be drawn.
    pub exhausted: bool,
}

/// A trait for receiving updates during a random search.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback {
    fn on_progress(&self, evaluated: usize, best_score: f64, best_key: Option<&Key>) -> bool;
}

impl ProgressCallback for () {
    fn on_progress(&self, _evaluated: usize, _best_score: f64, _best_key: Option<&Key>) -> bool {
        true
    }
}

/// Breadth-first search: independent, unfrozen random keys of one length.
pub struct RandomSearch<'a, L: Lexicon> {
    cipher: &'a Ciphertext,
    scorer: &'a Scorer<L>,
    max_attempts: usize,
    report_every: usize,
}

impl<'a, L: Lexicon> RandomSearch<'a, L> {
    pub fn new(cipher: &'a Ciphertext, scorer: &'a Scorer<L>) -> Self {
        Self {
            cipher,
            scorer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            report_every: 1000,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// How many keys between progress callbacks.
    pub fn with_report_every(mut self, every: usize) -> Self {
        self.report_every = every.max(1);
        self
    }

    pub fn run<R, CB>(
        &self,
        rng: &mut R,
        history: &mut History,
        length: usize,
        count: usize,
        callback: &CB,
    ) -> SolverResult<SearchReport>
    where
        R: Iterator<Item = f64>,
        CB: ProgressCallback + ?Sized,
    {
        let generator = KeyGenerator::new(self.cipher).with_max_attempts(self.max_attempts);
        let words = self.cipher.words();
        let start = Instant::now();

        info!("🎲 Random search: {} keys of length {}", count, length);

        let mut best: Option<(Key, f64)> = None;
        let mut evaluated = 0;
        let mut exhausted = false;

        for _ in 0..count {
            let key = match generator.generate(rng, history, length, None) {
                Ok(key) => key,
                Err(SolverError::SearchExhausted { length, attempts }) => {
                    warn!(
                        "🛑 No unseen key of length {} after {} attempts, stopping",
                        length, attempts
                    );
                    exhausted = true;
                    break;
                }
                Err(e) => return Err(e),
            };

            let (_, score) = self.scorer.check(history, words, &key);
            evaluated += 1;

            if best.as_ref().map_or(score > 0.0, |(_, s)| score > *s) {
                debug!("   New best {:.4}: {}", score, key);
                best = Some((key, score));
            }

            if evaluated % self.report_every == 0 {
                let (k, s) = best.as_ref().map_or((None, 0.0), |(k, s)| (Some(k), *s));
                if !callback.on_progress(evaluated, s, k) {
                    info!("⏹️  Search interrupted after {} keys", evaluated);
                    break;
                }
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        let (best_key, best_score) = match best {
            Some((k, s)) => (Some(k), s),
            None => (None, 0.0),
        };
        info!(
            "🏁 Checked {} keys in {:.2}s, best {:.4}",
            evaluated, elapsed, best_score
        );

        Ok(SearchReport {
            evaluated,
            best_key,
            best_score,
            exhausted,
        })
    }
}
