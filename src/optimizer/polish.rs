use super::generator::KeyGenerator;
use crate::cipher::Ciphertext;
use crate::config::SearchParams;
use crate::consts::{
    DEFAULT_KEY_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLISH_BREADTH, DEFAULT_POLISH_DEPTH,
};
use crate::error::{SolverError, SolverResult};
use crate::history::History;
use crate::key::Key;
use crate::scorer::{Lexicon, Scorer};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolishOptions {
    /// Number of rounds.
    pub depth: usize,
    /// Keys generated per round.
    pub breadth: usize,
    /// Requested length of every generated key.
    pub key_length: usize,
    pub max_attempts: usize,
}

impl Default for PolishOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_POLISH_DEPTH,
            breadth: DEFAULT_POLISH_BREADTH,
            key_length: DEFAULT_KEY_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl From<&SearchParams> for PolishOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            depth: params.depth,
            breadth: params.breadth,
            key_length: params.key_length,
            max_attempts: params.max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolishReport {
    /// Keys generated and checked into the history.
    pub evaluated: usize,
    /// Best key of the local pool, the seed included.
    pub best_key: Option<Key>,
    pub best_score: f64,
    /// Rounds that ran to completion.
    pub rounds: usize,
    pub stopped_early: bool,
}

/// Receives the pool's best after every round.
/// Returning `false` stops the polish before the next round.
pub trait PolishObserver {
    fn on_round(&self, round: usize, best_score: f64, best_key: Option<&Key>) -> bool;
}

impl PolishObserver for () {
    fn on_round(&self, _round: usize, _best_score: f64, _best_key: Option<&Key>) -> bool {
        true
    }
}

/// Local search around a hand-picked key.
///
/// Each round takes the best key found so far, freezes the pairs whose
/// letters appear in recognized English words, and redraws everything else.
pub struct Polisher<'a, L: Lexicon> {
    cipher: &'a Ciphertext,
    scorer: &'a Scorer<L>,
    options: PolishOptions,
}

impl<'a, L: Lexicon> Polisher<'a, L> {
    pub fn new(cipher: &'a Ciphertext, scorer: &'a Scorer<L>, options: PolishOptions) -> Self {
        Self {
            cipher,
            scorer,
            options,
        }
    }

    pub fn options(&self) -> &PolishOptions {
        &self.options
    }

    pub fn polish<R, O>(
        &self,
        rng: &mut R,
        history: &mut History,
        seed_key: &Key,
        observer: &O,
    ) -> SolverResult<PolishReport>
    where
        R: Iterator<Item = f64>,
        O: PolishObserver + ?Sized,
    {
        let opts = &self.options;
        let generator = KeyGenerator::new(self.cipher).with_max_attempts(opts.max_attempts);
        let unknown = self.cipher.unknown_symbols().len();
        let words = self.cipher.words();
        let distinct = self.cipher.distinct_words();

        let mut pool = History::new();
        pool.record(seed_key, self.scorer.score_key(words, seed_key));

        info!(
            "✨ Polishing {} ({} rounds x {} keys)",
            seed_key, opts.depth, opts.breadth
        );

        let mut evaluated = 0;
        let mut rounds = 0;
        let mut stopped_early = false;

        'rounds: for round in 1..=opts.depth {
            let best = pool.best().map(|(k, _)| k).unwrap_or_default();
            let frozen = self.scorer.word_pairs(distinct, &best);

            if frozen.len() >= unknown {
                warn!(
                    "🧊 All {} unknown symbols are frozen, nothing left to redraw",
                    unknown
                );
                stopped_early = true;
                break;
            }

            let length = opts.key_length.max(frozen.len());
            for _ in 0..opts.breadth {
                let key = match generator.generate(rng, history, length, Some(&frozen)) {
                    Ok(key) => key,
                    Err(SolverError::SearchExhausted { length, attempts }) => {
                        warn!(
                            "🛑 No unseen key of length {} after {} attempts, stopping",
                            length, attempts
                        );
                        stopped_early = true;
                        break 'rounds;
                    }
                    Err(e) => return Err(e),
                };
                let (_, score) = self.scorer.check(history, words, &key);
                pool.record(&key, score);
                evaluated += 1;
            }
            rounds = round;

            let (best_key, best_score) = match pool.best() {
                Some((k, s)) => (Some(k), s),
                None => (None, 0.0),
            };
            debug!(
                "   Round {}/{}: frozen {} pairs, best {:.4}",
                round,
                opts.depth,
                frozen.len(),
                best_score
            );

            if !observer.on_round(round, best_score, best_key.as_ref()) {
                info!("⏹️  Polish interrupted after round {}", round);
                stopped_early = true;
                break;
            }
        }

        let (best_key, best_score) = match pool.best() {
            Some((k, s)) => (Some(k), s),
            None => (None, 0.0),
        };
        info!("🏁 Polish done: {} keys checked, best {:.4}", evaluated, best_score);

        Ok(PolishReport {
            evaluated,
            best_key,
            best_score,
            rounds,
            stopped_early,
        })
    }
}
