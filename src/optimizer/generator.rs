use crate::cipher::{Ciphertext, Symbol, SymbolRanking};
use crate::consts::{DEFAULT_MAX_ATTEMPTS, ENGLISH_FREQUENCY_ORDER};
use crate::error::{SolverError, SolverResult};
use crate::history::History;
use crate::key::Key;
use std::collections::HashSet;
use tracing::debug;

/// Position in the remaining-letter list picked by one sample.
///
/// `round_half_even(sample * remaining) - 1`, where `-1` wraps to the last
/// letter. Very small samples therefore land on the rarest letter while the
/// bulk of the mass sits on the first few.
pub fn letter_index(sample: f64, remaining: usize) -> usize {
    debug_assert!(remaining > 0);
    let scaled = (sample * remaining as f64).round_ties_even() as isize - 1;
    if scaled < 0 {
        remaining - 1
    } else {
        (scaled as usize).min(remaining - 1)
    }
}

/// Draws random keys biased towards pairing frequent symbols with frequent
/// letters.
///
/// Symbols are always consumed from the front of the ranking, so for a given
/// length the chosen symbol set is fixed and only the letters vary.
pub struct KeyGenerator<'a> {
    ranking: &'a SymbolRanking,
    letters: &'a [char],
    max_attempts: usize,
}

impl<'a> KeyGenerator<'a> {
    pub fn new(cipher: &'a Ciphertext) -> Self {
        Self::from_ranking(cipher.canonical_ranking())
    }

    pub fn from_ranking(ranking: &'a SymbolRanking) -> Self {
        Self {
            ranking,
            letters: &ENGLISH_FREQUENCY_ORDER,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn ranking(&self) -> &SymbolRanking {
        self.ranking
    }

    /// A canonical key of `min(length, |unknown|)` pairs not yet in `history`.
    ///
    /// `frozen` pairs are copied verbatim and their letters are never drawn
    /// again. Collisions with `history` trigger a full redraw, up to the
    /// attempt cap.
    pub fn generate<R>(
        &self,
        rng: &mut R,
        history: &History,
        length: usize,
        frozen: Option<&Key>,
    ) -> SolverResult<Key>
    where
        R: Iterator<Item = f64>,
    {
        let length = length.min(self.ranking.len());
        let frozen = frozen.map(|k| k.pairs()).unwrap_or(&[]);
        self.validate_frozen(frozen, length)?;

        for attempt in 1..=self.max_attempts {
            let key = self.draw(rng, length, frozen)?;
            if !history.contains(&key) {
                return Ok(key);
            }
            debug!("Key collision on attempt {}: {}", attempt, key);
        }

        Err(SolverError::SearchExhausted {
            length,
            attempts: self.max_attempts,
        })
    }

    fn draw<R>(&self, rng: &mut R, length: usize, frozen: &[(Symbol, char)]) -> SolverResult<Key>
    where
        R: Iterator<Item = f64>,
    {
        let mut symbols: Vec<Symbol> = self.ranking.as_slice().to_vec();
        let mut letters: Vec<char> = self.letters.to_vec();
        let mut pairs = Vec::with_capacity(length);

        for &(symbol, letter) in frozen {
            pairs.push((symbol, letter));
            symbols.retain(|&s| s != symbol);
            letters.retain(|&l| l != letter);
        }

        while pairs.len() < length && !symbols.is_empty() && !letters.is_empty() {
            let sample = rng.next().ok_or(SolverError::SamplerExhausted)?;
            let index = letter_index(sample, letters.len());
            pairs.push((symbols.remove(0), letters.remove(index)));
        }

        Key::canonical(pairs, self.ranking)
    }

    fn validate_frozen(&self, frozen: &[(Symbol, char)], length: usize) -> SolverResult<()> {
        if frozen.is_empty() {
            return Ok(());
        }
        if frozen.len() >= self.ranking.len() {
            return Err(SolverError::FrozenConflict(format!(
                "{} frozen pairs leave none of the {} unknown symbols to draw",
                frozen.len(),
                self.ranking.len()
            )));
        }
        if frozen.len() > length {
            return Err(SolverError::FrozenConflict(format!(
                "{} frozen pairs exceed the requested length {}",
                frozen.len(),
                length
            )));
        }

        let mut symbols = HashSet::new();
        let mut letters = HashSet::new();
        for &(symbol, letter) in frozen {
            if !self.ranking.contains(symbol) {
                return Err(SolverError::FrozenConflict(format!(
                    "symbol {} is not an unknown symbol",
                    symbol
                )));
            }
            if !self.letters.contains(&letter) {
                return Err(SolverError::FrozenConflict(format!(
                    "'{}' is not a key letter",
                    letter
                )));
            }
            if !symbols.insert(symbol) {
                return Err(SolverError::FrozenConflict(format!(
                    "symbol {} is frozen twice",
                    symbol
                )));
            }
            if !letters.insert(letter) {
                return Err(SolverError::FrozenConflict(format!(
                    "letter '{}' is frozen twice",
                    letter
                )));
            }
        }
        Ok(())
    }
}
