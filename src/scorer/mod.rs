pub mod curated;
pub mod lexicon;
pub mod loader;

pub use self::lexicon::{Dictionary, Lexicon};

use crate::cipher::Word;
use crate::history::History;
use crate::key::Key;
use crate::mapper::{as_text, MappedWord, WordMapper};
use std::collections::{BTreeSet, HashSet};

/// Judges keys by how much of the word corpus decodes to English.
pub struct Scorer<L: Lexicon> {
    lexicon: L,
}

impl<L: Lexicon> Scorer<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    #[inline]
    pub fn is_english(&self, word: &str) -> bool {
        self.lexicon.is_english(word)
    }

    /// Fraction of words (with repetition) that are fully resolved English.
    /// An empty corpus scores 0.0.
    pub fn score(&self, mapped: &[MappedWord]) -> f64 {
        if mapped.is_empty() {
            return 0.0;
        }
        let hits = mapped
            .iter()
            .filter_map(|w| as_text(w))
            .filter(|w| self.is_english(w))
            .count();
        hits as f64 / mapped.len() as f64
    }

    /// Maps and scores without touching any history.
    pub fn score_key(&self, words: &[Word], key: &Key) -> f64 {
        self.score(&WordMapper::new(key).apply_words(words))
    }

    /// Maps, scores, and records the result under the key's text form.
    pub fn check(&self, history: &mut History, words: &[Word], key: &Key) -> (Vec<MappedWord>, f64) {
        let mapped = WordMapper::new(key).apply_words(words);
        let score = self.score(&mapped);
        history.record(key, score);
        (mapped, score)
    }

    /// The distinct English words a key produces.
    pub fn english_words(&self, words: &[Word], key: &Key) -> BTreeSet<String> {
        WordMapper::new(key)
            .apply_words(words)
            .iter()
            .filter_map(|w| as_text(w))
            .filter(|w| self.is_english(w))
            .collect()
    }

    /// Pairs whose letter shows up in at least one recognized word.
    /// These are the pairs a local search keeps fixed.
    pub fn word_pairs(&self, words: &[Word], key: &Key) -> Key {
        let valid: HashSet<char> = self
            .english_words(words, key)
            .iter()
            .flat_map(|w| w.chars())
            .collect();

        key.filtered(|_, l| valid.contains(&l))
    }
}
