pub mod transcript;

use crate::consts::LINE_SEPARATOR;
use crate::error::{SolverError, SolverResult};
use crate::key::Key;
use crate::mapper::{Glyph, WordMapper};
use std::collections::{BTreeSet, HashMap};
use strum_macros::{Display, EnumIter, EnumString};

/// Integer code of one glyph class in the transcript.
pub type Symbol = u16;

/// A maximal run of unknown symbols between two assumed delimiters.
pub type Word = Vec<Symbol>;

/// Trusted symbol -> character decoding, fixed before any search.
pub type AssumedMap = HashMap<Symbol, char>;

/// Which corpus symbol frequencies are counted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FrequencyBasis {
    /// Every occurrence in the raw stream.
    Raw,
    /// Each distinct word counted once, so repeated phrases don't skew counts.
    DistinctWord,
}

/// Unknown symbols ordered most frequent first, with O(1) rank lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolRanking {
    order: Vec<Symbol>,
    position: HashMap<Symbol, usize>,
}

impl SymbolRanking {
    /// Sorts by descending count. `first_seen` breaks ties.
    fn from_counts(counts: &HashMap<Symbol, usize>, first_seen: &HashMap<Symbol, usize>) -> Self {
        let mut order: Vec<Symbol> = counts.keys().copied().collect();
        order.sort_by_key(|s| {
            (
                std::cmp::Reverse(counts[s]),
                first_seen.get(s).copied().unwrap_or(usize::MAX),
            )
        });
        Self::from_order(order)
    }

    pub fn from_order(order: Vec<Symbol>) -> Self {
        let position = order.iter().enumerate().map(|(i, &s)| (s, i)).collect();
        Self { order, position }
    }

    pub fn rank_of(&self, symbol: Symbol) -> Option<usize> {
        self.position.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.position.contains_key(&symbol)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The fixed ciphertext and everything derived from it.
///
/// All statistics are computed once in [`Ciphertext::new`] and never change;
/// the search code borrows the model for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Ciphertext {
    symbols: Vec<Symbol>,
    assumed: AssumedMap,
    guesses: HashMap<Symbol, Vec<char>>,

    unknown: BTreeSet<Symbol>,
    words: Vec<Word>,
    distinct_words: Vec<Word>,
    word_frequency: HashMap<Word, usize>,

    raw_frequency: HashMap<Symbol, usize>,
    distinct_frequency: HashMap<Symbol, usize>,
    raw_ranking: SymbolRanking,
    distinct_ranking: SymbolRanking,
}

impl Ciphertext {
    pub fn new(symbols: Vec<Symbol>, assumed: AssumedMap) -> SolverResult<Self> {
        if !assumed.values().any(|&c| c == LINE_SEPARATOR) {
            return Err(SolverError::Config(
                "assumed map has no line separator ('\\n')".to_string(),
            ));
        }
        if let Some((s, c)) = assumed.iter().find(|(_, c)| c.is_ascii_lowercase()) {
            return Err(SolverError::Config(format!(
                "assumed symbol {} decodes to letter '{}', which keys may also produce",
                s, c
            )));
        }

        let unknown: BTreeSet<Symbol> = symbols
            .iter()
            .copied()
            .filter(|s| !assumed.contains_key(s))
            .collect();

        // 1. Words: flush the running word at every assumed symbol
        let mut words = Vec::new();
        let mut current = Word::new();
        for &s in &symbols {
            if assumed.contains_key(&s) {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push(s);
            }
        }
        if !current.is_empty() {
            words.push(current);
        }

        let mut word_frequency: HashMap<Word, usize> = HashMap::new();
        let mut distinct_words = Vec::new();
        for w in &words {
            let count = word_frequency.entry(w.clone()).or_default();
            if *count == 0 {
                distinct_words.push(w.clone());
            }
            *count += 1;
        }

        // 2. Symbol statistics over both bases
        let mut raw_frequency: HashMap<Symbol, usize> = HashMap::new();
        let mut raw_first: HashMap<Symbol, usize> = HashMap::new();
        for &s in symbols.iter().filter(|s| unknown.contains(s)) {
            *raw_frequency.entry(s).or_default() += 1;
            let next = raw_first.len();
            raw_first.entry(s).or_insert(next);
        }

        let mut distinct_frequency: HashMap<Symbol, usize> = HashMap::new();
        let mut distinct_first: HashMap<Symbol, usize> = HashMap::new();
        for &s in distinct_words.iter().flatten() {
            *distinct_frequency.entry(s).or_default() += 1;
            let next = distinct_first.len();
            distinct_first.entry(s).or_insert(next);
        }

        let raw_ranking = SymbolRanking::from_counts(&raw_frequency, &raw_first);
        let distinct_ranking = SymbolRanking::from_counts(&distinct_frequency, &distinct_first);

        Ok(Self {
            symbols,
            assumed,
            guesses: HashMap::new(),
            unknown,
            words,
            distinct_words,
            word_frequency,
            raw_frequency,
            distinct_frequency,
            raw_ranking,
            distinct_ranking,
        })
    }

    /// The embedded document transcript.
    pub fn transcript() -> SolverResult<Self> {
        let assumed = transcript::ASSUMED.iter().copied().collect();
        let guesses = transcript::GUESSES
            .iter()
            .map(|&(s, letters)| (s, letters.to_vec()))
            .collect();
        Ok(Self::new(transcript::SYMBOLS.to_vec(), assumed)?.with_guesses(guesses))
    }

    pub fn with_guesses(mut self, guesses: HashMap<Symbol, Vec<char>>) -> Self {
        self.guesses = guesses;
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn assumed(&self) -> &AssumedMap {
        &self.assumed
    }

    pub fn guesses(&self) -> &HashMap<Symbol, Vec<char>> {
        &self.guesses
    }

    pub fn unknown_symbols(&self) -> &BTreeSet<Symbol> {
        &self.unknown
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn distinct_words(&self) -> &[Word] {
        &self.distinct_words
    }

    pub fn word_frequency(&self) -> &HashMap<Word, usize> {
        &self.word_frequency
    }

    pub fn symbol_frequency(&self, basis: FrequencyBasis) -> &HashMap<Symbol, usize> {
        match basis {
            FrequencyBasis::Raw => &self.raw_frequency,
            FrequencyBasis::DistinctWord => &self.distinct_frequency,
        }
    }

    pub fn ranking(&self, basis: FrequencyBasis) -> &SymbolRanking {
        match basis {
            FrequencyBasis::Raw => &self.raw_ranking,
            FrequencyBasis::DistinctWord => &self.distinct_ranking,
        }
    }

    /// The ranking that defines canonical key order.
    pub fn canonical_ranking(&self) -> &SymbolRanking {
        &self.distinct_ranking
    }

    /// Builds a canonically ordered key for this ciphertext.
    pub fn key(&self, pairs: &[(Symbol, char)]) -> SolverResult<Key> {
        Key::canonical(pairs.to_vec(), &self.distinct_ranking)
    }

    /// Decodes the full stream, assumed map first.
    pub fn apply(&self, key: &Key) -> Vec<Glyph> {
        WordMapper::new(key)
            .with_assumed(&self.assumed)
            .apply(&self.symbols)
    }
}
