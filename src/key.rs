use crate::cipher::{Symbol, SymbolRanking};
use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A candidate substitution: ordered (symbol, letter) pairs.
///
/// Symbols are unique and letters are lowercase ASCII. Keys built through
/// [`Key::canonical`] list their symbols in ranking order, so equal pair sets
/// always render to the same text. That text is the search-history key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Key {
    pairs: Vec<(Symbol, char)>,
}

impl Key {
    /// Validates the pairs and keeps them in the given order.
    pub fn new(pairs: Vec<(Symbol, char)>) -> SolverResult<Self> {
        let mut seen = HashSet::with_capacity(pairs.len());
        for &(symbol, letter) in &pairs {
            if !letter.is_ascii_lowercase() {
                return Err(SolverError::InvalidLetter(letter));
            }
            if !seen.insert(symbol) {
                return Err(SolverError::DuplicateSymbol(symbol));
            }
        }
        Ok(Self { pairs })
    }

    /// Validates the pairs and sorts them into canonical order.
    pub fn canonical(pairs: Vec<(Symbol, char)>, ranking: &SymbolRanking) -> SolverResult<Self> {
        let mut key = Self::new(pairs)?;
        key.canonicalize(ranking);
        Ok(key)
    }

    /// Sorts by rank. Symbols missing from the ranking go last, by value.
    pub fn canonicalize(&mut self, ranking: &SymbolRanking) {
        self.pairs
            .sort_by_key(|&(s, _)| (ranking.rank_of(s).unwrap_or(usize::MAX), s));
    }

    pub fn pairs(&self) -> &[(Symbol, char)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, symbol: Symbol) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, l)| l)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pairs.iter().map(|&(s, _)| s)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.pairs.iter().map(|&(_, l)| l)
    }

    /// The pairs matching `keep`, order preserved.
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(Symbol, char) -> bool,
    {
        Self {
            pairs: self
                .pairs
                .iter()
                .copied()
                .filter(|&(s, l)| keep(s, l))
                .collect(),
        }
    }

    pub fn without_symbol(&self, symbol: Symbol) -> Self {
        self.filtered(|s, _| s != symbol)
    }

    pub fn to_mapping(&self) -> HashMap<Symbol, char> {
        self.pairs.iter().copied().collect()
    }
}

/// Renders as a tuple of pairs: `((4, 'e'), (16, 's'))`.
/// One pair keeps a trailing comma (`((4, 'e'),)`) and the empty key is `()`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (symbol, letter)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, '{}')", symbol, letter)?;
        }
        if self.pairs.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl FromStr for Key {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SolverError::MalformedKey(s.to_string());

        let body = s
            .trim()
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let mut pairs = Vec::new();
        let mut rest = body.trim();
        while !rest.is_empty() {
            let open = rest.strip_prefix('(').ok_or_else(malformed)?;
            let close = open.find(')').ok_or_else(malformed)?;
            pairs.push(parse_pair(&open[..close]).ok_or_else(malformed)?);

            rest = open[close + 1..].trim_start();
            if let Some(r) = rest.strip_prefix(',') {
                rest = r.trim_start();
            } else if !rest.is_empty() {
                return Err(malformed());
            }
        }

        Key::new(pairs)
    }
}

/// Parses `4, 'e'` (either quote style).
fn parse_pair(inner: &str) -> Option<(Symbol, char)> {
    let (symbol, letter) = inner.split_once(',')?;
    let symbol = symbol.trim().parse().ok()?;

    let letter = letter.trim();
    let quoted = ['\'', '"']
        .iter()
        .find_map(|&q| letter.strip_prefix(q).and_then(|l| l.strip_suffix(q)))?;

    let mut chars = quoted.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some((symbol, c))
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
