use crate::cipher::{AssumedMap, Symbol, Word};
use crate::key::Key;
use std::collections::HashMap;

/// One position of a decoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A key letter or an assumed character.
    Char(char),
    /// Still unresolved.
    Symbol(Symbol),
}

pub type MappedWord = Vec<Glyph>;

/// Pointwise substitution: assumed map first, then the key, else pass-through.
pub struct WordMapper<'a> {
    assumed: Option<&'a AssumedMap>,
    mapping: HashMap<Symbol, char>,
}

impl<'a> WordMapper<'a> {
    pub fn new(key: &Key) -> Self {
        Self {
            assumed: None,
            mapping: key.to_mapping(),
        }
    }

    pub fn with_assumed(mut self, assumed: &'a AssumedMap) -> Self {
        self.assumed = Some(assumed);
        self
    }

    #[inline]
    pub fn map_symbol(&self, symbol: Symbol) -> Glyph {
        self.assumed
            .and_then(|a| a.get(&symbol))
            .or_else(|| self.mapping.get(&symbol))
            .map_or(Glyph::Symbol(symbol), |&c| Glyph::Char(c))
    }

    pub fn apply(&self, symbols: &[Symbol]) -> Vec<Glyph> {
        symbols.iter().map(|&s| self.map_symbol(s)).collect()
    }

    pub fn apply_words(&self, words: &[Word]) -> Vec<MappedWord> {
        words.iter().map(|w| self.apply(w)).collect()
    }
}

/// Joins a fully resolved word. `None` if any symbol is left.
pub fn as_text(word: &[Glyph]) -> Option<String> {
    word.iter()
        .map(|g| match *g {
            Glyph::Char(c) => Some(c),
            Glyph::Symbol(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(
            as_text(&[Glyph::Char('o'), Glyph::Char('f')]),
            Some("of".to_string())
        );
        assert_eq!(as_text(&[Glyph::Char('o'), Glyph::Symbol(11)]), None);
        assert_eq!(as_text(&[]), Some(String::new()));
    }
}
