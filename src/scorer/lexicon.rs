use super::curated::{ALLOW_LIST, DENY_LIST};
use std::collections::HashSet;

/// Membership oracle for decoded words.
pub trait Lexicon {
    fn is_english(&self, word: &str) -> bool;
}

/// A word list with curated corrections layered on top.
///
/// A word counts as English when it is in the list and not denied, or when it
/// is explicitly allowed. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    deny: HashSet<String>,
    allow: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize(words),
            ..Default::default()
        }
    }

    /// Adds the built-in deny and allow lists.
    pub fn with_curated(self) -> Self {
        self.with_deny(DENY_LIST.iter().copied())
            .with_allow(ALLOW_LIST.iter().copied())
    }

    pub fn with_deny<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.deny.extend(normalize(words));
        self
    }

    pub fn with_allow<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allow.extend(normalize(words));
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn is_english(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        (self.words.contains(&word) && !self.deny.contains(&word)) || self.allow.contains(&word)
    }
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_and_allow_layers() {
        let dict = Dictionary::from_words(["The", "th", "of"]).with_curated();

        assert!(dict.is_english("the"));
        assert!(dict.is_english("THE"));
        assert!(!dict.is_english("th"), "deny list must win over the word list");
        assert!(dict.is_english("illithid"), "allow list needs no dictionary entry");
        assert!(!dict.is_english("xyzzy"));
    }
}
