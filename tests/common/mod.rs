#![allow(dead_code)]

use glyphbreak::cipher::{AssumedMap, Ciphertext, Symbol, Word};
use glyphbreak::key::Key;
use glyphbreak::scorer::{Dictionary, Scorer};

pub const SPACE: Symbol = 40;
pub const NEWLINE: Symbol = 43;

pub fn assumed() -> AssumedMap {
    [(SPACE, ' '), (NEWLINE, '\n')].into_iter().collect()
}

/// "the cat sat" with t=1 h=2 e=3 c=4 a=5 s=6.
pub fn tiny_cipher() -> Ciphertext {
    let symbols = vec![1, 2, 3, SPACE, 4, 5, 1, SPACE, 6, 5, 1, NEWLINE];
    Ciphertext::new(symbols, assumed()).unwrap()
}

pub fn transcript() -> Ciphertext {
    Ciphertext::transcript().unwrap()
}

pub fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::from_words(words.iter().copied())
}

pub fn scorer(words: &[&str]) -> Scorer<Dictionary> {
    Scorer::new(dictionary(words))
}

pub fn key(pairs: &[(Symbol, char)]) -> Key {
    Key::new(pairs.to_vec()).unwrap()
}

pub fn words(words: &[&[Symbol]]) -> Vec<Word> {
    words.iter().map(|w| w.to_vec()).collect()
}

/// Replays fixed samples, then runs dry.
pub fn scripted(samples: &[f64]) -> std::vec::IntoIter<f64> {
    samples.to_vec().into_iter()
}
