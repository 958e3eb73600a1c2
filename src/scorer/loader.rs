use super::lexicon::Dictionary;
use crate::config::LexiconParams;
use crate::error::{SolverError, SolverResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Reads one word per line. Blank lines and `#` comments are skipped.
pub fn load_word_list<R: BufRead>(reader: R) -> SolverResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

pub fn load_word_file<P: AsRef<Path>>(path: P) -> SolverResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SolverError::Config(format!("Could not open word list at {:?}: {}", path, e))
    })?;
    let words = load_word_list(BufReader::new(file))?;
    debug!("   -> {} words from {:?}", words.len(), path);
    Ok(words)
}

/// Builds the full dictionary: system word list, built-in corrections,
/// then any extra deny/allow files named in the params.
pub fn load_dictionary(params: &LexiconParams) -> SolverResult<Dictionary> {
    info!("📖 Loading dictionary: {}", params.dictionary);
    let mut dict = Dictionary::from_words(load_word_file(&params.dictionary)?).with_curated();

    if let Some(path) = &params.deny_list {
        info!("🚫 Loading deny list: {}", path);
        dict = dict.with_deny(load_word_file(path)?);
    }
    if let Some(path) = &params.allow_list {
        info!("✅ Loading allow list: {}", path);
        dict = dict.with_allow(load_word_file(path)?);
    }

    info!("   -> {} dictionary words", dict.len());
    Ok(dict)
}
