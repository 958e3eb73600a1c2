use crate::cipher::Word;
use crate::error::{SolverError, SolverResult};
use crate::key::Key;
use crate::scorer::{Lexicon, Scorer};
use rayon::prelude::*;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// One slot of a ranking. Padding slots have no key and score 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedKey {
    pub key: Option<Key>,
    pub score: f64,
}

impl RankedKey {
    fn placeholder() -> Self {
        Self {
            key: None,
            score: 0.0,
        }
    }
}

/// Every key evaluated so far and its score, in insertion order.
///
/// Entries are keyed by the key's text form, so two keys with the same pairs
/// in the same order share one entry. The map only grows; re-recording an
/// existing key updates its score in place.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<(Key, f64)>,
    index: HashMap<String, usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, key: &Key, score: f64) {
        let text = key.to_string();
        match self.index.get(&text) {
            Some(&i) => self.entries[i].1 = score,
            None => {
                self.index.insert(text, self.entries.len());
                self.entries.push((key.clone(), score));
            }
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.index.contains_key(&key.to_string())
    }

    pub fn get(&self, key: &Key) -> Option<f64> {
        self.get_text(&key.to_string())
    }

    /// Lookup by the key's text form.
    pub fn get_text(&self, text: &str) -> Option<f64> {
        self.index.get(text).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, f64)> {
        self.entries.iter().map(|(k, s)| (k, *s))
    }

    /// The `n` best entries, highest first, always exactly `n` long.
    ///
    /// An entry only enters the ranking by beating the current last slot
    /// outright, so ties keep insertion order and zero scores never displace
    /// the padding.
    pub fn ranked(&self, n: usize) -> SolverResult<Vec<RankedKey>> {
        if n == 0 {
            return Err(SolverError::Config(
                "ranking size must be at least 1".to_string(),
            ));
        }

        let mut ranked = vec![RankedKey::placeholder(); n];
        for (key, score) in &self.entries {
            if *score > ranked[n - 1].score {
                ranked[n - 1] = RankedKey {
                    key: Some(key.clone()),
                    score: *score,
                };
                ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
            }
        }
        Ok(ranked)
    }

    /// The top entry, if any entry scored above zero.
    pub fn best(&self) -> Option<(Key, f64)> {
        let top = self.ranked(1).ok()?.into_iter().next()?;
        top.key.map(|k| (k, top.score))
    }

    /// Recomputes every score against `words`, e.g. after the curated
    /// word lists change. Returns how many scores moved.
    pub fn rescore<L>(&mut self, scorer: &Scorer<L>, words: &[Word]) -> usize
    where
        L: Lexicon + Sync,
    {
        let fresh: Vec<f64> = self
            .entries
            .par_iter()
            .map(|(key, _)| scorer.score_key(words, key))
            .collect();

        let mut changed = 0;
        for ((_, score), new) in self.entries.iter_mut().zip(fresh) {
            if *score != new {
                *score = new;
                changed += 1;
            }
        }
        changed
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let history: History = serde_json::from_reader(BufReader::new(file))?;
        info!("📂 Loaded {} checked keys from {:?}", history.len(), path);
        Ok(history)
    }

    /// Loads the file if it exists, else starts empty.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            info!("📂 No history at {:?}, starting fresh", path.as_ref());
            Ok(Self::new())
        }
    }

    /// Writes through a temp file in the same directory, then renames.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SolverResult<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, self)?;
            writer.flush()?;
        }
        temp.persist(path).map_err(|e| SolverError::Io(e.error))?;

        info!("💾 Saved {} checked keys to {:?}", self.len(), path);
        Ok(())
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, score) in &self.entries {
            map.serialize_entry(&key.to_string(), score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HistoryVisitor)
    }
}

struct HistoryVisitor;

impl<'de> Visitor<'de> for HistoryVisitor {
    type Value = History;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of key text to score")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<History, M::Error> {
        let mut history = History::new();
        while let Some((text, score)) = access.next_entry::<String, f64>()? {
            let key: Key = text.parse().map_err(serde::de::Error::custom)?;
            history.record(&key, score);
        }
        Ok(history)
    }
}
