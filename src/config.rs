use crate::consts::{
    DEFAULT_DICTIONARY_PATH, DEFAULT_KEY_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLISH_BREADTH,
    DEFAULT_POLISH_DEPTH,
};
use crate::error::{SolverError, SolverResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub lexicon: LexiconParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Requested key length (clamped to the unknown-symbol count)
    #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
    pub key_length: usize,

    /// Redraws allowed when a drawn key was already checked
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Polish rounds
    #[arg(long, default_value_t = DEFAULT_POLISH_DEPTH)]
    pub depth: usize,

    /// Keys generated per polish round
    #[arg(long, default_value_t = DEFAULT_POLISH_BREADTH)]
    pub breadth: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            depth: DEFAULT_POLISH_DEPTH,
            breadth: DEFAULT_POLISH_BREADTH,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LexiconParams {
    /// Word list, one word per line
    #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: String,

    /// Extra words to reject even if the word list has them
    #[arg(long)]
    pub deny_list: Option<String>,

    /// Extra words to accept even if the word list lacks them
    #[arg(long)]
    pub allow_list: Option<String>,
}

impl Default for LexiconParams {
    fn default() -> Self {
        Self {
            dictionary: DEFAULT_DICTIONARY_PATH.to_string(),
            deny_list: None,
            allow_list: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SolverError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SolverResult<()> {
        let s = &self.search;
        if s.key_length == 0 {
            return Err(SolverError::Config("key_length must be at least 1".into()));
        }
        if s.max_attempts == 0 {
            return Err(SolverError::Config("max_attempts must be at least 1".into()));
        }
        if s.depth == 0 || s.breadth == 0 {
            return Err(SolverError::Config(
                "polish depth and breadth must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Copies every option the user typed on the command line over the
    /// file-loaded values. Defaults never override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.lexicon.merge_from_cli(&cli.lexicon, matches);
    }
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $cli.$field.clone();
        }
    };
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, key_length);
        update_if_present!(self, cli, matches, max_attempts);
        update_if_present!(self, cli, matches, depth);
        update_if_present!(self, cli, matches, breadth);
    }
}

impl LexiconParams {
    pub fn merge_from_cli(&mut self, cli: &LexiconParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, dictionary);
        update_if_present!(self, cli, matches, deny_list);
        update_if_present!(self, cli, matches, allow_list);
    }
}
