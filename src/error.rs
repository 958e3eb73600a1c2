use crate::cipher::Symbol;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed key text: '{0}'")]
    MalformedKey(String),

    #[error("Symbol {0} appears more than once in a key")]
    DuplicateSymbol(Symbol),

    #[error("Key letter '{0}' is not a lowercase ASCII letter")]
    InvalidLetter(char),

    #[error("Frozen pairs rejected: {0}")]
    FrozenConflict(String),

    #[error("Sample stream ran dry while drawing a key")]
    SamplerExhausted,

    #[error("Search space exhausted: no unseen key of length {length} after {attempts} attempts")]
    SearchExhausted { length: usize, attempts: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;
