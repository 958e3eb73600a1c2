use crate::reports;
use clap::Args;
use glyphbreak::cipher::Ciphertext;
use glyphbreak::config::LexiconParams;
use glyphbreak::error::{SolverError, SolverResult};
use glyphbreak::history::History;
use glyphbreak::key::Key;
use glyphbreak::render::{render_key, RenderOptions};
use glyphbreak::scorer::{loader, Scorer};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub lexicon: LexiconParams,

    /// Key to render. Defaults to the best checked key.
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Print unresolved symbols by number instead of '?'
    #[arg(short = 'i', long, default_value_t = false)]
    pub include_symbols: bool,

    /// Only list the English words the key produces
    #[arg(long, default_value_t = false)]
    pub words_only: bool,
}

pub fn run(args: ShowArgs, cipher: &Ciphertext, history_path: &str) -> SolverResult<()> {
    let history = History::load_or_default(history_path)?;

    let mut key = match &args.key {
        Some(text) => text.parse::<Key>()?,
        None => history
            .best()
            .map(|(k, _)| k)
            .ok_or_else(|| SolverError::Config("no scored keys in history; pass --key".into()))?,
    };
    // History entries are stored in canonical order.
    key.canonicalize(cipher.canonical_ranking());

    if args.words_only {
        let scorer = Scorer::new(loader::load_dictionary(&args.lexicon)?);
        reports::print_english_words(&scorer.english_words(cipher.distinct_words(), &key));
        return Ok(());
    }

    let options = RenderOptions {
        include_symbols: args.include_symbols,
        score: history.get(&key),
    };
    println!("{}", render_key(cipher, &key, options));
    Ok(())
}
