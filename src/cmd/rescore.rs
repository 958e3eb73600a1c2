use clap::Args;
use glyphbreak::cipher::Ciphertext;
use glyphbreak::config::LexiconParams;
use glyphbreak::error::SolverResult;
use glyphbreak::history::History;
use glyphbreak::scorer::{loader, Scorer};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RescoreArgs {
    #[command(flatten)]
    pub lexicon: LexiconParams,

    /// Report the changes without saving them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub fn run(args: RescoreArgs, cipher: &Ciphertext, history_path: &str) -> SolverResult<()> {
    let scorer = Scorer::new(loader::load_dictionary(&args.lexicon)?);
    let mut history = History::load_from_file(history_path)?;

    let changed = history.rescore(&scorer, cipher.words());
    info!("🔁 {} of {} scores changed", changed, history.len());

    if changed > 0 && !args.dry_run {
        history.save_to_file(history_path)?;
    }
    Ok(())
}
