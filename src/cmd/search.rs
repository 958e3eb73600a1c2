use crate::reports;
use clap::Args;
use glyphbreak::cipher::Ciphertext;
use glyphbreak::config::Config;
use glyphbreak::error::SolverResult;
use glyphbreak::history::History;
use glyphbreak::key::Key;
use glyphbreak::optimizer::{BiasedSampler, ProgressCallback, RandomSearch};
use glyphbreak::scorer::{loader, Scorer};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Pairs per key. Defaults to --key-length.
    #[arg(short = 'l', long)]
    pub length: Option<usize>,

    /// Keys to check
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub count: usize,

    /// Stop after this many seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

struct CliLogger {
    start: Instant,
    max_time: Option<Duration>,
}

impl ProgressCallback for CliLogger {
    fn on_progress(&self, evaluated: usize, best_score: f64, _best_key: Option<&Key>) -> bool {
        let secs = self.start.elapsed().as_secs_f64().max(1e-9);
        info!(
            "Keys {:7} | Best: {:.4} | {:.0} keys/s",
            evaluated,
            best_score,
            evaluated as f64 / secs
        );
        self.max_time.map_or(true, |t| self.start.elapsed() < t)
    }
}

pub fn run(args: SearchArgs, cipher: &Ciphertext, history_path: &str) -> SolverResult<()> {
    args.config.validate()?;

    let scorer = Scorer::new(loader::load_dictionary(&args.config.lexicon)?);
    let mut history = History::load_or_default(history_path)?;
    let mut rng = BiasedSampler::from_seed(args.seed);

    let search = RandomSearch::new(cipher, &scorer)
        .with_max_attempts(args.config.search.max_attempts)
        .with_report_every(1000);
    let logger = CliLogger {
        start: Instant::now(),
        max_time: args.time.map(Duration::from_secs),
    };

    // Keep what was checked even if the search failed midway.
    let length = args.length.unwrap_or(args.config.search.key_length);
    let result = search.run(&mut rng, &mut history, length, args.count, &logger);
    history.save_to_file(history_path)?;
    let report = result?;

    reports::print_search_report(&report);
    if let Some(key) = &report.best_key {
        reports::print_english_words(&scorer.english_words(cipher.distinct_words(), key));
    }
    Ok(())
}
