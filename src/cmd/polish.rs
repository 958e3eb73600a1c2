use crate::reports;
use clap::Args;
use glyphbreak::cipher::Ciphertext;
use glyphbreak::config::Config;
use glyphbreak::error::SolverResult;
use glyphbreak::history::History;
use glyphbreak::key::Key;
use glyphbreak::optimizer::{BiasedSampler, PolishObserver, PolishOptions, Polisher};
use glyphbreak::render::{render_key, RenderOptions};
use glyphbreak::scorer::{loader, Scorer};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PolishArgs {
    #[command(flatten)]
    pub config: Config,

    /// Starting key, e.g. "((4, 'e'), (16, 's'))". Defaults to the best checked key.
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

struct RoundLogger;

impl PolishObserver for RoundLogger {
    fn on_round(&self, round: usize, best_score: f64, best_key: Option<&Key>) -> bool {
        match best_key {
            Some(key) => info!("Round {:4} | Best: {:.4} | {}", round, best_score, key),
            None => info!("Round {:4} | Best: {:.4}", round, best_score),
        }
        true
    }
}

pub fn run(args: PolishArgs, cipher: &Ciphertext, history_path: &str) -> SolverResult<()> {
    args.config.validate()?;

    let scorer = Scorer::new(loader::load_dictionary(&args.config.lexicon)?);
    let mut history = History::load_or_default(history_path)?;
    let mut rng = BiasedSampler::from_seed(args.seed);

    let seed_key = match &args.key {
        Some(text) => text.parse::<Key>()?,
        None => history.best().map(|(k, _)| k).unwrap_or_default(),
    };

    let options = PolishOptions::from(&args.config.search);
    let polisher = Polisher::new(cipher, &scorer, options);

    let result = polisher.polish(&mut rng, &mut history, &seed_key, &RoundLogger);
    history.save_to_file(history_path)?;
    let report = result?;

    reports::print_polish_report(&report);
    if let Some(key) = &report.best_key {
        let text = render_key(
            cipher,
            key,
            RenderOptions {
                include_symbols: false,
                score: Some(report.best_score),
            },
        );
        println!("\n{}", text);
    }
    Ok(())
}
