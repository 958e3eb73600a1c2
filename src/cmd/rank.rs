use crate::reports;
use clap::Args;
use glyphbreak::error::SolverResult;
use glyphbreak::history::History;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// How many keys to list
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: RankArgs, history_path: &str) -> SolverResult<()> {
    let history = History::load_from_file(history_path)?;
    let ranked = history.ranked(args.top)?;
    reports::print_ranking(&ranked, history.len());
    Ok(())
}
